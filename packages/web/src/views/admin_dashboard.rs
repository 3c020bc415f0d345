use api::{AdminStats, Campaign, UserInfo};
use dioxus::prelude::*;

use ui::analytics::format_usd;
use ui::{icons, platform, toast_error, toast_success, use_api, use_toasts, Icon};

use super::my_campaigns::DELETE_CONFIRMATION;
use super::RequireAdmin;
use crate::Route;

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        RequireAdmin { AdminPanel {} }
    }
}

#[component]
fn AdminPanel() -> Element {
    let client = use_api();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut stats = use_signal(|| None::<AdminStats>);
    let mut campaigns = use_signal(Vec::<Campaign>::new);
    let mut users = use_signal(Vec::<UserInfo>::new);
    let mut loading = use_signal(|| true);

    let load_client = client.clone();
    let _loader = use_resource(move || {
        let client = load_client.clone();
        async move {
            let (campaign_result, stats_result) = futures::join!(client.admin_campaigns(), client.admin_stats());
            match (campaign_result, stats_result) {
                (Ok(list), Ok(totals)) => {
                    campaigns.set(list);
                    stats.set(Some(totals));
                }
                (Err(e), _) | (_, Err(e)) => {
                    toast_error(&mut toasts, e.user_message("Failed to load admin data"));
                    if e.is_forbidden() {
                        nav.push(Route::Home {});
                        return;
                    }
                }
            }
            loading.set(false);

            match client.admin_users().await {
                Ok(list) => users.set(list),
                Err(e) => tracing::warn!("admin user list unavailable: {}", e),
            }
        }
    });

    let delete = move |id: String| {
        let client = client.clone();
        async move {
            if !platform::confirm(DELETE_CONFIRMATION) {
                return;
            }
            match client.delete_campaign(&id).await {
                Ok(()) => {
                    campaigns.write().retain(|c| c.id != id);
                    toast_success(&mut toasts, "Campaign deleted");
                }
                Err(e) => toast_error(&mut toasts, e.user_message("Failed to delete campaign")),
            }
        }
    };

    if loading() {
        return rsx! { div { class: "loader" } };
    }

    let totals = stats().unwrap_or_default();
    let raised = format_usd(totals.total_raised);

    rsx! {
        div {
            class: "container",
            h1 { "Admin Dashboard" }

            div {
                class: "stats-grid",
                div { class: "stat", strong { "{totals.total_campaigns}" } "Total campaigns" }
                div { class: "stat", strong { "{totals.active_campaigns}" } "Active campaigns" }
                div { class: "stat", strong { "{totals.total_users}" } "Users" }
                div { class: "stat", strong { "{raised}" } "Total raised" }
            }

            h2 { "Campaigns" }
            table {
                thead {
                    tr {
                        th { "Title" }
                        th { "Creator" }
                        th { "Status" }
                        th { "Raised" }
                        th { "Goal" }
                        th { "" }
                    }
                }
                tbody {
                    for campaign in campaigns() {
                        tr {
                            key: "{campaign.id}",
                            td {
                                Link { to: Route::CampaignDetail { id: campaign.id.clone() }, "{campaign.title}" }
                            }
                            td { {campaign.creator_display_name().to_string()} }
                            td { "{campaign.status}" }
                            td { {format_usd(campaign.raised_amount)} }
                            td { {format_usd(campaign.goal_amount)} }
                            td {
                                button {
                                    class: "secondary",
                                    title: "Edit",
                                    onclick: {
                                        let id = campaign.id.clone();
                                        move |_| { nav.push(Route::EditCampaign { id: id.clone() }); }
                                    },
                                    Icon { icon: icons::FaPen, width: 12, height: 12 }
                                }
                                button {
                                    class: "danger",
                                    title: "Delete",
                                    onclick: {
                                        let id = campaign.id.clone();
                                        let delete = delete.clone();
                                        move |_| delete(id.clone())
                                    },
                                    Icon { icon: icons::FaTrash, width: 12, height: 12 }
                                }
                            }
                        }
                    }
                }
            }

            h2 { "Users" }
            if users.read().is_empty() {
                p { class: "panel-subtitle", "No users to show." }
            } else {
                table {
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Role" }
                        }
                    }
                    tbody {
                        for user in users() {
                            tr {
                                key: "{user.id}",
                                td { {user.display_name().to_string()} }
                                td { "{user.email}" }
                                td { if user.is_admin { "Admin" } else { "User" } }
                            }
                        }
                    }
                }
            }
        }
    }
}
