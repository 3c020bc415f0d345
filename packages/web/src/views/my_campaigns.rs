use api::Campaign;
use dioxus::prelude::*;

use ui::{icons, platform, toast_error, toast_success, use_api, use_toasts, FundingProgress, Icon};

use super::RequireUser;
use crate::Route;

pub(crate) const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this campaign?";

#[component]
pub fn MyCampaigns() -> Element {
    rsx! {
        RequireUser { MyCampaignList {} }
    }
}

#[component]
fn MyCampaignList() -> Element {
    let client = use_api();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut campaigns = use_signal(|| None::<Vec<Campaign>>);

    let load_client = client.clone();
    let _loader = use_resource(move || {
        let client = load_client.clone();
        async move {
            match client.my_campaigns().await {
                Ok(list) => campaigns.set(Some(list)),
                Err(e) => {
                    toast_error(&mut toasts, e.user_message("Failed to load your campaigns"));
                    campaigns.set(Some(Vec::new()));
                }
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
                    if let Some(list) = campaigns.write().as_mut() {
                        list.retain(|c| c.id != id);
                    }
                    toast_success(&mut toasts, "Campaign deleted");
                }
                Err(e) => toast_error(&mut toasts, e.user_message("Failed to delete campaign")),
            }
        }
    };

    let Some(list) = campaigns() else {
        return rsx! { div { class: "loader" } };
    };

    rsx! {
        div {
            class: "container",
            div {
                class: "form-actions",
                h1 { "My Campaigns" }
                button {
                    class: "primary",
                    onclick: move |_| { nav.push(Route::CreateCampaign {}); },
                    Icon { icon: icons::FaPlus, width: 12, height: 12 }
                    " New Campaign"
                }
            }

            if list.is_empty() {
                div {
                    class: "empty-state",
                    p { "You haven't created any campaigns yet." }
                }
            } else {
                div {
                    class: "campaign-grid",
                    for campaign in list {
                        div {
                            key: "{campaign.id}",
                            class: "campaign-card",
                            div {
                                class: "campaign-card-body",
                                div {
                                    class: "campaign-card-meta",
                                    span { class: "category-badge", "{campaign.category}" }
                                    span { class: "category-badge", "{campaign.status}" }
                                }
                                h3 { "{campaign.title}" }
                                FundingProgress { raised: campaign.raised_amount, goal: campaign.goal_amount }
                                div {
                                    class: "form-actions",
                                    button {
                                        class: "secondary",
                                        onclick: {
                                            let id = campaign.id.clone();
                                            move |_| { nav.push(Route::CampaignDetail { id: id.clone() }); }
                                        },
                                        "View"
                                    }
                                    button {
                                        class: "danger",
                                        onclick: {
                                            let id = campaign.id.clone();
                                            let delete = delete.clone();
                                            move |_| delete(id.clone())
                                        },
                                        Icon { icon: icons::FaTrash, width: 12, height: 12 }
                                        " Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
