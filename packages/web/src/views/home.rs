use dioxus::prelude::*;

use ui::{open_auth_modal, toast_error, use_api, use_auth, use_toasts, CampaignCard};

use crate::Route;

const FEATURED_COUNT: usize = 6;

#[component]
pub fn Home() -> Element {
    let client = use_api();
    let mut auth = use_auth();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let featured = use_resource(move || {
        let client = client.clone();
        async move {
            match client.list_campaigns().await {
                Ok(mut campaigns) => {
                    campaigns.truncate(FEATURED_COUNT);
                    campaigns
                }
                Err(e) => {
                    toast_error(&mut toasts, e.user_message("Failed to load campaigns"));
                    Vec::new()
                }
            }
        }
    });

    let start_campaign = move |_| {
        if auth.peek().user.is_some() {
            nav.push(Route::CreateCampaign {});
        } else {
            open_auth_modal(&mut auth);
        }
    };

    rsx! {
        section {
            class: "hero",
            h1 { "Fund ideas with data on your side" }
            p {
                "FundLens pairs every campaign with AI success predictions, market analysis and "
                "funding simulations so creators launch smarter and backers pick winners."
            }
            div {
                class: "form-row",
                style: "justify-content: center",
                button { class: "primary", onclick: start_campaign, "Start a Campaign" }
                button {
                    class: "secondary",
                    onclick: move |_| { nav.push(Route::Discover {}); },
                    "Discover Projects"
                }
            }
        }

        div {
            class: "container",
            h2 { "Featured Campaigns" }
            match &*featured.read() {
                None => rsx! { div { class: "loader" } },
                Some(campaigns) if campaigns.is_empty() => rsx! {
                    p { class: "empty-state", "No campaigns yet. Be the first to launch one!" }
                },
                Some(campaigns) => rsx! {
                    div {
                        class: "campaign-grid",
                        for campaign in campaigns.iter().cloned() {
                            CampaignCard {
                                key: "{campaign.id}",
                                campaign,
                                on_select: move |id: String| { nav.push(Route::CampaignDetail { id }); },
                            }
                        }
                    }
                },
            }
        }
    }
}
