use std::collections::HashMap;

use api::{Campaign, CampaignAnalysis};
use dioxus::prelude::*;

use ui::discover::{category_label, category_options, filter_campaigns, ALL_CATEGORIES};
use ui::{icons, toast_error, use_api, use_toasts, CampaignCard, Icon};

use crate::Route;

#[component]
pub fn Discover() -> Element {
    let client = use_api();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut campaigns = use_signal(Vec::<Campaign>::new);
    let mut analyses = use_signal(HashMap::<String, CampaignAnalysis>::new);
    let mut loading = use_signal(|| true);
    let mut query = use_signal(String::new);
    let mut category = use_signal(|| ALL_CATEGORIES.to_string());

    // Badges arrive after the list; the analyses are requested concurrently.
    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            match client.list_campaigns().await {
                Ok(list) => {
                    campaigns.set(list.clone());
                    loading.set(false);
                    analyses.set(client.campaign_analyses(&list).await);
                }
                Err(e) => {
                    loading.set(false);
                    toast_error(&mut toasts, e.user_message("Failed to load campaigns"));
                }
            }
        }
    });

    let all = campaigns.read();
    let options = category_options(&all);
    let visible: Vec<Campaign> = filter_campaigns(&all, &query(), &category())
        .into_iter()
        .cloned()
        .collect();
    let badges = analyses.read();

    rsx! {
        div {
            class: "container",
            h1 { "Discover Campaigns" }
            div {
                class: "filters",
                div {
                    class: "form-field",
                    style: "flex: 1",
                    input {
                        r#type: "search",
                        placeholder: "Search campaigns...",
                        value: "{query}",
                        oninput: move |e| query.set(e.value()),
                    }
                }
                select {
                    style: "max-width: 220px",
                    value: "{category}",
                    onchange: move |e| category.set(e.value()),
                    for name in options {
                        option { key: "{name}", value: "{name}", {category_label(&name).to_string()} }
                    }
                }
            }

            if loading() {
                div { class: "loader" }
            } else if visible.is_empty() {
                div {
                    class: "empty-state",
                    Icon { icon: icons::FaMagnifyingGlass, width: 32, height: 32 }
                    p { "No campaigns found matching your criteria." }
                }
            } else {
                div {
                    class: "campaign-grid",
                    for campaign in visible {
                        CampaignCard {
                            key: "{campaign.id}",
                            analysis: badges.get(&campaign.id).cloned(),
                            campaign,
                            on_select: move |id: String| { nav.push(Route::CampaignDetail { id }); },
                        }
                    }
                }
            }
        }
    }
}
