use api::Campaign;
use dioxus::prelude::*;

use ui::{toast_error, use_api, use_toasts, CompetitorAnalysisPanel, MonteCarloPanel, SuccessPredictionPanel};

use super::RequireUser;

#[component]
pub fn Analytics() -> Element {
    rsx! {
        RequireUser { AnalyticsBoard {} }
    }
}

#[component]
fn AnalyticsBoard() -> Element {
    let client = use_api();
    let mut toasts = use_toasts();

    let mut campaigns = use_signal(Vec::<Campaign>::new);
    let mut selected = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);

    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            match client.list_campaigns().await {
                Ok(list) => {
                    if selected.peek().is_none() {
                        selected.set(list.first().map(|c| c.id.clone()));
                    }
                    campaigns.set(list);
                }
                Err(e) => toast_error(&mut toasts, e.user_message("Failed to load campaigns")),
            }
            loading.set(false);
        }
    });

    if loading() {
        return rsx! { div { class: "loader" } };
    }

    let current = selected();
    let chosen = current.clone().unwrap_or_default();

    rsx! {
        div {
            class: "container",
            h1 { "Campaign Analytics" }
            p { class: "panel-subtitle", "AI-powered insights to help campaigns succeed" }

            div {
                class: "form-field",
                style: "max-width: 480px",
                label { "Campaign" }
                select {
                    value: "{chosen}",
                    onchange: move |e| {
                        let id = e.value();
                        selected.set((!id.is_empty()).then_some(id));
                    },
                    if campaigns.read().is_empty() {
                        option { value: "", "No campaigns available" }
                    }
                    for campaign in campaigns() {
                        option { key: "{campaign.id}", value: "{campaign.id}", "{campaign.title}" }
                    }
                }
            }

            div {
                class: "panel-grid",
                SuccessPredictionPanel { campaign_id: current.clone() }
                CompetitorAnalysisPanel { campaign_id: current.clone() }
                MonteCarloPanel { campaign_id: current }
            }
        }
    }
}
