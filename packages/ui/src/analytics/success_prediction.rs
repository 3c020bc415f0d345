use api::StrategicRecommendations;
use dioxus::prelude::*;

use super::{priority_class, probability_class, PanelState};
use crate::client::use_api;

#[component]
pub fn SuccessPredictionPanel(campaign_id: Option<String>) -> Element {
    let client = use_api();
    let mut state = use_signal(PanelState::<StrategicRecommendations>::default);

    let Some(campaign_id) = campaign_id else {
        return rsx! {
            div { class: "panel panel-empty", "Select a campaign for success prediction analysis" }
        };
    };

    let target = campaign_id.clone();
    let analyze = move |_| {
        let client = client.clone();
        let id = target.clone();
        async move {
            state.set(PanelState::Loading);
            match client.strategic_recommendations(&id).await {
                Ok(data) => state.set(PanelState::Ready { campaign_id: id, data }),
                Err(e) => {
                    tracing::error!("success prediction for {} failed: {}", id, e);
                    state.set(PanelState::Failed("Failed to generate prediction. Please try again.".into()));
                }
            }
        }
    };

    let current = state();
    let report = current.data_for(&campaign_id).cloned();

    rsx! {
        div {
            class: "panel",
            h3 { "Success Prediction" }
            p { class: "panel-subtitle", "AI-powered analysis of campaign success likelihood" }

            if current.is_loading() {
                div { class: "panel-loading", "Analyzing campaign factors..." }
            } else if let Some(report) = report {
                if let Some(summary) = report.success_prediction.clone() {
                    div {
                        class: format!("probability-card {}", probability_class(summary.percentage)),
                        div { class: "probability-value", "{summary.percentage}%" }
                        div { class: "probability-level", "{summary.level}" }
                        p { strong { "Category Average: " } "{summary.category_average}" }
                        p { strong { "Similar Campaigns: " } "{summary.similar_campaigns}" }
                    }
                }
                div {
                    class: "factor-grid",
                    if !report.success_factors.is_empty() {
                        div {
                            class: "factors factors-success",
                            h4 { "Success Factors" }
                            ul {
                                for factor in report.success_factors.iter().take(3) {
                                    li { "{factor}" }
                                }
                            }
                        }
                    }
                    if !report.risk_factors.is_empty() {
                        div {
                            class: "factors factors-risk",
                            h4 { "Risk Factors" }
                            ul {
                                for risk in report.risk_factors.iter().take(3) {
                                    li { "{risk}" }
                                }
                            }
                        }
                    }
                }
                if !report.action_recommendations.is_empty() {
                    h4 { "Action Recommendations" }
                    for rec in report.action_recommendations.iter().take(4) {
                        div {
                            class: "recommendation",
                            div {
                                class: "recommendation-head",
                                span { "{rec.title}" }
                                span { class: priority_class(&rec.priority), "{rec.priority}" }
                            }
                            p { "{rec.description}" }
                        }
                    }
                }
                button { class: "secondary", onclick: analyze, "Refresh Analysis" }
            } else {
                button { class: "primary", onclick: analyze, "Analyze Success Probability" }
            }

            if let Some(message) = current.error() {
                div { class: "panel-error", "{message}" }
            }
        }
    }
}
