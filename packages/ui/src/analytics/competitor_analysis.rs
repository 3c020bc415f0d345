use api::CompetitorAnalysis;
use dioxus::prelude::*;

use super::{format_usd, PanelState};
use crate::client::use_api;

#[component]
pub fn CompetitorAnalysisPanel(campaign_id: Option<String>) -> Element {
    let client = use_api();
    let mut state = use_signal(PanelState::<CompetitorAnalysis>::default);

    let Some(campaign_id) = campaign_id else {
        return rsx! {
            div { class: "panel panel-empty", "Select a campaign to analyze competitors" }
        };
    };

    let target = campaign_id.clone();
    let analyze = move |_| {
        let client = client.clone();
        let id = target.clone();
        async move {
            state.set(PanelState::Loading);
            match client.competitor_analysis(&id).await {
                Ok(data) => state.set(PanelState::Ready { campaign_id: id, data }),
                Err(e) => {
                    tracing::error!("competitor analysis for {} failed: {}", id, e);
                    state.set(PanelState::Failed("Failed to analyze competitors. Please try again.".into()));
                }
            }
        }
    };

    let current = state();
    let analysis = current.data_for(&campaign_id).cloned();

    rsx! {
        div {
            class: "panel",
            h3 { "Competitor Analysis" }
            p { class: "panel-subtitle", "Market positioning against similar campaigns" }

            if current.is_loading() {
                div { class: "panel-loading", "Analyzing market and competitors..." }
            } else if let Some(analysis) = analysis {
                if let Some(market) = analysis.market_overview.clone() {
                    div {
                        class: "market-overview",
                        h4 { "Market Overview" }
                        p { strong { "Category Performance: " } "{market.category_performance}" }
                        if !market.average_success_rate.is_empty() {
                            p { strong { "Average Success Rate: " } "{market.average_success_rate}" }
                        }
                        if market.typical_funding_min > 0.0 && market.typical_funding_max > 0.0 {
                            p {
                                strong { "Typical Funding: " }
                                {format!("{} to {}", format_usd(market.typical_funding_min), format_usd(market.typical_funding_max))}
                            }
                        }
                    }
                }
                if !analysis.key_trends.is_empty() {
                    h4 { "Key Trends:" }
                    ul {
                        for trend in analysis.key_trends.iter().take(3) {
                            li { "{trend}" }
                        }
                    }
                }
                if !analysis.top_competitors.is_empty() {
                    h4 { "Top Competitors" }
                    for competitor in analysis.top_competitors.iter().take(3) {
                        div {
                            class: "competitor",
                            div {
                                class: "competitor-head",
                                span { "{competitor.name}" }
                                span { {format_usd(competitor.funding)} }
                            }
                            p { "{competitor.description}" }
                            if !competitor.success_factors.is_empty() {
                                p { class: "competitor-factors", strong { "Success Factors: " } "{competitor.success_factors}" }
                            }
                        }
                    }
                }
                button { class: "secondary", onclick: analyze, "Refresh Analysis" }
            } else {
                button { class: "primary", onclick: analyze, "Analyze Competitors" }
            }

            if let Some(message) = current.error() {
                div { class: "panel-error", "{message}" }
            }
        }
    }
}
