//! Campaign summary card and funding progress bar.

use api::{Campaign, CampaignAnalysis};
use dioxus::prelude::*;

/// Progress bar clamped to 0–100 % with the unclamped, rounded label.
#[component]
pub fn FundingProgress(raised: f64, goal: f64) -> Element {
    let width = api::progress_width(raised, goal);
    let percent = api::funding_percentage(raised, goal).round();
    let raised_label = format!("${raised:.0} raised");

    rsx! {
        div {
            class: "funding-progress",
            div {
                class: "progress-track",
                div { class: "progress-fill", style: "width: {width}%" }
            }
            div {
                class: "progress-labels",
                span { "{raised_label}" }
                span { "{percent}% funded" }
            }
        }
    }
}

#[component]
pub fn CampaignCard(
    campaign: Campaign,
    #[props(default)] analysis: Option<CampaignAnalysis>,
    on_select: EventHandler<String>,
) -> Element {
    let id = campaign.id.clone();
    let badge = analysis
        .as_ref()
        .filter(|a| a.shows_success_badge())
        .map(|a| a.success_probability.round());
    let goal_label = format!("Goal: ${:.0}", campaign.goal_amount);

    rsx! {
        div {
            class: "campaign-card",
            onclick: move |_| on_select.call(id.clone()),
            if let Some(url) = campaign.image_url.clone() {
                img { class: "campaign-card-image", src: "{url}", alt: "{campaign.title}" }
            }
            div {
                class: "campaign-card-body",
                div {
                    class: "campaign-card-meta",
                    span { class: "category-badge", "{campaign.category}" }
                    if let Some(probability) = badge {
                        span { class: "success-badge", "{probability}% Success" }
                    }
                }
                h3 { "{campaign.title}" }
                p { class: "campaign-card-description", "{campaign.description}" }
                FundingProgress { raised: campaign.raised_amount, goal: campaign.goal_amount }
                div {
                    class: "campaign-card-footer",
                    span { "{campaign.backers_count} backers" }
                    span { "{goal_label}" }
                }
            }
        }
    }
}
