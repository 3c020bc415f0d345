//! Read-only cards for the AI results gathered by the creation wizard.

use api::{MarketingStrategy, SuccessPrediction};
use dioxus::prelude::*;

use crate::analytics::{priority_class, probability_class};

#[component]
pub fn PredictionCard(prediction: SuccessPrediction) -> Element {
    rsx! {
        div {
            class: format!("ai-card probability-card {}", probability_class(prediction.success_percentage)),
            div {
                class: "ai-card-head",
                strong { {format!("{:.0}%", prediction.success_percentage)} }
                if !prediction.confidence_level.is_empty() {
                    span { class: "confidence", "{prediction.confidence_level} confidence" }
                }
            }
            if !prediction.analysis.is_empty() {
                p { "{prediction.analysis}" }
            }
            if !prediction.recommendations.is_empty() {
                ul {
                    for rec in prediction.recommendations.iter() {
                        li { "{rec}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn MarketingCard(strategy: MarketingStrategy) -> Element {
    rsx! {
        div {
            class: "ai-card",
            p { "{strategy.overview}" }

            if let Some(audience) = strategy.target_audience.clone() {
                div {
                    class: "audience",
                    h4 { "Target Audience" }
                    p { strong { "Primary: " } "{audience.primary}" }
                    if !audience.secondary.is_empty() {
                        p { strong { "Secondary: " } "{audience.secondary}" }
                    }
                }
            }

            if !strategy.channels.is_empty() {
                h4 { "Channels" }
                for channel in strategy.channels.iter() {
                    div {
                        class: "channel",
                        div {
                            class: "channel-head",
                            span { "{channel.name}" }
                            span { class: priority_class(&channel.priority), "{channel.priority}" }
                        }
                        p { "{channel.strategy}" }
                    }
                }
            }

            if !strategy.timeline.is_empty() {
                h4 { "Timeline" }
                for phase in strategy.timeline.iter() {
                    div {
                        class: "phase",
                        strong { "{phase.phase}" }
                        span { " ({phase.duration})" }
                        ul {
                            for action in phase.actions.iter() {
                                li { "{action}" }
                            }
                        }
                    }
                }
            }

            if !strategy.key_messages.is_empty() {
                h4 { "Key Messages" }
                ul {
                    for message in strategy.key_messages.iter() {
                        li { "{message}" }
                    }
                }
            }

            if !strategy.budget_allocation.is_empty() {
                h4 { "Budget Allocation" }
                dl {
                    for (item, share) in strategy.budget_allocation.iter() {
                        dt { "{item}" }
                        dd { "{share}" }
                    }
                }
            }
        }
    }
}
