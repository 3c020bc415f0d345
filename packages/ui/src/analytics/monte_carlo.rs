use api::{MonteCarloResult, ProgressionPoint};
use dioxus::prelude::*;

use super::{format_usd, probability_class, PanelState};
use crate::client::use_api;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 200.0;
const CHART_DAYS: usize = 30;

/// SVG path of the projected funding curve, scaled to `width` x `height`
/// with the y axis pointing up. The path is closed along the bottom edge so it
/// can be filled as an area. Empty for fewer than two points.
pub fn area_path(points: &[ProgressionPoint], width: f64, height: f64) -> String {
    if points.len() < 2 {
        return String::new();
    }
    let max = points.iter().map(|p| p.amount).fold(0.0_f64, f64::max);
    let step = width / (points.len() - 1) as f64;
    let y = |amount: f64| {
        if max > 0.0 {
            height - amount / max * height
        } else {
            height
        }
    };

    let mut path = format!("M 0 {height:.1}");
    for (i, point) in points.iter().enumerate() {
        path.push_str(&format!(" L {:.1} {:.1}", i as f64 * step, y(point.amount)));
    }
    path.push_str(&format!(" L {width:.1} {height:.1} Z"));
    path
}

#[component]
pub fn MonteCarloPanel(campaign_id: Option<String>) -> Element {
    let client = use_api();
    let mut state = use_signal(PanelState::<MonteCarloResult>::default);

    let Some(campaign_id) = campaign_id else {
        return rsx! {
            div { class: "panel panel-empty", "Select a campaign to run Monte Carlo simulation" }
        };
    };

    let target = campaign_id.clone();
    let run = move |_| {
        let client = client.clone();
        let id = target.clone();
        async move {
            state.set(PanelState::Loading);
            match client.monte_carlo(&id).await {
                Ok(data) => state.set(PanelState::Ready { campaign_id: id, data }),
                Err(e) => {
                    tracing::error!("simulation for {} failed: {}", id, e);
                    state.set(PanelState::Failed("Failed to run simulation. Please try again.".into()));
                }
            }
        }
    };

    let current = state();
    let simulation = current.data_for(&campaign_id).cloned();

    rsx! {
        div {
            class: "panel",
            h3 { "Monte Carlo Simulation" }
            p { class: "panel-subtitle", "Predict funding progression with statistical modeling" }

            if current.is_loading() {
                div { class: "panel-loading", "Running simulations..." }
            } else if let Some(sim) = simulation {
                div {
                    class: "scenarios",
                    div { class: "scenario scenario-low", strong { {format_usd(sim.pessimistic)} } span { "Pessimistic" } }
                    div { class: "scenario scenario-mid", strong { {format_usd(sim.realistic)} } span { "Realistic" } }
                    div { class: "scenario scenario-high", strong { {format_usd(sim.optimistic)} } span { "Optimistic" } }
                }
                div {
                    class: format!("probability-card {}", probability_class(sim.success_probability)),
                    span { "Success Probability" }
                    strong { {format!("{:.0}%", sim.success_probability)} }
                    div {
                        class: "progress-track",
                        div {
                            class: "progress-fill",
                            style: format!("width: {:.0}%", sim.success_probability.clamp(0.0, 100.0)),
                        }
                    }
                }
                if sim.progression_data.len() > 1 {
                    svg {
                        class: "progression-chart",
                        view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
                        preserve_aspect_ratio: "none",
                        path {
                            d: area_path(
                                &sim.progression_data[..sim.progression_data.len().min(CHART_DAYS)],
                                CHART_WIDTH,
                                CHART_HEIGHT,
                            ),
                        }
                    }
                }
                if !sim.key_insights.is_empty() {
                    h4 { "Key Insights:" }
                    ul {
                        for insight in sim.key_insights.iter().take(4) {
                            li { "{insight}" }
                        }
                    }
                }
                button { class: "secondary", onclick: run, "Run New Simulation" }
            } else {
                button { class: "primary", onclick: run, "Run Simulation" }
            }

            if let Some(message) = current.error() {
                div { class: "panel-error", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(amounts: &[f64]) -> Vec<ProgressionPoint> {
        amounts
            .iter()
            .enumerate()
            .map(|(i, &amount)| ProgressionPoint { day: i as u32 + 1, amount })
            .collect()
    }

    #[test]
    fn test_area_path_scales_to_box() {
        let path = area_path(&points(&[0.0, 50.0, 100.0]), 100.0, 10.0);
        assert_eq!(path, "M 0 10.0 L 0.0 10.0 L 50.0 5.0 L 100.0 0.0 L 100.0 10.0 Z");
    }

    #[test]
    fn test_area_path_degenerate_inputs() {
        assert_eq!(area_path(&points(&[5.0]), 100.0, 10.0), "");
        let flat = area_path(&points(&[0.0, 0.0]), 100.0, 10.0);
        assert!(flat.contains("L 100.0 10.0"));
    }
}
