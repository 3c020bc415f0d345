//! On-demand analytics panels for a single campaign.
//!
//! Each panel fetches when its button is pressed and keeps its own loading and
//! error state. A result is only shown while the panel still targets the
//! campaign it was fetched for.

mod competitor_analysis;
mod monte_carlo;
mod success_prediction;

pub use competitor_analysis::CompetitorAnalysisPanel;
pub use monte_carlo::MonteCarloPanel;
pub use success_prediction::SuccessPredictionPanel;

/// Fetch state of one panel. `Ready` remembers which campaign it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelState<T> {
    Idle,
    Loading,
    Ready { campaign_id: String, data: T },
    Failed(String),
}

impl<T> Default for PanelState<T> {
    fn default() -> Self {
        PanelState::Idle
    }
}

impl<T> PanelState<T> {
    /// The result, if it was fetched for `campaign_id`.
    pub fn data_for(&self, campaign_id: &str) -> Option<&T> {
        match self {
            PanelState::Ready { campaign_id: id, data } if id == campaign_id => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PanelState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PanelState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// CSS modifier for a `high` / `medium` / `low` priority label.
pub fn priority_class(priority: &str) -> &'static str {
    match priority.to_lowercase().as_str() {
        "high" => "priority priority-high",
        "medium" => "priority priority-medium",
        "low" => "priority priority-low",
        _ => "priority",
    }
}

/// CSS modifier for a success percentage.
pub fn probability_class(percentage: f64) -> &'static str {
    if percentage > 70.0 {
        "probability-high"
    } else if percentage > 40.0 {
        "probability-medium"
    } else {
        "probability-low"
    }
}

/// Whole-dollar amount with thousands separators, e.g. `$12,500`.
pub fn format_usd(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_for_checks_campaign() {
        let state = PanelState::Ready {
            campaign_id: "c1".to_string(),
            data: 42,
        };
        assert_eq!(state.data_for("c1"), Some(&42));
        assert_eq!(state.data_for("c2"), None);
        assert!(PanelState::<u8>::Loading.is_loading());
        assert_eq!(PanelState::<u8>::Failed("boom".into()).error(), Some("boom"));
    }

    #[test]
    fn test_classes() {
        assert_eq!(priority_class("High"), "priority priority-high");
        assert_eq!(priority_class("urgent"), "priority");
        assert_eq!(probability_class(71.0), "probability-high");
        assert_eq!(probability_class(70.0), "probability-medium");
        assert_eq!(probability_class(12.0), "probability-low");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(999.4), "$999");
        assert_eq!(format_usd(12500.0), "$12,500");
        assert_eq!(format_usd(1234567.0), "$1,234,567");
    }
}
