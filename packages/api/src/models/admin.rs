use serde::{Deserialize, Serialize};

/// Response of `GET /api/admin/stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdminStats {
    #[serde(default)]
    pub total_campaigns: u64,
    #[serde(default)]
    pub active_campaigns: u64,
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_raised: f64,
}
