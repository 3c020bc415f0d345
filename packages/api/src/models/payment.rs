use serde::{Deserialize, Serialize};

pub const PAYMENT_STATUS_PAID: &str = "paid";

/// Body of `POST /api/payments/create-checkout`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutRequest {
    pub campaign_id: String,
    /// Origin the checkout page redirects back to.
    pub origin_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSession {
    pub url: String,
    pub session_id: String,
}

/// Response of `GET /api/payments/status/{session_id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PaymentStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub payment_status: String,
    #[serde(default)]
    pub amount_total: f64,
    #[serde(default)]
    pub currency: Option<String>,
}

impl PaymentStatus {
    pub fn is_paid(&self) -> bool {
        self.payment_status == PAYMENT_STATUS_PAID
    }
}
