//! Checkout endpoints.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{CheckoutRequest, CheckoutSession, PaymentStatus};

impl ApiClient {
    /// `POST /api/payments/create-checkout`. The backend redirects the payer back
    /// to `origin_url` with `?session_id=...` appended.
    pub async fn create_checkout(&self, campaign_id: &str, origin_url: &str) -> Result<CheckoutSession, ApiError> {
        let body = CheckoutRequest {
            campaign_id: campaign_id.to_string(),
            origin_url: origin_url.to_string(),
        };
        let session: CheckoutSession = self.post_json("/payments/create-checkout", &body).await?;
        tracing::info!("checkout session {} created for campaign {}", session.session_id, campaign_id);
        Ok(session)
    }

    /// `GET /api/payments/status/{session_id}`.
    pub async fn payment_status(&self, session_id: &str) -> Result<PaymentStatus, ApiError> {
        self.get_json(&format!("/payments/status/{session_id}")).await
    }
}
