//! AI-assist endpoints: wizard helpers and the chat assistant.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{
    CampaignBrief, ChatReply, ChatRequest, EnhancedDescription, MarketingStrategy, PredictionRequest,
    SuccessPrediction, TitleRequest, TitleSuggestions,
};

impl ApiClient {
    pub async fn optimize_title(&self, req: &TitleRequest) -> Result<Vec<String>, ApiError> {
        let resp: TitleSuggestions = self.post_json("/ai/optimize-title", req).await?;
        Ok(resp.titles)
    }

    pub async fn enhance_description(&self, brief: &CampaignBrief) -> Result<String, ApiError> {
        let resp: EnhancedDescription = self.post_json("/ai/enhance-description", brief).await?;
        Ok(resp.enhanced_description)
    }

    pub async fn success_prediction(&self, req: &PredictionRequest) -> Result<SuccessPrediction, ApiError> {
        self.post_json("/ai/success-prediction", req).await
    }

    pub async fn marketing_strategy(&self, brief: &CampaignBrief) -> Result<MarketingStrategy, ApiError> {
        self.post_json("/ai/marketing-strategy", brief).await
    }

    /// `POST /api/ai/chat`. Pass the `session_id` of the previous reply to keep
    /// the conversation going.
    pub async fn chat(&self, message: &str, session_id: Option<&str>) -> Result<ChatReply, ApiError> {
        let body = ChatRequest {
            message: message.to_string(),
            session_id: session_id.map(str::to_string),
        };
        self.post_json("/ai/chat", &body).await
    }
}
