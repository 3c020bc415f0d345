//! Campaign, comment and per-campaign analysis endpoints.

use std::collections::HashMap;

use futures::future::join_all;
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Campaign, CampaignAnalysis, CampaignUpdate, Comment, NewCampaign, NewComment};

impl ApiClient {
    /// `GET /api/campaigns`.
    pub async fn list_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        self.get_json("/campaigns").await
    }

    /// `GET /api/campaigns/{id}`.
    pub async fn get_campaign(&self, id: &str) -> Result<Campaign, ApiError> {
        self.get_json(&format!("/campaigns/{id}")).await
    }

    /// `GET /api/my-campaigns`: campaigns created by the current user.
    pub async fn my_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        self.get_json("/my-campaigns").await
    }

    /// `POST /api/campaigns/extended`.
    pub async fn create_campaign(&self, campaign: &NewCampaign) -> Result<Campaign, ApiError> {
        let created: Campaign = self.post_json("/campaigns/extended", campaign).await?;
        tracing::info!("created campaign {}", created.id);
        Ok(created)
    }

    /// `PUT /api/campaigns/{id}`. The response body is ignored; callers re-fetch.
    pub async fn update_campaign(&self, id: &str, update: &CampaignUpdate) -> Result<(), ApiError> {
        let req = self.request(Method::PUT, &format!("/campaigns/{id}")).json(update);
        self.execute_unit(req).await
    }

    /// `DELETE /api/campaigns/{id}`.
    pub async fn delete_campaign(&self, id: &str) -> Result<(), ApiError> {
        self.execute_unit(self.request(Method::DELETE, &format!("/campaigns/{id}")))
            .await?;
        tracing::info!("deleted campaign {}", id);
        Ok(())
    }

    /// `GET /api/campaigns/{id}/analysis`.
    pub async fn campaign_analysis(&self, id: &str) -> Result<CampaignAnalysis, ApiError> {
        self.get_json(&format!("/campaigns/{id}/analysis")).await
    }

    /// Fetch the analysis of every campaign concurrently. Campaigns whose
    /// request fails are left out of the map.
    pub async fn campaign_analyses(&self, campaigns: &[Campaign]) -> HashMap<String, CampaignAnalysis> {
        let requests = campaigns.iter().map(|c| async move {
            let result = self.campaign_analysis(&c.id).await;
            (c.id.clone(), result)
        });

        join_all(requests)
            .await
            .into_iter()
            .filter_map(|(id, result)| match result {
                Ok(analysis) => Some((id, analysis)),
                Err(e) => {
                    tracing::warn!("analysis for campaign {} unavailable: {}", id, e);
                    None
                }
            })
            .collect()
    }

    /// `GET /api/campaigns/{id}/comments`.
    pub async fn comments(&self, campaign_id: &str) -> Result<Vec<Comment>, ApiError> {
        self.get_json(&format!("/campaigns/{campaign_id}/comments")).await
    }

    /// `POST /api/campaigns/{id}/comments`.
    pub async fn post_comment(&self, campaign_id: &str, content: &str) -> Result<Comment, ApiError> {
        let body = NewComment {
            content: content.to_string(),
        };
        self.post_json(&format!("/campaigns/{campaign_id}/comments"), &body)
            .await
    }
}
