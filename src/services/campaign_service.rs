use chrono::Utc;
use uuid::Uuid;

use crate::{
    errors::{ServiceError, ServiceResult},
    models::campaign_model::{Campaign, CreateCampaignRequest},
    services::{
        store::{matches_filter, EntityStore},
        validation::require_non_empty,
    },
};

#[derive(Clone)]
pub struct CampaignService {
    store: EntityStore,
}

impl CampaignService {
    pub fn new(store: EntityStore) -> Self {
        CampaignService { store }
    }

    /// Channel and template placeholders are only checked when sending.
    pub async fn create_campaign(&self, req: CreateCampaignRequest) -> ServiceResult<Campaign> {
        require_non_empty("name", &req.name)?;

        if !self.store.businesses.read().await.exists(&req.business_id) {
            log::warn!(
                "(create_campaign) Unknown business_id={}, campaign not created",
                req.business_id
            );
            return Err(ServiceError::not_found("Business"));
        }

        let campaign = Campaign {
            id: Uuid::new_v4().to_string(),
            business_id: req.business_id,
            name: req.name,
            channel: req.channel,
            message_template: req.message_template,
            created_at: Utc::now(),
        };

        let campaign = self.store.campaigns.write().await.insert(campaign);
        log::info!(
            "(create_campaign) Campaign '{}' (id={}, channel={}) created",
            campaign.name,
            campaign.id,
            campaign.channel
        );
        Ok(campaign)
    }

    pub async fn get_campaign(&self, campaign_id: &str) -> ServiceResult<Campaign> {
        self.store
            .campaigns
            .read()
            .await
            .get(campaign_id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("Campaign"))
    }

    pub async fn list_campaigns(&self, business_id: Option<&str>) -> Vec<Campaign> {
        self.store
            .campaigns
            .read()
            .await
            .list(|c| matches_filter(business_id, &c.business_id))
    }
}
