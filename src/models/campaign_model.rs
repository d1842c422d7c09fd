use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    pub id: String,
    pub business_id: String,
    pub name: String,
    pub channel: String, // "email", "sms"
    /// Supports `{first_name}` and `{review_link}`.
    pub message_template: String,
    pub created_at: DateTime<Utc>,
}

/// Body of POST /campaigns
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCampaignRequest {
    pub business_id: String,
    pub name: String,
    pub channel: String,
    pub message_template: String,
}

impl Record for Campaign {
    fn id(&self) -> &str {
        &self.id
    }
}

impl CreateCampaignRequest {
    #[cfg(test)]
    pub fn test_new(business_id: &str, message_template: &str) -> Self {
        Self {
            business_id: business_id.to_string(),
            name: "Spring reviews".to_string(),
            channel: "sms".to_string(),
            message_template: message_template.to_string(),
        }
    }
}
