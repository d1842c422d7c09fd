//! models/send_log_model.rs
//! One row per (campaign, contact) pair dispatched by POST /send.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// No transition out of `Queued` exists; nothing is actually delivered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SendStatus {
    Queued,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SendLog {
    pub id: String,
    pub campaign_id: String,
    pub contact_id: String,
    pub channel: String,
    pub message_preview: String,
    pub status: SendStatus,
    pub created_at: DateTime<Utc>,
}

/// Body of POST /send
#[derive(Debug, Clone, Deserialize)]
pub struct SendRequest {
    pub campaign_id: String,
    pub contact_ids: Vec<String>,
    pub review_link: String,
}

impl Record for SendLog {
    fn id(&self) -> &str {
        &self.id
    }
}
