use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Business {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub google_place_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of POST /businesses
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBusinessRequest {
    pub name: String,
    pub address: Option<String>,
    pub google_place_id: Option<String>,
}

impl Record for Business {
    fn id(&self) -> &str {
        &self.id
    }
}
