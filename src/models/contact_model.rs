use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::Record;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub id: String,
    pub business_id: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub consent_channel: Option<String>, // "email", "sms"
    pub consent_source: Option<String>,
    pub consented_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Body of POST /contacts
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContactRequest {
    pub business_id: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub consent_channel: Option<String>,
    pub consent_source: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_datetime")]
    pub consented_at: Option<DateTime<Utc>>,
}

/// Formats accepted when the timestamp carries no offset; read as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// RFC 3339 first, then the offset-less forms a browser `datetime-local` field sends.
fn deserialize_lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Option::<String>::deserialize(deserializer)? {
        Some(raw) => raw,
        None => return Ok(None),
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(parsed.with_timezone(&Utc)));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&raw, fmt).ok())
        .map(|naive| Some(naive.and_utc()))
        .ok_or_else(|| serde::de::Error::custom(format!("invalid datetime '{}'", raw)))
}

impl Record for Contact {
    fn id(&self) -> &str {
        &self.id
    }
}

impl CreateContactRequest {
    #[cfg(test)]
    pub fn test_new(business_id: &str, first_name: &str) -> Self {
        Self {
            business_id: business_id.to_string(),
            first_name: first_name.to_string(),
            last_name: None,
            email: None,
            phone: None,
            consent_channel: None,
            consent_source: None,
            consented_at: None,
        }
    }
}
