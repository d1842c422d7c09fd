//! services/dispatch_service.rs
//! Renders a campaign's template for each contact and records a send log.
//! Nothing is delivered; every log stays "queued".

use chrono::Utc;
use uuid::Uuid;

use crate::{
    errors::{ServiceError, ServiceResult},
    models::{
        campaign_model::Campaign,
        send_log_model::{SendLog, SendRequest, SendStatus},
    },
    services::{
        store::{matches_filter, EntityStore},
        template::{render, truncate_chars},
    },
};

pub const MESSAGE_PREVIEW_MAX_CHARS: usize = 160;

#[derive(Clone)]
pub struct DispatchService {
    store: EntityStore,
}

impl DispatchService {
    pub fn new(store: EntityStore) -> Self {
        DispatchService { store }
    }

    /// Contacts are processed in request order. A missing contact aborts the
    /// call, but logs already appended for earlier contacts are kept.
    pub async fn send(&self, req: SendRequest) -> ServiceResult<Vec<SendLog>> {
        let campaign: Campaign = self
            .store
            .campaigns
            .read()
            .await
            .get(&req.campaign_id)
            .cloned()
            .ok_or_else(|| {
                log::warn!("(send) Unknown campaign_id={}", req.campaign_id);
                ServiceError::not_found("Campaign")
            })?;

        log::info!(
            "(send) Dispatching campaign id={} to {} contact(s) via '{}'",
            campaign.id,
            req.contact_ids.len(),
            campaign.channel
        );

        let mut sent = Vec::with_capacity(req.contact_ids.len());
        for contact_id in &req.contact_ids {
            let first_name = match self.store.contacts.read().await.get(contact_id) {
                Some(contact) => contact.first_name.clone(),
                None => {
                    log::warn!(
                        "(send) Contact {} not found; aborting after {} log(s)",
                        contact_id,
                        sent.len()
                    );
                    return Err(ServiceError::NotFound(format!(
                        "Contact {} not found",
                        contact_id
                    )));
                }
            };

            let message = render(
                &campaign.message_template,
                &[
                    ("first_name", first_name.as_str()),
                    ("review_link", req.review_link.as_str()),
                ],
            )?;

            let log_entry = SendLog {
                id: Uuid::new_v4().to_string(),
                campaign_id: campaign.id.clone(),
                contact_id: contact_id.clone(),
                channel: campaign.channel.clone(),
                message_preview: truncate_chars(&message, MESSAGE_PREVIEW_MAX_CHARS),
                status: SendStatus::Queued,
                created_at: Utc::now(),
            };

            let log_entry = self.store.send_logs.write().await.insert(log_entry);
            log::debug!(
                "(send) Queued log id={} for contact_id={}",
                log_entry.id,
                contact_id
            );
            sent.push(log_entry);
        }

        log::info!(
            "(send) Campaign id={} queued {} message(s)",
            campaign.id,
            sent.len()
        );
        Ok(sent)
    }

    pub async fn get_send_log(&self, log_id: &str) -> ServiceResult<SendLog> {
        self.store
            .send_logs
            .read()
            .await
            .get(log_id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("Send log"))
    }

    pub async fn list_send_logs(&self, campaign_id: Option<&str>) -> Vec<SendLog> {
        self.store
            .send_logs
            .read()
            .await
            .list(|l| matches_filter(campaign_id, &l.campaign_id))
    }
}
