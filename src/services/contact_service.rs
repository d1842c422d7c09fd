use chrono::Utc;
use uuid::Uuid;

use crate::{
    errors::{ServiceError, ServiceResult},
    models::contact_model::{Contact, CreateContactRequest},
    services::{
        store::{matches_filter, EntityStore},
        validation::{require_non_empty, validate_email},
    },
};

#[derive(Clone)]
pub struct ContactService {
    store: EntityStore,
}

impl ContactService {
    pub fn new(store: EntityStore) -> Self {
        ContactService { store }
    }

    /// The business must exist when the contact is created; nothing re-checks it later.
    pub async fn create_contact(&self, req: CreateContactRequest) -> ServiceResult<Contact> {
        require_non_empty("first_name", &req.first_name)?;
        if let Some(email) = &req.email {
            validate_email("email", email)?;
        }

        if !self.store.businesses.read().await.exists(&req.business_id) {
            log::warn!(
                "(create_contact) Unknown business_id={}, contact not created",
                req.business_id
            );
            return Err(ServiceError::not_found("Business"));
        }

        let contact = Contact {
            id: Uuid::new_v4().to_string(),
            business_id: req.business_id,
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            consent_channel: req.consent_channel,
            consent_source: req.consent_source,
            consented_at: req.consented_at,
            created_at: Utc::now(),
        };

        let contact = self.store.contacts.write().await.insert(contact);
        log::info!(
            "(create_contact) Contact id={} created for business_id={}",
            contact.id,
            contact.business_id
        );
        Ok(contact)
    }

    pub async fn get_contact(&self, contact_id: &str) -> ServiceResult<Contact> {
        self.store
            .contacts
            .read()
            .await
            .get(contact_id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("Contact {} not found", contact_id)))
    }

    pub async fn list_contacts(&self, business_id: Option<&str>) -> Vec<Contact> {
        self.store
            .contacts
            .read()
            .await
            .list(|c| matches_filter(business_id, &c.business_id))
    }
}
