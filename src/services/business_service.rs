use chrono::Utc;
use uuid::Uuid;

use crate::{
    errors::{ServiceError, ServiceResult},
    models::business_model::{Business, CreateBusinessRequest},
    services::{store::EntityStore, validation::require_non_empty},
};

#[derive(Clone)]
pub struct BusinessService {
    store: EntityStore,
}

impl BusinessService {
    pub fn new(store: EntityStore) -> Self {
        BusinessService { store }
    }

    pub async fn create_business(&self, req: CreateBusinessRequest) -> ServiceResult<Business> {
        require_non_empty("name", &req.name)?;

        let business = Business {
            id: Uuid::new_v4().to_string(),
            name: req.name,
            address: req.address,
            google_place_id: req.google_place_id,
            created_at: Utc::now(),
        };

        let business = self.store.businesses.write().await.insert(business);
        log::info!(
            "(create_business) Business '{}' created with id={}",
            business.name,
            business.id
        );
        Ok(business)
    }

    pub async fn get_business(&self, business_id: &str) -> ServiceResult<Business> {
        self.store
            .businesses
            .read()
            .await
            .get(business_id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("Business"))
    }

    pub async fn list_businesses(&self) -> Vec<Business> {
        self.store.businesses.read().await.list(|_| true)
    }
}
