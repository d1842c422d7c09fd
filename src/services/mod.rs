//! services/mod.rs
//! Business layer: the store, the create/list operations and message dispatch.

pub mod business_service;
pub mod campaign_service;
pub mod contact_service;
pub mod dispatch_service;
pub mod store;
pub mod template;
pub mod validation;
