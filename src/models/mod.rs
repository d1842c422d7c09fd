//! models/mod.rs
//! Records kept by the store plus the request bodies that create them.

pub mod business_model;
pub mod campaign_model;
pub mod contact_model;
pub mod send_log_model;

/// Anything kept in an `EntityStore` collection.
pub trait Record {
    fn id(&self) -> &str;
}
