//! handlers/mod.rs
//! Thin HTTP adapters: extract the request, call the service, serialize the result.

pub mod business_handler;
pub mod campaign_handler;
pub mod contact_handler;
pub mod health_handler;
pub mod send_handler;
