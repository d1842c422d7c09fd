//! config/mod.rs
pub mod server_config;
