//! services/store.rs
//! In-memory collections shared by every service. Lives as long as the process.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{
    business_model::Business, campaign_model::Campaign, contact_model::Contact,
    send_log_model::SendLog, Record,
};

/// Insertion-ordered map from id to record.
#[derive(Debug)]
pub struct Collection<T> {
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Record + Clone> Collection<T> {
    /// Records are never replaced; a duplicate id would be a generator bug.
    pub fn insert(&mut self, record: T) -> T {
        debug_assert!(!self.index.contains_key(record.id()));
        self.index.insert(record.id().to_string(), self.items.len());
        self.items.push(record.clone());
        record
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    pub fn exists(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn list<F>(&self, filter: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.items.iter().filter(|r| filter(r)).cloned().collect()
    }
}

/// One lock per collection. Cloning shares the same collections.
#[derive(Clone, Default)]
pub struct EntityStore {
    pub businesses: Arc<RwLock<Collection<Business>>>,
    pub contacts: Arc<RwLock<Collection<Contact>>>,
    pub campaigns: Arc<RwLock<Collection<Campaign>>>,
    pub send_logs: Arc<RwLock<Collection<SendLog>>>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// An empty filter value means "no filter", same as leaving it out.
pub fn matches_filter(filter: Option<&str>, value: &str) -> bool {
    match filter {
        Some(wanted) if !wanted.is_empty() => wanted == value,
        _ => true,
    }
}
