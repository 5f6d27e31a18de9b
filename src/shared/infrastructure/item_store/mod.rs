// Item store port for event items.
//
// Purpose
// - Describe what the use cases need from the hosted list backend: fetch a
//   snapshot, apply a field-level update, insert, delete.
//
// Boundaries
// - Updates are conditional on the version read at fetch time. A stale
//   writer gets `Conflict` and must re-fetch; no retry happens below this
//   port.
//
// Testing guidance
// - `in_memory::InMemoryItemStore` backs tests and local development.

pub mod in_memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::modules::events::core::event::EventItem;
use crate::shared::core::primitives::{EventId, UserId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemStoreError {
    #[error("event {0} not found")]
    NotFound(EventId),

    #[error("version mismatch: expected {expected}, actual {actual}")]
    Conflict { expected: i64, actual: i64 },

    #[error("permission denied")]
    PermissionDenied,

    #[error("backend error: {0}")]
    Backend(String),
}

/// Snapshot plus the version the conditional update must name.
#[derive(Debug, Clone)]
pub struct StoredEvent {
    pub item: EventItem,
    pub version: i64,
}

/// Partial update of an event item. Only the set fields are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFieldUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub capacity: Option<u32>,
    pub open_spots: Option<u32>,
    pub registered_users: Option<Vec<UserId>>,
    pub wait_listed_users: Option<Vec<UserId>>,
    pub pocs: Option<Vec<UserId>>,
    pub is_cancelled: Option<bool>,
}

impl EventFieldUpdate {
    pub fn roster(
        registered_users: Vec<UserId>,
        wait_listed_users: Vec<UserId>,
        open_spots: u32,
    ) -> Self {
        Self {
            registered_users: Some(registered_users),
            wait_listed_users: Some(wait_listed_users),
            open_spots: Some(open_spots),
            ..Self::default()
        }
    }

    pub fn cancellation(cancelled: bool) -> Self {
        Self {
            is_cancelled: Some(cancelled),
            ..Self::default()
        }
    }
}

#[async_trait]
pub trait EventItemStore: Send + Sync {
    async fn fetch(&self, id: &EventId) -> Result<StoredEvent, ItemStoreError>;

    async fn update(
        &self,
        id: &EventId,
        expected_version: i64,
        fields: EventFieldUpdate,
    ) -> Result<(), ItemStoreError>;

    async fn insert(&self, item: EventItem) -> Result<StoredEvent, ItemStoreError>;

    async fn delete(&self, id: &EventId) -> Result<(), ItemStoreError>;
}
