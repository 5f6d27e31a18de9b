// In memory implementation of the EventItemStore port.
//
// Purpose
// - Support handler tests and local development without the hosted list.
//
// Responsibilities
// - Store items with a version per id.
// - Enforce the version precondition on update.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::modules::events::core::event::EventItem;
use crate::shared::core::primitives::EventId;
use crate::shared::infrastructure::item_store::{
    EventFieldUpdate, EventItemStore, ItemStoreError, StoredEvent,
};

#[derive(Default)]
pub struct InMemoryItemStore {
    inner: RwLock<HashMap<EventId, StoredEvent>>,
    offline: bool,
    permission_denied: bool,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail with a backend error.
    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Make every mutation fail with a permission error.
    pub fn toggle_permission_denied(&mut self) {
        self.permission_denied = !self.permission_denied;
    }

    pub async fn all(&self) -> Vec<StoredEvent> {
        self.inner.read().await.values().cloned().collect()
    }

    fn check_offline(&self) -> Result<(), ItemStoreError> {
        if self.offline {
            return Err(ItemStoreError::Backend("item store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EventItemStore for InMemoryItemStore {
    async fn fetch(&self, id: &EventId) -> Result<StoredEvent, ItemStoreError> {
        self.check_offline()?;
        let guard = self.inner.read().await;
        guard
            .get(id)
            .cloned()
            .ok_or_else(|| ItemStoreError::NotFound(id.clone()))
    }

    async fn update(
        &self,
        id: &EventId,
        expected_version: i64,
        fields: EventFieldUpdate,
    ) -> Result<(), ItemStoreError> {
        self.check_offline()?;
        if self.permission_denied {
            return Err(ItemStoreError::PermissionDenied);
        }
        let mut guard = self.inner.write().await;
        let stored = guard
            .get_mut(id)
            .ok_or_else(|| ItemStoreError::NotFound(id.clone()))?;
        if stored.version != expected_version {
            return Err(ItemStoreError::Conflict {
                expected: expected_version,
                actual: stored.version,
            });
        }

        let item = &mut stored.item;
        if let Some(title) = fields.title {
            item.title = title;
        }
        if let Some(description) = fields.description {
            item.description = description;
        }
        if let Some(start_date) = fields.start_date {
            item.start_date = start_date;
        }
        if let Some(end_date) = fields.end_date {
            item.end_date = end_date;
        }
        if let Some(location) = fields.location {
            item.location = location;
        }
        if let Some(capacity) = fields.capacity {
            item.capacity = capacity;
        }
        if let Some(open_spots) = fields.open_spots {
            item.open_spots = open_spots;
        }
        if let Some(registered_users) = fields.registered_users {
            item.registered_users = registered_users;
        }
        if let Some(wait_listed_users) = fields.wait_listed_users {
            item.wait_listed_users = wait_listed_users;
        }
        if let Some(pocs) = fields.pocs {
            item.pocs = pocs;
        }
        if let Some(is_cancelled) = fields.is_cancelled {
            item.is_cancelled = is_cancelled;
        }
        stored.version += 1;
        Ok(())
    }

    async fn insert(&self, item: EventItem) -> Result<StoredEvent, ItemStoreError> {
        self.check_offline()?;
        if self.permission_denied {
            return Err(ItemStoreError::PermissionDenied);
        }
        let stored = StoredEvent { item, version: 1 };
        let mut guard = self.inner.write().await;
        guard.insert(stored.item.id.clone(), stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: &EventId) -> Result<(), ItemStoreError> {
        self.check_offline()?;
        if self.permission_denied {
            return Err(ItemStoreError::PermissionDenied);
        }
        let mut guard = self.inner.write().await;
        guard
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ItemStoreError::NotFound(id.clone()))
    }
}
