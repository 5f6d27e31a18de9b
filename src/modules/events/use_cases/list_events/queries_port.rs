use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::events::core::event::EventItem;
use crate::shared::infrastructure::item_store::in_memory::InMemoryItemStore;

/// Read side of the dashboard: events ordered by start date. `from` drops
/// events starting before the cutoff (the member view passes "now", the
/// admin view passes nothing and sees everything).
#[async_trait]
pub trait EventQueries {
    async fn list_events(&self, from: Option<DateTime<Utc>>) -> anyhow::Result<Vec<EventItem>>;
}

#[async_trait]
impl EventQueries for InMemoryItemStore {
    async fn list_events(&self, from: Option<DateTime<Utc>>) -> anyhow::Result<Vec<EventItem>> {
        let mut events: Vec<EventItem> = self
            .all()
            .await
            .into_iter()
            .map(|stored| stored.item)
            .filter(|item| from.is_none_or(|cutoff| item.start_date >= cutoff))
            .collect();
        events.sort_by_key(|item| item.start_date);
        Ok(events)
    }
}
