// Shared test fixture for EventItem. Compiled into the crate only during
// tests via the cfg(test) tests module in src/lib.rs.

use chrono::{TimeZone, Utc};

use crate::modules::events::core::event::EventItem;
use crate::shared::core::primitives::{EventId, UserId};

pub struct EventItemBuilder {
    inner: EventItem,
}

impl Default for EventItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventItemBuilder {
    pub fn new() -> Self {
        Self {
            inner: EventItem {
                id: EventId::from("Event-fixed-0001"),
                title: "Team Sync".to_string(),
                description: "Weekly team sync".to_string(),
                start_date: Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap(),
                end_date: Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap(),
                location: "Room 2B".to_string(),
                capacity: 10,
                open_spots: 10,
                registered_users: vec![],
                wait_listed_users: vec![],
                pocs: vec![],
                is_cancelled: false,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = EventId(v.into());
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn start_date(mut self, v: chrono::DateTime<Utc>) -> Self {
        self.inner.start_date = v;
        self
    }

    pub fn end_date(mut self, v: chrono::DateTime<Utc>) -> Self {
        self.inner.end_date = v;
        self
    }

    pub fn location(mut self, v: impl Into<String>) -> Self {
        self.inner.location = v.into();
        self
    }

    pub fn capacity(mut self, v: u32) -> Self {
        self.inner.capacity = v;
        self
    }

    pub fn open_spots(mut self, v: u32) -> Self {
        self.inner.open_spots = v;
        self
    }

    pub fn registered_users(mut self, v: Vec<UserId>) -> Self {
        self.inner.registered_users = v;
        self
    }

    pub fn wait_listed_users(mut self, v: Vec<UserId>) -> Self {
        self.inner.wait_listed_users = v;
        self
    }

    pub fn pocs(mut self, v: Vec<UserId>) -> Self {
        self.inner.pocs = v;
        self
    }

    pub fn is_cancelled(mut self, v: bool) -> Self {
        self.inner.is_cancelled = v;
        self
    }

    pub fn build(self) -> EventItem {
        self.inner
    }
}

#[cfg(test)]
mod event_item_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_build_a_consistent_default_event() {
        let event = EventItemBuilder::default().build();
        assert_eq!(event.open_spots, event.capacity);
        assert!(event.registered_users.is_empty());
        assert!(event.start_date <= event.end_date);
        assert!(!event.is_cancelled);
    }

    #[rstest]
    fn it_should_override_fields_through_the_setters() {
        let event = EventItemBuilder::new()
            .id("Event-42")
            .title("Town Hall")
            .capacity(2)
            .open_spots(1)
            .registered_users(vec![UserId(1)])
            .wait_listed_users(vec![UserId(2)])
            .pocs(vec![UserId(9)])
            .is_cancelled(true)
            .build();

        assert_eq!(event.id.0, "Event-42");
        assert_eq!(event.title, "Town Hall");
        assert_eq!(event.capacity, 2);
        assert_eq!(event.registered_users, vec![UserId(1)]);
        assert!(event.is_cancelled);
    }
}
