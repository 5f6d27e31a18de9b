// Event scheduling: create and edit with the form validations of the
// original dashboard.
//
// Responsibilities
// - Reject a start date after the end date.
// - Reject a capacity below the current registered count on edit.
// - Keep `open_spots` consistent whenever capacity changes.

use std::sync::Arc;

use crate::modules::events::core::event::EventItem;
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::modules::events::use_cases::schedule_event::command::{
    EditEvent, ScheduleError, ScheduleEvent,
};
use crate::shared::core::primitives::EventId;
use crate::shared::infrastructure::item_store::{
    EventFieldUpdate, EventItemStore, StoredEvent,
};

pub struct ScheduleEventHandler<TStore>
where
    TStore: EventItemStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ScheduleEventHandler<TStore>
where
    TStore: EventItemStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, command: ScheduleEvent) -> Result<StoredEvent, ApplicationError> {
        if command.start_date > command.end_date {
            return Err(ScheduleError::StartAfterEnd.into());
        }

        let item = EventItem {
            id: EventId::generate(),
            title: command.title,
            description: command.description,
            start_date: command.start_date,
            end_date: command.end_date,
            location: command.location,
            capacity: command.capacity,
            open_spots: command.capacity,
            registered_users: vec![],
            wait_listed_users: vec![],
            pocs: command.pocs,
            is_cancelled: false,
        };
        Ok(self.store.insert(item).await?)
    }

    pub async fn edit(&self, command: EditEvent) -> Result<EventItem, ApplicationError> {
        let stored = self.store.fetch(&command.event_id).await?;
        let item = &stored.item;

        let start_date = command.start_date.unwrap_or(item.start_date);
        let end_date = command.end_date.unwrap_or(item.end_date);
        if start_date > end_date {
            return Err(ScheduleError::StartAfterEnd.into());
        }

        let capacity = command.capacity.unwrap_or(item.capacity);
        if capacity < item.registered_count() {
            return Err(ScheduleError::CapacityBelowRegistered {
                capacity,
                registered: item.registered_count(),
            }
            .into());
        }

        // A capacity change moves the derived counter with it.
        let open_spots = command
            .capacity
            .map(|new_capacity| new_capacity - item.registered_count());

        let fields = EventFieldUpdate {
            title: command.title,
            description: command.description,
            start_date: command.start_date,
            end_date: command.end_date,
            location: command.location,
            capacity: command.capacity,
            open_spots,
            pocs: command.pocs,
            ..EventFieldUpdate::default()
        };
        self.store
            .update(&command.event_id, stored.version, fields)
            .await?;

        let refreshed = self.store.fetch(&command.event_id).await?;
        Ok(refreshed.item)
    }
}
