use std::sync::Arc;

use crate::modules::events::core::event::EventItem;
use crate::modules::events::core::notification::cancellation_notice;
use crate::modules::events::use_cases::cancel_event::command::CancelEvent;
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::modules::events::use_cases::notify::deliver;
use crate::shared::infrastructure::directory::Directory;
use crate::shared::infrastructure::item_store::{EventFieldUpdate, EventItemStore};
use crate::shared::infrastructure::notifier::Notifier;

pub struct CancelEventHandler<TStore, TDirectory, TNotifier>
where
    TStore: EventItemStore + 'static,
    TDirectory: Directory + 'static,
    TNotifier: Notifier + 'static,
{
    store: Arc<TStore>,
    directory: Arc<TDirectory>,
    notifier: Arc<TNotifier>,
}

impl<TStore, TDirectory, TNotifier> CancelEventHandler<TStore, TDirectory, TNotifier>
where
    TStore: EventItemStore + 'static,
    TDirectory: Directory + 'static,
    TNotifier: Notifier + 'static,
{
    pub fn new(store: Arc<TStore>, directory: Arc<TDirectory>, notifier: Arc<TNotifier>) -> Self {
        Self {
            store,
            directory,
            notifier,
        }
    }

    pub async fn handle(&self, command: CancelEvent) -> Result<EventItem, ApplicationError> {
        let stored = self.store.fetch(&command.event_id).await?;

        self.store
            .update(
                &command.event_id,
                stored.version,
                EventFieldUpdate::cancellation(command.cancelled),
            )
            .await?;

        if command.send_email {
            deliver(
                &*self.directory,
                &*self.notifier,
                cancellation_notice(&stored.item, command.cancelled),
            )
            .await;
        }

        let mut event = stored.item;
        event.is_cancelled = command.cancelled;
        Ok(event)
    }
}
