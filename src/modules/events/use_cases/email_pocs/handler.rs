use std::sync::Arc;

use tracing::debug;

use crate::modules::events::core::notification::poc_notice;
use crate::modules::events::use_cases::email_pocs::command::EmailPocs;
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::modules::events::use_cases::notify::deliver;
use crate::shared::infrastructure::directory::Directory;
use crate::shared::infrastructure::item_store::EventItemStore;
use crate::shared::infrastructure::notifier::Notifier;

pub struct EmailPocsHandler<TStore, TDirectory, TNotifier>
where
    TStore: EventItemStore + 'static,
    TDirectory: Directory + 'static,
    TNotifier: Notifier + 'static,
{
    store: Arc<TStore>,
    directory: Arc<TDirectory>,
    notifier: Arc<TNotifier>,
}

impl<TStore, TDirectory, TNotifier> EmailPocsHandler<TStore, TDirectory, TNotifier>
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

    pub async fn handle(&self, command: EmailPocs) -> Result<(), ApplicationError> {
        let stored = self.store.fetch(&command.event_id).await?;
        if stored.item.pocs.is_empty() {
            debug!(event_id = %command.event_id, "event has no points of contact, mail skipped");
            return Ok(());
        }

        deliver(
            &*self.directory,
            &*self.notifier,
            poc_notice(&stored.item, command.subject, &command.body),
        )
        .await;
        Ok(())
    }
}
