use std::sync::Arc;

use crate::modules::events::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::EventId;
use crate::shared::infrastructure::item_store::EventItemStore;

pub struct DeleteEventHandler<TStore>
where
    TStore: EventItemStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteEventHandler<TStore>
where
    TStore: EventItemStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, event_id: &EventId) -> Result<(), ApplicationError> {
        Ok(self.store.delete(event_id).await?)
    }
}
