use thiserror::Error;

use crate::modules::events::core::transition::TransitionError;
use crate::modules::events::use_cases::schedule_event::command::ScheduleError;
use crate::shared::infrastructure::item_store::ItemStoreError;

/// Failure of a write use case. Validation errors are raised before any
/// store mutation; store errors surface as-is with no retry. Notification
/// failures never appear here.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] TransitionError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Store(#[from] ItemStoreError),
}
