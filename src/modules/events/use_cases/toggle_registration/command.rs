use crate::modules::events::core::notification::NotificationPolicy;
use crate::shared::core::primitives::{EventId, UserId};

/// Self-service registration toggle. The acting user is always an explicit
/// parameter; nothing is read from ambient context.
#[derive(Debug, Clone)]
pub struct ToggleRegistration {
    pub event_id: EventId,
    pub acting_user_id: UserId,
    pub policy: NotificationPolicy,
}
