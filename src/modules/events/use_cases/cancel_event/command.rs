use crate::shared::core::primitives::EventId;

/// Cancel or uncancel an event. When `send_email` is set, everyone on the
/// roster is mailed with the POCs on copy.
#[derive(Debug, Clone)]
pub struct CancelEvent {
    pub event_id: EventId,
    pub cancelled: bool,
    pub send_email: bool,
}
