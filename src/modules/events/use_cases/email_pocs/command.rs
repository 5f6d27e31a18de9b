use crate::shared::core::primitives::EventId;

/// Member-initiated mail to the event points of contact.
#[derive(Debug, Clone)]
pub struct EmailPocs {
    pub event_id: EventId,
    pub subject: String,
    pub body: String,
}
