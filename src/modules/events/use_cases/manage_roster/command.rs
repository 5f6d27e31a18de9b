use crate::modules::events::core::notification::NotificationPolicy;
use crate::shared::core::primitives::{EventId, UserId};

/// Admin bulk variant: replace both membership lists in one update. Admin
/// flows typically pass `NotificationPolicy::All` so waitlist moves are
/// mailed too.
#[derive(Debug, Clone)]
pub struct ManageRoster {
    pub event_id: EventId,
    pub registered_users: Vec<UserId>,
    pub wait_listed_users: Vec<UserId>,
    pub policy: NotificationPolicy,
}
