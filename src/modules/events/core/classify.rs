use serde::{Deserialize, Serialize};

use crate::modules::events::core::event::EventItem;
use crate::shared::core::primitives::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationAction {
    Register,
    AddToWaitlist,
    RemoveFromWaitlist,
    Unregister,
}

impl RegistrationAction {
    /// Wire name, identical to the serde representation. Used by surfaces
    /// that report the action as a plain string.
    pub fn as_str(self) -> &'static str {
        match self {
            RegistrationAction::Register => "register",
            RegistrationAction::AddToWaitlist => "add_to_waitlist",
            RegistrationAction::RemoveFromWaitlist => "remove_from_waitlist",
            RegistrationAction::Unregister => "unregister",
        }
    }
}

/// Pick the applicable action for `(event, user)`.
///
/// The predicates are mutually exclusive and evaluated in a fixed priority
/// order; the first match wins:
/// 1. user on waitlist        -> RemoveFromWaitlist
/// 2. full and not registered -> AddToWaitlist
/// 3. user registered         -> Unregister
/// 4. otherwise               -> Register
pub fn classify(event: &EventItem, user_id: UserId) -> RegistrationAction {
    if event.is_wait_listed(user_id) {
        RegistrationAction::RemoveFromWaitlist
    } else if event.is_full() && !event.is_registered(user_id) {
        RegistrationAction::AddToWaitlist
    } else if event.is_registered(user_id) {
        RegistrationAction::Unregister
    } else {
        RegistrationAction::Register
    }
}
