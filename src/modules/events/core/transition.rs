// Pure registration/waitlist transitions.
//
// Purpose
// - Turn a snapshot plus an action into the new membership fields, without
//   touching the store or any other collaborator.
//
// Responsibilities
// - Enforce the membership invariants: a user is in at most one list,
//   the registered list never exceeds capacity.
// - Recompute `open_spots` from the resulting registered count on every
//   transition. The counter is never incremented or decremented in place;
//   that is how the original dashboard let it drift.

use std::collections::HashSet;

use thiserror::Error;

use crate::modules::events::core::classify::RegistrationAction;
use crate::modules::events::core::event::EventItem;
use crate::shared::core::primitives::UserId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("user {0} is already registered")]
    AlreadyRegistered(UserId),

    #[error("user {0} is already on the waitlist")]
    AlreadyWaitlisted(UserId),

    #[error("user {0} is not registered")]
    NotRegistered(UserId),

    #[error("user {0} is not on the waitlist")]
    NotOnWaitlist(UserId),

    #[error("event is at capacity")]
    EventFull,

    #[error("event is cancelled")]
    EventCancelled,

    #[error("roster of {requested} registered users exceeds capacity {capacity}")]
    ExceedsCapacity { requested: usize, capacity: u32 },

    #[error("user {0} holds more than one membership slot")]
    DuplicateMembership(UserId),
}

/// New field values produced by a transition, submitted to the item store as
/// one conditional update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterDelta {
    pub registered_users: Vec<UserId>,
    pub wait_listed_users: Vec<UserId>,
    pub open_spots: u32,
    /// Users moved from the waitlist into the roster by this transition.
    /// At most one for the single-user path.
    pub promoted_users: Vec<UserId>,
}

fn open_spots(capacity: u32, registered: &[UserId]) -> u32 {
    capacity.saturating_sub(registered.len() as u32)
}

fn first_repeated(ids: &[UserId]) -> Option<UserId> {
    let mut seen = HashSet::new();
    ids.iter().find(|id| !seen.insert(**id)).copied()
}

/// Apply a classified action for one user.
pub fn apply(
    event: &EventItem,
    user_id: UserId,
    action: RegistrationAction,
) -> Result<RosterDelta, TransitionError> {
    if event.is_cancelled {
        return Err(TransitionError::EventCancelled);
    }

    let mut registered = event.registered_users.clone();
    let mut wait_listed = event.wait_listed_users.clone();
    let mut promoted = Vec::new();

    match action {
        RegistrationAction::Register => {
            if registered.contains(&user_id) {
                return Err(TransitionError::AlreadyRegistered(user_id));
            }
            if wait_listed.contains(&user_id) {
                return Err(TransitionError::AlreadyWaitlisted(user_id));
            }
            if event.is_full() {
                return Err(TransitionError::EventFull);
            }
            registered.push(user_id);
        }
        RegistrationAction::AddToWaitlist => {
            if wait_listed.contains(&user_id) {
                return Err(TransitionError::AlreadyWaitlisted(user_id));
            }
            if registered.contains(&user_id) {
                return Err(TransitionError::AlreadyRegistered(user_id));
            }
            wait_listed.push(user_id);
        }
        RegistrationAction::RemoveFromWaitlist => {
            let index = wait_listed
                .iter()
                .position(|id| *id == user_id)
                .ok_or(TransitionError::NotOnWaitlist(user_id))?;
            wait_listed.remove(index);
        }
        RegistrationAction::Unregister => {
            let index = registered
                .iter()
                .position(|id| *id == user_id)
                .ok_or(TransitionError::NotRegistered(user_id))?;
            registered.remove(index);

            // The freed seat goes to the waitlist head, so open_spots ends
            // up unchanged on this branch.
            if event.is_full() && !wait_listed.is_empty() {
                let head = wait_listed.remove(0);
                registered.push(head);
                promoted.push(head);
            }
        }
    }

    let open_spots = open_spots(event.capacity, &registered);
    Ok(RosterDelta {
        registered_users: registered,
        wait_listed_users: wait_listed,
        open_spots,
        promoted_users: promoted,
    })
}

/// Replace both membership lists at once (admin roster management).
///
/// The whole batch is validated before anything is reported back; a batch
/// that breaks an invariant is rejected wholesale so no partial state ever
/// reaches the store.
pub fn apply_roster(
    event: &EventItem,
    registered: Vec<UserId>,
    wait_listed: Vec<UserId>,
) -> Result<RosterDelta, TransitionError> {
    // The lists are ordered sets: a repeated id would occupy two seats and
    // be counted twice against capacity.
    if let Some(duplicate) = first_repeated(&registered).or_else(|| first_repeated(&wait_listed)) {
        return Err(TransitionError::DuplicateMembership(duplicate));
    }
    if registered.len() > event.capacity as usize {
        return Err(TransitionError::ExceedsCapacity {
            requested: registered.len(),
            capacity: event.capacity,
        });
    }
    if let Some(duplicate) = registered.iter().find(|id| wait_listed.contains(id)) {
        return Err(TransitionError::DuplicateMembership(*duplicate));
    }

    let promoted = registered
        .iter()
        .filter(|id| event.is_wait_listed(**id))
        .copied()
        .collect();

    let open_spots = open_spots(event.capacity, &registered);
    Ok(RosterDelta {
        registered_users: registered,
        wait_listed_users: wait_listed,
        open_spots,
        promoted_users: promoted,
    })
}
