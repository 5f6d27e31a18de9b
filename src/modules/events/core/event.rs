// Event item snapshot, as fetched from the item store.
//
// Purpose
// - Hold the authoritative fields a registration transition reads and writes.
//
// Boundaries
// - `open_spots` is denormalized. It is never mutated here; transitions
//   recompute it from the resulting membership size (see transition.rs).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::{EventId, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventItem {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: String,
    pub capacity: u32,
    pub open_spots: u32,
    pub registered_users: Vec<UserId>,
    pub wait_listed_users: Vec<UserId>,
    pub pocs: Vec<UserId>,
    pub is_cancelled: bool,
}

impl EventItem {
    pub fn is_registered(&self, user_id: UserId) -> bool {
        self.registered_users.contains(&user_id)
    }

    pub fn is_wait_listed(&self, user_id: UserId) -> bool {
        self.wait_listed_users.contains(&user_id)
    }

    /// An event is full when the registered count has reached capacity.
    pub fn is_full(&self) -> bool {
        self.registered_users.len() as u32 >= self.capacity
    }

    pub fn registered_count(&self) -> u32 {
        self.registered_users.len() as u32
    }
}
