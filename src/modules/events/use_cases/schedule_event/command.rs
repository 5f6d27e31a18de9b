use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::shared::core::primitives::{EventId, UserId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("start date cannot be after the end date")]
    StartAfterEnd,

    #[error("capacity {capacity} is less than the current number of registered users {registered}")]
    CapacityBelowRegistered { capacity: u32, registered: u32 },
}

#[derive(Debug, Clone)]
pub struct ScheduleEvent {
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: String,
    pub capacity: u32,
    pub pocs: Vec<UserId>,
}

/// Partial edit; unset fields keep their stored value.
#[derive(Debug, Clone)]
pub struct EditEvent {
    pub event_id: EventId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub capacity: Option<u32>,
    pub pocs: Option<Vec<UserId>>,
}

impl EditEvent {
    pub fn new(event_id: EventId) -> Self {
        Self {
            event_id,
            title: None,
            description: None,
            start_date: None,
            end_date: None,
            location: None,
            capacity: None,
            pocs: None,
        }
    }
}
