use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Numeric directory identifier of a user, as stored on the event item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub String);

impl EventId {
    pub fn generate() -> Self {
        Self(format!("Event-{}", Uuid::now_v7()))
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(pub String);

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod primitives_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_generate_prefixed_event_ids() {
        let id = EventId::generate();
        assert!(id.0.starts_with("Event-"));
        assert_ne!(id, EventId::generate());
    }

    #[rstest]
    fn it_should_serialize_ids_transparently() {
        assert_eq!(serde_json::to_string(&UserId(42)).unwrap(), "42");
        assert_eq!(
            serde_json::to_string(&EventId::from("Event-1")).unwrap(),
            "\"Event-1\""
        );
    }
}
