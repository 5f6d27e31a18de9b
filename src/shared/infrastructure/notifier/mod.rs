// Notifier port: fire-and-forget mail delivery.
//
// Boundaries
// - Delivery failure is non-fatal to every caller. Handlers log it and move
//   on; a committed state transition is never rolled back over mail.

pub mod in_memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::shared::core::primitives::EmailAddress;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotifierError {
    #[error("mail delivery failed: {0}")]
    Delivery(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: Vec<EmailAddress>,
    pub cc: Vec<EmailAddress>,
    pub subject: String,
    pub body_html: String,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: EmailMessage) -> Result<(), NotifierError>;
}
