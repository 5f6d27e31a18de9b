// Directory port: resolve a numeric user id to an email address.
//
// Boundaries
// - An unknown user resolves to `None`; callers skip the mail rather than
//   fail the operation, matching the hosted people lookup.

pub mod in_memory;

use async_trait::async_trait;

use crate::shared::core::primitives::{EmailAddress, UserId};

#[async_trait]
pub trait Directory: Send + Sync {
    async fn resolve_email(&self, user_id: UserId) -> anyhow::Result<Option<EmailAddress>>;
}
