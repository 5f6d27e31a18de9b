use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::shared::core::primitives::{EmailAddress, UserId};
use crate::shared::infrastructure::directory::Directory;

#[derive(Default)]
pub struct InMemoryDirectory {
    inner: RwLock<HashMap<UserId, EmailAddress>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(&self, user_id: UserId, email: impl Into<String>) {
        self.inner
            .write()
            .await
            .insert(user_id, EmailAddress(email.into()));
    }
}

#[async_trait::async_trait]
impl Directory for InMemoryDirectory {
    async fn resolve_email(&self, user_id: UserId) -> anyhow::Result<Option<EmailAddress>> {
        Ok(self.inner.read().await.get(&user_id).cloned())
    }
}
