use tokio::sync::Mutex;

use crate::shared::infrastructure::notifier::{EmailMessage, Notifier, NotifierError};

#[derive(Default)]
pub struct InMemoryNotifier {
    pub sent: Mutex<Vec<EmailMessage>>,
    failing: bool,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every send fail with a delivery error.
    pub fn toggle_failing(&mut self) {
        self.failing = !self.failing;
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }
}

#[async_trait::async_trait]
impl Notifier for InMemoryNotifier {
    async fn send(&self, message: EmailMessage) -> Result<(), NotifierError> {
        if self.failing {
            return Err(NotifierError::Delivery("notifier offline".into()));
        }
        self.sent.lock().await.push(message);
        Ok(())
    }
}
