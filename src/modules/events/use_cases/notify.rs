// Best-effort mail dispatch after a committed store update.
//
// Responsibilities
// - Resolve recipient ids through the directory; unknown users are skipped.
// - Swallow delivery failures with a log line. The state transition has
//   already been accepted by the store when this runs.

use tracing::{debug, warn};

use crate::modules::events::core::notification::NotificationSpec;
use crate::shared::core::primitives::{EmailAddress, UserId};
use crate::shared::infrastructure::directory::Directory;
use crate::shared::infrastructure::notifier::{EmailMessage, Notifier};

async fn resolve_all(directory: &impl Directory, user_ids: &[UserId]) -> Vec<EmailAddress> {
    let mut addresses = Vec::with_capacity(user_ids.len());
    for user_id in user_ids {
        match directory.resolve_email(*user_id).await {
            Ok(Some(address)) => addresses.push(address),
            Ok(None) => debug!(%user_id, "no directory entry, skipping recipient"),
            Err(error) => warn!(%user_id, %error, "directory lookup failed, skipping recipient"),
        }
    }
    addresses
}

pub async fn deliver(
    directory: &impl Directory,
    notifier: &impl Notifier,
    spec: NotificationSpec,
) {
    let to = resolve_all(directory, &spec.to).await;
    let cc = resolve_all(directory, &spec.cc).await;
    if to.is_empty() {
        debug!(subject = %spec.subject, "no resolvable recipients, mail skipped");
        return;
    }

    let message = EmailMessage {
        to,
        cc,
        subject: spec.subject,
        body_html: spec.body_html,
    };
    if let Err(error) = notifier.send(message).await {
        warn!(%error, "mail delivery failed after committed update");
    }
}
