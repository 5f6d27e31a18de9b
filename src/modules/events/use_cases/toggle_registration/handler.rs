// Registration toggle handler orchestrates the write flow.
//
// Responsibilities
// - Fetch the latest snapshot and its version.
// - Classify the applicable action for the acting user and compute the new
//   membership fields.
// - Submit one conditional update; a conflict surfaces to the caller, who
//   re-fetches and retries. The handler never retries on its own.
// - Dispatch mail afterwards, best effort. Mail never fails the operation.

use std::sync::Arc;

use crate::modules::events::core::classify::{RegistrationAction, classify};
use crate::modules::events::core::event::EventItem;
use crate::modules::events::core::notification::{NotificationKind, registration_notice};
use crate::modules::events::core::transition::{RosterDelta, apply};
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::modules::events::use_cases::notify::deliver;
use crate::modules::events::use_cases::toggle_registration::command::ToggleRegistration;
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::directory::Directory;
use crate::shared::infrastructure::item_store::{EventFieldUpdate, EventItemStore};
use crate::shared::infrastructure::notifier::Notifier;

#[derive(Debug, Clone)]
pub struct ToggleOutcome {
    pub action: RegistrationAction,
    /// Snapshot with the accepted field values folded in.
    pub event: EventItem,
    pub promoted_users: Vec<UserId>,
}

pub struct ToggleRegistrationHandler<TStore, TDirectory, TNotifier>
where
    TStore: EventItemStore + 'static,
    TDirectory: Directory + 'static,
    TNotifier: Notifier + 'static,
{
    store: Arc<TStore>,
    directory: Arc<TDirectory>,
    notifier: Arc<TNotifier>,
}

impl<TStore, TDirectory, TNotifier> ToggleRegistrationHandler<TStore, TDirectory, TNotifier>
where
    TStore: EventItemStore + 'static,
    TDirectory: Directory + 'static,
    TNotifier: Notifier + 'static,
{
    pub fn new(store: Arc<TStore>, directory: Arc<TDirectory>, notifier: Arc<TNotifier>) -> Self {
        Self {
            store,
            directory,
            notifier,
        }
    }

    pub async fn handle(
        &self,
        command: ToggleRegistration,
    ) -> Result<ToggleOutcome, ApplicationError> {
        let stored = self.store.fetch(&command.event_id).await?;
        let action = classify(&stored.item, command.acting_user_id);
        let delta = apply(&stored.item, command.acting_user_id, action)?;

        self.store
            .update(
                &command.event_id,
                stored.version,
                EventFieldUpdate::roster(
                    delta.registered_users.clone(),
                    delta.wait_listed_users.clone(),
                    delta.open_spots,
                ),
            )
            .await?;

        self.dispatch_mail(&stored.item, &command, action, &delta)
            .await;

        let mut event = stored.item;
        event.registered_users = delta.registered_users;
        event.wait_listed_users = delta.wait_listed_users;
        event.open_spots = delta.open_spots;
        Ok(ToggleOutcome {
            action,
            event,
            promoted_users: delta.promoted_users,
        })
    }

    async fn dispatch_mail(
        &self,
        event: &EventItem,
        command: &ToggleRegistration,
        action: RegistrationAction,
        delta: &RosterDelta,
    ) {
        let mut notices = Vec::new();
        match action {
            RegistrationAction::Register => {
                notices.push((command.acting_user_id, NotificationKind::Registered));
            }
            RegistrationAction::AddToWaitlist => {
                notices.push((command.acting_user_id, NotificationKind::AddedToWaitlist));
            }
            RegistrationAction::RemoveFromWaitlist => {
                notices.push((command.acting_user_id, NotificationKind::RemovedFromWaitlist));
            }
            RegistrationAction::Unregister => {}
        }
        for promoted in &delta.promoted_users {
            notices.push((*promoted, NotificationKind::PromotedFromWaitlist));
        }

        for (user_id, kind) in notices {
            if !command.policy.covers(kind) {
                continue;
            }
            deliver(
                &*self.directory,
                &*self.notifier,
                registration_notice(event, user_id, kind),
            )
            .await;
        }
    }
}
