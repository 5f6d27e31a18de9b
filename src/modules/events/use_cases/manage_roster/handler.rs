// Admin roster handler: wholesale replacement of both membership lists.
//
// Responsibilities
// - Validate the whole batch before anything is written; a batch over
//   capacity or with a user in both lists is rejected with no store call.
// - Mail users the batch moved, per policy.

use std::sync::Arc;

use crate::modules::events::core::event::EventItem;
use crate::modules::events::core::notification::{
    NotificationKind, NotificationPolicy, registration_notice,
};
use crate::modules::events::core::transition::{RosterDelta, apply_roster};
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::modules::events::use_cases::manage_roster::command::ManageRoster;
use crate::modules::events::use_cases::notify::deliver;
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::directory::Directory;
use crate::shared::infrastructure::item_store::{EventFieldUpdate, EventItemStore};
use crate::shared::infrastructure::notifier::Notifier;

pub struct ManageRosterHandler<TStore, TDirectory, TNotifier>
where
    TStore: EventItemStore + 'static,
    TDirectory: Directory + 'static,
    TNotifier: Notifier + 'static,
{
    store: Arc<TStore>,
    directory: Arc<TDirectory>,
    notifier: Arc<TNotifier>,
}

impl<TStore, TDirectory, TNotifier> ManageRosterHandler<TStore, TDirectory, TNotifier>
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

    pub async fn handle(&self, command: ManageRoster) -> Result<EventItem, ApplicationError> {
        let stored = self.store.fetch(&command.event_id).await?;
        let delta = apply_roster(
            &stored.item,
            command.registered_users,
            command.wait_listed_users,
        )?;

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

        self.dispatch_mail(&stored.item, &delta, command.policy).await;

        let mut event = stored.item;
        event.registered_users = delta.registered_users;
        event.wait_listed_users = delta.wait_listed_users;
        event.open_spots = delta.open_spots;
        Ok(event)
    }

    async fn dispatch_mail(
        &self,
        before: &EventItem,
        delta: &RosterDelta,
        policy: NotificationPolicy,
    ) {
        let mut notices: Vec<(UserId, NotificationKind)> = Vec::new();
        for promoted in &delta.promoted_users {
            notices.push((*promoted, NotificationKind::PromotedFromWaitlist));
        }
        for user_id in &delta.wait_listed_users {
            if !before.is_wait_listed(*user_id) {
                notices.push((*user_id, NotificationKind::AddedToWaitlist));
            }
        }
        for user_id in &before.wait_listed_users {
            let still_wait_listed = delta.wait_listed_users.contains(user_id);
            let now_registered = delta.registered_users.contains(user_id);
            if !still_wait_listed && !now_registered {
                notices.push((*user_id, NotificationKind::RemovedFromWaitlist));
            }
        }

        for (user_id, kind) in notices {
            if !policy.covers(kind) {
                continue;
            }
            deliver(
                &*self.directory,
                &*self.notifier,
                registration_notice(before, user_id, kind),
            )
            .await;
        }
    }
}
