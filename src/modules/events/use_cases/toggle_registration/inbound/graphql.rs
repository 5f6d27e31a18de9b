use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::events::core::notification::NotificationPolicy;
use crate::modules::events::use_cases::toggle_registration::command::ToggleRegistration;
use crate::shared::core::primitives::{EventId, UserId};
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct GqlToggleOutcome {
    pub action: String,
    pub open_spots: u32,
    pub registered_users: Vec<i64>,
    pub wait_listed_users: Vec<i64>,
    pub promoted_users: Vec<i64>,
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn toggle_registration(
        &self,
        context: &Context<'_>,
        event_id: String,
        user_id: i64,
        notify_waitlist_moves: Option<bool>,
    ) -> GqlResult<GqlToggleOutcome> {
        let state = context.data_unchecked::<AppState>();

        let policy = if notify_waitlist_moves.unwrap_or(false) {
            NotificationPolicy::All
        } else {
            NotificationPolicy::Standard
        };
        let command = ToggleRegistration {
            event_id: EventId(event_id),
            acting_user_id: UserId(user_id),
            policy,
        };

        let outcome = state
            .toggle_registration
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(GqlToggleOutcome {
            action: outcome.action.as_str().to_string(),
            open_spots: outcome.event.open_spots,
            registered_users: outcome.event.registered_users.iter().map(|u| u.0).collect(),
            wait_listed_users: outcome.event.wait_listed_users.iter().map(|u| u.0).collect(),
            promoted_users: outcome.promoted_users.iter().map(|u| u.0).collect(),
        })
    }
}
