use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::events::core::notification::NotificationPolicy;
use crate::modules::events::use_cases::manage_roster::command::ManageRoster;
use crate::modules::events::use_cases::toggle_registration::inbound::http::status_for;
use crate::shared::core::primitives::{EventId, UserId};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ManageRosterBody {
    pub registered_users: Vec<i64>,
    pub wait_listed_users: Vec<i64>,
    #[serde(default = "default_policy")]
    pub policy: NotificationPolicy,
}

// Admin flows mail waitlist moves unless told otherwise.
fn default_policy() -> NotificationPolicy {
    NotificationPolicy::All
}

#[derive(Serialize)]
pub struct ManageRosterResponse {
    pub open_spots: u32,
    pub registered_users: Vec<UserId>,
    pub wait_listed_users: Vec<UserId>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    body: Result<Json<ManageRosterBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = ManageRoster {
        event_id: EventId(event_id),
        registered_users: body.registered_users.into_iter().map(UserId).collect(),
        wait_listed_users: body.wait_listed_users.into_iter().map(UserId).collect(),
        policy: body.policy,
    };

    match state.manage_roster.handle(command).await {
        Ok(event) => (
            StatusCode::OK,
            Json(ManageRosterResponse {
                open_spots: event.open_spots,
                registered_users: event.registered_users,
                wait_listed_users: event.wait_listed_users,
            }),
        )
            .into_response(),
        Err(error) => status_for(&error).into_response(),
    }
}
