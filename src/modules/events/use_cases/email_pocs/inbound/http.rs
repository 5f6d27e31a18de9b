use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::events::use_cases::email_pocs::command::EmailPocs;
use crate::modules::events::use_cases::toggle_registration::inbound::http::status_for;
use crate::shared::core::primitives::EventId;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct EmailPocsBody {
    pub subject: String,
    pub body: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    body: Result<Json<EmailPocsBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = EmailPocs {
        event_id: EventId(event_id),
        subject: body.subject,
        body: body.body,
    };

    match state.email_pocs.handle(command).await {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(error) => status_for(&error).into_response(),
    }
}
