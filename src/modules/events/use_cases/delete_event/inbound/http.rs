use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::events::use_cases::toggle_registration::inbound::http::status_for;
use crate::shared::core::primitives::EventId;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> impl IntoResponse {
    match state.delete_event.handle(&EventId(event_id)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => status_for(&error).into_response(),
    }
}
