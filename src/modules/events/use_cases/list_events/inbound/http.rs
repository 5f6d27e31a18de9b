use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListEventsParams {
    /// Admin dashboards pass true to see past events as well.
    pub include_past: Option<bool>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListEventsParams>,
) -> impl IntoResponse {
    let from = if params.include_past.unwrap_or(false) {
        None
    } else {
        Some(Utc::now())
    };

    match state.queries.list_events(from).await {
        Ok(events) => Json(events).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
