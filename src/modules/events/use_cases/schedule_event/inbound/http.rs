use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::events::use_cases::schedule_event::command::{EditEvent, ScheduleEvent};
use crate::modules::events::use_cases::toggle_registration::inbound::http::status_for;
use crate::shared::core::primitives::{EventId, UserId};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ScheduleEventBody {
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: String,
    pub capacity: u32,
    #[serde(default)]
    pub pocs: Vec<i64>,
}

#[derive(Serialize)]
pub struct ScheduleEventResponse {
    pub event_id: EventId,
}

#[derive(Deserialize)]
pub struct EditEventBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub capacity: Option<u32>,
    pub pocs: Option<Vec<i64>>,
}

pub async fn handle_create(
    State(state): State<AppState>,
    body: Result<Json<ScheduleEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = ScheduleEvent {
        title: body.title,
        description: body.description,
        start_date: body.start_date,
        end_date: body.end_date,
        location: body.location,
        capacity: body.capacity,
        pocs: body.pocs.into_iter().map(UserId).collect(),
    };

    match state.schedule_event.create(command).await {
        Ok(stored) => (
            StatusCode::CREATED,
            Json(ScheduleEventResponse {
                event_id: stored.item.id,
            }),
        )
            .into_response(),
        Err(error) => status_for(&error).into_response(),
    }
}

pub async fn handle_edit(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    body: Result<Json<EditEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = EditEvent {
        event_id: EventId(event_id),
        title: body.title,
        description: body.description,
        start_date: body.start_date,
        end_date: body.end_date,
        location: body.location,
        capacity: body.capacity,
        pocs: body
            .pocs
            .map(|pocs| pocs.into_iter().map(UserId).collect()),
    };

    match state.schedule_event.edit(command).await {
        Ok(event) => Json(event).into_response(),
        Err(error) => status_for(&error).into_response(),
    }
}
