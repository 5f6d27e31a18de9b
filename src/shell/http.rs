use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::events::use_cases::cancel_event::inbound::http as cancel_http;
use crate::modules::events::use_cases::delete_event::inbound::http as delete_http;
use crate::modules::events::use_cases::email_pocs::inbound::http as email_pocs_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::modules::events::use_cases::manage_roster::inbound::http as roster_http;
use crate::modules::events::use_cases::schedule_event::inbound::http as schedule_http;
use crate::modules::events::use_cases::toggle_registration::inbound::http as toggle_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/events", get(list_http::handle))
        .route("/events", post(schedule_http::handle_create))
        .route("/events/{id}", put(schedule_http::handle_edit))
        .route("/events/{id}", delete(delete_http::handle))
        .route("/events/{id}/registration", post(toggle_http::handle))
        .route("/events/{id}/roster", put(roster_http::handle))
        .route("/events/{id}/cancellation", post(cancel_http::handle))
        .route("/events/{id}/email-pocs", post(email_pocs_http::handle))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
