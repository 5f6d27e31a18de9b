use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::events::use_cases::cancel_event::command::CancelEvent;
use crate::modules::events::use_cases::toggle_registration::inbound::http::status_for;
use crate::shared::core::primitives::EventId;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CancelEventBody {
    pub cancelled: bool,
    #[serde(default = "default_send_email")]
    pub send_email: bool,
}

fn default_send_email() -> bool {
    true
}

pub async fn handle(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    body: Result<Json<CancelEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = CancelEvent {
        event_id: EventId(event_id),
        cancelled: body.cancelled,
        send_email: body.send_email,
    };

    match state.cancel_event.handle(command).await {
        Ok(event) => Json(event).into_response(),
        Err(error) => status_for(&error).into_response(),
    }
}

#[cfg(test)]
mod cancel_event_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shared::infrastructure::item_store::EventItemStore;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::events::EventItemBuilder;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/events/{id}/cancellation", post(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_cancel_an_event() {
        let state = AppState::in_memory();
        state
            .store
            .insert(EventItemBuilder::new().id("Event-1").build())
            .await
            .unwrap();

        let response = app(state)
            .oneshot(
                Request::post("/events/Event-1/cancellation")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"cancelled":true,"send_email":false}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["is_cancelled"], true);
    }

    #[tokio::test]
    async fn it_should_return_404_for_a_missing_event() {
        let response = app(AppState::in_memory())
            .oneshot(
                Request::post("/events/Event-404/cancellation")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"cancelled":true}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
