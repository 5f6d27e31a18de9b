use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::events::core::classify::RegistrationAction;
use crate::modules::events::core::notification::NotificationPolicy;
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::modules::events::use_cases::toggle_registration::command::ToggleRegistration;
use crate::shared::core::primitives::{EventId, UserId};
use crate::shared::infrastructure::item_store::ItemStoreError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ToggleRegistrationBody {
    pub user_id: i64,
    #[serde(default)]
    pub policy: NotificationPolicy,
}

#[derive(Serialize)]
pub struct ToggleRegistrationResponse {
    pub action: RegistrationAction,
    pub open_spots: u32,
    pub registered_users: Vec<UserId>,
    pub wait_listed_users: Vec<UserId>,
    pub promoted_users: Vec<UserId>,
}

pub fn status_for(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::Validation(_) | ApplicationError::Schedule(_) => StatusCode::CONFLICT,
        ApplicationError::Store(ItemStoreError::NotFound(_)) => StatusCode::NOT_FOUND,
        ApplicationError::Store(ItemStoreError::Conflict { .. }) => StatusCode::CONFLICT,
        ApplicationError::Store(ItemStoreError::PermissionDenied) => StatusCode::FORBIDDEN,
        ApplicationError::Store(ItemStoreError::Backend(_)) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    body: Result<Json<ToggleRegistrationBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = ToggleRegistration {
        event_id: EventId(event_id),
        acting_user_id: UserId(body.user_id),
        policy: body.policy,
    };

    match state.toggle_registration.handle(command).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(ToggleRegistrationResponse {
                action: outcome.action,
                open_spots: outcome.event.open_spots,
                registered_users: outcome.event.registered_users,
                wait_listed_users: outcome.event.wait_listed_users,
                promoted_users: outcome.promoted_users,
            }),
        )
            .into_response(),
        Err(error) => status_for(&error).into_response(),
    }
}

#[cfg(test)]
mod toggle_registration_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shared::core::primitives::UserId;
    use crate::shared::infrastructure::item_store::EventItemStore;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::events::EventItemBuilder;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/events/{id}/registration", post(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_new_roster_on_a_valid_toggle() {
        let state = AppState::in_memory();
        state
            .store
            .insert(EventItemBuilder::new().id("Event-1").capacity(2).build())
            .await
            .unwrap();

        let response = app(state)
            .oneshot(
                Request::post("/events/Event-1/registration")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"user_id":5}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["action"], "register");
        assert_eq!(json["open_spots"], 1);
        assert_eq!(json["registered_users"], serde_json::json!([5]));
    }

    #[tokio::test]
    async fn it_should_return_404_for_a_missing_event() {
        let response = app(AppState::in_memory())
            .oneshot(
                Request::post("/events/Event-404/registration")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"user_id":5}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_return_409_when_the_event_is_cancelled() {
        let state = AppState::in_memory();
        state
            .store
            .insert(
                EventItemBuilder::new()
                    .id("Event-1")
                    .capacity(2)
                    .is_cancelled(true)
                    .build(),
            )
            .await
            .unwrap();

        let response = app(state)
            .oneshot(
                Request::post("/events/Event-1/registration")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"user_id":5}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let response = app(AppState::in_memory())
            .oneshot(
                Request::post("/events/Event-1/registration")
                    .header("content-type", "application/json")
                    .body(Body::from("not-json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_report_a_waitlist_placement_on_a_full_event() {
        let state = AppState::in_memory();
        state
            .store
            .insert(
                EventItemBuilder::new()
                    .id("Event-1")
                    .capacity(1)
                    .registered_users(vec![UserId(1)])
                    .open_spots(0)
                    .build(),
            )
            .await
            .unwrap();

        let response = app(state)
            .oneshot(
                Request::post("/events/Event-1/registration")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"user_id":6}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["action"], "add_to_waitlist");
        assert_eq!(json["wait_listed_users"], serde_json::json!([6]));
        assert_eq!(json["open_spots"], 0);
    }
}
