use chrono::{TimeZone, Utc};

use crate::modules::events::core::classify::RegistrationAction;
use crate::modules::events::core::notification::NotificationPolicy;
use crate::modules::events::use_cases::cancel_event::command::CancelEvent;
use crate::modules::events::use_cases::schedule_event::command::ScheduleEvent;
use crate::modules::events::use_cases::toggle_registration::command::ToggleRegistration;
use crate::shared::core::primitives::{EventId, UserId};
use crate::shared::infrastructure::item_store::EventItemStore;
use crate::shell::state::AppState;

fn toggle(event_id: &EventId, user_id: i64) -> ToggleRegistration {
    ToggleRegistration {
        event_id: event_id.clone(),
        acting_user_id: UserId(user_id),
        policy: NotificationPolicy::Standard,
    }
}

#[tokio::test]
async fn walks_an_event_from_scheduling_through_promotion_to_cancellation() {
    let state = AppState::in_memory();
    for (id, mail) in [
        (1, "alice@example.org"),
        (2, "bob@example.org"),
        (3, "carol@example.org"),
        (9, "poc@example.org"),
    ] {
        state.directory.add(UserId(id), mail).await;
    }

    // Schedule a two-seat event.
    let stored = state
        .schedule_event
        .create(ScheduleEvent {
            title: "Town Hall".into(),
            description: "Quarterly town hall".into(),
            start_date: Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap(),
            location: "Main hall".into(),
            capacity: 2,
            pocs: vec![UserId(9)],
        })
        .await
        .unwrap();
    let event_id = stored.item.id.clone();

    // Fill it, then overflow onto the waitlist.
    for user_id in [1, 2] {
        let outcome = state
            .toggle_registration
            .handle(toggle(&event_id, user_id))
            .await
            .unwrap();
        assert_eq!(outcome.action, RegistrationAction::Register);
    }
    let outcome = state
        .toggle_registration
        .handle(toggle(&event_id, 3))
        .await
        .unwrap();
    assert_eq!(outcome.action, RegistrationAction::AddToWaitlist);
    assert_eq!(outcome.event.open_spots, 0);

    // Bob leaves; Carol takes the seat and the event stays full.
    let outcome = state
        .toggle_registration
        .handle(toggle(&event_id, 2))
        .await
        .unwrap();
    assert_eq!(outcome.action, RegistrationAction::Unregister);
    assert_eq!(outcome.promoted_users, vec![UserId(3)]);
    assert_eq!(
        outcome.event.registered_users,
        vec![UserId(1), UserId(3)]
    );
    assert!(outcome.event.wait_listed_users.is_empty());
    assert_eq!(outcome.event.open_spots, 0);

    let stored = state.store.fetch(&event_id).await.unwrap();
    assert_eq!(
        stored.item.capacity - stored.item.registered_users.len() as u32,
        stored.item.open_spots
    );
    // create + two registrations + waitlist add + unregister/promotion
    assert_eq!(stored.version, 5);

    // Registrations and the promotion each produced one mail.
    let mails_so_far = state.notifier.sent_count().await;
    assert_eq!(mails_so_far, 3);

    // Cancelling broadcasts to the roster with the POC on copy.
    state
        .cancel_event
        .handle(CancelEvent {
            event_id: event_id.clone(),
            cancelled: true,
            send_email: true,
        })
        .await
        .unwrap();

    let stored = state.store.fetch(&event_id).await.unwrap();
    assert!(stored.item.is_cancelled);

    let sent = state.notifier.sent.lock().await;
    assert_eq!(sent.len(), mails_so_far + 1);
    let broadcast = sent.last().unwrap();
    assert_eq!(broadcast.subject, "Event 'Town Hall' Cancelled");
    assert_eq!(broadcast.to.len(), 2);
    assert_eq!(broadcast.cc.len(), 1);
}
