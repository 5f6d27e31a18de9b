// Notification texts and policy.
//
// Responsibilities
// - Build the subject/body for every mail the dashboard sends, from the
//   event fields alone.
// - Decide per policy which registration outcomes warrant a mail. The policy
//   is a caller parameter; the self-service flow and the admin flows want
//   different behavior.

use serde::{Deserialize, Serialize};

use crate::modules::events::core::event::EventItem;
use crate::shared::core::primitives::UserId;

const DATE_FORMAT: &str = "%m-%d-%Y %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Registered,
    PromotedFromWaitlist,
    AddedToWaitlist,
    RemovedFromWaitlist,
}

/// Which outcomes the caller wants mailed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPolicy {
    /// Mail on registration and waitlist promotion only. Self-service flow.
    #[default]
    Standard,
    /// Mail on every outcome, waitlist moves included. Admin flows.
    All,
    /// No mail at all.
    None,
}

impl NotificationPolicy {
    pub fn covers(self, kind: NotificationKind) -> bool {
        match self {
            NotificationPolicy::Standard => matches!(
                kind,
                NotificationKind::Registered | NotificationKind::PromotedFromWaitlist
            ),
            NotificationPolicy::All => true,
            NotificationPolicy::None => false,
        }
    }
}

/// A mail to be handed to the notifier, with recipients still as user ids;
/// the handler resolves them through the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSpec {
    pub to: Vec<UserId>,
    pub cc: Vec<UserId>,
    pub subject: String,
    pub body_html: String,
}

pub fn registration_notice(
    event: &EventItem,
    user_id: UserId,
    kind: NotificationKind,
) -> NotificationSpec {
    let phrase = match kind {
        NotificationKind::Registered => "successfully registered for",
        NotificationKind::PromotedFromWaitlist => "successfully been added from the waitlist for",
        NotificationKind::AddedToWaitlist => "been added to the waitlist for",
        NotificationKind::RemovedFromWaitlist => "been removed from the waitlist for",
    };
    let subject_phrase = match kind {
        NotificationKind::Registered => "Successfully registered",
        NotificationKind::PromotedFromWaitlist => "Successfully added from the waitlist",
        NotificationKind::AddedToWaitlist => "Added to the waitlist",
        NotificationKind::RemovedFromWaitlist => "Removed from the waitlist",
    };

    let body_html = format!(
        "You have {phrase} the following event:\
         <p><strong>Title:</strong> {}</p>\
         <p><strong>Description:</strong> {}</p>\
         <p><strong>Start Date:</strong> {}</p>\
         <p><strong>End Date:</strong> {}</p>\
         <p><strong>Location:</strong> {}</p>",
        event.title,
        event.description,
        event.start_date.format(DATE_FORMAT),
        event.end_date.format(DATE_FORMAT),
        event.location,
    );

    NotificationSpec {
        to: vec![user_id],
        cc: vec![],
        subject: format!("{subject_phrase} for the event: {}", event.title),
        body_html,
    }
}

/// Broadcast to everyone registered, POCs on copy. Sent when an event is
/// cancelled or uncancelled.
pub fn cancellation_notice(event: &EventItem, cancelled: bool) -> NotificationSpec {
    let (subject_verb, body_line) = if cancelled {
        ("Cancelled", "The event has been cancelled.")
    } else {
        ("Uncancelled", "The event is no longer cancelled.")
    };

    NotificationSpec {
        to: event.registered_users.clone(),
        cc: event.pocs.clone(),
        subject: format!("Event '{}' {subject_verb}", event.title),
        body_html: format!(
            "<p>Event Members,</p><p>{body_line}</p><p>r/,</p><p>Event Registration Admins</p>"
        ),
    }
}

/// Free-form member mail to the event POCs. Plain-text newlines become
/// line breaks.
pub fn poc_notice(event: &EventItem, subject: String, body: &str) -> NotificationSpec {
    NotificationSpec {
        to: event.pocs.clone(),
        cc: vec![],
        subject,
        body_html: body.replace('\n', "<br />"),
    }
}

#[cfg(test)]
mod notification_tests {
    use super::*;
    use crate::tests::fixtures::events::EventItemBuilder;
    use rstest::rstest;

    #[rstest]
    #[case(NotificationPolicy::Standard, NotificationKind::Registered, true)]
    #[case(NotificationPolicy::Standard, NotificationKind::PromotedFromWaitlist, true)]
    #[case(NotificationPolicy::Standard, NotificationKind::AddedToWaitlist, false)]
    #[case(NotificationPolicy::Standard, NotificationKind::RemovedFromWaitlist, false)]
    #[case(NotificationPolicy::All, NotificationKind::AddedToWaitlist, true)]
    #[case(NotificationPolicy::None, NotificationKind::Registered, false)]
    fn it_should_apply_the_notification_policy(
        #[case] policy: NotificationPolicy,
        #[case] kind: NotificationKind,
        #[case] expected: bool,
    ) {
        assert_eq!(policy.covers(kind), expected);
    }

    #[rstest]
    fn it_should_build_a_registration_notice_from_the_event_fields() {
        let event = EventItemBuilder::new().title("Town Hall").build();
        let spec = registration_notice(&event, UserId(5), NotificationKind::Registered);
        assert_eq!(spec.to, vec![UserId(5)]);
        assert_eq!(
            spec.subject,
            "Successfully registered for the event: Town Hall"
        );
        assert!(spec.body_html.contains("<strong>Title:</strong> Town Hall"));
        assert!(spec.body_html.contains("<strong>Location:</strong>"));
    }

    #[rstest]
    fn it_should_address_cancellation_notices_to_the_roster_with_pocs_on_copy() {
        let event = EventItemBuilder::new()
            .title("Town Hall")
            .registered_users(vec![UserId(1), UserId(2)])
            .pocs(vec![UserId(9)])
            .build();
        let spec = cancellation_notice(&event, true);
        assert_eq!(spec.to, vec![UserId(1), UserId(2)]);
        assert_eq!(spec.cc, vec![UserId(9)]);
        assert_eq!(spec.subject, "Event 'Town Hall' Cancelled");
    }

    #[rstest]
    fn it_should_convert_newlines_in_poc_mail_bodies() {
        let event = EventItemBuilder::new().pocs(vec![UserId(9)]).build();
        let spec = poc_notice(&event, "Question".into(), "line one\nline two");
        assert_eq!(spec.body_html, "line one<br />line two");
        assert_eq!(spec.to, vec![UserId(9)]);
    }
}
