use std::sync::Arc;

use crate::modules::events::use_cases::cancel_event::handler::CancelEventHandler;
use crate::modules::events::use_cases::delete_event::handler::DeleteEventHandler;
use crate::modules::events::use_cases::email_pocs::handler::EmailPocsHandler;
use crate::modules::events::use_cases::list_events::queries_port::EventQueries;
use crate::modules::events::use_cases::manage_roster::handler::ManageRosterHandler;
use crate::modules::events::use_cases::schedule_event::handler::ScheduleEventHandler;
use crate::modules::events::use_cases::toggle_registration::handler::ToggleRegistrationHandler;
use crate::shared::infrastructure::directory::in_memory::InMemoryDirectory;
use crate::shared::infrastructure::item_store::in_memory::InMemoryItemStore;
use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;

type Toggle = ToggleRegistrationHandler<InMemoryItemStore, InMemoryDirectory, InMemoryNotifier>;
type Roster = ManageRosterHandler<InMemoryItemStore, InMemoryDirectory, InMemoryNotifier>;
type Cancel = CancelEventHandler<InMemoryItemStore, InMemoryDirectory, InMemoryNotifier>;
type Pocs = EmailPocsHandler<InMemoryItemStore, InMemoryDirectory, InMemoryNotifier>;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InMemoryItemStore>,
    pub directory: Arc<InMemoryDirectory>,
    pub notifier: Arc<InMemoryNotifier>,
    pub queries: Arc<dyn EventQueries + Send + Sync>,
    pub toggle_registration: Arc<Toggle>,
    pub manage_roster: Arc<Roster>,
    pub cancel_event: Arc<Cancel>,
    pub schedule_event: Arc<ScheduleEventHandler<InMemoryItemStore>>,
    pub delete_event: Arc<DeleteEventHandler<InMemoryItemStore>>,
    pub email_pocs: Arc<Pocs>,
}

impl AppState {
    /// Wire every handler over the in-memory adapters. Used by the dev
    /// server and by the inbound tests.
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryItemStore::new());
        let directory = Arc::new(InMemoryDirectory::new());
        let notifier = Arc::new(InMemoryNotifier::new());

        Self {
            queries: store.clone(),
            toggle_registration: Arc::new(ToggleRegistrationHandler::new(
                store.clone(),
                directory.clone(),
                notifier.clone(),
            )),
            manage_roster: Arc::new(ManageRosterHandler::new(
                store.clone(),
                directory.clone(),
                notifier.clone(),
            )),
            cancel_event: Arc::new(CancelEventHandler::new(
                store.clone(),
                directory.clone(),
                notifier.clone(),
            )),
            schedule_event: Arc::new(ScheduleEventHandler::new(store.clone())),
            delete_event: Arc::new(DeleteEventHandler::new(store.clone())),
            email_pocs: Arc::new(EmailPocsHandler::new(
                store.clone(),
                directory.clone(),
                notifier.clone(),
            )),
            store,
            directory,
            notifier,
        }
    }
}
