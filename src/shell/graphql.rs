use async_graphql::{EmptySubscription, Schema};

pub use crate::modules::events::use_cases::list_events::inbound::graphql::QueryRoot;
pub use crate::modules::events::use_cases::toggle_registration::inbound::graphql::MutationRoot;
pub use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}
