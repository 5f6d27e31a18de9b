use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::Utc;

use crate::modules::events::core::event::EventItem;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub capacity: u32,
    pub open_spots: u32,
    pub registered_users: Vec<i64>,
    pub wait_listed_users: Vec<i64>,
    pub pocs: Vec<i64>,
    pub is_cancelled: bool,
}

impl From<EventItem> for GqlEvent {
    fn from(item: EventItem) -> Self {
        Self {
            id: item.id.0,
            title: item.title,
            description: item.description,
            start_date: item.start_date.to_rfc3339(),
            end_date: item.end_date.to_rfc3339(),
            location: item.location,
            capacity: item.capacity,
            open_spots: item.open_spots,
            registered_users: item.registered_users.iter().map(|u| u.0).collect(),
            wait_listed_users: item.wait_listed_users.iter().map(|u| u.0).collect(),
            pocs: item.pocs.iter().map(|u| u.0).collect(),
            is_cancelled: item.is_cancelled,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn list_events(
        &self,
        context: &Context<'_>,
        include_past: Option<bool>,
    ) -> GqlResult<Vec<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let from = if include_past.unwrap_or(false) {
            None
        } else {
            Some(Utc::now())
        };
        let events = state.queries.list_events(from).await?;
        Ok(events.into_iter().map(Into::into).collect())
    }
}
