use async_graphql_axum::GraphQL;
use axum::routing::post_service;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use event_registrations::shell::config::Config;
use event_registrations::shell::graphql::schema;
use event_registrations::shell::http::router;
use event_registrations::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();
    let state = AppState::in_memory();
    let schema = schema(state.clone());

    let app = router(state).route("/graphql", post_service(GraphQL::new(schema)));

    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
