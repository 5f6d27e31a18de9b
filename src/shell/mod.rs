// Composition root for the event registration backend.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
