//! # poll-api
//!
//! HTTP server built with Axum: HTML poll pages and a JSON API.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;
pub mod views;

pub use server::{
    connect_database, create_app, create_app_state, migrate, migrations_dir, pg_service_context,
    run, run_server, seed_on_startup,
};
pub use state::AppState;
