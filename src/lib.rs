pub mod bigcommerce;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

use axum::Router;

use crate::state::AppState;

/// Assemble the full application router. Tests call this directly with a
/// state pointed at a local upstream stand-in.
pub fn build_app(state: AppState) -> Router {
    handlers::router().with_state(state)
}
