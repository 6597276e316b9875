mod admin;
mod list;
mod metafield;

pub use admin::*;
pub use list::*;
pub use metafield::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list", get(list_customers))
        .route("/metafield", get(check_metafield))
        .route("/setMetafield", post(set_metafield))
        .route("/check-access", get(check_access))
        .route("/set-admin-cookie", post(set_admin_cookie))
}
