mod api;
mod get;
mod post;

use crate::app_state::AppState;
use axum::routing::{get, post};
use std::sync::Arc;

pub use get::LoginPage;

pub fn router() -> axum::routing::Router<Arc<AppState>> {
    axum::Router::new()
        .route("/", get(get::login_form))
        .route("/login", get(get::login_form))
        .route("/login", post(post::login))
        .route("/api/login/role", post(api::route_role))
}
