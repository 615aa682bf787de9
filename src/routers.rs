mod health_check;
mod login;

use std::{path::Path, sync::Arc};

use axum::routing::get;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{app_state::AppState, role_router::LoginRoleRouter};

pub fn get_router(
    role_router: LoginRoleRouter,
    static_dir: &Path,
) -> axum::Router {
    let app_state = Arc::new(AppState { role_router });

    // Destination pages live next to each other in the static directory.
    let pages = ServeDir::new(static_dir);

    axum::Router::new()
        .route("/health", get(health_check::health_check))
        .merge(login::router())
        .fallback_service(pages)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
