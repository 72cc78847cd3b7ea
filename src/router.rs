use crate::db::sqlite::ActivityStorage;
use crate::handlers::activities::{
    list_activities, root, signup_for_activity, unregister_from_activity,
};
use axum::{
    Router,
    routing::{delete, get, post},
};
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub storage: ActivityStorage,
}

impl AppState {
    pub fn new(storage: ActivityStorage) -> Self {
        Self { storage }
    }
}

/// Build the HTTP surface; `static_dir` is mounted under `/static`.
pub fn app_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/activities", get(list_activities))
        .route(
            "/activities/{activity_name}/signup",
            post(signup_for_activity),
        )
        .route(
            "/activities/{activity_name}/unregister",
            delete(unregister_from_activity),
        )
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
