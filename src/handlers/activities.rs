use crate::db::models::ActivityListing;
use crate::service::registry;
use crate::{AppError, router::AppState};
use axum::{
    Json,
    extract::{Path, Query, State},
    response::Redirect,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Landing page served from the static directory.
pub const LANDING_PAGE: &str = "/static/index.html";

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET / -> redirect to the landing page.
pub async fn root() -> Redirect {
    Redirect::temporary(LANDING_PAGE)
}

/// GET /activities
pub async fn list_activities(
    State(state): State<AppState>,
) -> Result<Json<ActivityListing>, AppError> {
    let session = state.storage.session().await?;
    Ok(Json(registry::list(session).await?))
}

/// POST /activities/{activity_name}/signup?email=...
pub async fn signup_for_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(EmailQuery { email }): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    let session = state.storage.write_session().await?;
    let id = registry::sign_up(session, &activity_name, &email)
        .await
        .inspect_err(|e| {
            warn!(activity = %activity_name, email = %email, error = %e, "signup rejected");
        })?;

    info!(activity = %activity_name, email = %email, participant_id = id, "student signed up");
    Ok(Json(MessageResponse {
        message: format!("Signed up {email} for {activity_name}"),
    }))
}

/// DELETE /activities/{activity_name}/unregister?email=...
pub async fn unregister_from_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(EmailQuery { email }): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    let session = state.storage.write_session().await?;
    registry::unregister(session, &activity_name, &email)
        .await
        .inspect_err(|e| {
            warn!(activity = %activity_name, email = %email, error = %e, "unregister rejected");
        })?;

    info!(activity = %activity_name, email = %email, "student unregistered");
    Ok(Json(MessageResponse {
        message: format!("Unregistered {email} from {activity_name}"),
    }))
}
