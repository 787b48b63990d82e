use axum::{
    extract::Path,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use crate::error::Result;
use crate::models::{CreateSessionRequest, CreateSessionResponse, SessionStatusResponse};
use crate::state::AppState;

/// Session routes. Both endpoints are placeholders: nothing is persisted
/// yet, they only hold the API shape for the frontend.
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/sessions/{session_id}", get(get_session))
}

/// POST /api/sessions - Create a recording session
async fn create_session(
    Json(request): Json<CreateSessionRequest>,
) -> Result<Json<CreateSessionResponse>> {
    // TODO: store sessions in Redis once the recording flow needs to
    // look them up again
    let session_id = format!("session-{}", Utc::now().timestamp_millis());

    tracing::info!(session_id = %session_id, "Session created");

    Ok(Json(CreateSessionResponse {
        session_id,
        title: request.title,
        description: request.description,
        created_at: Utc::now().to_rfc3339(),
    }))
}

/// GET /api/sessions/:session_id - Session details
async fn get_session(Path(session_id): Path<String>) -> Result<Json<SessionStatusResponse>> {
    Ok(Json(SessionStatusResponse {
        session_id,
        status: "active".to_string(),
    }))
}
