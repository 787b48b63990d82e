use axum::{extract::State, routing::post, Json, Router};

use crate::error::{AppError, Result};
use crate::models::{JoinRequest, TokenResponse};
use crate::state::AppState;

/// Token routes
pub fn token_routes() -> Router<AppState> {
    Router::new().route("/token", post(issue_token))
}

/// POST /api/token - Issue a LiveKit access token for a participant
/// joining a room. Validation happens before any signing work.
///
/// Names are used verbatim: the embedded identity and room must equal
/// exactly what the caller sent. Non-empty is the only requirement, a
/// policy choice rather than a technical limit.
async fn issue_token(
    State(state): State<AppState>,
    Json(request): Json<JoinRequest>,
) -> Result<Json<TokenResponse>> {
    let room_name = request.room_name.as_deref().filter(|s| !s.is_empty());
    let participant_name = request
        .participant_name
        .as_deref()
        .filter(|s| !s.is_empty());

    let (Some(room_name), Some(participant_name)) = (room_name, participant_name) else {
        return Err(AppError::BadRequest(
            "roomName and participantName are required".to_string(),
        ));
    };

    let token = state.issuer.issue(room_name, participant_name)?;

    tracing::info!(room = %room_name, participant = %participant_name, "Access token issued");

    Ok(Json(TokenResponse {
        token,
        url: state.config.livekit_url.clone(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use jsonwebtoken::{decode, DecodingKey, Validation};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use crate::api::create_router;
    use crate::config::Config;
    use crate::state::AppState;
    use crate::token::{Claims, TokenIssuer};

    fn test_app() -> axum::Router {
        let config = Config::for_tests();
        let issuer = TokenIssuer::new(&config);
        create_router(AppState::new(config, issuer))
    }

    async fn post_token(body: &str) -> (StatusCode, serde_json::Value) {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/token")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_issue_token_for_valid_request() {
        let (status, body) =
            post_token(r#"{"roomName":"studio-1","participantName":"alice"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert!(!body["token"].as_str().unwrap().is_empty());
        assert_eq!(body["url"], "wss://livekit.example.com");
    }

    #[tokio::test]
    async fn test_empty_body_is_rejected() {
        let (status, body) = post_token("{}").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "roomName and participantName are required");
    }

    #[tokio::test]
    async fn test_missing_participant_name_is_rejected() {
        let (status, body) = post_token(r#"{"roomName":"studio-1"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "roomName and participantName are required");
    }

    #[tokio::test]
    async fn test_empty_string_fields_are_rejected() {
        let (status, body) =
            post_token(r#"{"roomName":"","participantName":""}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "roomName and participantName are required");
    }

    #[tokio::test]
    async fn test_names_are_embedded_verbatim() {
        // Whitespace is not trimmed: the token must carry exactly what
        // the caller sent, padding and all
        let (status, body) =
            post_token(r#"{"roomName":" studio 1 ","participantName":" alice "}"#).await;

        assert_eq!(status, StatusCode::OK);

        let config = Config::for_tests();
        let key = DecodingKey::from_secret(config.livekit_api_secret.as_bytes());
        let claims = decode::<Claims>(
            body["token"].as_str().unwrap(),
            &key,
            &Validation::default(),
        )
        .unwrap()
        .claims;

        assert_eq!(claims.sub, " alice ");
        assert_eq!(claims.video.room, " studio 1 ");
    }

    #[tokio::test]
    async fn test_url_is_config_passthrough() {
        let (_, first) =
            post_token(r#"{"roomName":"studio-1","participantName":"alice"}"#).await;
        let (_, second) =
            post_token(r#"{"roomName":"another-room","participantName":"bob"}"#).await;

        assert_eq!(first["url"], second["url"]);
    }
}
