use serde::{Deserialize, Serialize};

/// Body of POST /api/token. Both fields are required but modeled as
/// options so an incomplete body reaches the handler's own validation
/// instead of a generic deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    #[serde(default)]
    pub room_name: Option<String>,
    #[serde(default)]
    pub participant_name: Option<String>,
}

/// Successful token issuance: the signed token plus the LiveKit server
/// URL the client should connect to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub url: String,
}

/// Body of POST /api/sessions. The original API destructures these
/// without checks, so both stay optional here too.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub session_id: String,
    pub status: String,
}
