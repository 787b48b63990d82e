use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::Result;

/// Issued tokens are valid for 24 hours from issuance. Fixed policy.
pub const TOKEN_TTL_SECONDS: i64 = 24 * 60 * 60;

/// Room-scoped permissions embedded in an access token, in the wire
/// layout the LiveKit server expects (camelCase `video` claim).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrant {
    pub room_join: bool,
    pub room: String,
    pub can_publish: bool,
    pub can_subscribe: bool,
    pub can_publish_data: bool,
}

/// LiveKit access token claims: the API key as issuer, the participant
/// identity as subject, and the video grant as a custom claim.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub sub: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
    pub video: VideoGrant,
}

/// LiveKit access token issuer
#[derive(Clone)]
pub struct TokenIssuer {
    api_key: String,
    encoding_key: EncodingKey,
}

impl TokenIssuer {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.livekit_api_key.clone(),
            encoding_key: EncodingKey::from_secret(config.livekit_api_secret.as_bytes()),
        }
    }

    /// Sign an access token for a participant joining a room.
    ///
    /// The grant is deliberately maximal: anyone who can reach the token
    /// endpoint gets full publish/subscribe rights in the named room. The
    /// studio is single-tenant and does not differentiate callers.
    ///
    /// Callers validate that both names are non-empty before calling; no
    /// other format restriction applies to room or participant names.
    pub fn issue(&self, room_name: &str, participant_name: &str) -> Result<String> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            iss: self.api_key.clone(),
            sub: participant_name.to_string(),
            iat: now,
            nbf: now,
            exp: now + TOKEN_TTL_SECONDS,
            video: VideoGrant {
                room_join: true,
                room: room_name.to_string(),
                can_publish: true,
                can_subscribe: true,
                can_publish_data: true,
            },
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)?;
        Ok(token)
    }
}
