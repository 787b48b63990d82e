use std::sync::Arc;

use crate::config::Config;
use crate::token::TokenIssuer;

/// Shared application state. Read-only after startup: the signing key
/// and LiveKit URL are fixed for the life of the process, so handlers
/// never coordinate with each other.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub issuer: Arc<TokenIssuer>,
}

impl AppState {
    pub fn new(config: Config, issuer: TokenIssuer) -> Self {
        Self {
            config: Arc::new(config),
            issuer: Arc::new(issuer),
        }
    }
}
