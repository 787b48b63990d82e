use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub api_port: u16,
    pub livekit_api_key: String,
    pub livekit_api_secret: String,
    pub livekit_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            api_port: env::var("API_PORT")
                .unwrap_or_else(|_| "3333".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            livekit_api_key: env::var("LIVEKIT_API_KEY")
                .map_err(|_| ConfigError::MissingVar("LIVEKIT_API_KEY"))?,
            livekit_api_secret: env::var("LIVEKIT_API_SECRET")
                .map_err(|_| ConfigError::MissingVar("LIVEKIT_API_SECRET"))?,
            livekit_url: env::var("LIVEKIT_URL")
                .map_err(|_| ConfigError::MissingVar("LIVEKIT_URL"))?,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.api_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid API_PORT value")]
    InvalidPort,
    #[error("{0} environment variable is required")]
    MissingVar(&'static str),
}

#[cfg(test)]
impl Config {
    /// Fixed configuration for tests, no environment access.
    pub fn for_tests() -> Self {
        Config {
            server_host: "127.0.0.1".to_string(),
            api_port: 3333,
            livekit_api_key: "test-api-key".to_string(),
            livekit_api_secret: "test-api-secret-0123456789abcdef".to_string(),
            livekit_url: "wss://livekit.example.com".to_string(),
        }
    }
}
