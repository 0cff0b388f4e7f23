use crate::constants::{DEFAULT_API_URL, DEFAULT_AUTH_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// OAuth credentials issued by the Watson Campaign Automation admin
pub struct Credentials {
    /// OAuth client id
    pub client_id: String,
    /// OAuth client secret
    #[serde(skip_serializing, default)]
    pub client_secret: String,
    /// Long-lived refresh token exchanged for an access token
    #[serde(skip_serializing, default)]
    pub refresh_token: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Pod-specific endpoints for authentication and XML API calls
pub struct EndpointConfig {
    /// OAuth base URL, e.g. `https://api-campaign-us-1.goacoustic.com/oauth`
    pub auth_url: String,
    /// XML API URL, e.g. `https://api-campaign-us-1.goacoustic.com/XMLAPI`
    pub api_url: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the XML API client
pub struct Config {
    /// OAuth credentials
    pub credentials: Credentials,
    /// Authentication and API endpoints
    pub endpoints: EndpointConfig,
    /// Timeout in seconds applied to every HTTP request
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from environment variables
    ///
    /// Reads `WCA_CLIENT_ID`, `WCA_CLIENT_SECRET`, `WCA_REFRESH_TOKEN`,
    /// `WCA_AUTH_URL`, `WCA_API_URL` and `WCA_TIMEOUT`, loading a `.env`
    /// file first when one exists.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let client_id = get_env_or_default("WCA_CLIENT_ID", String::new());
        let client_secret = get_env_or_default("WCA_CLIENT_SECRET", String::new());
        let refresh_token = get_env_or_default("WCA_REFRESH_TOKEN", String::new());

        if client_id.is_empty() {
            error!("WCA_CLIENT_ID not found in environment variables or .env file");
        }
        if client_secret.is_empty() {
            error!("WCA_CLIENT_SECRET not found in environment variables or .env file");
        }
        if refresh_token.is_empty() {
            error!("WCA_REFRESH_TOKEN not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                client_id,
                client_secret,
                refresh_token,
            },
            endpoints: EndpointConfig {
                auth_url: get_env_or_default("WCA_AUTH_URL", String::from(DEFAULT_AUTH_URL)),
                api_url: get_env_or_default("WCA_API_URL", String::from(DEFAULT_API_URL)),
            },
            timeout: get_env_or_default("WCA_TIMEOUT", DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Creates a configuration from explicit values, using the default timeout
    pub fn with_credentials(
        auth_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Self {
        Config {
            credentials: Credentials {
                client_id: client_id.into(),
                client_secret: client_secret.into(),
                refresh_token: refresh_token.into(),
            },
            endpoints: EndpointConfig {
                auth_url: auth_url.into(),
                api_url: api_url.into(),
            },
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Returns a copy of this configuration with a different request timeout
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}
