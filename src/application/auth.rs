//! OAuth authentication for the XML API
//!
//! The refresh token from the configuration is exchanged once for a bearer
//! access token. The resulting [`Session`] never changes afterwards.

use crate::config::Config;
use crate::constants::GRANT_TYPE_REFRESH_TOKEN;
use crate::error::AppError;
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// Token endpoint response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for XML API calls
    #[serde(default)]
    pub access_token: String,
    /// Token type, usually `bearer`
    #[serde(default)]
    pub token_type: Option<String>,
    /// Token lifetime in seconds
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// Refresh token echoed back by the service
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Authenticated session, fixed for the lifetime of a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Bearer access token
    #[serde(skip_serializing, default)]
    pub access_token: String,
    /// Token type reported by the service
    pub token_type: Option<String>,
    /// Token lifetime in seconds, when reported
    pub expires_in: Option<u64>,
    /// Unix timestamp (seconds) when the token was obtained
    pub created_at: i64,
    /// OAuth base URL the token came from
    pub auth_url: String,
    /// XML API endpoint the token is used against
    pub api_url: String,
}

impl Session {
    /// Creates a session for an already known access token
    pub fn new(
        access_token: impl Into<String>,
        auth_url: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: None,
            expires_in: None,
            created_at: Utc::now().timestamp(),
            auth_url: auth_url.into(),
            api_url: api_url.into(),
        }
    }

    /// Value of the `Authorization` header for XML API calls
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("bearer {}", self.access_token)
    }

    /// Checks if the token has passed its advertised lifetime
    ///
    /// Sessions without `expires_in` never report expiry. The client does not
    /// refresh tokens; callers build a new client instead.
    ///
    /// # Arguments
    /// * `margin_seconds` - Safety margin in seconds (default: 300 = 5 minutes)
    #[must_use]
    pub fn is_expired(&self, margin_seconds: Option<i64>) -> bool {
        let Some(expires_in) = self.expires_in else {
            return false;
        };
        let margin = margin_seconds.unwrap_or(300);
        let lifetime = i64::try_from(expires_in).unwrap_or(i64::MAX);
        let expires_at = self.created_at.saturating_add(lifetime);
        Utc::now().timestamp() >= expires_at.saturating_sub(margin)
    }
}

/// Exchanges the configured refresh token for an access token
///
/// Every failure (network error, non-2xx status, unreadable body, missing
/// `access_token`) is reported as [`AppError::Authentication`].
pub async fn fetch_session(client: &Client, config: &Config) -> Result<Session, AppError> {
    let url = format!("{}/token", config.endpoints.auth_url.trim_end_matches('/'));
    let credentials = &config.credentials;

    info!("Generating authentication token");
    debug!("Sending token request to: {}", url);

    let response = client
        .post(&url)
        .query(&[
            ("grant_type", GRANT_TYPE_REFRESH_TOKEN),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("refresh_token", credentials.refresh_token.as_str()),
        ])
        .send()
        .await
        .map_err(|e| {
            // The URL carries the client secret and refresh token.
            let e = e.without_url();
            error!("Token request failed: {}", e);
            AppError::Authentication(format!("token request failed: {e}"))
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("Token request failed with status {}: {}", status, body);
        return Err(AppError::Authentication(format!(
            "token endpoint returned {status}"
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| {
            AppError::Authentication(format!("unreadable token response: {}", e.without_url()))
        })?;
    let token = parse_token_response(&body)?;

    info!("✓ Authentication token generated");
    Ok(Session {
        access_token: token.access_token,
        token_type: token.token_type,
        expires_in: token.expires_in,
        created_at: Utc::now().timestamp(),
        auth_url: config.endpoints.auth_url.clone(),
        api_url: config.endpoints.api_url.clone(),
    })
}

/// Reads the token endpoint's JSON body, requiring a non-empty `access_token`
pub fn parse_token_response(body: &str) -> Result<TokenResponse, AppError> {
    let token: TokenResponse = serde_json::from_str(body).map_err(|e| {
        error!("Unparsable token response: {}", e);
        AppError::Authentication(format!("unparsable token response: {e}"))
    })?;

    if token.access_token.trim().is_empty() {
        return Err(AppError::Authentication(
            "token response has no access_token".to_string(),
        ));
    }
    Ok(token)
}
