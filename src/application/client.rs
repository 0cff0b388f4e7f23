//! Transport client for the XML API
//!
//! # Example
//! ```ignore
//! use wca_client::prelude::*;
//!
//! let client = Client::new(Config::new()).await?;
//! let status = client.get_job_status("42").await?;
//! println!("{:?}", status.job_status());
//! ```

use crate::application::auth::{Session, fetch_session};
use crate::application::interfaces::XmlApi;
use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::http::post_xml;
use crate::model::requests::{ExportColumns, XmlRequest};
use crate::model::responses::{ApiResponse, parse_xml};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, info};

/// Watson Campaign Automation XML API client
///
/// Holds the session obtained at construction. Tokens are not refreshed; once
/// [`Session::is_expired`] reports `true`, build a new client.
pub struct Client {
    session: Session,
    http_client: HttpClient,
    config: Config,
}

impl Client {
    /// Creates a client and performs the token exchange
    ///
    /// # Returns
    /// * `Ok(Client)` - Authenticated client ready to use
    /// * `Err(AppError::Authentication)` - If the token exchange fails
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let http_client = build_http_client(&config)?;
        let session = fetch_session(&http_client, &config).await?;
        Ok(Self {
            session,
            http_client,
            config,
        })
    }

    /// Creates a client around an existing session without any network call
    pub fn from_session(config: Config, session: Session) -> Result<Self, AppError> {
        let http_client = build_http_client(&config)?;
        Ok(Self {
            session,
            http_client,
            config,
        })
    }

    /// Current session
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Configuration the client was built with
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sends a request and parses the XML response
    pub async fn send(&self, request: &XmlRequest) -> Result<ApiResponse, AppError> {
        let xml = request.to_xml()?;
        info!("Sending {} request", request.operation());
        self.send_xml(xml).await
    }

    /// Sends an already built XML body and parses the response
    pub async fn send_xml(&self, xml: String) -> Result<ApiResponse, AppError> {
        debug!("Request body: {}", xml);
        let response = post_xml(
            &self.http_client,
            &self.session.api_url,
            &self.session.authorization_header(),
            xml,
        )
        .await?;

        let body = response.text().await?;
        parse_xml(&body).inspect_err(|e| error!("Could not parse response: {}", e))
    }
}

#[async_trait]
impl XmlApi for Client {
    async fn calculate_query(&self, query_id: &str) -> Result<ApiResponse, AppError> {
        self.send(&XmlRequest::CalculateQuery {
            query_id: query_id.to_string(),
        })
        .await
    }

    async fn get_job_status(&self, job_id: &str) -> Result<ApiResponse, AppError> {
        self.send(&XmlRequest::GetJobStatus {
            job_id: job_id.to_string(),
        })
        .await
    }

    async fn export_list(
        &self,
        target_id: &str,
        columns: ExportColumns,
        export_format: &str,
        export_type: &str,
    ) -> Result<ApiResponse, AppError> {
        self.send(&XmlRequest::ExportList {
            target_id: target_id.to_string(),
            columns,
            export_format: export_format.to_string(),
            export_type: export_type.to_string(),
        })
        .await
    }

    async fn purge_data(&self, target_id: &str, source_id: &str) -> Result<ApiResponse, AppError> {
        self.send(&XmlRequest::PurgeData {
            target_id: target_id.to_string(),
            source_id: source_id.to_string(),
        })
        .await
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Watson Campaign Automation API Client")
    }
}

fn build_http_client(config: &Config) -> Result<HttpClient, AppError> {
    Ok(HttpClient::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(config.timeout))
        .build()?)
}
