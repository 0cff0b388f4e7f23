use crate::constants::XML_CONTENT_TYPE;
use crate::error::AppError;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response};
use tracing::{debug, error};

/// Posts an XML body to the API endpoint and returns the successful response
///
/// There is no retry: network failures surface as [`AppError::Network`] and
/// any non-2xx status as [`AppError::Unexpected`].
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `url` - Full URL of the XML API endpoint
/// * `authorization` - Value of the `Authorization` header, e.g. `bearer <token>`
/// * `body` - Enveloped XML request
pub async fn post_xml(
    client: &Client,
    url: &str,
    authorization: &str,
    body: String,
) -> Result<Response, AppError> {
    debug!("POST {}", url);

    let response = client
        .post(url)
        .header(CONTENT_TYPE, XML_CONTENT_TYPE)
        .header(AUTHORIZATION, authorization)
        .body(body)
        .send()
        .await
        .map_err(|e| {
            error!("Request to {} failed: {}", url, e);
            AppError::Network(e)
        })?;

    let status = response.status();
    debug!("Response status: {}", status);

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("Request failed with status {}: {}", status, body);
        return Err(AppError::Unexpected(status));
    }

    Ok(response)
}
