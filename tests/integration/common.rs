// Common utilities for integration tests

use mockito::{Matcher, Mock, ServerGuard};
use wca_client::prelude::*;

pub const ACCESS_TOKEN: &str = "test-access-token";

/// Creates a config pointing both endpoints at the mock server
pub fn create_test_config(server_url: &str) -> Config {
    setup_logger();
    Config::with_credentials(
        format!("{server_url}/oauth"),
        "test_client",
        "test_secret",
        "test_refresh",
        format!("{server_url}/XMLAPI"),
    )
    .timeout(5)
}

/// Mocks a successful token exchange
pub async fn mock_token_endpoint(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", "/oauth/token")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "refresh_token".into()),
            Matcher::UrlEncoded("client_id".into(), "test_client".into()),
            Matcher::UrlEncoded("client_secret".into(), "test_secret".into()),
            Matcher::UrlEncoded("refresh_token".into(), "test_refresh".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json;charset=UTF-8")
        .with_body(format!(
            r#"{{"token_type":"bearer","expires_in":14399,"access_token":"{ACCESS_TOKEN}"}}"#
        ))
        .create_async()
        .await
}

/// Mocks the XML API answering `request_xml` with `response_xml`
pub async fn mock_xml_api(server: &mut ServerGuard, request_xml: &str, response_xml: &str) -> Mock {
    server
        .mock("POST", "/XMLAPI")
        .match_header("content-type", "text/xml")
        .match_header("authorization", format!("bearer {ACCESS_TOKEN}").as_str())
        .match_body(Matcher::Exact(request_xml.to_string()))
        .with_status(200)
        .with_header("content-type", "text/xml;charset=UTF-8")
        .with_body(response_xml)
        .create_async()
        .await
}

/// Builds an authenticated client against the mock server
pub async fn create_test_client(server: &mut ServerGuard) -> Client {
    let token = mock_token_endpoint(server).await;
    let client = Client::new(create_test_config(&server.url()))
        .await
        .expect("Failed to authenticate against mock server");
    token.assert_async().await;
    client
}
