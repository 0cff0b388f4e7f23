use crate::common::{ACCESS_TOKEN, create_test_config, mock_token_endpoint};
use mockito::Server;
use wca_client::prelude::*;

#[tokio::test]
async fn test_token_exchange_creates_session() {
    let mut server = Server::new_async().await;
    let mock = mock_token_endpoint(&mut server).await;

    let client = Client::new(create_test_config(&server.url())).await.unwrap();

    mock.assert_async().await;
    let session = client.session();
    assert_eq!(session.access_token, ACCESS_TOKEN);
    assert_eq!(session.expires_in, Some(14399));
    assert_eq!(session.api_url, format!("{}/XMLAPI", server.url()));
    assert!(!session.is_expired(None));
    assert_eq!(client.to_string(), "Watson Campaign Automation API Client");
}

#[tokio::test]
async fn test_token_field_order_does_not_matter() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/oauth/token")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(r#"{"refresh_token":"r","access_token":"reordered","expires_in":60}"#)
        .create_async()
        .await;

    let client = Client::new(create_test_config(&server.url())).await.unwrap();

    mock.assert_async().await;
    assert_eq!(client.session().access_token, "reordered");
}

#[tokio::test]
async fn test_token_endpoint_rejection_is_authentication_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/oauth/token")
        .match_query(mockito::Matcher::Any)
        .with_status(401)
        .with_body(r#"{"error":"invalid_client"}"#)
        .create_async()
        .await;

    let result = Client::new(create_test_config(&server.url())).await;

    mock.assert_async().await;
    assert!(matches!(result, Err(AppError::Authentication(_))));
}

#[tokio::test]
async fn test_token_response_without_access_token() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/oauth/token")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(r#"{"error":"invalid_grant"}"#)
        .create_async()
        .await;

    let result = Client::new(create_test_config(&server.url())).await;
    assert!(matches!(result, Err(AppError::Authentication(_))));
}

#[tokio::test]
async fn test_unreachable_auth_endpoint_is_authentication_error() {
    let config = create_test_config("http://127.0.0.1:1");
    let Err(error) = Client::new(config).await else {
        panic!("expected authentication error");
    };

    assert!(matches!(error, AppError::Authentication(_)));
    let message = error.to_string();
    assert!(!message.contains("test_secret"), "secret leaked: {message}");
    assert!(!message.contains("test_refresh"), "refresh token leaked: {message}");
}
