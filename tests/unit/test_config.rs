use std::env;
use wca_client::config::Config;
use wca_client::constants::DEFAULT_TIMEOUT_SECS;

#[test]
fn test_config_with_credentials() {
    let config = Config::with_credentials(
        "https://api-campaign-us-1.goacoustic.com/oauth",
        "client",
        "secret",
        "refresh",
        "https://api-campaign-us-1.goacoustic.com/XMLAPI",
    );

    assert_eq!(config.credentials.client_id, "client");
    assert_eq!(config.credentials.client_secret, "secret");
    assert_eq!(config.credentials.refresh_token, "refresh");
    assert_eq!(
        config.endpoints.api_url,
        "https://api-campaign-us-1.goacoustic.com/XMLAPI"
    );
    assert_eq!(config.timeout, DEFAULT_TIMEOUT_SECS);
    assert_eq!(config.timeout(5).timeout, 5);
}

#[test]
fn test_config_serialization_hides_secrets() {
    let config = Config::with_credentials("a", "client", "secret", "refresh", "b");
    let json = serde_json::to_string(&config).unwrap();

    assert!(json.contains("client"));
    assert!(!json.contains("secret"));
    assert!(!json.contains("refresh"));
}

#[test]
fn test_config_from_env() {
    unsafe {
        env::set_var("WCA_CLIENT_ID", "env_client");
        env::set_var("WCA_API_URL", "http://localhost:9999/XMLAPI");
        env::set_var("WCA_TIMEOUT", "12");
    }

    let config = Config::new();
    assert_eq!(config.credentials.client_id, "env_client");
    assert_eq!(config.endpoints.api_url, "http://localhost:9999/XMLAPI");
    assert_eq!(config.timeout, 12);

    unsafe {
        env::remove_var("WCA_CLIENT_ID");
        env::remove_var("WCA_API_URL");
        env::remove_var("WCA_TIMEOUT");
    }
}
