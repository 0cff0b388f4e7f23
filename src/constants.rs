/// User agent string sent with every request to the XML API
pub const USER_AGENT: &str = concat!("wca-client/", env!("CARGO_PKG_VERSION"));
/// Default timeout in seconds for authentication and API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default OAuth endpoint used when `WCA_AUTH_URL` is not set
pub const DEFAULT_AUTH_URL: &str = "https://api-campaign-us-1.goacoustic.com/oauth";
/// Default XML API endpoint used when `WCA_API_URL` is not set
pub const DEFAULT_API_URL: &str = "https://api-campaign-us-1.goacoustic.com/XMLAPI";
/// Grant type used for the token exchange
pub const GRANT_TYPE_REFRESH_TOKEN: &str = "refresh_token";

/// Outer envelope element wrapping every request
pub const ENVELOPE_TAG: &str = "Envelope";
/// Body element nested directly inside the envelope
pub const BODY_TAG: &str = "Body";

/// Columns every export must contain, appended in this order when missing
pub const REQUIRED_EXPORT_COLUMNS: [&str; 2] = ["EMAIL", "RECIPIENT_ID"];
/// Export format used when the caller does not pick one
pub const DEFAULT_EXPORT_FORMAT: &str = "CSV";
/// Export type used when the caller does not pick one
pub const DEFAULT_EXPORT_TYPE: &str = "ALL";

/// Content type of every XML API request
pub const XML_CONTENT_TYPE: &str = "text/xml";
