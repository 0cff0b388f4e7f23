/// HTTP transport for XML requests
pub mod http;
/// XML request builders
pub mod requests;
/// XML response parsing
pub mod responses;
