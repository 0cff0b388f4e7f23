/// OAuth token exchange and session
pub mod auth;
/// Transport client performing the XML API operations
pub mod client;
/// Trait describing the XML API operations
pub mod interfaces;
