//! # wca-client
//!
//! A small async client for the Watson Campaign Automation (Acoustic) XML API.
//!
//! The client exchanges an OAuth refresh token for a bearer token once, then
//! sends XML requests for four operations:
//!
//! - Calculate Query
//! - Get Job Status
//! - Export List / Query / Database
//! - Purge Data
//!
//! Responses are parsed into a generic nested mapping ([`model::responses::ApiResponse`]).
//!
//! ## Example
//!
//! ```ignore
//! use wca_client::prelude::*;
//!
//! let config = Config::new();
//! let client = Client::new(config).await?;
//!
//! let response = client.calculate_query("12345").await?;
//! if response.is_success() {
//!     println!("job id: {:?}", response.job_id());
//! }
//! ```

/// Request, session and export constants
pub mod constants;

/// Client configuration loaded from the environment
pub mod config;

/// Error type shared by every operation
pub mod error;

/// Request builders and response parsing
pub mod model;

/// Authentication and the transport client
pub mod application;

/// Environment and logging helpers
pub mod utils;

/// Commonly used types
pub mod prelude;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
