//! # Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ```rust
//! use wca_client::prelude::*;
//!
//! let xml = build_job_status("42").unwrap();
//! assert!(xml.contains("<JOB_ID>42</JOB_ID>"));
//! ```

/// Configuration for the XML API client
pub use crate::config::{Config, Credentials, EndpointConfig};

/// Library version information
pub use crate::{VERSION, version};

/// Main error type for the library
pub use crate::error::AppError;

/// Authentication session
pub use crate::application::auth::Session;

/// Transport client and its operations
pub use crate::application::client::Client;
pub use crate::application::interfaces::XmlApi;

/// Request builders
pub use crate::model::requests::{
    ExportColumns, ExportFormat, ExportType, XmlRequest, build_calculate_query, build_export,
    build_job_status, build_purge,
};

/// Response mapping
pub use crate::model::responses::{ApiResponse, JobStatus, parse_xml};

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

pub use tracing::{debug, error, info, warn};
