//! XML request builders
//!
//! Every request is a single operation element wrapped in the fixed
//! `<Envelope><Body>…</Body></Envelope>` pair. Text content is escaped by the
//! writer, so identifiers and column names may contain any characters.

use crate::constants::{
    BODY_TAG, DEFAULT_EXPORT_FORMAT, DEFAULT_EXPORT_TYPE, ENVELOPE_TAG, REQUIRED_EXPORT_COLUMNS,
};
use crate::error::AppError;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// File format of an exported list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExportFormat {
    /// Comma separated values
    #[default]
    Csv,
    /// Tab separated values
    Tab,
    /// Pipe separated values
    Pipe,
}

impl ExportFormat {
    /// Wire value of the format
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => DEFAULT_EXPORT_FORMAT,
            ExportFormat::Tab => "TAB",
            ExportFormat::Pipe => "PIPE",
        }
    }
}

/// Which contacts of the target are exported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExportType {
    /// Every contact
    #[default]
    All,
    /// Opted-in contacts only
    OptIn,
    /// Opted-out contacts only
    OptOut,
    /// Undeliverable contacts only
    Undeliverable,
}

impl ExportType {
    /// Wire value of the export type
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportType::All => DEFAULT_EXPORT_TYPE,
            ExportType::OptIn => "OPT_IN",
            ExportType::OptOut => "OPT_OUT",
            ExportType::Undeliverable => "UNDELIVERABLE",
        }
    }
}

impl AsRef<str> for ExportFormat {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for ExportType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ExportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CSV" => Ok(ExportFormat::Csv),
            "TAB" => Ok(ExportFormat::Tab),
            "PIPE" => Ok(ExportFormat::Pipe),
            other => Err(AppError::InvalidInput(format!(
                "unknown export format: {other}"
            ))),
        }
    }
}

impl FromStr for ExportType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ALL" => Ok(ExportType::All),
            "OPT_IN" => Ok(ExportType::OptIn),
            "OPT_OUT" => Ok(ExportType::OptOut),
            "UNDELIVERABLE" => Ok(ExportType::Undeliverable),
            other => Err(AppError::InvalidInput(format!("unknown export type: {other}"))),
        }
    }
}

/// Ordered list of columns to export
///
/// Built from a typed list, or from an untyped JSON value (for columns read
/// out of configuration files or job payloads).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExportColumns(Vec<String>);

impl ExportColumns {
    /// Wraps an ordered list of column names
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self(columns.into_iter().map(Into::into).collect())
    }

    /// Column names in the order they were given
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Columns as they are sent: the given order, then `EMAIL` and
    /// `RECIPIENT_ID` when they were missing
    #[must_use]
    pub fn with_required(&self) -> Vec<String> {
        ensure_required_columns(self.0.as_slice())
    }
}

impl<S: Into<String>> From<Vec<S>> for ExportColumns {
    fn from(columns: Vec<S>) -> Self {
        Self::new(columns)
    }
}

impl TryFrom<&Value> for ExportColumns {
    type Error = AppError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let Value::Array(items) = value else {
            return Err(AppError::InvalidInput(
                "export columns must be a list".to_string(),
            ));
        };
        items
            .iter()
            .map(|item| match item {
                Value::String(name) => Ok(name.clone()),
                other => Err(AppError::InvalidInput(format!(
                    "export column must be a string, got {other}"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// Returns `columns` with every required column appended when absent
///
/// Existing entries keep their order and duplicates are left alone.
#[must_use]
pub fn ensure_required_columns<S: AsRef<str>>(columns: &[S]) -> Vec<String> {
    let mut result: Vec<String> = columns.iter().map(|c| c.as_ref().to_string()).collect();
    for required in REQUIRED_EXPORT_COLUMNS {
        if !result.iter().any(|c| c == required) {
            result.push(required.to_string());
        }
    }
    result
}

/// One of the supported XML API operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum XmlRequest {
    /// Count the contacts matching a query
    CalculateQuery {
        /// Query identifier
        query_id: String,
    },
    /// Poll the status of a background job
    GetJobStatus {
        /// Job identifier
        job_id: String,
    },
    /// Export a database, query or contact list
    ExportList {
        /// Database, query or contact list identifier
        target_id: String,
        /// Columns to export
        columns: ExportColumns,
        /// Export file format, sent verbatim
        export_format: String,
        /// Export type, sent verbatim
        export_type: String,
    },
    /// Remove the contacts of `source_id` from `target_id`
    PurgeData {
        /// List being purged
        target_id: String,
        /// List or query deciding which contacts are removed
        source_id: String,
    },
}

impl XmlRequest {
    /// Name of the operation element
    #[must_use]
    pub fn operation(&self) -> &'static str {
        match self {
            XmlRequest::CalculateQuery { .. } => "CalculateQuery",
            XmlRequest::GetJobStatus { .. } => "GetJobStatus",
            XmlRequest::ExportList { .. } => "ExportList",
            XmlRequest::PurgeData { .. } => "PurgeData",
        }
    }

    /// Renders the request as an enveloped XML string
    pub fn to_xml(&self) -> Result<String, AppError> {
        match self {
            XmlRequest::CalculateQuery { query_id } => build_calculate_query(query_id),
            XmlRequest::GetJobStatus { job_id } => build_job_status(job_id),
            XmlRequest::ExportList {
                target_id,
                columns,
                export_format,
                export_type,
            } => build_export(target_id, columns.as_slice(), export_format, export_type),
            XmlRequest::PurgeData {
                target_id,
                source_id,
            } => build_purge(target_id, source_id),
        }
    }
}

impl fmt::Display for XmlRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operation())
    }
}

/// Builds a `CalculateQuery` request
pub fn build_calculate_query(query_id: &str) -> Result<String, AppError> {
    require_value("QUERY_ID", query_id)?;
    let mut xml = XmlBuilder::new()?;
    xml.start("CalculateQuery")?;
    xml.text_element("QUERY_ID", query_id)?;
    xml.end("CalculateQuery")?;
    xml.finish()
}

/// Builds a `GetJobStatus` request
pub fn build_job_status(job_id: &str) -> Result<String, AppError> {
    require_value("JOB_ID", job_id)?;
    let mut xml = XmlBuilder::new()?;
    xml.start("GetJobStatus")?;
    xml.text_element("JOB_ID", job_id)?;
    xml.end("GetJobStatus")?;
    xml.finish()
}

/// Builds an `ExportList` request
///
/// `EMAIL` and `RECIPIENT_ID` are appended to `columns` when missing.
/// `export_format` and `export_type` are sent as given.
pub fn build_export<S: AsRef<str>>(
    target_id: &str,
    columns: &[S],
    export_format: impl AsRef<str>,
    export_type: impl AsRef<str>,
) -> Result<String, AppError> {
    require_value("LIST_ID", target_id)?;
    if let Some(position) = columns.iter().position(|c| c.as_ref().trim().is_empty()) {
        return Err(AppError::InvalidInput(format!(
            "export column at position {position} is blank"
        )));
    }
    let columns = ensure_required_columns(columns);

    let mut xml = XmlBuilder::new()?;
    xml.start("ExportList")?;
    xml.text_element("LIST_ID", target_id)?;
    xml.text_element("EXPORT_TYPE", export_type.as_ref())?;
    xml.text_element("EXPORT_FORMAT", export_format.as_ref())?;
    xml.start("EXPORT_COLUMNS")?;
    for column in &columns {
        xml.text_element("COLUMN", column)?;
    }
    xml.end("EXPORT_COLUMNS")?;
    xml.end("ExportList")?;
    xml.finish()
}

/// Builds a `PurgeData` request
pub fn build_purge(target_id: &str, source_id: &str) -> Result<String, AppError> {
    require_value("TARGET_ID", target_id)?;
    require_value("SOURCE_ID", source_id)?;
    let mut xml = XmlBuilder::new()?;
    xml.start("PurgeData")?;
    xml.text_element("TARGET_ID", target_id)?;
    xml.text_element("SOURCE_ID", source_id)?;
    xml.end("PurgeData")?;
    xml.finish()
}

fn require_value(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{field} must not be blank")));
    }
    Ok(())
}

/// Writes operation elements between the envelope start and end tags
struct XmlBuilder {
    writer: Writer<Vec<u8>>,
}

impl XmlBuilder {
    fn new() -> Result<Self, AppError> {
        let mut builder = Self {
            writer: Writer::new(Vec::new()),
        };
        builder.start(ENVELOPE_TAG)?;
        builder.start(BODY_TAG)?;
        Ok(builder)
    }

    fn write(&mut self, event: Event<'_>) -> Result<(), AppError> {
        self.writer
            .write_event(event)
            .map_err(|e| AppError::Serialization(e.to_string()))
    }

    fn start(&mut self, name: &str) -> Result<(), AppError> {
        self.write(Event::Start(BytesStart::new(name)))
    }

    fn end(&mut self, name: &str) -> Result<(), AppError> {
        self.write(Event::End(BytesEnd::new(name)))
    }

    fn text_element(&mut self, name: &str, value: &str) -> Result<(), AppError> {
        self.start(name)?;
        self.write(Event::Text(BytesText::new(value)))?;
        self.end(name)
    }

    fn finish(mut self) -> Result<String, AppError> {
        self.end(BODY_TAG)?;
        self.end(ENVELOPE_TAG)?;
        String::from_utf8(self.writer.into_inner())
            .map_err(|e| AppError::Serialization(e.to_string()))
    }
}
