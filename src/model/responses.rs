//! XML response parsing
//!
//! Responses have no fixed schema, so they are parsed into a generic mapping:
//!
//! - an element with only text becomes a string
//! - an empty element becomes `null`
//! - child elements become keys, repeated children become arrays
//! - attributes are stored under `@name`, text next to children or
//!   attributes under `#text`
//!
//! Key order follows document order.

use crate::error::AppError;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

const TEXT_KEY: &str = "#text";
const ATTRIBUTE_PREFIX: char = '@';

/// Parsed XML API response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse(Map<String, Value>);

/// Status of a background job as reported by `GetJobStatus`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    /// Queued, not started yet
    Waiting,
    /// In progress
    Running,
    /// Cancelled before completion
    Cancelled,
    /// Finished with an error
    Error,
    /// Finished successfully
    Complete,
    /// Any status this client does not know about
    Unknown(String),
}

impl JobStatus {
    /// Returns `true` once the job will not change status again
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            JobStatus::Cancelled | JobStatus::Error | JobStatus::Complete
        )
    }
}

impl From<&str> for JobStatus {
    fn from(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "WAITING" => JobStatus::Waiting,
            "RUNNING" => JobStatus::Running,
            "CANCELLED" | "CANCELED" => JobStatus::Cancelled,
            "ERROR" => JobStatus::Error,
            "COMPLETE" => JobStatus::Complete,
            _ => JobStatus::Unknown(value.to_string()),
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Waiting => f.write_str("WAITING"),
            JobStatus::Running => f.write_str("RUNNING"),
            JobStatus::Cancelled => f.write_str("CANCELLED"),
            JobStatus::Error => f.write_str("ERROR"),
            JobStatus::Complete => f.write_str("COMPLETE"),
            JobStatus::Unknown(other) => f.write_str(other),
        }
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(&self.0) {
            Ok(json) => f.write_str(&json),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl ApiResponse {
    /// The whole document, keyed by the root element name
    #[must_use]
    pub fn root(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Looks up a value by slash-separated element path, e.g. `Envelope/Body/RESULT`
    ///
    /// Path segments that hit an array descend into its first item.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let mut current = self.0.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.first()?.as_object()?.get(segment)?,
                _ => return None,
            };
        }
        Some(current)
    }

    fn get_text(&self, path: &str) -> Option<&str> {
        match self.get(path)? {
            Value::String(text) => Some(text),
            Value::Object(map) => map.get(TEXT_KEY)?.as_str(),
            _ => None,
        }
    }

    /// Contents of `Envelope/Body`
    #[must_use]
    pub fn body(&self) -> Option<&Value> {
        self.get("Envelope/Body")
    }

    /// Contents of `Envelope/Body/RESULT`
    #[must_use]
    pub fn result(&self) -> Option<&Value> {
        self.get("Envelope/Body/RESULT")
    }

    /// `true` when `RESULT/SUCCESS` is `true` (any case)
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.get_text("Envelope/Body/RESULT/SUCCESS")
            .is_some_and(|s| s.trim().eq_ignore_ascii_case("true"))
    }

    /// Job id returned by operations that schedule background work
    #[must_use]
    pub fn job_id(&self) -> Option<&str> {
        self.get_text("Envelope/Body/RESULT/JOB_ID")
    }

    /// Job status returned by `GetJobStatus`
    #[must_use]
    pub fn job_status(&self) -> Option<JobStatus> {
        self.get_text("Envelope/Body/RESULT/JOB_STATUS")
            .map(JobStatus::from)
    }

    /// Path of the file written by `ExportList`
    #[must_use]
    pub fn file_path(&self) -> Option<&str> {
        self.get_text("Envelope/Body/RESULT/FILE_PATH")
    }

    /// Fault message returned when the service rejects a request
    #[must_use]
    pub fn fault_string(&self) -> Option<&str> {
        self.get_text("Envelope/Body/Fault/FaultString")
    }

    /// Consumes the response, returning it as a JSON value
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// Element being assembled while its children are read
struct OpenElement {
    name: String,
    children: Map<String, Value>,
    text: String,
}

impl OpenElement {
    fn new(start: &BytesStart<'_>) -> Result<Self, AppError> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut children = Map::new();
        for attribute in start.attributes() {
            let attribute =
                attribute.map_err(|e| AppError::MalformedResponse(e.to_string()))?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute
                .unescape_value()
                .map_err(|e| AppError::MalformedResponse(e.to_string()))?
                .into_owned();
            children.insert(format!("{ATTRIBUTE_PREFIX}{key}"), Value::String(value));
        }
        Ok(Self {
            name,
            children,
            text: String::new(),
        })
    }

    fn into_value(self) -> Value {
        let text = self.text.trim();
        match (self.children.is_empty(), text.is_empty()) {
            (true, true) => Value::Null,
            (true, false) => Value::String(text.to_string()),
            (false, true) => Value::Object(self.children),
            (false, false) => {
                let mut children = self.children;
                children.insert(TEXT_KEY.to_string(), Value::String(text.to_string()));
                Value::Object(children)
            }
        }
    }
}

fn insert_child(children: &mut Map<String, Value>, name: String, value: Value) {
    match children.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            children.insert(name, value);
        }
    }
}

/// Parses an XML document into an [`ApiResponse`]
///
/// Fails with [`AppError::MalformedResponse`] when the body is empty, has
/// unbalanced tags, more than one root element, or text outside the root.
pub fn parse_xml(body: &str) -> Result<ApiResponse, AppError> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<OpenElement> = Vec::new();
    let mut document: Option<(String, Value)> = None;

    loop {
        let event = reader.read_event()?;
        match event {
            Event::Start(start) => {
                if stack.is_empty() && document.is_some() {
                    return Err(AppError::MalformedResponse(
                        "more than one root element".to_string(),
                    ));
                }
                stack.push(OpenElement::new(&start)?);
            }
            Event::Empty(start) => {
                let element = OpenElement::new(&start)?;
                let name = element.name.clone();
                close_element(&mut stack, &mut document, name, element.into_value())?;
            }
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| {
                    AppError::MalformedResponse("closing tag without opening tag".to_string())
                })?;
                let name = element.name.clone();
                close_element(&mut stack, &mut document, name, element.into_value())?;
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| AppError::MalformedResponse(e.to_string()))?;
                append_text(&mut stack, &text)?;
            }
            Event::CData(data) => {
                let data = String::from_utf8_lossy(&data.into_inner()).into_owned();
                append_text(&mut stack, &data)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(AppError::MalformedResponse(format!(
            "unclosed element <{}>",
            open.name
        )));
    }

    let (name, value) = document
        .ok_or_else(|| AppError::MalformedResponse("document has no root element".to_string()))?;
    let mut root = Map::new();
    root.insert(name, value);
    Ok(ApiResponse(root))
}

fn close_element(
    stack: &mut [OpenElement],
    document: &mut Option<(String, Value)>,
    name: String,
    value: Value,
) -> Result<(), AppError> {
    match stack.last_mut() {
        Some(parent) => {
            insert_child(&mut parent.children, name, value);
            Ok(())
        }
        None if document.is_none() => {
            *document = Some((name, value));
            Ok(())
        }
        None => Err(AppError::MalformedResponse(
            "more than one root element".to_string(),
        )),
    }
}

fn append_text(stack: &mut [OpenElement], text: &str) -> Result<(), AppError> {
    match stack.last_mut() {
        Some(element) => {
            element.text.push_str(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(AppError::MalformedResponse(
            "text outside the root element".to_string(),
        )),
    }
}
