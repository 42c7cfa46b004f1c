//! Defines the custom error types for the library.
//!
//! This uses `thiserror` for clean, boilerplate-free error handling.

use thiserror::Error;

use crate::mapping::ValueKind;

#[derive(Error, Debug)]
pub enum SportsMlError {
    #[error("I/O Error: {1} - {0}")]
    Io(#[source] std::io::Error, String),

    #[error("JSON Serialization Error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Malformed XML: {0}")]
    MalformedXml(String),

    #[error("Unrecognized Document: {0}")]
    UnrecognizedDocument(String),

    #[error(
        "Attribute Coercion Error: <{element} {key}=\"{value}\"> is not a valid {kind} value"
    )]
    AttributeCoercion {
        element: String,
        key: String,
        kind: ValueKind,
        value: String,
    },
}

impl SportsMlError {
    /// True for failures caused by the shape of the input document itself:
    /// XML that is not well formed, or a root element that is neither a
    /// `sports-content` payload nor a `newsItem` wrapper.
    pub fn is_document_format_error(&self) -> bool {
        matches!(
            self,
            SportsMlError::MalformedXml(_) | SportsMlError::UnrecognizedDocument(_)
        )
    }
}

// Implement From<io::Error> for easier error handling
impl From<std::io::Error> for SportsMlError {
    fn from(err: std::io::Error) -> Self {
        SportsMlError::Io(err, "IO operation failed".to_string())
    }
}

impl From<quick_xml::Error> for SportsMlError {
    fn from(err: quick_xml::Error) -> Self {
        match err {
            quick_xml::Error::Io(e) => SportsMlError::Io(
                std::io::Error::new(e.kind(), e),
                "Failed to read XML input".to_string(),
            ),
            other => SportsMlError::MalformedXml(other.to_string()),
        }
    }
}

impl From<quick_xml::escape::EscapeError> for SportsMlError {
    fn from(err: quick_xml::escape::EscapeError) -> Self {
        SportsMlError::MalformedXml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for SportsMlError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        SportsMlError::MalformedXml(err.to_string())
    }
}
