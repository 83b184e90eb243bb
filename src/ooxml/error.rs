//! Error types for OOXML operations.
use thiserror::Error;

/// Result type for OOXML operations.
pub type Result<T> = std::result::Result<T, OoxmlError>;

/// Error types for OOXML operations.
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// A value outside the closed domain of a property or selector.
    ///
    /// Raised before any mutation takes place, and also when a document
    /// carries a literal the schema does not allow (e.g. `w:val="maybe"` on
    /// an on/off flag).
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Operation needs a capability the object was not created with,
    /// typically a story part for style or picture operations.
    #[error("Not applicable: {0}")]
    NotApplicable(String),

    /// XML parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for OoxmlError {
    fn from(err: quick_xml::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}
