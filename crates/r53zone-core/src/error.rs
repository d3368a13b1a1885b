use thiserror::Error;

/// Result type alias for zone conversion operations
pub type Result<T> = std::result::Result<T, ZoneError>;

/// Errors that abort a zone conversion
///
/// Anything wrong with an individual record set is not an error: the record
/// set degrades to a comment or skip line and conversion carries on.
#[derive(Error, Debug)]
pub enum ZoneError {
    /// The input document is not well-formed JSON
    #[error("invalid JSON: {0}")]
    InvalidInput(#[from] serde_json::Error),

    /// No origin was supplied and none could be inferred
    #[error("missing origin: {0}")]
    MissingOrigin(String),

    /// Generic internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl ZoneError {
    /// Origin was blank when handed to the generator
    #[must_use]
    pub fn blank_origin() -> Self {
        Self::MissingOrigin("origin is required (e.g. example.com)".to_string())
    }

    /// Origin could not be inferred from the record names
    #[must_use]
    pub fn uninferable_origin() -> Self {
        Self::MissingOrigin(
            "could not infer origin from the record names; supply one explicitly".to_string(),
        )
    }

    /// Returns true if the input document could not be parsed
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Returns true if the conversion failed for lack of an origin
    #[must_use]
    pub const fn is_origin_error(&self) -> bool {
        matches!(self, Self::MissingOrigin(_))
    }
}
