//! Error types for the Falcata library.
//!
//! All fallible operations in Falcata return [`Result`], which wraps
//! [`FalcataError`]. Stemming itself is total and never fails; errors only
//! surface at the selection and I/O seams (unknown language codes, CLI file
//! handling).
//!
//! # Examples
//!
//! ```
//! use falcata::error::{FalcataError, Result};
//!
//! fn lookup(code: &str) -> Result<()> {
//!     Err(FalcataError::unsupported_language(code))
//! }
//!
//! assert!(lookup("xx").is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Falcata operations.
#[derive(Error, Debug)]
pub enum FalcataError {
    /// I/O errors (CLI input files, stdin).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A language code that no pipeline is registered for.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with FalcataError.
pub type Result<T> = std::result::Result<T, FalcataError>;

impl FalcataError {
    /// Create a new unsupported-language error.
    pub fn unsupported_language<S: Into<String>>(code: S) -> Self {
        FalcataError::UnsupportedLanguage(code.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = FalcataError::unsupported_language("xx");
        assert_eq!(error.to_string(), "Unsupported language: xx");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = FalcataError::from(io_error);

        match error {
            FalcataError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
