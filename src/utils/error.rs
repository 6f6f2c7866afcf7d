//! Error handling for tabraster
//!
//! Rendering itself never fails: absent fields fall back to defaults and
//! unknown cells are skipped. This module covers the outer boundaries only,
//! i.e. loading documents/options and encoding or persisting surfaces.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Render error type
#[derive(Debug, Error)]
pub enum RenderError {
    /// A table document or options file could not be deserialized
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Unknown document or output format
    #[error("Unsupported format '{format}'")]
    UnsupportedFormat { format: String },

    /// The surface could not be encoded
    #[error("Encode error: {message}")]
    Encode { message: String },

    /// Reading or writing a file failed
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for the loading/persisting boundary
pub type RenderResult<T> = Result<T, RenderError>;

// Convenience constructors for errors
impl RenderError {
    pub fn invalid(message: impl Into<String>) -> Self {
        RenderError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn unsupported(format: impl Into<String>) -> Self {
        RenderError::UnsupportedFormat {
            format: format.into(),
        }
    }

    pub fn encode(message: impl Into<String>) -> Self {
        RenderError::Encode {
            message: message.into(),
        }
    }

    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        RenderError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::invalid(err.to_string())
    }
}

#[cfg(feature = "data-loading")]
impl From<serde_yaml::Error> for RenderError {
    fn from(err: serde_yaml::Error) -> Self {
        RenderError::invalid(err.to_string())
    }
}

#[cfg(feature = "data-loading")]
impl From<toml::de::Error> for RenderError {
    fn from(err: toml::de::Error) -> Self {
        RenderError::invalid(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_input_display() {
        let err = RenderError::invalid("expected `|` separator");
        assert!(err.to_string().contains("Invalid input"));
        assert!(err.to_string().contains("separator"));
    }

    #[test]
    fn test_io_error_keeps_path_and_source() {
        let err = RenderError::io(
            "/tmp/out.png",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/out.png"));
        assert!(msg.contains("denied"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_json_error_converts_to_invalid_input() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: RenderError = parse_err.into();
        assert!(matches!(err, RenderError::InvalidInput { .. }));
    }

    #[test]
    fn test_unsupported_format() {
        let err = RenderError::unsupported("bmp");
        assert_eq!(err.to_string(), "Unsupported format 'bmp'");
    }
}
