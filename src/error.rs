//! Error Types
//!
//! Recording and querying a timeline never fails. Errors only arise at the
//! edges: loading options files, parsing entry types from text, and
//! exporting entries.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the fallible edges of the crate.
#[derive(Debug, Error)]
pub enum TimelineError {
    /// An options file could not be read.
    #[error("Failed to read '{path}': {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Options file extension is not `.json`, `.yaml` or `.yml`.
    #[error("Unsupported options format: '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("Unknown entry type: '{0}' (expected 'mark' or 'measure')")]
    UnknownEntryType(String),

    #[error("Invalid offset value: '{0}'")]
    InvalidOffset(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TimelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_entry_type_message() {
        let err = TimelineError::UnknownEntryType("span".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown entry type: 'span' (expected 'mark' or 'measure')"
        );
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = TimelineError::Io {
            path: PathBuf::from("/missing/options.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let message = err.to_string();
        assert!(message.contains("/missing/options.yaml"));
        assert!(message.contains("not found"));
    }

    #[test]
    fn test_json_error_converts() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TimelineError = parse_err.into();
        assert!(matches!(err, TimelineError::Json(_)));
        assert!(err.to_string().starts_with("Invalid JSON"));
    }
}
