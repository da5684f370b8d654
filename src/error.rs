//! Error types for glyphscope.
//!
//! Almost everything in this crate degrades gracefully: odd font names and
//! sizes are tolerated, unknown line annotations fall back to a generic
//! marker. The errors below are the cases where there is nothing sensible to
//! fall back to.

/// Result type alias for glyphscope operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or rendering a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A character run carries an annotation the HTML renderer has no
    /// presentation for. Rendering stops rather than guessing.
    #[error("Unknown annotation: {0}")]
    UnknownAnnotation(String),

    /// Layout dump references something that does not exist
    #[error("Invalid layout dump: {0}")]
    InvalidDump(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_annotation_error() {
        let err = Error::UnknownAnnotation("Sidebar(7)".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Unknown annotation"));
        assert!(msg.contains("Sidebar(7)"));
    }

    #[test]
    fn test_invalid_dump_error() {
        let err = Error::InvalidDump("char index 12 out of range".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid layout dump"));
        assert!(msg.contains("12"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(format!("{}", err).contains("missing.json"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_result_type() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(Error::InvalidDump("empty".to_string()))
        }

        assert_eq!(returns_ok().unwrap(), 42);
        assert!(returns_err().is_err());
    }
}
