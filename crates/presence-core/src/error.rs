use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the Presence Analyzer.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The presence log could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A log line split into four fields but one of them did not parse.
    ///
    /// Recovered inside the reader: the line is logged and skipped, the
    /// rest of the file is still processed.
    #[error("Bad record on line {line}: {reason}")]
    RecordParse { line: usize, reason: String },

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the analyzer crates.
pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = AnalyzerError::FileRead {
            path: PathBuf::from("/some/presence.csv"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/some/presence.csv"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_record_parse() {
        let err = AnalyzerError::RecordParse {
            line: 12,
            reason: "invalid time \"25:00:00\"".to_string(),
        };
        let msg = err.to_string();
        assert_eq!(msg, "Bad record on line 12: invalid time \"25:00:00\"");
    }

    #[test]
    fn test_error_display_config() {
        let err = AnalyzerError::Config("missing data path".to_string());
        let msg = err.to_string();
        assert_eq!(msg, "Configuration error: missing data path");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AnalyzerError = io_err.into();
        let msg = err.to_string();
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: AnalyzerError = anyhow::anyhow!("upstream failure").into();
        let msg = err.to_string();
        assert!(msg.contains("upstream failure"));
    }
}
