//! Shared error types for codemend scripts

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for codemend operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// The doc-comment anchor for a function matched nothing
    #[error("Anchor not found: function `{function}` with comment \"{comment}\"")]
    AnchorNotFound { function: String, comment: String },

    /// The anchor matched more than one span, so the splice target is ambiguous
    #[error("Anchor for function `{function}` matched {count} times")]
    AmbiguousAnchor { function: String, count: usize },

    /// Template mode needs a `return `...`;` inside the anchored function
    #[error("No template literal return in function `{function}`")]
    TemplateNotFound { function: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Regex compilation errors
    #[error(transparent)]
    Pattern(#[from] regex::Error),

    /// Glob pattern errors
    #[error(transparent)]
    Glob(#[from] glob::PatternError),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: None,
        }
    }

    /// Wrap an I/O failure on a specific path
    pub fn io_at(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::FileSystem {
            message: format!("{}: {}", path.display(), source),
            path: Some(path),
            source: Some(source),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }

    /// Whether this error came from a missing splice anchor.
    pub fn is_anchor_miss(&self) -> bool {
        matches!(
            self,
            Self::AnchorNotFound { .. } | Self::AmbiguousAnchor { .. } | Self::TemplateNotFound { .. }
        )
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_at_keeps_path() {
        let err = Error::io_at(
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            "app/api/route.ts",
        );
        match &err {
            Error::FileSystem { path, source, .. } => {
                assert_eq!(path.as_deref(), Some(std::path::Path::new("app/api/route.ts")));
                assert!(source.is_some());
            }
            other => panic!("unexpected variant: {other:?}"),
        }
        assert!(err.to_string().contains("app/api/route.ts"));
    }

    #[test]
    fn test_context_wraps_message() {
        let result: Result<()> = Err(Error::Validation("bad namespace".into()));
        let err = result.context("merging messages/es.json").unwrap_err();
        assert_eq!(
            err.to_string(),
            "merging messages/es.json: Validation error: bad namespace"
        );
    }

    #[test]
    fn test_anchor_miss_classification() {
        let miss = Error::AnchorNotFound {
            function: "generateEyes_01".into(),
            comment: "Tipo 1".into(),
        };
        assert!(miss.is_anchor_miss());
        assert!(!Error::Configuration("x".into()).is_anchor_miss());
    }
}
