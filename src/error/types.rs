//! Core error type.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating or reading a bundle's information dictionary.
#[derive(Error, Debug)]
pub enum BundleError {
    /// Reading a file from disk failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The property list could not be parsed.
    #[error("invalid property list: {0}")]
    Plist(String),

    /// The property list parsed, but its root is not a dictionary.
    #[error("property list root is not a dictionary: {}", .path.display())]
    NotADictionary { path: PathBuf },

    /// No `Info.plist` exists under the bundle directory.
    #[error("no Info.plist found in bundle {}", .path.display())]
    NotFound { path: PathBuf },

    /// The running executable's location could not be determined.
    #[error("main bundle unavailable: {0}")]
    MainBundleUnavailable(String),

    /// A key string outside the recognized catalog.
    #[error("unknown bundle key: {0}")]
    UnknownKey(String),
}

impl BundleError {
    /// Create an I/O error bound to a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the failure means "there is no bundle here" rather than a
    /// damaged one.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } | Self::MainBundleUnavailable(_) => true,
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

/// Result type for bundle loading operations.
pub type Result<T> = std::result::Result<T, BundleError>;
