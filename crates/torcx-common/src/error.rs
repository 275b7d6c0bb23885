//! Unified error type for the torcx workspace.
//!
//! Path composition never fails; these variants cover manifest decoding and
//! the filesystem helpers built on top of resolved locations.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum TorcxError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// A required resource was not found.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Type of the missing resource.
        kind: &'static str,
        /// Identifier of the missing resource.
        id: String,
    },

    /// A manifest carries a `kind` tag this build does not understand.
    ///
    /// An absent tag is reported with an empty `kind`.
    #[error("unsupported manifest version: {kind:?}")]
    UnsupportedManifestVersion {
        /// The raw `kind` tag found in the document.
        kind: String,
    },

    /// A manifest could not be decoded into the shape its `kind` requires.
    #[error("malformed manifest (kind {kind:?}): {source}")]
    MalformedManifest {
        /// The `kind` tag, if one was read before decoding failed.
        kind: String,
        /// Underlying decoding error.
        source: serde_json::Error,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, TorcxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_version_message_quotes_kind() {
        let err = TorcxError::UnsupportedManifestVersion {
            kind: "profile-manifest-v1".into(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported manifest version: \"profile-manifest-v1\""
        );
    }

    #[test]
    fn not_found_message_names_kind_and_id() {
        let err = TorcxError::NotFound {
            kind: "profile",
            id: "vendor".into(),
        };
        assert_eq!(err.to_string(), "profile not found: vendor");
    }
}
