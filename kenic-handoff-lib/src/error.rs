//! Error handling for registrar handoff operations.
//!
//! This module defines an error type that covers the different ways catalog
//! loading, deep-link resolution, and landing-page input handling can fail.

use std::fmt;

/// Main error type for registrar handoff operations.
///
/// Nothing in this library is retried or recovered internally; every variant
/// is terminal for the operation that produced it and carries enough context
/// for a user-facing message.
#[derive(Debug, Clone)]
pub enum HandoffError {
    /// The candidate domain is unusable (empty after trimming, etc.)
    InvalidDomain { domain: String, reason: String },

    /// A TLD suffix failed normalization
    InvalidSuffix { suffix: String, reason: String },

    /// No registrar with the given slug exists in the catalog
    UnknownRegistrar { slug: String },

    /// Configuration errors (invalid catalog data, bad TOML, etc.)
    ConfigError { message: String },

    /// File I/O errors when reading catalog config files
    FileError { path: String, message: String },
}

impl HandoffError {
    /// Create a new invalid domain error.
    pub fn invalid_domain<D: Into<String>, R: Into<String>>(domain: D, reason: R) -> Self {
        Self::InvalidDomain {
            domain: domain.into(),
            reason: reason.into(),
        }
    }

    /// Create a new invalid suffix error.
    pub fn invalid_suffix<S: Into<String>, R: Into<String>>(suffix: S, reason: R) -> Self {
        Self::InvalidSuffix {
            suffix: suffix.into(),
            reason: reason.into(),
        }
    }

    /// Create a new unknown registrar error.
    pub fn unknown_registrar<S: Into<String>>(slug: S) -> Self {
        Self::UnknownRegistrar { slug: slug.into() }
    }

    /// Create a new configuration error.
    pub fn config<M: Into<String>>(message: M) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a new file error.
    pub fn file_error<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self::FileError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether this error was caused by missing or empty caller input,
    /// as opposed to broken configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDomain { .. } | Self::InvalidSuffix { .. }
        )
    }
}

impl fmt::Display for HandoffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDomain { domain, reason } => {
                write!(f, "Invalid domain '{}': {}", domain, reason)
            }
            Self::InvalidSuffix { suffix, reason } => {
                write!(f, "Invalid suffix '{}': {}", suffix, reason)
            }
            Self::UnknownRegistrar { slug } => {
                write!(f, "Unknown registrar '{}'", slug)
            }
            Self::ConfigError { message } => {
                write!(f, "Configuration error: {}", message)
            }
            Self::FileError { path, message } => {
                write!(f, "File error at '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for HandoffError {}

// Implement From conversions for common error types
impl From<std::io::Error> for HandoffError {
    fn from(err: std::io::Error) -> Self {
        Self::ConfigError {
            message: format!("I/O error: {}", err),
        }
    }
}

impl From<toml::de::Error> for HandoffError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError {
            message: format!("TOML parsing failed: {}", err),
        }
    }
}
