//! Error types for kubeprint

use crate::resources::ResourceIdentity;
use thiserror::Error;

/// Main error type for kubeprint
#[derive(Debug, Error)]
pub enum PrintError {
    #[error("no converter registered for {identity}")]
    UnsupportedKind { identity: ResourceIdentity },

    #[error("type mismatch: expected {expected}, received {found}")]
    TypeMismatch {
        expected: ResourceIdentity,
        found: ResourceIdentity,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PrintError {
    /// The identity the error is about: the unknown one for a dispatch miss,
    /// the received one for a mismatch.
    pub fn identity(&self) -> Option<&ResourceIdentity> {
        match self {
            PrintError::UnsupportedKind { identity } => Some(identity),
            PrintError::TypeMismatch { found, .. } => Some(found),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for PrintError {
    fn from(e: toml::de::Error) -> Self {
        PrintError::Config(e.to_string())
    }
}

/// Result type alias for kubeprint
pub type Result<T> = std::result::Result<T, PrintError>;
