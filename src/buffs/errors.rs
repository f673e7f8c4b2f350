use std::path::PathBuf;
use thiserror::Error;

use crate::host::HostError;

/// Errors that stop a custom buff load before or while it touches the host table.
#[derive(Debug, Error)]
pub enum BuffError {
    /// The catalog file does not exist under the plugin install directory.
    #[error("custom buff catalog not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The catalog is not valid JSON or does not have the expected shape.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The catalog parsed but holds no buff groups.
    #[error("no buff groups found in {}", .path.display())]
    EmptyCatalog { path: PathBuf },

    /// Wrapper around IO errors while reading the catalog.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The host effect table rejected a write.
    #[error("host error: {0}")]
    Host(#[from] HostError),
}

/// Why a single catalog entry was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("invalid BuffType '{0}'")]
    UnknownBuffType(String),

    #[error("SkillRate buff is missing SkillName")]
    MissingSkillName,
}
