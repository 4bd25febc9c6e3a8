//! Error type shared by the simulation kernel and the scenario loader.

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, SandboxError>;

/// Everything that can go wrong outside of a running step.
///
/// The step itself never fails: degenerate pairs are skipped and counted
/// instead of being reported through this type.
#[derive(Debug, Error)]
pub enum SandboxError {
    /// Normalizing a zero-length vector.
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,

    /// Invalid scenario or runtime parameter (radius, count, extents, ...).
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Scenario file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Scenario file is not valid YAML for [`crate::ScenarioConfig`].
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl SandboxError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        SandboxError::Configuration(msg.into())
    }
}
