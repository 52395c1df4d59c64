//! Error types for the launch pipeline.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur while composing or dispatching a launch.
///
/// Dispatch success means the child process was started; failures
/// inside the child are not observed.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// A store document could not be read or failed validation.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The package references a source port the store doesn't have.
    #[error("Source port '{id}' not found")]
    SourcePortNotFound { id: String },

    /// The OS rejected process creation.
    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
