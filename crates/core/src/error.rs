//! Error types for slug configuration and pipeline execution.

use thiserror::Error;

/// Errors that can occur while configuring or running the pipeline.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The configured allowed-characters pattern failed to compile.
    #[error("invalid allowed-characters pattern `{pattern}`: {source}")]
    InvalidAllowedPattern {
        /// The pattern as written in the configuration.
        pattern: String,
        /// Underlying regex compilation error.
        #[source]
        source: regex::Error,
    },
    /// The parallel heading vectors disagree, usually because the context was
    /// mutated between steps.
    #[error("inconsistent processing state: {0}")]
    InconsistentContext(String),
}

impl ProcessError {
    /// Create an inconsistent-state error with a descriptive message.
    pub fn inconsistent(message: impl Into<String>) -> Self {
        Self::InconsistentContext(message.into())
    }
}
