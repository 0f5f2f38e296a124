use thiserror::Error;

/// Core error type shared across Synthcare crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The run configuration violates internal invariants.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A table spec is malformed (empty columns, duplicate names).
    #[error("invalid table spec: {0}")]
    InvalidSpec(String),
}

/// Convenience alias for results returned by Synthcare crates.
pub type Result<T> = std::result::Result<T, Error>;
