use thiserror::Error;

/// Core error type shared across bookgen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A value does not have the shape the model expects.
    #[error("invalid value: {0}")]
    Invalid(String),
}

/// Convenience alias for results returned by bookgen crates.
pub type Result<T> = std::result::Result<T, Error>;
