//! Error types

/// Failures reported by a platform window implementation
#[derive(thiserror::Error, Debug)]
pub enum PlatformError {
    /// The native window was already destroyed by the platform
    #[error("native window already destroyed")]
    AlreadyDestroyed,

    /// Any other backend failure
    #[error("platform backend error: {0}")]
    Backend(String),
}

/// Crate-level error
#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Configuration loaded but describes an unusable window
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The platform layer failed
    #[error(transparent)]
    Platform(#[from] PlatformError),
}
