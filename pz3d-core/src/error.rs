//! Construction-time failures

/// Raised when a selector or scene configuration cannot be built.
///
/// Pointer input never produces an error: out-of-range samples are clamped.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("zone count must be at least 1")]
    NoZones,
    #[error("expected {expected} resources, got {actual}")]
    ResourceCountMismatch { expected: usize, actual: usize },
    #[error("invalid scene config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("cannot read scene config: {0}")]
    Io(#[from] std::io::Error),
}
