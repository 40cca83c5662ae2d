use thiserror::Error;

/// Errors raised while configuring a postseason.
///
/// Simulation itself never fails: arithmetic edge cases fall back to neutral
/// values instead of surfacing here.
#[derive(Debug, Error)]
pub enum PostseasonError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse roster: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PostseasonError>;
