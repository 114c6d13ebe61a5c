use thiserror::Error;
use tokio::task::JoinError;

/// Rejected engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board width {width} is below the minimum of {min}")]
    BoardTooNarrow { width: usize, min: usize },
    #[error("board height {height} is below the minimum of {min}")]
    BoardTooShort { height: usize, min: usize },
    #[error("minimum fall interval must be at least 1ms")]
    ZeroFallInterval,
}

/// Failures of the scheduler machinery itself. Gameplay never produces these.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to build tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("scheduler task did not finish cleanly: {0}")]
    Join(#[from] JoinError),
}
