use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Raw size tier outside {4, 2, 1}.
    #[error("invalid asteroid size tier: {0} (expected 4, 2 or 1)")]
    InvalidAsteroidSize(u8),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type GameResult<T> = Result<T, GameError>;
