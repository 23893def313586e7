use thiserror::Error;

/// Error taxonomy for lineup generation.
///
/// Every variant is raised synchronously and never retried internally:
/// retrying with the same seed reproduces the same failure. A failed
/// period invalidates the whole generation call; no partial lineup list
/// is ever returned.
#[derive(Error, Debug)]
pub enum LineupError {
    #[error("Insufficient players: need {needed}, have {available}")]
    InsufficientPlayers { needed: usize, available: usize },

    #[error("No eligible player for required position: {position_id}")]
    MissingRequiredPosition { position_id: String },

    #[error("Could not complete a legal assignment for period {period}")]
    InfeasibleAssignment { period: u32 },

    #[error("Unsupported sport: {sport_id}")]
    UnsupportedSport { sport_id: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid sport configuration: {0}")]
    InvalidConfig(String),
}

impl LineupError {
    /// Stable machine-readable code for the JSON boundary. An external
    /// route layer maps these to status codes (e.g. 400 vs 501).
    pub fn code(&self) -> &'static str {
        match self {
            LineupError::InsufficientPlayers { .. } => "INSUFFICIENT_PLAYERS",
            LineupError::MissingRequiredPosition { .. } => "MISSING_REQUIRED_POSITION",
            LineupError::InfeasibleAssignment { .. } => "INFEASIBLE_ASSIGNMENT",
            LineupError::UnsupportedSport { .. } => "UNSUPPORTED_SPORT",
            LineupError::InvalidInput(_) => "INVALID_REQUEST",
            LineupError::InvalidConfig(_) => "INVALID_CONFIG",
        }
    }
}

pub type Result<T> = std::result::Result<T, LineupError>;
