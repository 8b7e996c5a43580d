//! Error types for the hoopstats dataset and CLI

use std::fmt;
use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, HoopsError>;

/// Entity tables an identifier can be looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    League,
    Team,
    Player,
    Match,
    MatchEvent,
    InjuryReport,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Entity::League => "League",
            Entity::Team => "Team",
            Entity::Player => "Player",
            Entity::Match => "Match",
            Entity::MatchEvent => "Match event",
            Entity::InjuryReport => "Injury report",
        };
        write!(f, "{}", s)
    }
}

#[derive(Error, Debug)]
pub enum HoopsError {
    /// An identifier did not resolve in its table.
    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: u32 },

    #[error("Failed to parse id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid game clock: {value} (expected MM:SS)")]
    InvalidGameClock { value: String },

    #[error("Invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HoopsError {
    pub fn not_found(entity: Entity, id: impl Into<u32>) -> Self {
        HoopsError::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// True when this is a lookup miss rather than an input or I/O failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, HoopsError::NotFound { .. })
    }
}
