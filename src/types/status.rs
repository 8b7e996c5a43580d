//! Closed vocabularies used by the entity tables.
//!
//! Each enum serializes with the spelling used in the published dataset
//! ("Day-to-day", "Three Point", ...), so JSON exports match what front-end
//! consumers already expect.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a league's season currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonStatus {
    Upcoming,
    #[serde(rename = "In Progress")]
    InProgress,
    Finished,
}

impl fmt::Display for SeasonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeasonStatus::Upcoming => "Upcoming",
            SeasonStatus::InProgress => "In Progress",
            SeasonStatus::Finished => "Finished",
        };
        write!(f, "{}", s)
    }
}

/// Roster availability of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerStatus {
    Active,
    Injured,
    Inactive,
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayerStatus::Active => "Active",
            PlayerStatus::Injured => "Injured",
            PlayerStatus::Inactive => "Inactive",
        };
        write!(f, "{}", s)
    }
}

/// Lifecycle of a match.
///
/// Scores are only present once a match is `Live` or `Final`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    Scheduled,
    Live,
    Final,
    Postponed,
}

impl MatchStatus {
    /// True when the match has started and carries a score.
    pub fn has_score(&self) -> bool {
        matches!(self, MatchStatus::Live | MatchStatus::Final)
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchStatus::Scheduled => "Scheduled",
            MatchStatus::Live => "Live",
            MatchStatus::Final => "Final",
            MatchStatus::Postponed => "Postponed",
        };
        write!(f, "{}", s)
    }
}

/// Play-by-play event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "Field Goal")]
    FieldGoal,
    #[serde(rename = "Three Point")]
    ThreePoint,
    #[serde(rename = "Free Throw")]
    FreeThrow,
    Rebound,
    Assist,
    Block,
    Steal,
    Turnover,
    Foul,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventType::FieldGoal => "Field Goal",
            EventType::ThreePoint => "Three Point",
            EventType::FreeThrow => "Free Throw",
            EventType::Rebound => "Rebound",
            EventType::Assist => "Assist",
            EventType::Block => "Block",
            EventType::Steal => "Steal",
            EventType::Turnover => "Turnover",
            EventType::Foul => "Foul",
        };
        write!(f, "{}", s)
    }
}

/// Injury severity grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Minor,
    Moderate,
    Major,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Minor => "Minor",
            Severity::Moderate => "Moderate",
            Severity::Major => "Major",
        };
        write!(f, "{}", s)
    }
}

/// Game availability designation attached to an injury report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InjuryStatus {
    Probable,
    Questionable,
    #[serde(rename = "Day-to-day")]
    DayToDay,
    Out,
    #[serde(rename = "Out for Season")]
    OutForSeason,
}

impl InjuryStatus {
    /// True when the player is not expected to play.
    pub fn is_out(&self) -> bool {
        matches!(self, InjuryStatus::Out | InjuryStatus::OutForSeason)
    }
}

impl fmt::Display for InjuryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InjuryStatus::Probable => "Probable",
            InjuryStatus::Questionable => "Questionable",
            InjuryStatus::DayToDay => "Day-to-day",
            InjuryStatus::Out => "Out",
            InjuryStatus::OutForSeason => "Out for Season",
        };
        write!(f, "{}", s)
    }
}
