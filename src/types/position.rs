//! Basketball position types.

use crate::error::HoopsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Basketball player positions.
///
/// Guards (PG, SG), forwards (SF, PF) and center (C). Players are listed at
/// one primary position.
///
/// # Examples
///
/// ```rust
/// use hoopstats::Position;
///
/// let pg: Position = "point guard".parse().unwrap();
/// assert_eq!(pg, Position::PG);
/// assert_eq!(Position::C.to_string(), "C");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    PG,
    SG,
    SF,
    PF,
    C,
}

impl Position {
    /// Long form used in roster messages.
    pub fn full_name(&self) -> &'static str {
        match self {
            Position::PG => "Point Guard",
            Position::SG => "Shooting Guard",
            Position::SF => "Small Forward",
            Position::PF => "Power Forward",
            Position::C => "Center",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::PG => "PG",
            Position::SG => "SG",
            Position::SF => "SF",
            Position::PF => "PF",
            Position::C => "C",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = HoopsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PG" | "POINT GUARD" => Ok(Position::PG),
            "SG" | "SHOOTING GUARD" => Ok(Position::SG),
            "SF" | "SMALL FORWARD" => Ok(Position::SF),
            "PF" | "POWER FORWARD" => Ok(Position::PF),
            "C" | "CENTER" | "CENTRE" => Ok(Position::C),
            _ => Err(HoopsError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
