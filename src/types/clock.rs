//! Game clock handling.
//!
//! Basketball clocks count down within a quarter, so a larger `GameClock`
//! value happened earlier in play.

use crate::error::HoopsError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Time remaining in a quarter, displayed as `MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameClock {
    remaining_secs: u16,
}

impl GameClock {
    pub const fn new(minutes: u16, seconds: u16) -> Self {
        Self {
            remaining_secs: minutes * 60 + seconds,
        }
    }

    pub fn remaining_secs(&self) -> u16 {
        self.remaining_secs
    }

    pub fn minutes(&self) -> u16 {
        self.remaining_secs / 60
    }

    pub fn seconds(&self) -> u16 {
        self.remaining_secs % 60
    }
}

impl fmt::Display for GameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes(), self.seconds())
    }
}

impl FromStr for GameClock {
    type Err = HoopsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || HoopsError::InvalidGameClock {
            value: s.to_string(),
        };

        let (minutes, seconds) = s.trim().split_once(':').ok_or_else(invalid)?;
        let minutes: u16 = minutes.parse().map_err(|_| invalid())?;
        let seconds: u16 = seconds.parse().map_err(|_| invalid())?;

        // 59 minutes keeps the total inside u16 with room to spare
        if seconds >= 60 || minutes > 59 {
            return Err(invalid());
        }

        Ok(GameClock::new(minutes, seconds))
    }
}

impl Serialize for GameClock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GameClock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
