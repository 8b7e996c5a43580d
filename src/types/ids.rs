//! ID types for the hoopstats entity tables.

use crate::error::{HoopsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! table_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            pub fn as_u32(&self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = HoopsError;

            fn from_str(s: &str) -> Result<Self> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> u32 {
                id.0
            }
        }
    };
}

table_id!(
    /// Type-safe wrapper for league IDs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hoopstats::LeagueId;
    ///
    /// let league_id = LeagueId::new(1);
    /// assert_eq!(league_id.as_u32(), 1);
    /// assert_eq!(league_id.to_string(), "1");
    /// ```
    LeagueId
);

table_id!(
    /// Type-safe wrapper for team IDs
    TeamId
);

table_id!(
    /// Type-safe wrapper for player IDs
    PlayerId
);

table_id!(
    /// Type-safe wrapper for match IDs
    MatchId
);

table_id!(
    /// Type-safe wrapper for match event IDs
    EventId
);

table_id!(
    /// Type-safe wrapper for injury report IDs
    InjuryId
);
