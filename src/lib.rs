//! Basketball Statistics Dataset Library
//!
//! Compiled-in tables of leagues, teams, players, matches, play-by-play
//! events and injury reports, with a typed read-only query layer on top.
//!
//! ## Features
//!
//! - **Static Tables**: Six `static` slices, never mutated, safe to share across threads
//! - **Typed Identifiers**: One id newtype per table so joins cannot mix them up
//! - **Lookups and Joins**: Point lookups, play-by-play ordering, rosters, injury history
//! - **View Models**: Match card and match detail structures ready for JSON
//! - **Integrity Checks**: Verify every foreign key in a dataset resolves
//!
//! ## Quick Start
//!
//! ```rust
//! use hoopstats::{Dataset, MatchId};
//!
//! # fn example() -> hoopstats::Result<()> {
//! let data = Dataset::embedded();
//!
//! let teams = data.teams_for_match(MatchId::new(31))?;
//! assert_eq!(teams.home.name, "Denver Nuggets");
//!
//! for event in data.events_for_match(MatchId::new(28))? {
//!     println!("Q{} {} {}", event.quarter, event.game_time, event.event_type);
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! Every lookup by id returns [`HoopsError::NotFound`] when the id does not
//! resolve; composite views fail with the first unresolved reference.
//!
//! ## Environment Configuration
//!
//! The CLI reads a default league filter from the environment:
//! ```bash
//! export HOOPSTATS_LEAGUE_ID=1
//! ```

pub mod cli;
pub mod commands;
pub mod data;
pub mod error;
pub mod models;
pub mod query;
pub mod types;

// Re-export commonly used types
pub use data::Dataset;
pub use error::{Entity, HoopsError, Result};
pub use models::{InjuryReport, League, Match, MatchDetail, MatchEvent, MatchSummary, Player, Team};
pub use types::{EventId, GameClock, InjuryId, LeagueId, MatchId, PlayerId, Position, TeamId};

pub const LEAGUE_ID_ENV_VAR: &str = "HOOPSTATS_LEAGUE_ID";
