//! Type-safe wrappers and enums for the basketball dataset.

pub mod clock;
pub mod ids;
pub mod position;
pub mod status;

pub use clock::GameClock;
pub use ids::{EventId, InjuryId, LeagueId, MatchId, PlayerId, TeamId};
pub use position::Position;
pub use status::{EventType, InjuryStatus, MatchStatus, PlayerStatus, SeasonStatus, Severity};
