//! Record types for the six entity tables.
//!
//! Records are plain data with `'static` string fields so the tables can live
//! in `static` slices. None of them expose mutation.

pub mod output;

use crate::types::{
    EventId, EventType, GameClock, InjuryId, InjuryStatus, LeagueId, MatchId, MatchStatus,
    PlayerId, PlayerStatus, Position, SeasonStatus, Severity, TeamId,
};
use serde::Serialize;

pub use output::{MatchDetail, MatchSummary, MatchTeams, TeamPoints};

/// A competition and its current season window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct League {
    pub id: LeagueId,
    pub name: &'static str,
    pub short_name: &'static str,
    pub country: &'static str,
    pub country_short: &'static str,
    pub country_emoji: &'static str,
    pub conference: &'static str,
    pub logo_url: &'static str,
    pub brand_color: &'static str,
    pub season_year: u16,
    /// ISO date
    pub season_start_date: &'static str,
    /// ISO date
    pub season_end_date: &'static str,
    pub season_type: &'static str,
    pub status: SeasonStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub name: &'static str,
    pub short_name: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub conference: &'static str,
    pub division: &'static str,
    pub logo_url: &'static str,
    pub arena_name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub team_id: TeamId,
    pub first_name: &'static str,
    pub last_name: &'static str,
    /// ISO date
    pub date_of_birth: &'static str,
    pub nationality: &'static str,
    pub position: Position,
    pub jersey_number: u8,
    pub height_cm: u16,
    pub weight_kg: u16,
    pub status: PlayerStatus,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A scheduled, live or completed game between two teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub id: MatchId,
    pub league_id: LeagueId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    /// ISO-8601 local tip-off time, no timezone normalization
    pub datetime: &'static str,
    pub venue: &'static str,
    pub home_score: Option<u16>,
    pub away_score: Option<u16>,
    pub overtime: bool,
    pub attendance: u32,
    pub status: MatchStatus,
    pub game_type: &'static str,
}

impl Match {
    /// True when `team_id` plays in this match on either side.
    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}

/// One play-by-play entry.
///
/// `assist_player_id` is kept exactly as recorded; Assist events in the
/// dataset sometimes name the same player in both fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchEvent {
    pub id: EventId,
    pub match_id: MatchId,
    pub player_id: Option<PlayerId>,
    pub team_id: TeamId,
    pub event_type: EventType,
    pub quarter: u8,
    pub game_time: GameClock,
    pub points: u8,
    pub assist_player_id: Option<PlayerId>,
    pub description: &'static str,
    pub timestamp: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InjuryReport {
    pub id: InjuryId,
    pub player_id: PlayerId,
    pub injury_type: &'static str,
    pub severity: Severity,
    /// ISO date
    pub injury_date: &'static str,
    /// ISO date
    pub expected_recovery_date: &'static str,
    pub status: InjuryStatus,
    pub notes: &'static str,
}
