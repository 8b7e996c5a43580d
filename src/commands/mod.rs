//! Command implementations for the hoopstats CLI

pub mod check;
pub mod common;
pub mod export;
pub mod injury_data;
pub mod match_data;
pub mod team_data;


use crate::{LeagueId, Result, LEAGUE_ID_ENV_VAR};

/// Pick the league filter: an explicit flag wins, then `HOOPSTATS_LEAGUE_ID`.
///
/// No league at all is fine (every command works across leagues), but a set
/// env var that does not parse is reported rather than silently ignored.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<Option<LeagueId>> {
    if league_id.is_some() {
        return Ok(league_id);
    }

    match std::env::var(LEAGUE_ID_ENV_VAR).ok() {
        Some(raw) if !raw.trim().is_empty() => raw.parse::<LeagueId>().map(Some),
        _ => Ok(None),
    }
}
