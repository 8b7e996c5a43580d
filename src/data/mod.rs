//! Compiled-in entity tables.
//!
//! Each table is a `static` slice in insertion order. Order is chronological
//! where that makes sense, but only `id` is authoritative. `Dataset` bundles
//! borrowed views of all six tables so the query layer can run over either the
//! embedded data or caller-provided tables.

mod injuries;
mod leagues;
mod match_events;
mod matches;
mod players;
mod teams;

pub use injuries::INJURY_REPORTS;
pub use leagues::LEAGUES;
pub use match_events::MATCH_EVENTS;
pub use matches::MATCHES;
pub use players::PLAYERS;
pub use teams::TEAMS;

use crate::models::{InjuryReport, League, Match, MatchEvent, Player, Team};

/// Read-only view over the six entity tables.
///
/// Copying a `Dataset` copies six slice references; the rows are never
/// duplicated or mutated.
///
/// # Examples
///
/// ```rust
/// use hoopstats::Dataset;
///
/// let data = Dataset::embedded();
/// assert_eq!(data.leagues().len(), 5);
/// assert_eq!(data.teams().len(), 50);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Dataset<'a> {
    leagues: &'a [League],
    teams: &'a [Team],
    players: &'a [Player],
    matches: &'a [Match],
    events: &'a [MatchEvent],
    injuries: &'a [InjuryReport],
}

impl Dataset<'static> {
    /// The tables compiled into this crate.
    pub fn embedded() -> Self {
        Self {
            leagues: LEAGUES,
            teams: TEAMS,
            players: PLAYERS,
            matches: MATCHES,
            events: MATCH_EVENTS,
            injuries: INJURY_REPORTS,
        }
    }
}

impl Default for Dataset<'static> {
    fn default() -> Self {
        Self::embedded()
    }
}

impl<'a> Dataset<'a> {
    /// An empty dataset; every lookup misses.
    pub fn empty() -> Self {
        Self {
            leagues: &[],
            teams: &[],
            players: &[],
            matches: &[],
            events: &[],
            injuries: &[],
        }
    }

    pub fn with_leagues(mut self, leagues: &'a [League]) -> Self {
        self.leagues = leagues;
        self
    }

    pub fn with_teams(mut self, teams: &'a [Team]) -> Self {
        self.teams = teams;
        self
    }

    pub fn with_players(mut self, players: &'a [Player]) -> Self {
        self.players = players;
        self
    }

    pub fn with_matches(mut self, matches: &'a [Match]) -> Self {
        self.matches = matches;
        self
    }

    pub fn with_events(mut self, events: &'a [MatchEvent]) -> Self {
        self.events = events;
        self
    }

    pub fn with_injuries(mut self, injuries: &'a [InjuryReport]) -> Self {
        self.injuries = injuries;
        self
    }

    pub fn leagues(&self) -> &'a [League] {
        self.leagues
    }

    pub fn teams(&self) -> &'a [Team] {
        self.teams
    }

    pub fn players(&self) -> &'a [Player] {
        self.players
    }

    pub fn matches(&self) -> &'a [Match] {
        self.matches
    }

    pub fn events(&self) -> &'a [MatchEvent] {
        self.events
    }

    pub fn injuries(&self) -> &'a [InjuryReport] {
        self.injuries
    }
}
