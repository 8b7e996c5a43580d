//! View models assembled by the query layer for presentation consumers.
//!
//! `MatchSummary` backs a match card and `MatchDetail` backs a match detail
//! view. Both borrow from the tables and serialize straight to JSON.

use super::{League, Match, MatchEvent, Player, Team};
use crate::types::PlayerId;
use serde::Serialize;

/// Home and away sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchTeams<'a> {
    pub home: &'a Team,
    pub away: &'a Team,
}

/// Points credited to each side by the recorded events.
///
/// The play-by-play is a highlight feed, so these totals do not have to agree
/// with the match scoreline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeamPoints {
    pub home: u32,
    pub away: u32,
}

/// Everything a match card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchSummary<'a> {
    pub r#match: &'a Match,
    pub league: &'a League,
    pub home: &'a Team,
    pub away: &'a Team,
}

impl<'a> MatchSummary<'a> {
    /// `(home, away)` score once the match is under way and both sides have
    /// one. A scheduled or postponed match shows no score.
    pub fn scoreline(&self) -> Option<(u16, u16)> {
        if !self.r#match.status.has_score() {
            return None;
        }
        match (self.r#match.home_score, self.r#match.away_score) {
            (Some(home), Some(away)) => Some((home, away)),
            _ => None,
        }
    }

    /// Leading team, `None` for a tie or an unplayed match.
    pub fn leader(&self) -> Option<&'a Team> {
        let (home, away) = self.scoreline()?;
        match home.cmp(&away) {
            std::cmp::Ordering::Greater => Some(self.home),
            std::cmp::Ordering::Less => Some(self.away),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Everything a match detail view shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchDetail<'a> {
    pub r#match: &'a Match,
    pub league: &'a League,
    pub home: &'a Team,
    pub away: &'a Team,
    /// Quarter ascending, clock descending
    pub events: Vec<&'a MatchEvent>,
    /// Players named by the events, in order of first appearance
    pub players: Vec<&'a Player>,
    pub event_points: TeamPoints,
}

impl<'a> MatchDetail<'a> {
    pub fn summary(&self) -> MatchSummary<'a> {
        MatchSummary {
            r#match: self.r#match,
            league: self.league,
            home: self.home,
            away: self.away,
        }
    }

    /// Look up one of the involved players without another table scan.
    pub fn player(&self, player_id: PlayerId) -> Option<&'a Player> {
        self.players.iter().copied().find(|p| p.id == player_id)
    }
}
