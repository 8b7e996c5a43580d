//! Read-only accessor layer over the entity tables.
//!
//! Every lookup by identifier returns `HoopsError::NotFound` when the id does
//! not resolve. Relational accessors check their anchor row first, so asking
//! for the events of a match that does not exist is an error while a match
//! with no recorded events yields an empty list.
//!
//! - `detail`: composite match summary and match detail assembly
//! - `integrity`: referential integrity checks over a whole dataset

pub mod detail;
pub mod integrity;

#[cfg(test)]
mod tests;

use std::cmp::Reverse;

use crate::{
    data::Dataset,
    error::{Entity, HoopsError, Result},
    models::{InjuryReport, League, Match, MatchEvent, MatchTeams, Player, Team},
    types::{EventId, InjuryId, LeagueId, MatchId, MatchStatus, PlayerId, TeamId},
};

/// Linear scan for the row whose id matches. Tables are small and fixed, so
/// no index is kept.
fn find_by_id<'a, T>(
    rows: &'a [T],
    entity: Entity,
    id: u32,
    id_of: impl Fn(&T) -> u32,
) -> Result<&'a T> {
    rows.iter().find(|row| id_of(row) == id).ok_or_else(|| {
        log::debug!("{} {} did not resolve", entity, id);
        HoopsError::not_found(entity, id)
    })
}

impl<'a> Dataset<'a> {
    pub fn league(&self, id: LeagueId) -> Result<&'a League> {
        find_by_id(self.leagues(), Entity::League, id.as_u32(), |l| {
            l.id.as_u32()
        })
    }

    pub fn team(&self, id: TeamId) -> Result<&'a Team> {
        find_by_id(self.teams(), Entity::Team, id.as_u32(), |t| t.id.as_u32())
    }

    pub fn player(&self, id: PlayerId) -> Result<&'a Player> {
        find_by_id(self.players(), Entity::Player, id.as_u32(), |p| {
            p.id.as_u32()
        })
    }

    /// `match` is a keyword, hence the longer name.
    pub fn match_by_id(&self, id: MatchId) -> Result<&'a Match> {
        find_by_id(self.matches(), Entity::Match, id.as_u32(), |m| {
            m.id.as_u32()
        })
    }

    pub fn event(&self, id: EventId) -> Result<&'a MatchEvent> {
        find_by_id(self.events(), Entity::MatchEvent, id.as_u32(), |e| {
            e.id.as_u32()
        })
    }

    pub fn injury(&self, id: InjuryId) -> Result<&'a InjuryReport> {
        find_by_id(self.injuries(), Entity::InjuryReport, id.as_u32(), |i| {
            i.id.as_u32()
        })
    }

    /// Events of a match in play order.
    ///
    /// Quarters ascend; within a quarter the clock counts down, so the
    /// larger `game_time` comes first. Ties fall back to ascending id.
    pub fn events_for_match(&self, match_id: MatchId) -> Result<Vec<&'a MatchEvent>> {
        self.match_by_id(match_id)?;

        let mut events: Vec<&'a MatchEvent> = self
            .events()
            .iter()
            .filter(|e| e.match_id == match_id)
            .collect();
        events.sort_by_key(|e| (e.quarter, Reverse(e.game_time), e.id));

        Ok(events)
    }

    /// Injury history of a player, oldest first.
    pub fn injuries_for_player(&self, player_id: PlayerId) -> Result<Vec<&'a InjuryReport>> {
        self.player(player_id)?;

        let mut injuries: Vec<&'a InjuryReport> = self
            .injuries()
            .iter()
            .filter(|i| i.player_id == player_id)
            .collect();
        // ISO dates order lexicographically
        injuries.sort_by_key(|i| (i.injury_date, i.id));

        Ok(injuries)
    }

    /// Home and away teams of a match. The home side is resolved first.
    pub fn teams_for_match(&self, match_id: MatchId) -> Result<MatchTeams<'a>> {
        let m = self.match_by_id(match_id)?;

        Ok(MatchTeams {
            home: self.team(m.home_team_id)?,
            away: self.team(m.away_team_id)?,
        })
    }

    pub fn league_for_match(&self, match_id: MatchId) -> Result<&'a League> {
        let m = self.match_by_id(match_id)?;
        self.league(m.league_id)
    }

    /// Roster of a team ordered by jersey number.
    pub fn players_for_team(&self, team_id: TeamId) -> Result<Vec<&'a Player>> {
        self.team(team_id)?;

        let mut players: Vec<&'a Player> = self
            .players()
            .iter()
            .filter(|p| p.team_id == team_id)
            .collect();
        players.sort_by_key(|p| (p.jersey_number, p.id));

        Ok(players)
    }

    /// Home and away fixtures of a team, earliest first.
    pub fn matches_for_team(&self, team_id: TeamId) -> Result<Vec<&'a Match>> {
        self.team(team_id)?;

        Ok(sorted_by_tipoff(
            self.matches().iter().filter(|m| m.involves(team_id)),
        ))
    }

    pub fn matches_for_league(&self, league_id: LeagueId) -> Result<Vec<&'a Match>> {
        self.league(league_id)?;

        Ok(sorted_by_tipoff(
            self.matches().iter().filter(|m| m.league_id == league_id),
        ))
    }

    /// All matches in a given state, earliest first. Never fails; an unused
    /// status simply matches nothing.
    pub fn matches_with_status(&self, status: MatchStatus) -> Vec<&'a Match> {
        sorted_by_tipoff(self.matches().iter().filter(|m| m.status == status))
    }

    /// Injuries in effect on `date`: reported on or before it and not yet
    /// past the expected recovery date.
    pub fn active_injuries_on(&self, date: chrono::NaiveDate) -> Vec<&'a InjuryReport> {
        let day = date.format("%Y-%m-%d").to_string();

        let mut injuries: Vec<&'a InjuryReport> = self
            .injuries()
            .iter()
            .filter(|i| i.injury_date <= day.as_str() && day.as_str() < i.expected_recovery_date)
            .collect();
        injuries.sort_by_key(|i| (i.injury_date, i.id));

        injuries
    }

    /// Teams that appear on either side of a league's matches, by id.
    pub fn teams_for_league(&self, league_id: LeagueId) -> Result<Vec<&'a Team>> {
        let mut team_ids: Vec<TeamId> = self
            .matches_for_league(league_id)?
            .into_iter()
            .flat_map(|m| [m.home_team_id, m.away_team_id])
            .collect();
        team_ids.sort();
        team_ids.dedup();

        team_ids.into_iter().map(|id| self.team(id)).collect()
    }
}

fn sorted_by_tipoff<'a>(matches: impl Iterator<Item = &'a Match>) -> Vec<&'a Match> {
    let mut matches: Vec<&'a Match> = matches.collect();
    matches.sort_by_key(|m| (m.datetime, m.id));
    matches
}
