//! Composite views over a single match.
//!
//! Both builders stop at the first reference that does not resolve and return
//! that `NotFound`; a half-filled summary or detail is never produced.

use crate::{
    data::Dataset,
    error::Result,
    models::{MatchDetail, MatchSummary, Player, TeamPoints},
    types::MatchId,
};

impl<'a> Dataset<'a> {
    /// Match card: the match with its league and both teams.
    pub fn match_summary(&self, match_id: MatchId) -> Result<MatchSummary<'a>> {
        let m = self.match_by_id(match_id)?;
        let league = self.league(m.league_id)?;
        let teams = self.teams_for_match(match_id)?;

        Ok(MatchSummary {
            r#match: m,
            league,
            home: teams.home,
            away: teams.away,
        })
    }

    /// Match detail: the summary plus the play-by-play and every player it
    /// names.
    ///
    /// Players are collected scorer first, then assist, in event order, each
    /// listed once. A self-assist therefore contributes a single entry.
    pub fn match_detail(&self, match_id: MatchId) -> Result<MatchDetail<'a>> {
        let summary = self.match_summary(match_id)?;
        let events = self.events_for_match(match_id)?;

        let mut players: Vec<&'a Player> = Vec::new();
        let mut event_points = TeamPoints::default();

        for event in &events {
            self.team(event.team_id)?;

            for player_id in [event.player_id, event.assist_player_id]
                .into_iter()
                .flatten()
            {
                let player = self.player(player_id)?;
                if !players.iter().any(|p| p.id == player.id) {
                    players.push(player);
                }
            }

            if event.team_id == summary.home.id {
                event_points.home += u32::from(event.points);
            } else if event.team_id == summary.away.id {
                event_points.away += u32::from(event.points);
            } else {
                log::warn!(
                    "event {} credits team {} which is not playing match {}",
                    event.id,
                    event.team_id,
                    match_id
                );
            }
        }

        log::debug!(
            "assembled match {} detail: {} events, {} players",
            match_id,
            events.len(),
            players.len()
        );

        Ok(MatchDetail {
            r#match: summary.r#match,
            league: summary.league,
            home: summary.home,
            away: summary.away,
            events,
            players,
            event_points,
        })
    }
}
