//! Match card listing and match detail commands

use crate::{models::MatchSummary, types::MatchStatus, Dataset, LeagueId, MatchId, Result, TeamId};

use super::{
    common::{format_match_card, format_match_detail, to_json},
    resolve_league_id,
};

/// Filters for the match card listing. Every filter narrows the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchListParams {
    pub league_id: Option<LeagueId>,
    pub team_id: Option<TeamId>,
    pub status: Option<MatchStatus>,
    pub as_json: bool,
}

/// Build the match cards that pass every filter, earliest first.
pub fn list_match_summaries<'a>(
    data: &Dataset<'a>,
    params: &MatchListParams,
) -> Result<Vec<MatchSummary<'a>>> {
    let league_id = resolve_league_id(params.league_id)?;

    let matches = match (params.team_id, league_id) {
        (Some(team_id), _) => data.matches_for_team(team_id)?,
        (None, Some(league_id)) => data.matches_for_league(league_id)?,
        (None, None) => {
            let mut all: Vec<_> = data.matches().iter().collect();
            all.sort_by_key(|m| (m.datetime, m.id));
            all
        }
    };

    if let Some(league_id) = league_id {
        // validate even when the team filter picked the candidate set
        data.league(league_id)?;
    }

    matches
        .into_iter()
        .filter(|m| league_id.map_or(true, |l| m.league_id == l))
        .filter(|m| params.status.map_or(true, |s| m.status == s))
        .map(|m| data.match_summary(m.id))
        .collect()
}

pub fn render_matches(data: &Dataset<'_>, params: &MatchListParams) -> Result<String> {
    let summaries = list_match_summaries(data, params)?;

    if params.as_json {
        return to_json(&summaries);
    }
    if summaries.is_empty() {
        return Ok("No matches found.".to_string());
    }

    Ok(summaries
        .iter()
        .map(format_match_card)
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn render_match_detail(data: &Dataset<'_>, match_id: MatchId, as_json: bool) -> Result<String> {
    let detail = data.match_detail(match_id)?;

    if as_json {
        return to_json(&detail);
    }

    format_match_detail(&detail)
}

pub fn handle_matches(params: MatchListParams, verbose: bool) -> Result<()> {
    if verbose {
        println!("Filtering matches: {:?}", params);
    }
    println!("{}", render_matches(&Dataset::embedded(), &params)?);
    Ok(())
}

pub fn handle_match_detail(match_id: MatchId, as_json: bool) -> Result<()> {
    println!(
        "{}",
        render_match_detail(&Dataset::embedded(), match_id, as_json)?
    );
    Ok(())
}
