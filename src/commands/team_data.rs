//! League, team and roster listings

use crate::{Dataset, LeagueId, Position, Result, TeamId};

use super::{
    common::{format_league, format_player, format_team, to_json},
    resolve_league_id,
};

/// Render the league list.
pub fn render_leagues(data: &Dataset<'_>, as_json: bool) -> Result<String> {
    if as_json {
        return to_json(data.leagues());
    }

    Ok(data
        .leagues()
        .iter()
        .map(format_league)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Render teams, restricted to one league's participants when a league is
/// given or configured.
pub fn render_teams(
    data: &Dataset<'_>,
    league_id: Option<LeagueId>,
    as_json: bool,
) -> Result<String> {
    let teams = match resolve_league_id(league_id)? {
        Some(league_id) => data.teams_for_league(league_id)?,
        None => data.teams().iter().collect(),
    };

    if as_json {
        return to_json(&teams);
    }

    Ok(teams
        .iter()
        .map(|t| format_team(t))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Render a team header followed by its roster, optionally narrowed to one
/// position.
pub fn render_roster(
    data: &Dataset<'_>,
    team_id: TeamId,
    position: Option<Position>,
    as_json: bool,
) -> Result<String> {
    let team = data.team(team_id)?;
    let mut roster = data.players_for_team(team_id)?;
    if let Some(position) = position {
        roster.retain(|p| p.position == position);
    }

    if as_json {
        return to_json(&roster);
    }

    let mut lines = vec![format_team(team)];
    if roster.is_empty() {
        lines.push(match position {
            Some(position) => format!("No players listed at {}.", position.full_name()),
            None => "No players listed.".to_string(),
        });
    }
    lines.extend(roster.iter().map(|p| format_player(p)));

    Ok(lines.join("\n"))
}

pub fn handle_leagues(as_json: bool) -> Result<()> {
    println!("{}", render_leagues(&Dataset::embedded(), as_json)?);
    Ok(())
}

pub fn handle_teams(league_id: Option<LeagueId>, as_json: bool) -> Result<()> {
    println!("{}", render_teams(&Dataset::embedded(), league_id, as_json)?);
    Ok(())
}

pub fn handle_roster(
    team_id: TeamId,
    position: Option<Position>,
    as_json: bool,
    verbose: bool,
) -> Result<()> {
    if verbose {
        println!("Loading roster for team {}...", team_id);
    }
    println!(
        "{}",
        render_roster(&Dataset::embedded(), team_id, position, as_json)?
    );
    Ok(())
}
