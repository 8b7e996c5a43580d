//! Text rendering shared across commands.
//!
//! Every formatter returns a `String` so handlers only decide where the text
//! goes and tests can check the exact output.

use serde::Serialize;

use crate::{
    error::{Entity, HoopsError},
    models::{InjuryReport, League, MatchDetail, MatchEvent, MatchSummary, Player, Team},
    types::{MatchStatus, PlayerId},
    Result,
};

/// Pretty JSON for `--json` output.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn format_league(league: &League) -> String {
    format!(
        "[{}] {} ({}) {} {} season {} to {} - {}",
        league.id,
        league.short_name,
        league.name,
        league.country,
        league.season_year,
        league.season_start_date,
        league.season_end_date,
        league.status
    )
}

pub fn format_team(team: &Team) -> String {
    format!(
        "[{}] {} ({}) - {}",
        team.id, team.name, team.short_name, team.arena_name
    )
}

/// One-line match card: league, teams, score or status. A live match also
/// names the side in front.
pub fn format_match_card(summary: &MatchSummary<'_>) -> String {
    let m = summary.r#match;
    let score = match summary.scoreline() {
        Some((home, away)) => {
            let ot = if m.overtime { " OT" } else { "" };
            format!("{} - {}{}", home, away, ot)
        }
        None => "vs".to_string(),
    };

    let mut card = format!(
        "[{}] {} {} | {} {} {} | {}",
        m.id,
        summary.league.short_name,
        m.datetime,
        summary.home.name,
        score,
        summary.away.name,
        m.status
    );
    if m.status == MatchStatus::Live && summary.scoreline().is_some() {
        match summary.leader() {
            Some(team) => card.push_str(&format!(", {} leads", team.short_name)),
            None => card.push_str(", tied"),
        }
    }

    card
}

pub fn format_player(player: &Player) -> String {
    format!(
        "#{:<3} {:<24} {:<2} {}cm {}kg {} [{}]",
        player.jersey_number,
        player.full_name(),
        player.position,
        player.height_cm,
        player.weight_kg,
        player.nationality,
        player.status
    )
}

pub fn format_injury(injury: &InjuryReport, player: &Player) -> String {
    format!(
        "[{}] {}: {} ({}) {} -> {} - {}",
        injury.id,
        player.full_name(),
        injury.injury_type,
        injury.severity,
        injury.injury_date,
        injury.expected_recovery_date,
        injury.status
    )
}

/// Play-by-play line. Players are looked up in the detail's involved list;
/// one missing from it is a `NotFound`.
pub fn format_event(event: &MatchEvent, detail: &MatchDetail<'_>) -> Result<String> {
    let name = |id: PlayerId| -> Result<String> {
        detail
            .player(id)
            .map(|p| p.full_name())
            .ok_or_else(|| HoopsError::not_found(Entity::Player, id))
    };
    let side = if event.team_id == detail.home.id {
        detail.home.short_name
    } else {
        detail.away.short_name
    };

    let mut line = format!(
        "Q{} {} {:<3} {}",
        event.quarter, event.game_time, side, event.event_type
    );
    if let Some(player_id) = event.player_id {
        line.push_str(&format!(" - {}", name(player_id)?));
    }
    if event.points > 0 {
        line.push_str(&format!(" (+{})", event.points));
    }
    match event.assist_player_id {
        Some(assist) if Some(assist) != event.player_id => {
            line.push_str(&format!(", assist {}", name(assist)?));
        }
        _ => {}
    }
    line.push_str(&format!(": {}", event.description));

    Ok(line)
}

/// Multi-line match detail view.
pub fn format_match_detail(detail: &MatchDetail<'_>) -> Result<String> {
    let mut lines = vec![
        format_match_card(&detail.summary()),
        format!(
            "{} | {} | attendance {}",
            detail.league.name, detail.r#match.venue, detail.r#match.attendance
        ),
    ];

    if detail.events.is_empty() {
        lines.push("No play-by-play recorded.".to_string());
    } else {
        lines.push(String::new());
        for event in &detail.events {
            lines.push(format_event(event, detail)?);
        }
        lines.push(format!(
            "Points in feed: {} {}, {} {}",
            detail.home.short_name,
            detail.event_points.home,
            detail.away.short_name,
            detail.event_points.away
        ));
    }

    Ok(lines.join("\n"))
}
