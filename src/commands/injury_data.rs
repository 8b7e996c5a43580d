//! Injury report listing

use chrono::NaiveDate;

use crate::{models::InjuryReport, Dataset, PlayerId, Result};

use super::common::{format_injury, to_json};

/// Accepts `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")?)
}

/// Injury reports narrowed by player and by the date they are in effect.
pub fn list_injuries<'a>(
    data: &Dataset<'a>,
    player_id: Option<PlayerId>,
    on: Option<NaiveDate>,
) -> Result<Vec<&'a InjuryReport>> {
    let mut injuries = match (player_id, on) {
        (Some(player_id), _) => data.injuries_for_player(player_id)?,
        (None, Some(date)) => data.active_injuries_on(date),
        (None, None) => data.injuries().iter().collect(),
    };

    if let (Some(_), Some(date)) = (player_id, on) {
        let active = data.active_injuries_on(date);
        injuries.retain(|i| active.iter().any(|a| a.id == i.id));
    }

    Ok(injuries)
}

pub fn render_injuries(
    data: &Dataset<'_>,
    player_id: Option<PlayerId>,
    on: Option<&str>,
    as_json: bool,
) -> Result<String> {
    let on = on.map(parse_date).transpose()?;
    let injuries = list_injuries(data, player_id, on)?;

    if as_json {
        return to_json(&injuries);
    }
    if injuries.is_empty() {
        return Ok("No injury reports found.".to_string());
    }

    let lines = injuries
        .iter()
        .map(|i| data.player(i.player_id).map(|p| format_injury(i, p)))
        .collect::<Result<Vec<_>>>()?;

    Ok(lines.join("\n"))
}

pub fn handle_injuries(player_id: Option<PlayerId>, on: Option<String>, as_json: bool) -> Result<()> {
    println!(
        "{}",
        render_injuries(&Dataset::embedded(), player_id, on.as_deref(), as_json)?
    );
    Ok(())
}
