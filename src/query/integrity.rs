//! Referential integrity checks.
//!
//! Lookups assume every foreign key resolves; these checks verify that
//! assumption for a whole dataset and report every violation found instead of
//! stopping at the first.

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::{data::Dataset, error::Entity};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single broken rule in a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityViolation {
    DuplicateId {
        #[serde(serialize_with = "serialize_entity")]
        entity: Entity,
        id: u32,
    },
    DanglingReference {
        #[serde(serialize_with = "serialize_entity")]
        from: Entity,
        from_id: u32,
        field: &'static str,
        #[serde(serialize_with = "serialize_entity")]
        to: Entity,
        to_id: u32,
    },
    /// The event credits a team that is neither home nor away.
    EventTeamNotInMatch { event_id: u32, team_id: u32 },
    /// Home and away are the same team.
    SelfMatch { match_id: u32 },
    InvalidDate {
        #[serde(serialize_with = "serialize_entity")]
        entity: Entity,
        id: u32,
        field: &'static str,
        value: &'static str,
    },
    RecoveryBeforeInjury { injury_id: u32 },
    /// The season end date precedes the start date.
    SeasonEndsBeforeStart { league_id: u32 },
}

fn serialize_entity<S: serde::Serializer>(entity: &Entity, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(entity)
}

impl fmt::Display for IntegrityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityViolation::DuplicateId { entity, id } => {
                write!(f, "{} id {} appears more than once", entity, id)
            }
            IntegrityViolation::DanglingReference {
                from,
                from_id,
                field,
                to,
                to_id,
            } => write!(
                f,
                "{} {} field `{}` points at missing {} {}",
                from, from_id, field, to, to_id
            ),
            IntegrityViolation::EventTeamNotInMatch { event_id, team_id } => write!(
                f,
                "Match event {} credits team {} which is not playing",
                event_id, team_id
            ),
            IntegrityViolation::SelfMatch { match_id } => {
                write!(f, "Match {} has the same home and away team", match_id)
            }
            IntegrityViolation::InvalidDate {
                entity,
                id,
                field,
                value,
            } => write!(f, "{} {} field `{}` is not a date: {}", entity, id, field, value),
            IntegrityViolation::RecoveryBeforeInjury { injury_id } => write!(
                f,
                "Injury report {} expects recovery before the injury date",
                injury_id
            ),
            IntegrityViolation::SeasonEndsBeforeStart { league_id } => {
                write!(f, "League {} season ends before it starts", league_id)
            }
        }
    }
}

/// Accumulates violations while remembering the ids seen in each table.
#[derive(Default)]
struct Checker {
    out: Vec<IntegrityViolation>,
    leagues: HashSet<u32>,
    teams: HashSet<u32>,
    players: HashSet<u32>,
    matches: HashSet<u32>,
}

impl Checker {
    fn collect_ids(&mut self, entity: Entity, ids: impl Iterator<Item = u32>) -> HashSet<u32> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for id in ids {
            if !seen.insert(id) && reported.insert(id) {
                self.out.push(IntegrityViolation::DuplicateId { entity, id });
            }
        }
        seen
    }

    fn reference(&mut self, from: Entity, from_id: u32, field: &'static str, to: Entity, to_id: u32) {
        let known = match to {
            Entity::League => &self.leagues,
            Entity::Team => &self.teams,
            Entity::Player => &self.players,
            Entity::Match => &self.matches,
            // nothing references events or injury reports
            Entity::MatchEvent | Entity::InjuryReport => return,
        };
        if !known.contains(&to_id) {
            self.out.push(IntegrityViolation::DanglingReference {
                from,
                from_id,
                field,
                to,
                to_id,
            });
        }
    }

    fn date(
        &mut self,
        entity: Entity,
        id: u32,
        field: &'static str,
        value: &'static str,
    ) -> Option<NaiveDate> {
        match NaiveDate::parse_from_str(value, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                self.out.push(IntegrityViolation::InvalidDate {
                    entity,
                    id,
                    field,
                    value,
                });
                None
            }
        }
    }
}

/// Run every check against `data`. An empty result means the dataset is
/// consistent.
///
/// Assist events that name the scorer as their own assist are allowed.
pub fn check(data: &Dataset<'_>) -> Vec<IntegrityViolation> {
    let mut c = Checker::default();

    c.leagues = c.collect_ids(Entity::League, data.leagues().iter().map(|l| l.id.as_u32()));
    c.teams = c.collect_ids(Entity::Team, data.teams().iter().map(|t| t.id.as_u32()));
    c.players = c.collect_ids(Entity::Player, data.players().iter().map(|p| p.id.as_u32()));
    c.matches = c.collect_ids(Entity::Match, data.matches().iter().map(|m| m.id.as_u32()));
    c.collect_ids(Entity::MatchEvent, data.events().iter().map(|e| e.id.as_u32()));
    c.collect_ids(Entity::InjuryReport, data.injuries().iter().map(|i| i.id.as_u32()));

    for league in data.leagues() {
        let id = league.id.as_u32();
        let start = c.date(Entity::League, id, "season_start_date", league.season_start_date);
        let end = c.date(Entity::League, id, "season_end_date", league.season_end_date);
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                c.out.push(IntegrityViolation::SeasonEndsBeforeStart { league_id: id });
            }
        }
    }

    for player in data.players() {
        let id = player.id.as_u32();
        c.reference(Entity::Player, id, "team_id", Entity::Team, player.team_id.as_u32());
        c.date(Entity::Player, id, "date_of_birth", player.date_of_birth);
    }

    for m in data.matches() {
        let id = m.id.as_u32();
        c.reference(Entity::Match, id, "league_id", Entity::League, m.league_id.as_u32());
        c.reference(Entity::Match, id, "home_team_id", Entity::Team, m.home_team_id.as_u32());
        c.reference(Entity::Match, id, "away_team_id", Entity::Team, m.away_team_id.as_u32());
        if m.home_team_id == m.away_team_id {
            c.out.push(IntegrityViolation::SelfMatch { match_id: id });
        }
    }

    for event in data.events() {
        let id = event.id.as_u32();
        c.reference(Entity::MatchEvent, id, "match_id", Entity::Match, event.match_id.as_u32());
        c.reference(Entity::MatchEvent, id, "team_id", Entity::Team, event.team_id.as_u32());
        if let Some(player_id) = event.player_id {
            c.reference(Entity::MatchEvent, id, "player_id", Entity::Player, player_id.as_u32());
        }
        if let Some(assist_id) = event.assist_player_id {
            c.reference(Entity::MatchEvent, id, "assist_player_id", Entity::Player, assist_id.as_u32());
        }

        if let Ok(m) = data.match_by_id(event.match_id) {
            if !m.involves(event.team_id) {
                c.out.push(IntegrityViolation::EventTeamNotInMatch {
                    event_id: id,
                    team_id: event.team_id.as_u32(),
                });
            }
        }
    }

    for injury in data.injuries() {
        let id = injury.id.as_u32();
        c.reference(Entity::InjuryReport, id, "player_id", Entity::Player, injury.player_id.as_u32());

        let injured = c.date(Entity::InjuryReport, id, "injury_date", injury.injury_date);
        let recovery = c.date(Entity::InjuryReport, id, "expected_recovery_date", injury.expected_recovery_date);
        if let (Some(injured), Some(recovery)) = (injured, recovery) {
            if recovery < injured {
                c.out.push(IntegrityViolation::RecoveryBeforeInjury { injury_id: id });
            }
        }
    }

    for violation in &c.out {
        log::warn!("integrity: {}", violation);
    }

    c.out
}
