//! Unit tests for the accessor layer

use super::*;
use crate::models::TeamPoints;
use crate::types::{EventType, GameClock, InjuryStatus, Position, Severity};

fn data() -> Dataset<'static> {
    Dataset::embedded()
}

fn event_ids(events: &[&MatchEvent]) -> Vec<u32> {
    events.iter().map(|e| e.id.as_u32()).collect()
}

#[cfg(test)]
mod lookup_tests {
    use super::*;

    #[test]
    fn test_point_lookups_resolve() {
        let data = data();

        assert_eq!(data.league(LeagueId::new(1)).unwrap().short_name, "NBA");
        assert_eq!(data.team(TeamId::new(8)).unwrap().name, "Denver Nuggets");
        assert_eq!(data.player(PlayerId::new(1001)).unwrap().position, Position::PG);
        assert_eq!(
            data.match_by_id(MatchId::new(28)).unwrap().status,
            MatchStatus::Live
        );
        assert_eq!(
            data.event(EventId::new(3005)).unwrap().event_type,
            EventType::Assist
        );
        assert_eq!(
            data.injury(InjuryId::new(4008)).unwrap().severity,
            Severity::Major
        );
    }

    #[test]
    fn test_missing_team_is_not_found() {
        match data().team(TeamId::new(999999)) {
            Err(HoopsError::NotFound { entity, id }) => {
                assert_eq!(entity, Entity::Team);
                assert_eq!(id, 999999);
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_every_lookup_reports_its_own_entity() {
        let data = data();

        let cases = [
            (data.league(LeagueId::new(99)).unwrap_err(), Entity::League),
            (data.player(PlayerId::new(1)).unwrap_err(), Entity::Player),
            (data.match_by_id(MatchId::new(1)).unwrap_err(), Entity::Match),
            (data.event(EventId::new(1)).unwrap_err(), Entity::MatchEvent),
            (data.injury(InjuryId::new(1)).unwrap_err(), Entity::InjuryReport),
        ];

        for (error, expected) in cases {
            match error {
                HoopsError::NotFound { entity, .. } => assert_eq!(entity, expected),
                other => panic!("Expected NotFound, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_empty_dataset_misses_everything() {
        let data = Dataset::empty();
        assert!(data.team(TeamId::new(8)).is_err());
        assert!(data.matches_with_status(MatchStatus::Live).is_empty());
    }
}

#[cfg(test)]
mod relation_tests {
    use super::*;

    #[test]
    fn test_events_for_match_in_play_order() {
        let events = data().events_for_match(MatchId::new(28)).unwrap();

        assert_eq!(
            event_ids(&events),
            vec![3001, 3002, 3003, 3004, 3005, 3006, 3007]
        );
        assert!(events.iter().all(|e| e.match_id == MatchId::new(28)));
    }

    #[test]
    fn test_events_within_quarter_follow_clock_down() {
        // 3011 (02:10), 3012 (03:00) and 3013 (02:45) are all third quarter
        let events = data().events_for_match(MatchId::new(31)).unwrap();

        assert_eq!(
            event_ids(&events),
            vec![3008, 3009, 3010, 3012, 3013, 3011, 3014]
        );

        for pair in events.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(
                a.quarter < b.quarter || (a.quarter == b.quarter && a.game_time >= b.game_time)
            );
        }
    }

    #[test]
    fn test_events_for_match_ties_break_on_id() {
        let rows = [
            MatchEvent {
                id: EventId::new(2),
                ..data().event(EventId::new(3001)).unwrap().clone()
            },
            MatchEvent {
                id: EventId::new(1),
                ..data().event(EventId::new(3001)).unwrap().clone()
            },
        ];
        let data = data().with_events(&rows);

        let events = data.events_for_match(MatchId::new(28)).unwrap();
        assert_eq!(event_ids(&events), vec![1, 2]);
    }

    #[test]
    fn test_events_for_match_without_events_is_empty() {
        let events = data().events_for_match(MatchId::new(26)).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_events_for_unknown_match_is_not_found() {
        let result = data().events_for_match(MatchId::new(1234));
        assert!(matches!(
            result,
            Err(HoopsError::NotFound {
                entity: Entity::Match,
                id: 1234
            })
        ));
    }

    #[test]
    fn test_injuries_for_player() {
        let injuries = data().injuries_for_player(PlayerId::new(1006)).unwrap();
        assert_eq!(injuries.len(), 1);
        assert_eq!(injuries[0].injury_type, "Foot Sprain");
        assert_eq!(injuries[0].status, InjuryStatus::Out);

        let healthy = data().injuries_for_player(PlayerId::new(1001)).unwrap();
        assert!(healthy.is_empty());

        assert!(data().injuries_for_player(PlayerId::new(7)).is_err());
    }

    #[test]
    fn test_injuries_for_player_oldest_first() {
        let base = data().injury(InjuryId::new(4001)).unwrap().clone();
        let rows = [
            InjuryReport {
                id: InjuryId::new(1),
                injury_date: "2025-12-01",
                ..base.clone()
            },
            InjuryReport {
                id: InjuryId::new(2),
                injury_date: "2025-10-01",
                ..base.clone()
            },
        ];
        let data = data().with_injuries(&rows);

        let injuries = data.injuries_for_player(PlayerId::new(1006)).unwrap();
        let ids: Vec<u32> = injuries.iter().map(|i| i.id.as_u32()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_teams_for_match() {
        let teams = data().teams_for_match(MatchId::new(31)).unwrap();

        assert_eq!(teams.home.id, TeamId::new(8));
        assert_eq!(teams.home.name, "Denver Nuggets");
        assert_eq!(teams.away.id, TeamId::new(9));
        assert_eq!(teams.away.name, "Detroit Pistons");
    }

    #[test]
    fn test_teams_for_match_fails_on_missing_side() {
        // Only Denver is present, so the away side of match 31 cannot resolve
        let teams = [data().team(TeamId::new(8)).unwrap().clone()];
        let data = data().with_teams(&teams);

        match data.teams_for_match(MatchId::new(31)) {
            Err(HoopsError::NotFound { entity, id }) => {
                assert_eq!(entity, Entity::Team);
                assert_eq!(id, 9);
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_league_for_match() {
        let league = data().league_for_match(MatchId::new(85)).unwrap();
        assert_eq!(league.short_name, "ACB");
    }

    #[test]
    fn test_players_for_team_ordered_by_jersey() {
        let roster = data().players_for_team(TeamId::new(7)).unwrap();
        let jerseys: Vec<u8> = roster.iter().map(|p| p.jersey_number).collect();

        assert_eq!(roster.len(), 5);
        assert_eq!(jerseys, vec![2, 11, 21, 32, 77]);

        assert!(data().players_for_team(TeamId::new(50)).unwrap().is_empty());
        assert!(data().players_for_team(TeamId::new(51)).is_err());
    }

    #[test]
    fn test_matches_for_team_covers_home_and_away() {
        let matches = data().matches_for_team(TeamId::new(1)).unwrap();
        let ids: Vec<u32> = matches.iter().map(|m| m.id.as_u32()).collect();

        // Atlanta hosts 26 and visits Golden State in 30
        assert_eq!(ids, vec![26, 30]);
    }

    #[test]
    fn test_matches_for_league_sorted_by_tipoff() {
        let matches = data().matches_for_league(LeagueId::new(1)).unwrap();
        let ids: Vec<u32> = matches.iter().map(|m| m.id.as_u32()).collect();

        assert_eq!(ids, vec![26, 27, 31, 28, 29, 30]);
        assert!(data().matches_for_league(LeagueId::new(6)).is_err());
    }

    #[test]
    fn test_matches_with_status() {
        let live = data().matches_with_status(MatchStatus::Live);
        let mut ids: Vec<u32> = live.iter().map(|m| m.id.as_u32()).collect();
        ids.sort();

        assert_eq!(ids, vec![28, 31, 77, 81, 85]);
        assert!(live.iter().all(|m| m.home_score.is_some()));
    }

    #[test]
    fn test_teams_for_league() {
        let teams = data().teams_for_league(LeagueId::new(3)).unwrap();
        let ids: Vec<u32> = teams.iter().map(|t| t.id.as_u32()).collect();

        assert_eq!(ids, vec![21, 22, 23, 24]);
    }

    #[test]
    fn test_active_injuries_on_date() {
        let date = chrono::NaiveDate::from_ymd_opt(2025, 11, 18).unwrap();
        let injuries = data().active_injuries_on(date);
        let ids: Vec<u32> = injuries.iter().map(|i| i.id.as_u32()).collect();

        // 4012 starts on the 18th; 4002 and 4005 end on the 20th and 18th
        assert!(ids.contains(&4012));
        assert!(ids.contains(&4002));
        assert!(!ids.contains(&4005));
        assert!(!ids.contains(&4003));

        let dates: Vec<&str> = injuries.iter().map(|i| i.injury_date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_accessors_are_idempotent() {
        let data = data();

        assert_eq!(
            data.events_for_match(MatchId::new(28)).unwrap(),
            data.events_for_match(MatchId::new(28)).unwrap()
        );
        assert_eq!(
            data.teams_for_match(MatchId::new(31)).unwrap(),
            data.teams_for_match(MatchId::new(31)).unwrap()
        );
        assert_eq!(
            data.match_detail(MatchId::new(77)).unwrap(),
            data.match_detail(MatchId::new(77)).unwrap()
        );
    }

    #[test]
    fn test_game_clock_sorting_uses_remaining_time() {
        assert!(GameClock::new(10, 50) > GameClock::new(8, 22));
    }
}

#[cfg(test)]
mod detail_tests {
    use super::*;

    #[test]
    fn test_match_summary() {
        let summary = data().match_summary(MatchId::new(28)).unwrap();

        assert_eq!(summary.league.short_name, "NBA");
        assert_eq!(summary.home.name, "Denver Nuggets");
        assert_eq!(summary.away.name, "Dallas Mavericks");
        assert_eq!(summary.scoreline(), Some((58, 54)));
        assert_eq!(summary.leader().map(|t| t.id), Some(TeamId::new(8)));
    }

    #[test]
    fn test_match_summary_for_scheduled_match_has_no_score() {
        let summary = data().match_summary(MatchId::new(29)).unwrap();
        assert_eq!(summary.scoreline(), None);
        assert!(summary.leader().is_none());
    }

    #[test]
    fn test_match_detail_collects_involved_players_once() {
        let detail = data().match_detail(MatchId::new(28)).unwrap();

        assert_eq!(detail.events.len(), 7);
        let ids: Vec<u32> = detail.players.iter().map(|p| p.id.as_u32()).collect();

        // scorer then assist, first appearance wins; 3005 is a self-assist
        assert_eq!(ids, vec![1001, 1003, 1016, 1019, 1002, 1017, 1004, 1018]);
        assert_eq!(detail.player(PlayerId::new(1004)).unwrap().last_name, "Cole");
    }

    #[test]
    fn test_match_detail_event_points() {
        let detail = data().match_detail(MatchId::new(28)).unwrap();

        assert_eq!(detail.event_points, TeamPoints { home: 4, away: 4 });
        assert_eq!(detail.summary().home.id, TeamId::new(8));
    }

    #[test]
    fn test_match_detail_fails_on_unresolved_player() {
        let players: Vec<Player> = data()
            .players()
            .iter()
            .filter(|p| p.id != PlayerId::new(1019))
            .cloned()
            .collect();
        let data = data().with_players(&players);

        match data.match_detail(MatchId::new(28)) {
            Err(HoopsError::NotFound { entity, id }) => {
                assert_eq!(entity, Entity::Player);
                assert_eq!(id, 1019);
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_match_detail_fails_on_unresolved_league() {
        let data = data().with_leagues(&[]);

        match data.match_detail(MatchId::new(28)) {
            Err(HoopsError::NotFound { entity, id }) => {
                assert_eq!(entity, Entity::League);
                assert_eq!(id, 1);
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }
}

#[cfg(test)]
mod integrity_tests {
    use super::*;
    use crate::query::integrity::{check, IntegrityViolation};

    #[test]
    fn test_embedded_dataset_is_consistent() {
        let violations = check(&data());
        assert!(violations.is_empty(), "unexpected violations: {:?}", violations);
    }

    #[test]
    fn test_self_assist_is_not_a_violation() {
        let event = data().event(EventId::new(3005)).unwrap();
        assert_eq!(event.player_id, event.assist_player_id);
        assert!(check(&data()).is_empty());
    }

    #[test]
    fn test_duplicate_ids_reported_once() {
        let team = data().team(TeamId::new(8)).unwrap().clone();
        let teams = [team.clone(), team.clone(), team];
        let data = Dataset::empty().with_teams(&teams);

        let violations = check(&data);
        assert_eq!(
            violations,
            vec![IntegrityViolation::DuplicateId {
                entity: Entity::Team,
                id: 8
            }]
        );
    }

    #[test]
    fn test_dangling_references_reported() {
        let data = data().with_players(&[]);
        let violations = check(&data);

        // every event player, assist and injury now dangles
        assert!(violations.iter().all(|v| matches!(
            v,
            IntegrityViolation::DanglingReference {
                to: Entity::Player,
                ..
            }
        )));
        assert!(violations.contains(&IntegrityViolation::DanglingReference {
            from: Entity::InjuryReport,
            from_id: 4001,
            field: "player_id",
            to: Entity::Player,
            to_id: 1006,
        }));
    }

    #[test]
    fn test_event_team_must_play_in_match() {
        let mut event = data().event(EventId::new(3001)).unwrap().clone();
        event.team_id = TeamId::new(1);
        let events = [event];
        let data = data().with_events(&events);

        assert_eq!(
            check(&data),
            vec![IntegrityViolation::EventTeamNotInMatch {
                event_id: 3001,
                team_id: 1
            }]
        );
    }

    #[test]
    fn test_bad_dates_reported() {
        let mut injury = data().injury(InjuryId::new(4001)).unwrap().clone();
        injury.expected_recovery_date = "2025-01-01";
        let mut broken = injury.clone();
        broken.id = InjuryId::new(4999);
        broken.injury_date = "soon";
        let injuries = [injury, broken];
        let mut league = data().league(LeagueId::new(2)).unwrap().clone();
        league.season_end_date = "2019-01-01";
        let leagues = [league];
        let data = data().with_leagues(&leagues).with_injuries(&injuries);

        let violations = check(&data);
        assert!(violations.contains(&IntegrityViolation::RecoveryBeforeInjury { injury_id: 4001 }));
        assert!(violations.contains(&IntegrityViolation::InvalidDate {
            entity: Entity::InjuryReport,
            id: 4999,
            field: "injury_date",
            value: "soon",
        }));
        assert!(violations.contains(&IntegrityViolation::SeasonEndsBeforeStart { league_id: 2 }));
        assert_eq!(
            IntegrityViolation::SeasonEndsBeforeStart { league_id: 2 }.to_string(),
            "League 2 season ends before it starts"
        );
    }

    #[test]
    fn test_violation_messages() {
        let violation = IntegrityViolation::DanglingReference {
            from: Entity::MatchEvent,
            from_id: 3001,
            field: "player_id",
            to: Entity::Player,
            to_id: 1001,
        };
        assert_eq!(
            violation.to_string(),
            "Match event 3001 field `player_id` points at missing Player 1001"
        );

        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(json["kind"], "dangling_reference");
        assert_eq!(json["to"], "Player");
    }
}
