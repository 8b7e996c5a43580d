//! Integration tests for the compiled-in dataset and its accessors

use std::collections::HashSet;

use hoopstats::{
    data::{INJURY_REPORTS, LEAGUES, MATCHES, MATCH_EVENTS, PLAYERS, TEAMS},
    query::integrity,
    Dataset, Entity, HoopsError, MatchId, PlayerId, TeamId,
};

fn assert_unique<I: IntoIterator<Item = u32>>(table: &str, ids: I) {
    let mut seen = HashSet::new();
    for id in ids {
        assert!(seen.insert(id), "{} id {} is duplicated", table, id);
    }
}

#[test]
fn test_ids_unique_in_every_table() {
    assert_unique("leagues", LEAGUES.iter().map(|r| r.id.as_u32()));
    assert_unique("teams", TEAMS.iter().map(|r| r.id.as_u32()));
    assert_unique("players", PLAYERS.iter().map(|r| r.id.as_u32()));
    assert_unique("matches", MATCHES.iter().map(|r| r.id.as_u32()));
    assert_unique("match_events", MATCH_EVENTS.iter().map(|r| r.id.as_u32()));
    assert_unique("injury_reports", INJURY_REPORTS.iter().map(|r| r.id.as_u32()));
}

#[test]
fn test_every_event_belongs_to_a_participating_team() {
    let data = Dataset::embedded();

    for event in data.events() {
        let m = data
            .match_by_id(event.match_id)
            .unwrap_or_else(|e| panic!("event {}: {}", event.id, e));
        data.team(event.team_id)
            .unwrap_or_else(|e| panic!("event {}: {}", event.id, e));

        assert!(
            m.home_team_id == event.team_id || m.away_team_id == event.team_id,
            "event {} credits team {} outside match {}",
            event.id,
            event.team_id,
            m.id
        );
    }
}

#[test]
fn test_every_injury_resolves_its_player() {
    let data = Dataset::embedded();

    for injury in data.injuries() {
        assert!(
            data.player(injury.player_id).is_ok(),
            "injury {} points at missing player {}",
            injury.id,
            injury.player_id
        );
    }
}

#[test]
fn test_events_for_match_28() {
    let data = Dataset::embedded();
    let events = data.events_for_match(MatchId::new(28)).unwrap();

    assert_eq!(events.len(), 7);
    assert_eq!(events[0].id.as_u32(), 3001);
    assert_eq!(events[1].id.as_u32(), 3002);

    for pair in events.windows(2) {
        assert!(pair[0].quarter <= pair[1].quarter);
        if pair[0].quarter == pair[1].quarter {
            assert!(pair[0].game_time >= pair[1].game_time);
        }
    }
}

#[test]
fn test_unknown_team_is_not_found() {
    let result = Dataset::embedded().team(TeamId::new(999999));

    match result {
        Err(HoopsError::NotFound { entity, id }) => {
            assert_eq!(entity, Entity::Team);
            assert_eq!(id, 999999);
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_teams_for_match_31() {
    let teams = Dataset::embedded().teams_for_match(MatchId::new(31)).unwrap();

    assert_eq!(teams.home.id, TeamId::new(8));
    assert_eq!(teams.home.name, "Denver Nuggets");
    assert_eq!(teams.away.id, TeamId::new(9));
    assert_eq!(teams.away.name, "Detroit Pistons");
}

#[test]
fn test_repeated_calls_are_identical() {
    let data = Dataset::embedded();

    for m in data.matches() {
        assert_eq!(data.match_summary(m.id).unwrap(), data.match_summary(m.id).unwrap());
        assert_eq!(data.match_detail(m.id).unwrap(), data.match_detail(m.id).unwrap());
    }
    for p in data.players() {
        assert_eq!(
            data.injuries_for_player(p.id).unwrap(),
            data.injuries_for_player(p.id).unwrap()
        );
    }
}

#[test]
fn test_self_assist_preserved_literally() {
    let event = Dataset::embedded()
        .event(hoopstats::EventId::new(3005))
        .unwrap();

    assert_eq!(event.player_id, Some(PlayerId::new(1004)));
    assert_eq!(event.assist_player_id, Some(PlayerId::new(1004)));
}

#[test]
fn test_embedded_dataset_passes_integrity_check() {
    assert!(integrity::check(&Dataset::embedded()).is_empty());
}

#[test]
fn test_dataset_shared_across_threads() {
    let data = Dataset::embedded();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || {
                data.events_for_match(MatchId::new(31))
                    .unwrap()
                    .iter()
                    .map(|e| e.id.as_u32())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let results: Vec<Vec<u32>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}
