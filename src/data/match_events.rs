use crate::models::MatchEvent;
use crate::types::{EventId, EventType, GameClock, MatchId, PlayerId, TeamId};

pub static MATCH_EVENTS: &[MatchEvent] = &[
    // Match 28: Denver Nuggets (8) vs Dallas Mavericks (7)
    MatchEvent {
        id: EventId::new(3001),
        match_id: MatchId::new(28),
        player_id: Some(PlayerId::new(1001)),
        team_id: TeamId::new(8),
        event_type: EventType::FieldGoal,
        quarter: 1,
        game_time: GameClock::new(11, 30),
        points: 2,
        assist_player_id: Some(PlayerId::new(1003)),
        description: "Layup",
        timestamp: "2025-02-10 00:15:00",
    },
    MatchEvent {
        id: EventId::new(3002),
        match_id: MatchId::new(28),
        player_id: Some(PlayerId::new(1016)),
        team_id: TeamId::new(7),
        event_type: EventType::ThreePoint,
        quarter: 1,
        game_time: GameClock::new(11, 15),
        points: 3,
        assist_player_id: Some(PlayerId::new(1019)),
        description: "3pt shot",
        timestamp: "2025-02-10 00:15:30",
    },
    MatchEvent {
        id: EventId::new(3003),
        match_id: MatchId::new(28),
        player_id: Some(PlayerId::new(1002)),
        team_id: TeamId::new(8),
        event_type: EventType::Block,
        quarter: 1,
        game_time: GameClock::new(10, 50),
        points: 0,
        assist_player_id: None,
        description: "Block",
        timestamp: "2025-02-10 00:16:10",
    },
    MatchEvent {
        id: EventId::new(3004),
        match_id: MatchId::new(28),
        player_id: Some(PlayerId::new(1017)),
        team_id: TeamId::new(7),
        event_type: EventType::FreeThrow,
        quarter: 2,
        game_time: GameClock::new(8, 22),
        points: 1,
        assist_player_id: None,
        description: "Free throw 1 of 2",
        timestamp: "2025-02-10 00:35:00",
    },
    MatchEvent {
        id: EventId::new(3005),
        match_id: MatchId::new(28),
        player_id: Some(PlayerId::new(1004)),
        team_id: TeamId::new(8),
        event_type: EventType::Assist,
        quarter: 2,
        game_time: GameClock::new(5, 0),
        points: 0,
        assist_player_id: Some(PlayerId::new(1004)),
        description: "Assist",
        timestamp: "2025-02-10 00:45:00",
    },
    MatchEvent {
        id: EventId::new(3006),
        match_id: MatchId::new(28),
        player_id: Some(PlayerId::new(1018)),
        team_id: TeamId::new(7),
        event_type: EventType::Turnover,
        quarter: 3,
        game_time: GameClock::new(1, 30),
        points: 0,
        assist_player_id: None,
        description: "Offensive foul",
        timestamp: "2025-02-10 01:05:00",
    },
    MatchEvent {
        id: EventId::new(3007),
        match_id: MatchId::new(28),
        player_id: Some(PlayerId::new(1001)),
        team_id: TeamId::new(8),
        event_type: EventType::FieldGoal,
        quarter: 3,
        game_time: GameClock::new(0, 5),
        points: 2,
        assist_player_id: None,
        description: "Layup",
        timestamp: "2025-02-10 01:18:00",
    },
    // Match 31: Denver Nuggets (8) vs Detroit Pistons (9)
    MatchEvent {
        id: EventId::new(3008),
        match_id: MatchId::new(31),
        player_id: Some(PlayerId::new(1031)),
        team_id: TeamId::new(8),
        event_type: EventType::ThreePoint,
        quarter: 1,
        game_time: GameClock::new(10, 0),
        points: 3,
        assist_player_id: Some(PlayerId::new(1033)),
        description: "3pt shot",
        timestamp: "2025-02-10 00:10:00",
    },
    MatchEvent {
        id: EventId::new(3009),
        match_id: MatchId::new(31),
        player_id: Some(PlayerId::new(1046)),
        team_id: TeamId::new(9),
        event_type: EventType::FieldGoal,
        quarter: 1,
        game_time: GameClock::new(9, 45),
        points: 2,
        assist_player_id: None,
        description: "Midrange jumper",
        timestamp: "2025-02-10 00:10:30",
    },
    MatchEvent {
        id: EventId::new(3010),
        match_id: MatchId::new(31),
        player_id: Some(PlayerId::new(1036)),
        team_id: TeamId::new(8),
        event_type: EventType::Rebound,
        quarter: 2,
        game_time: GameClock::new(7, 30),
        points: 0,
        assist_player_id: None,
        description: "Defensive rebound",
        timestamp: "2025-02-10 00:40:00",
    },
    MatchEvent {
        id: EventId::new(3011),
        match_id: MatchId::new(31),
        player_id: Some(PlayerId::new(1047)),
        team_id: TeamId::new(9),
        event_type: EventType::ThreePoint,
        quarter: 3,
        game_time: GameClock::new(2, 10),
        points: 3,
        assist_player_id: Some(PlayerId::new(1052)),
        description: "3pt shot",
        timestamp: "2025-02-10 01:05:00",
    },
    MatchEvent {
        id: EventId::new(3012),
        match_id: MatchId::new(31),
        player_id: Some(PlayerId::new(1035)),
        team_id: TeamId::new(8),
        event_type: EventType::Assist,
        quarter: 3,
        game_time: GameClock::new(3, 0),
        points: 0,
        assist_player_id: Some(PlayerId::new(1035)),
        description: "Assist",
        timestamp: "2025-02-10 01:05:00",
    },
    MatchEvent {
        id: EventId::new(3013),
        match_id: MatchId::new(31),
        player_id: Some(PlayerId::new(1048)),
        team_id: TeamId::new(9),
        event_type: EventType::Block,
        quarter: 3,
        game_time: GameClock::new(2, 45),
        points: 0,
        assist_player_id: None,
        description: "Block",
        timestamp: "2025-02-10 01:05:30",
    },
    MatchEvent {
        id: EventId::new(3014),
        match_id: MatchId::new(31),
        player_id: Some(PlayerId::new(1032)),
        team_id: TeamId::new(8),
        event_type: EventType::FieldGoal,
        quarter: 4,
        game_time: GameClock::new(0, 20),
        points: 2,
        assist_player_id: Some(PlayerId::new(1031)),
        description: "Jumper",
        timestamp: "2025-02-10 01:25:00",
    },
    // Match 77: Guangdong Southern Tigers (21) vs Beijing Ducks (22)
    MatchEvent {
        id: EventId::new(3015),
        match_id: MatchId::new(77),
        player_id: Some(PlayerId::new(1031)),
        team_id: TeamId::new(21),
        event_type: EventType::ThreePoint,
        quarter: 1,
        game_time: GameClock::new(8, 0),
        points: 3,
        assist_player_id: None,
        description: "Deep 3",
        timestamp: "2025-02-10 18:12:00",
    },
    MatchEvent {
        id: EventId::new(3016),
        match_id: MatchId::new(77),
        player_id: Some(PlayerId::new(1001)),
        team_id: TeamId::new(22),
        event_type: EventType::FieldGoal,
        quarter: 1,
        game_time: GameClock::new(7, 45),
        points: 2,
        assist_player_id: Some(PlayerId::new(1003)),
        description: "Layup",
        timestamp: "2025-02-10 18:12:30",
    },
    MatchEvent {
        id: EventId::new(3017),
        match_id: MatchId::new(77),
        player_id: Some(PlayerId::new(1033)),
        team_id: TeamId::new(21),
        event_type: EventType::Turnover,
        quarter: 2,
        game_time: GameClock::new(5, 0),
        points: 0,
        assist_player_id: None,
        description: "Bad pass",
        timestamp: "2025-02-10 18:40:00",
    },
    MatchEvent {
        id: EventId::new(3018),
        match_id: MatchId::new(77),
        player_id: Some(PlayerId::new(1002)),
        team_id: TeamId::new(22),
        event_type: EventType::Rebound,
        quarter: 3,
        game_time: GameClock::new(2, 0),
        points: 0,
        assist_player_id: None,
        description: "Offensive rebound",
        timestamp: "2025-02-10 19:15:00",
    },
    MatchEvent {
        id: EventId::new(3019),
        match_id: MatchId::new(77),
        player_id: Some(PlayerId::new(1036)),
        team_id: TeamId::new(21),
        event_type: EventType::FieldGoal,
        quarter: 3,
        game_time: GameClock::new(0, 10),
        points: 2,
        assist_player_id: None,
        description: "Dunk",
        timestamp: "2025-02-10 19:28:00",
    },
    // Match 81: Sydney Kings (31) vs Melbourne United (32)
    MatchEvent {
        id: EventId::new(3020),
        match_id: MatchId::new(81),
        player_id: Some(PlayerId::new(1017)),
        team_id: TeamId::new(31),
        event_type: EventType::ThreePoint,
        quarter: 1,
        game_time: GameClock::new(9, 0),
        points: 3,
        assist_player_id: Some(PlayerId::new(1019)),
        description: "3pt shot",
        timestamp: "2025-02-10 18:10:00",
    },
    MatchEvent {
        id: EventId::new(3021),
        match_id: MatchId::new(81),
        player_id: Some(PlayerId::new(1046)),
        team_id: TeamId::new(32),
        event_type: EventType::FieldGoal,
        quarter: 2,
        game_time: GameClock::new(6, 0),
        points: 2,
        assist_player_id: Some(PlayerId::new(1052)),
        description: "Jumper",
        timestamp: "2025-02-10 18:40:00",
    },
    MatchEvent {
        id: EventId::new(3022),
        match_id: MatchId::new(81),
        player_id: Some(PlayerId::new(1016)),
        team_id: TeamId::new(31),
        event_type: EventType::FieldGoal,
        quarter: 3,
        game_time: GameClock::new(7, 0),
        points: 2,
        assist_player_id: Some(PlayerId::new(1020)),
        description: "Layup",
        timestamp: "2025-02-10 19:05:00",
    },
    MatchEvent {
        id: EventId::new(3023),
        match_id: MatchId::new(81),
        player_id: Some(PlayerId::new(1051)),
        team_id: TeamId::new(32),
        event_type: EventType::Assist,
        quarter: 3,
        game_time: GameClock::new(8, 0),
        points: 0,
        assist_player_id: Some(PlayerId::new(1051)),
        description: "Assist",
        timestamp: "2025-02-10 19:10:00",
    },
    MatchEvent {
        id: EventId::new(3024),
        match_id: MatchId::new(81),
        player_id: Some(PlayerId::new(1018)),
        team_id: TeamId::new(31),
        event_type: EventType::Block,
        quarter: 3,
        game_time: GameClock::new(2, 0),
        points: 0,
        assist_player_id: None,
        description: "Block",
        timestamp: "2025-02-10 19:25:00",
    },
    // Match 85: Real Madrid (41) vs Barça (42)
    MatchEvent {
        id: EventId::new(3025),
        match_id: MatchId::new(85),
        player_id: Some(PlayerId::new(1031)),
        team_id: TeamId::new(41),
        event_type: EventType::ThreePoint,
        quarter: 1,
        game_time: GameClock::new(1, 0),
        points: 3,
        assist_player_id: Some(PlayerId::new(1033)),
        description: "Buzzer beater",
        timestamp: "2025-02-10 18:18:00",
    },
    MatchEvent {
        id: EventId::new(3026),
        match_id: MatchId::new(85),
        player_id: Some(PlayerId::new(1016)),
        team_id: TeamId::new(42),
        event_type: EventType::FieldGoal,
        quarter: 2,
        game_time: GameClock::new(10, 0),
        points: 2,
        assist_player_id: Some(PlayerId::new(1019)),
        description: "Fadeaway",
        timestamp: "2025-02-10 18:40:00",
    },
    MatchEvent {
        id: EventId::new(3027),
        match_id: MatchId::new(85),
        player_id: Some(PlayerId::new(1032)),
        team_id: TeamId::new(41),
        event_type: EventType::FieldGoal,
        quarter: 3,
        game_time: GameClock::new(4, 30),
        points: 2,
        assist_player_id: Some(PlayerId::new(1035)),
        description: "Layup",
        timestamp: "2025-02-10 19:15:00",
    },
    MatchEvent {
        id: EventId::new(3028),
        match_id: MatchId::new(85),
        player_id: Some(PlayerId::new(1017)),
        team_id: TeamId::new(42),
        event_type: EventType::Turnover,
        quarter: 3,
        game_time: GameClock::new(0, 30),
        points: 0,
        assist_player_id: None,
        description: "Travel",
        timestamp: "2025-02-10 19:28:00",
    },
    MatchEvent {
        id: EventId::new(3029),
        match_id: MatchId::new(85),
        player_id: Some(PlayerId::new(1031)),
        team_id: TeamId::new(41),
        event_type: EventType::ThreePoint,
        quarter: 3,
        game_time: GameClock::new(0, 2),
        points: 3,
        assist_player_id: Some(PlayerId::new(1033)),
        description: "Game winner",
        timestamp: "2025-02-10 19:30:00",
    },
];
