use crate::models::Match;
use crate::types::{LeagueId, MatchId, MatchStatus, TeamId};

pub static MATCHES: &[Match] = &[
    Match {
        id: MatchId::new(26),
        league_id: LeagueId::new(1),
        home_team_id: TeamId::new(1),
        away_team_id: TeamId::new(2),
        datetime: "2025-02-08T19:30:00",
        venue: "Arena 1",
        home_score: Some(112),
        away_score: Some(108),
        overtime: false,
        attendance: 17800,
        status: MatchStatus::Final,
        game_type: "Regular Season",
    },
    Match {
        id: MatchId::new(27),
        league_id: LeagueId::new(1),
        home_team_id: TeamId::new(3),
        away_team_id: TeamId::new(4),
        datetime: "2025-02-08T20:00:00",
        venue: "Arena 3",
        home_score: Some(109),
        away_score: Some(111),
        overtime: true,
        attendance: 16200,
        status: MatchStatus::Final,
        game_type: "Regular Season",
    },
    Match {
        id: MatchId::new(28),
        league_id: LeagueId::new(1),
        home_team_id: TeamId::new(8),
        away_team_id: TeamId::new(7),
        datetime: "2025-02-10T00:00:00",
        venue: "Arena 8",
        home_score: Some(58),
        away_score: Some(54),
        overtime: false,
        attendance: 19520,
        status: MatchStatus::Live,
        game_type: "Regular Season",
    },
    Match {
        id: MatchId::new(29),
        league_id: LeagueId::new(1),
        home_team_id: TeamId::new(5),
        away_team_id: TeamId::new(6),
        datetime: "2025-02-11T19:00:00",
        venue: "Arena 5",
        home_score: None,
        away_score: None,
        overtime: false,
        attendance: 0,
        status: MatchStatus::Scheduled,
        game_type: "Regular Season",
    },
    Match {
        id: MatchId::new(30),
        league_id: LeagueId::new(1),
        home_team_id: TeamId::new(10),
        away_team_id: TeamId::new(1),
        datetime: "2025-02-12T22:00:00",
        venue: "Arena 10",
        home_score: None,
        away_score: None,
        overtime: false,
        attendance: 0,
        status: MatchStatus::Postponed,
        game_type: "Regular Season",
    },
    Match {
        id: MatchId::new(31),
        league_id: LeagueId::new(1),
        home_team_id: TeamId::new(8),
        away_team_id: TeamId::new(9),
        datetime: "2025-02-09T23:50:00",
        venue: "Arena 8",
        home_score: Some(71),
        away_score: Some(69),
        overtime: false,
        attendance: 19520,
        status: MatchStatus::Live,
        game_type: "Regular Season",
    },
    Match {
        id: MatchId::new(51),
        league_id: LeagueId::new(2),
        home_team_id: TeamId::new(11),
        away_team_id: TeamId::new(12),
        datetime: "2025-02-07T18:00:00",
        venue: "Arena 11",
        home_score: Some(84),
        away_score: Some(79),
        overtime: false,
        attendance: 12400,
        status: MatchStatus::Final,
        game_type: "Group Stage",
    },
    Match {
        id: MatchId::new(52),
        league_id: LeagueId::new(2),
        home_team_id: TeamId::new(13),
        away_team_id: TeamId::new(14),
        datetime: "2025-02-07T20:30:00",
        venue: "Arena 13",
        home_score: Some(97),
        away_score: Some(93),
        overtime: true,
        attendance: 18300,
        status: MatchStatus::Final,
        game_type: "Group Stage",
    },
    Match {
        id: MatchId::new(53),
        league_id: LeagueId::new(2),
        home_team_id: TeamId::new(15),
        away_team_id: TeamId::new(16),
        datetime: "2025-02-14T19:00:00",
        venue: "Arena 15",
        home_score: None,
        away_score: None,
        overtime: false,
        attendance: 0,
        status: MatchStatus::Scheduled,
        game_type: "Group Stage",
    },
    Match {
        id: MatchId::new(76),
        league_id: LeagueId::new(3),
        home_team_id: TeamId::new(23),
        away_team_id: TeamId::new(24),
        datetime: "2025-02-09T19:35:00",
        venue: "Arena 23",
        home_score: Some(103),
        away_score: Some(95),
        overtime: false,
        attendance: 9800,
        status: MatchStatus::Final,
        game_type: "Regular Season",
    },
    Match {
        id: MatchId::new(77),
        league_id: LeagueId::new(3),
        home_team_id: TeamId::new(21),
        away_team_id: TeamId::new(22),
        datetime: "2025-02-10T18:00:00",
        venue: "Arena 21",
        home_score: Some(47),
        away_score: Some(52),
        overtime: false,
        attendance: 14100,
        status: MatchStatus::Live,
        game_type: "Regular Season",
    },
    Match {
        id: MatchId::new(80),
        league_id: LeagueId::new(4),
        home_team_id: TeamId::new(33),
        away_team_id: TeamId::new(34),
        datetime: "2025-02-09T19:30:00",
        venue: "Arena 33",
        home_score: Some(88),
        away_score: Some(90),
        overtime: false,
        attendance: 11500,
        status: MatchStatus::Final,
        game_type: "Regular Season",
    },
    Match {
        id: MatchId::new(81),
        league_id: LeagueId::new(4),
        home_team_id: TeamId::new(31),
        away_team_id: TeamId::new(32),
        datetime: "2025-02-10T18:00:00",
        venue: "Arena 31",
        home_score: Some(61),
        away_score: Some(58),
        overtime: false,
        attendance: 15900,
        status: MatchStatus::Live,
        game_type: "Regular Season",
    },
    Match {
        id: MatchId::new(84),
        league_id: LeagueId::new(5),
        home_team_id: TeamId::new(43),
        away_team_id: TeamId::new(44),
        datetime: "2025-02-09T18:00:00",
        venue: "Arena 43",
        home_score: Some(80),
        away_score: Some(77),
        overtime: false,
        attendance: 8700,
        status: MatchStatus::Final,
        game_type: "Regular Season",
    },
    Match {
        id: MatchId::new(85),
        league_id: LeagueId::new(5),
        home_team_id: TeamId::new(41),
        away_team_id: TeamId::new(42),
        datetime: "2025-02-10T18:00:00",
        venue: "Arena 41",
        home_score: Some(70),
        away_score: Some(68),
        overtime: false,
        attendance: 14800,
        status: MatchStatus::Live,
        game_type: "Regular Season",
    },
    Match {
        id: MatchId::new(86),
        league_id: LeagueId::new(5),
        home_team_id: TeamId::new(45),
        away_team_id: TeamId::new(46),
        datetime: "2025-02-15T12:30:00",
        venue: "Arena 45",
        home_score: None,
        away_score: None,
        overtime: false,
        attendance: 0,
        status: MatchStatus::Scheduled,
        game_type: "Regular Season",
    },
];
