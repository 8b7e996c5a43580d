use crate::models::Player;
use crate::types::{PlayerId, PlayerStatus, Position, TeamId};

pub static PLAYERS: &[Player] = &[
    Player {
        id: PlayerId::new(1001),
        team_id: TeamId::new(8),
        first_name: "Marcus",
        last_name: "Hale",
        date_of_birth: "1996-03-14",
        nationality: "USA",
        position: Position::PG,
        jersey_number: 3,
        height_cm: 188,
        weight_kg: 84,
        status: PlayerStatus::Active,
    },
    Player {
        id: PlayerId::new(1002),
        team_id: TeamId::new(8),
        first_name: "Tobias",
        last_name: "Reyes",
        date_of_birth: "1994-11-02",
        nationality: "USA",
        position: Position::C,
        jersey_number: 15,
        height_cm: 211,
        weight_kg: 113,
        status: PlayerStatus::Active,
    },
    Player {
        id: PlayerId::new(1003),
        team_id: TeamId::new(8),
        first_name: "Jalen",
        last_name: "Whitmore",
        date_of_birth: "1998-07-21",
        nationality: "USA",
        position: Position::SG,
        jersey_number: 5,
        height_cm: 196,
        weight_kg: 92,
        status: PlayerStatus::Active,
    },
    Player {
        id: PlayerId::new(1004),
        team_id: TeamId::new(8),
        first_name: "Darius",
        last_name: "Cole",
        date_of_birth: "1997-01-09",
        nationality: "USA",
        position: Position::SF,
        jersey_number: 22,
        height_cm: 201,
        weight_kg: 98,
        status: PlayerStatus::Active,
    },
    Player {
        id: PlayerId::new(1005),
        team_id: TeamId::new(8),
        first_name: "Nikola",
        last_name: "Petrovic",
        date_of_birth: "1999-05-30",
        nationality: "Serbia",
        position: Position::PF,
        jersey_number: 27,
        height_cm: 206,
        weight_kg: 104,
        status: PlayerStatus::Active,
    },
    Player {
        id: PlayerId::new(1006),
        team_id: TeamId::new(8),
        first_name: "Andre",
        last_name: "Lawson",
        date_of_birth: "2000-09-17",
        nationality: "USA",
        position: Position::SG,
        jersey_number: 0,
        height_cm: 193,
        weight_kg: 88,
        status: PlayerStatus::Injured,
    },
    Player {
        id: PlayerId::new(1007),
        team_id: TeamId::new(8),
        first_name: "Kofi",
        last_name: "Mensah",
        date_of_birth: "1995-12-05",
        nationality: "Ghana",
        position: Position::C,
        jersey_number: 50,
        height_cm: 213,
        weight_kg: 118,
        status: PlayerStatus::Injured,
    },
    Player {
        id: PlayerId::new(1016),
        team_id: TeamId::new(7),
        first_name: "Luka",
        last_name: "Vidmar",
        date_of_birth: "1999-02-28",
        nationality: "Slovenia",
        position: Position::PG,
        jersey_number: 77,
        height_cm: 201,
        weight_kg: 104,
        status: PlayerStatus::Active,
    },
    Player {
        id: PlayerId::new(1017),
        team_id: TeamId::new(7),
        first_name: "Trey",
        last_name: "Bishop",
        date_of_birth: "1996-06-11",
        nationality: "USA",
        position: Position::SG,
        jersey_number: 11,
        height_cm: 193,
        weight_kg: 90,
        status: PlayerStatus::Active,
    },
    Player {
        id: PlayerId::new(1018),
        team_id: TeamId::new(7),
        first_name: "Dwayne",
        last_name: "Mercer",
        date_of_birth: "1995-04-19",
        nationality: "USA",
        position: Position::C,
        jersey_number: 32,
        height_cm: 208,
        weight_kg: 111,
        status: PlayerStatus::Active,
    },
    Player {
        id: PlayerId::new(1019),
        team_id: TeamId::new(7),
        first_name: "Caleb",
        last_name: "Stroud",
        date_of_birth: "2001-08-03",
        nationality: "USA",
        position: Position::SF,
        jersey_number: 2,
        height_cm: 198,
        weight_kg: 95,
        status: PlayerStatus::Active,
    },
    Player {
        id: PlayerId::new(1020),
        team_id: TeamId::new(7),
        first_name: "Isaiah",
        last_name: "Grant",
        date_of_birth: "1998-10-26",
        nationality: "USA",
        position: Position::PF,
        jersey_number: 21,
        height_cm: 205,
        weight_kg: 102,
        status: PlayerStatus::Active,
    },
    Player {
        id: PlayerId::new(1031),
        team_id: TeamId::new(8),
        first_name: "Elijah",
        last_name: "Booker",
        date_of_birth: "1997-03-08",
        nationality: "USA",
        position: Position::SG,
        jersey_number: 1,
        height_cm: 195,
        weight_kg: 89,
        status: PlayerStatus::Active,
    },
    Player {
        id: PlayerId::new(1032),
        team_id: TeamId::new(8),
        first_name: "Mateo",
        last_name: "Ortiz",
        date_of_birth: "2000-01-15",
        nationality: "Argentina",
        position: Position::SF,
        jersey_number: 9,
        height_cm: 200,
        weight_kg: 96,
        status: PlayerStatus::Active,
    },
    Player {
        id: PlayerId::new(1033),
        team_id: TeamId::new(8),
        first_name: "Quentin",
        last_name: "Ayers",
        date_of_birth: "1996-09-29",
        nationality: "USA",
        position: Position::PG,
        jersey_number: 4,
        height_cm: 185,
        weight_kg: 81,
        status: PlayerStatus::Active,
    },
    Player {
        id: PlayerId::new(1034),
        team_id: TeamId::new(8),
        first_name: "Samuel",
        last_name: "Okafor",
        date_of_birth: "1998-12-12",
        nationality: "Nigeria",
        position: Position::PF,
        jersey_number: 35,
        height_cm: 207,
        weight_kg: 108,
        status: PlayerStatus::Active,
    },
    Player {
        id: PlayerId::new(1035),
        team_id: TeamId::new(8),
        first_name: "Victor",
        last_name: "Laine",
        date_of_birth: "1999-07-07",
        nationality: "Finland",
        position: Position::SF,
        jersey_number: 23,
        height_cm: 203,
        weight_kg: 99,
        status: PlayerStatus::Active,
    },
    Player {
        id: PlayerId::new(1036),
        team_id: TeamId::new(8),
        first_name: "Brandon",
        last_name: "Tate",
        date_of_birth: "1994-05-23",
        nationality: "USA",
        position: Position::C,
        jersey_number: 44,
        height_cm: 210,
        weight_kg: 115,
        status: PlayerStatus::Active,
    },
    Player {
        id: PlayerId::new(1040),
        team_id: TeamId::new(8),
        first_name: "Miles",
        last_name: "Harper",
        date_of_birth: "2002-02-18",
        nationality: "Canada",
        position: Position::PG,
        jersey_number: 8,
        height_cm: 190,
        weight_kg: 83,
        status: PlayerStatus::Active,
    },
    Player {
        id: PlayerId::new(1046),
        team_id: TeamId::new(9),
        first_name: "Cade",
        last_name: "Whitfield",
        date_of_birth: "2001-04-04",
        nationality: "USA",
        position: Position::PG,
        jersey_number: 2,
        height_cm: 198,
        weight_kg: 93,
        status: PlayerStatus::Active,
    },
    Player {
        id: PlayerId::new(1047),
        team_id: TeamId::new(9),
        first_name: "Jordan",
        last_name: "Pryce",
        date_of_birth: "1999-11-20",
        nationality: "USA",
        position: Position::SG,
        jersey_number: 7,
        height_cm: 194,
        weight_kg: 88,
        status: PlayerStatus::Active,
    },
    Player {
        id: PlayerId::new(1048),
        team_id: TeamId::new(9),
        first_name: "Ausar",
        last_name: "Dixon",
        date_of_birth: "2000-06-30",
        nationality: "USA",
        position: Position::C,
        jersey_number: 28,
        height_cm: 211,
        weight_kg: 112,
        status: PlayerStatus::Active,
    },
    Player {
        id: PlayerId::new(1051),
        team_id: TeamId::new(9),
        first_name: "Terrell",
        last_name: "Banks",
        date_of_birth: "1997-08-14",
        nationality: "USA",
        position: Position::SF,
        jersey_number: 13,
        height_cm: 201,
        weight_kg: 97,
        status: PlayerStatus::Injured,
    },
    Player {
        id: PlayerId::new(1052),
        team_id: TeamId::new(9),
        first_name: "Ronan",
        last_name: "Kessler",
        date_of_birth: "1998-03-27",
        nationality: "Germany",
        position: Position::PF,
        jersey_number: 20,
        height_cm: 206,
        weight_kg: 106,
        status: PlayerStatus::Active,
    },
    Player {
        id: PlayerId::new(2003),
        team_id: TeamId::new(41),
        first_name: "Sergio",
        last_name: "Llorente",
        date_of_birth: "1996-10-01",
        nationality: "Spain",
        position: Position::PG,
        jersey_number: 23,
        height_cm: 183,
        weight_kg: 80,
        status: PlayerStatus::Active,
    },
    Player {
        id: PlayerId::new(2010),
        team_id: TeamId::new(42),
        first_name: "Pau",
        last_name: "Vilaró",
        date_of_birth: "1998-02-14",
        nationality: "Spain",
        position: Position::SF,
        jersey_number: 17,
        height_cm: 202,
        weight_kg: 98,
        status: PlayerStatus::Active,
    },
    Player {
        id: PlayerId::new(2026),
        team_id: TeamId::new(21),
        first_name: "Zhou",
        last_name: "Haoran",
        date_of_birth: "1999-09-09",
        nationality: "China",
        position: Position::C,
        jersey_number: 9,
        height_cm: 216,
        weight_kg: 118,
        status: PlayerStatus::Active,
    },
    Player {
        id: PlayerId::new(2037),
        team_id: TeamId::new(31),
        first_name: "Liam",
        last_name: "Gallagher",
        date_of_birth: "2000-12-03",
        nationality: "Australia",
        position: Position::SG,
        jersey_number: 6,
        height_cm: 196,
        weight_kg: 90,
        status: PlayerStatus::Injured,
    },
    Player {
        id: PlayerId::new(2048),
        team_id: TeamId::new(13),
        first_name: "Stefan",
        last_name: "Jokanovic",
        date_of_birth: "1997-05-16",
        nationality: "Serbia",
        position: Position::PF,
        jersey_number: 14,
        height_cm: 208,
        weight_kg: 107,
        status: PlayerStatus::Injured,
    },
    Player {
        id: PlayerId::new(2051),
        team_id: TeamId::new(11),
        first_name: "Théo",
        last_name: "Marchand",
        date_of_birth: "1998-08-25",
        nationality: "France",
        position: Position::C,
        jersey_number: 21,
        height_cm: 215,
        weight_kg: 114,
        status: PlayerStatus::Injured,
    },
];
