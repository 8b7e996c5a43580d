use crate::models::InjuryReport;
use crate::types::{InjuryId, InjuryStatus, PlayerId, Severity};

pub static INJURY_REPORTS: &[InjuryReport] = &[
    InjuryReport {
        id: InjuryId::new(4001),
        player_id: PlayerId::new(1006),
        injury_type: "Foot Sprain",
        severity: Severity::Moderate,
        injury_date: "2025-11-05",
        expected_recovery_date: "2025-12-15",
        status: InjuryStatus::Out,
        notes: "Sustained in practice.",
    },
    InjuryReport {
        id: InjuryId::new(4002),
        player_id: PlayerId::new(1018),
        injury_type: "Calf Strain",
        severity: Severity::Minor,
        injury_date: "2025-11-13",
        expected_recovery_date: "2025-11-20",
        status: InjuryStatus::DayToDay,
        notes: "Pulled up lame during practice.",
    },
    InjuryReport {
        id: InjuryId::new(4003),
        player_id: PlayerId::new(1035),
        injury_type: "Hand Contusion",
        severity: Severity::Minor,
        injury_date: "2025-11-11",
        expected_recovery_date: "2025-11-14",
        status: InjuryStatus::Questionable,
        notes: "Hit on hand during Match 2002.",
    },
    InjuryReport {
        id: InjuryId::new(4004),
        player_id: PlayerId::new(1051),
        injury_type: "Back Soreness",
        severity: Severity::Moderate,
        injury_date: "2025-11-13",
        expected_recovery_date: "2025-11-25",
        status: InjuryStatus::Out,
        notes: "Back flared up after Match 2004.",
    },
    InjuryReport {
        id: InjuryId::new(4005),
        player_id: PlayerId::new(2010),
        injury_type: "Hamstring Strain",
        severity: Severity::Minor,
        injury_date: "2025-11-08",
        expected_recovery_date: "2025-11-18",
        status: InjuryStatus::DayToDay,
        notes: "Felt tightness.",
    },
    InjuryReport {
        id: InjuryId::new(4006),
        player_id: PlayerId::new(2026),
        injury_type: "Knee Soreness",
        severity: Severity::Minor,
        injury_date: "2025-11-16",
        expected_recovery_date: "2025-11-19",
        status: InjuryStatus::Questionable,
        notes: "Routine maintenance.",
    },
    InjuryReport {
        id: InjuryId::new(4007),
        player_id: PlayerId::new(2037),
        injury_type: "Ankle Sprain",
        severity: Severity::Moderate,
        injury_date: "2025-11-15",
        expected_recovery_date: "2025-12-05",
        status: InjuryStatus::Out,
        notes: "Landed awkwardly in Match 2010.",
    },
    InjuryReport {
        id: InjuryId::new(4008),
        player_id: PlayerId::new(2051),
        injury_type: "Knee Surgery",
        severity: Severity::Major,
        injury_date: "2025-09-10",
        expected_recovery_date: "2026-03-01",
        status: InjuryStatus::OutForSeason,
        notes: "Pre-season injury.",
    },
    InjuryReport {
        id: InjuryId::new(4009),
        player_id: PlayerId::new(1007),
        injury_type: "Knee Effusion",
        severity: Severity::Moderate,
        injury_date: "2025-11-01",
        expected_recovery_date: "2025-11-30",
        status: InjuryStatus::Out,
        notes: "Swelling in left knee.",
    },
    InjuryReport {
        id: InjuryId::new(4010),
        player_id: PlayerId::new(1040),
        injury_type: "Ankle Sprain",
        severity: Severity::Minor,
        injury_date: "2025-11-17",
        expected_recovery_date: "2025-11-22",
        status: InjuryStatus::DayToDay,
        notes: "Twisted ankle in practice.",
    },
    InjuryReport {
        id: InjuryId::new(4011),
        player_id: PlayerId::new(2003),
        injury_type: "Thigh Bruise",
        severity: Severity::Minor,
        injury_date: "2025-11-15",
        expected_recovery_date: "2025-11-17",
        status: InjuryStatus::Probable,
        notes: "Took a hard knee in Match 2009.",
    },
    InjuryReport {
        id: InjuryId::new(4012),
        player_id: PlayerId::new(2048),
        injury_type: "Shoulder Strain",
        severity: Severity::Moderate,
        injury_date: "2025-11-18",
        expected_recovery_date: "2025-12-10",
        status: InjuryStatus::Out,
        notes: "Sustained in Match 2012.",
    },
];
