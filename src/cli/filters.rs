//! Filter types for hoopstats CLI commands.

use std::fmt;

use crate::types::MatchStatus;

/// Filter for match state in CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MatchStatusFilter {
    /// Not yet started
    Scheduled,
    /// In progress
    Live,
    /// Completed
    Final,
    /// Moved to a later date
    Postponed,
}

impl From<MatchStatusFilter> for MatchStatus {
    fn from(filter: MatchStatusFilter) -> Self {
        match filter {
            MatchStatusFilter::Scheduled => MatchStatus::Scheduled,
            MatchStatusFilter::Live => MatchStatus::Live,
            MatchStatusFilter::Final => MatchStatus::Final,
            MatchStatusFilter::Postponed => MatchStatus::Postponed,
        }
    }
}

impl fmt::Display for MatchStatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", MatchStatus::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_filter_maps_to_status() {
        assert_eq!(MatchStatus::from(MatchStatusFilter::Live), MatchStatus::Live);
        assert_eq!(MatchStatus::from(MatchStatusFilter::Final), MatchStatus::Final);
        assert_eq!(MatchStatusFilter::Postponed.to_string(), "Postponed");
    }

    #[test]
    fn test_filter_parses_from_cli_value() {
        let parsed = MatchStatusFilter::from_str("live", true).unwrap();
        assert_eq!(parsed, MatchStatusFilter::Live);
        assert!(MatchStatusFilter::from_str("halftime", true).is_err());
    }
}
