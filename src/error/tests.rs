//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod hoops_error_tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_entity_and_id() {
        let error = HoopsError::not_found(Entity::Team, 999999u32);

        assert_eq!(error.to_string(), "Team not found: 999999");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_not_found_message_for_multi_word_entities() {
        let error = HoopsError::not_found(Entity::InjuryReport, 4099u32);
        assert_eq!(error.to_string(), "Injury report not found: 4099");

        let error = HoopsError::not_found(Entity::MatchEvent, 3999u32);
        assert_eq!(error.to_string(), "Match event not found: 3999");
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let error = HoopsError::from(parse_error);

        match error {
            HoopsError::InvalidId(_) => (),
            _ => panic!("Expected InvalidId error variant"),
        }
        assert!(!HoopsError::from("x".parse::<u32>().unwrap_err()).is_not_found());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = HoopsError::from(json_error);

        match error {
            HoopsError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = HoopsError::from(io_error);

        match error {
            HoopsError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_date_error_conversion() {
        let date_error = chrono::NaiveDate::parse_from_str("2025-13-40", "%Y-%m-%d").unwrap_err();
        let error = HoopsError::from(date_error);

        match error {
            HoopsError::InvalidDate(_) => (),
            _ => panic!("Expected InvalidDate error variant"),
        }
    }

    #[test]
    fn test_input_error_messages() {
        let error = HoopsError::InvalidPosition {
            position: "QB".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid position: QB");

        let error = HoopsError::InvalidGameClock {
            value: "99".to_string(),
        };
        assert!(error.to_string().contains("expected MM:SS"));
    }

    #[test]
    fn test_error_debug_format() {
        let error = HoopsError::not_found(Entity::Match, 28u32);
        let debug_string = format!("{:?}", error);
        assert!(debug_string.contains("NotFound"));
        assert!(debug_string.contains("Match"));
    }
}
