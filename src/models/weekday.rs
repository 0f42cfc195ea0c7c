//! Weekday abbreviation lookup.
//!
//! Schedule lines name days with two-letter abbreviations (`MO` through
//! `SU`); this module maps them to and from [`chrono::Weekday`].

use chrono::Weekday;

use crate::error::{EngineError, EngineResult};

const ABBREVIATIONS: [(&str, Weekday); 7] = [
    ("MO", Weekday::Mon),
    ("TU", Weekday::Tue),
    ("WE", Weekday::Wed),
    ("TH", Weekday::Thu),
    ("FR", Weekday::Fri),
    ("SA", Weekday::Sat),
    ("SU", Weekday::Sun),
];

/// Looks up the weekday for a two-letter abbreviation.
///
/// # Errors
///
/// Returns [`EngineError::UnknownWeekday`] for any token outside
/// `MO,TU,WE,TH,FR,SA,SU`. The lookup is case-sensitive.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use salary_engine::models::weekday_from_abbrev;
///
/// assert_eq!(weekday_from_abbrev("SA").unwrap(), Weekday::Sat);
/// assert!(weekday_from_abbrev("XX").is_err());
/// ```
pub fn weekday_from_abbrev(token: &str) -> EngineResult<Weekday> {
    ABBREVIATIONS
        .iter()
        .find(|(abbrev, _)| *abbrev == token)
        .map(|(_, weekday)| *weekday)
        .ok_or_else(|| EngineError::UnknownWeekday {
            token: token.to_string(),
        })
}

/// Returns the two-letter abbreviation for a weekday.
pub fn weekday_abbrev(weekday: Weekday) -> &'static str {
    ABBREVIATIONS
        .iter()
        .find(|(_, day)| *day == weekday)
        .map(|(abbrev, _)| *abbrev)
        .expect("all seven weekdays are mapped")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_abbreviations_resolve() {
        assert_eq!(weekday_from_abbrev("MO").unwrap(), Weekday::Mon);
        assert_eq!(weekday_from_abbrev("TU").unwrap(), Weekday::Tue);
        assert_eq!(weekday_from_abbrev("WE").unwrap(), Weekday::Wed);
        assert_eq!(weekday_from_abbrev("TH").unwrap(), Weekday::Thu);
        assert_eq!(weekday_from_abbrev("FR").unwrap(), Weekday::Fri);
        assert_eq!(weekday_from_abbrev("SA").unwrap(), Weekday::Sat);
        assert_eq!(weekday_from_abbrev("SU").unwrap(), Weekday::Sun);
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        let error = weekday_from_abbrev("XX").unwrap_err();
        assert!(matches!(error, EngineError::UnknownWeekday { token } if token == "XX"));
    }

    #[test]
    fn test_lowercase_token_is_rejected() {
        assert!(weekday_from_abbrev("mo").is_err());
    }

    #[test]
    fn test_abbrev_round_trips() {
        for (abbrev, weekday) in ABBREVIATIONS {
            assert_eq!(weekday_abbrev(weekday), abbrev);
            assert_eq!(weekday_from_abbrev(abbrev).unwrap(), weekday);
        }
    }
}
