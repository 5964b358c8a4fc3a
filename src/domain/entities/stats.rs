//! Parsed experience statistics for one character.

use chrono::NaiveDate;

/// Experience gained on a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyEntry {
    pub date: NaiveDate,
    pub exp: u64,
}

impl DailyEntry {
    pub fn new(date: NaiveDate, exp: u64) -> Self {
        Self { date, exp }
    }
}

/// Successful extraction result.
///
/// `daily` is sorted by date, most recent first, and is never empty when
/// produced by [`crate::domain::extractor::extract`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterStats {
    /// Experience accumulated in the current month, if the page reported it.
    pub monthly_total: Option<u64>,
    pub daily: Vec<DailyEntry>,
    /// Page the figures were read from.
    pub url: String,
}

impl CharacterStats {
    /// Returns the most recent daily entry.
    pub fn latest(&self) -> Option<&DailyEntry> {
        self.daily.first()
    }
}

/// Raw document returned by a [`crate::domain::sources::StatsSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub url: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_is_first_entry() {
        let stats = CharacterStats {
            monthly_total: Some(10),
            daily: vec![
                DailyEntry::new(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(), 7),
                DailyEntry::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(), 3),
            ],
            url: "https://example.com".to_string(),
        };

        assert_eq!(stats.latest().unwrap().exp, 7);
    }

    #[test]
    fn test_latest_on_empty() {
        let stats = CharacterStats {
            monthly_total: None,
            daily: vec![],
            url: String::new(),
        };
        assert!(stats.latest().is_none());
    }
}
