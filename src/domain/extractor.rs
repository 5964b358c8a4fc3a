//! Experience figures extraction from a guildstats.eu character page.
//!
//! The page is third-party HTML with no stable structure, so extraction is a
//! pattern scan over the raw text rather than a DOM walk. Everything here is
//! a pure function of the document text and the reference date.
//!
//! # Algorithm
//!
//! 1. Line breaks are collapsed to spaces; the markup of interest may span lines.
//! 2. The monthly total is the first numeric token after `Total in month`.
//!    A missing total is not an error.
//! 3. Daily entries are `YYYY-MM-DD ... +N` pairs. The first pair dated
//!    yesterday wins.
//! 4. Without a pair for yesterday, the first pair in document order is used,
//!    whatever its date.
//! 5. Without any pair, extraction fails with [`NO_DAILY_RECORD`].

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;

use crate::domain::entities::{CharacterStats, DailyEntry};
use crate::error::AppError;
use crate::utils::number_format::parse_grouped;

/// Message of the extraction error returned when no dated EXP value exists.
pub const NO_DAILY_RECORD: &str = "no daily record found";

static MONTHLY_TOTAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Total in month.*?(\d[\d.,]*)").unwrap());

static DAILY_EXP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<date>\d{4}-\d{2}-\d{2}).*?\+\s*(?P<exp>\d[\d.,]*)").unwrap()
});

/// Extracts stats using the local clock to decide what "yesterday" is.
///
/// # Errors
///
/// See [`extract`].
pub fn extract_now(text: &str, url: &str) -> Result<CharacterStats, AppError> {
    extract(text, url, Local::now().date_naive())
}

/// Extracts the monthly total and the most relevant daily entry.
///
/// `today` is the reference date; the preferred daily entry is the one dated
/// the day before it.
///
/// # Errors
///
/// Returns [`AppError::Extraction`] carrying `url` if the document holds no
/// `date ... +exp` pair.
pub fn extract(text: &str, url: &str, today: NaiveDate) -> Result<CharacterStats, AppError> {
    let text = collapse_line_breaks(text);

    let monthly_total = monthly_total(&text);
    if monthly_total.is_none() {
        tracing::debug!(url, "Monthly total not found");
    }

    let yesterday = today.pred_opt();
    let entry = match daily_entries(&text).find(|e| Some(e.date) == yesterday) {
        Some(entry) => Some(entry),
        None => {
            let first = daily_entries(&text).next();
            if let Some(ref e) = first {
                tracing::debug!(url, date = %e.date, "No entry for yesterday, using first record");
            }
            first
        }
    };

    let mut daily: Vec<DailyEntry> = entry.into_iter().collect();
    if daily.is_empty() {
        return Err(AppError::extraction(NO_DAILY_RECORD, url));
    }
    daily.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(CharacterStats {
        monthly_total,
        daily,
        url: url.to_string(),
    })
}

fn collapse_line_breaks(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

fn monthly_total(text: &str) -> Option<u64> {
    MONTHLY_TOTAL_REGEX
        .captures(text)
        .and_then(|caps| parse_grouped(&caps[1]))
}

/// Dated EXP pairs in document order. Pairs with an impossible date or an
/// unparsable value are skipped.
fn daily_entries(text: &str) -> impl Iterator<Item = DailyEntry> + '_ {
    DAILY_EXP_REGEX.captures_iter(text).filter_map(|caps| {
        let date = NaiveDate::parse_from_str(&caps["date"], "%Y-%m-%d").ok()?;
        let exp = parse_grouped(&caps["exp"])?;
        Some(DailyEntry::new(date, exp))
    })
}
