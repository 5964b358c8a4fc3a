mod common;

use char_exp_bot::domain::extractor::{NO_DAILY_RECORD, extract_now};
use char_exp_bot::prelude::*;

const URL: &str = "https://www.guildstats.eu/character?nick=Gandalf&tab=9";

#[test]
fn test_extract_now_uses_local_yesterday() {
    let body = common::stats_page(
        Some("12.345"),
        &[
            (common::days_ago(4), "+9.000"),
            (common::yesterday(), "+1.234"),
            (common::today(), "+77"),
        ],
    );

    let stats = extract_now(&body, URL).unwrap();

    assert_eq!(stats.monthly_total, Some(12_345));
    assert_eq!(stats.daily, vec![DailyEntry::new(common::yesterday(), 1_234)]);
}

#[test]
fn test_extract_now_falls_back_to_document_order() {
    let body = common::stats_page(
        None,
        &[(common::days_ago(2), "+300"), (common::days_ago(9), "+900")],
    );

    let stats = extract_now(&body, URL).unwrap();

    assert_eq!(stats.monthly_total, None);
    assert_eq!(stats.daily, vec![DailyEntry::new(common::days_ago(2), 300)]);
}

#[test]
fn test_extract_now_ignores_losses() {
    let body = common::stats_page(Some("0"), &[(common::yesterday(), "-5.000")]);

    let err = extract_now(&body, URL).unwrap_err();

    assert_eq!(err.to_string(), NO_DAILY_RECORD);
    assert_eq!(err.source_url(), Some(URL));
}
