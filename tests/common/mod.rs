#![allow(dead_code)]

use char_exp_bot::prelude::*;
use chrono::{Duration as ChronoDuration, Local, NaiveDate};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) char-exp-bot-tests";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn yesterday() -> NaiveDate {
    today() - ChronoDuration::days(1)
}

pub fn days_ago(days: i64) -> NaiveDate {
    today() - ChronoDuration::days(days)
}

/// Builds a page shaped like the guildstats.eu experience tab.
///
/// `total` is inserted verbatim after the `Total in month` label when given;
/// each row is `(date, exp cell text)`.
pub fn stats_page(total: Option<&str>, rows: &[(NaiveDate, &str)]) -> String {
    let mut html = String::from(
        "<html>\n<head><title>Character</title></head>\n<body>\n<table class=\"newTable\">\n",
    );

    if let Some(total) = total {
        html.push_str(&format!(
            "  <tr>\n    <td><b>Total in month</b></td>\n    <td class=\"exp\">\n      {total}\n    </td>\n  </tr>\n"
        ));
    }

    for (date, exp) in rows {
        html.push_str(&format!(
            "  <tr>\n    <td>{}</td>\n    <td style=\"color:green\">{exp}</td>\n    <td>12h 30m</td>\n  </tr>\n",
            date.format("%Y-%m-%d")
        ));
    }

    html.push_str("</table>\n</body>\n</html>\n");
    html
}

pub async fn mount_character_page(server: &MockServer, name: &str, body: String) {
    Mock::given(method("GET"))
        .and(path("/character"))
        .and(query_param("nick", name))
        .and(query_param("tab", "9"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

pub fn create_test_client(base_url: &str, timeout: Duration) -> GuildStatsClient {
    GuildStatsClient::new(base_url, timeout, TEST_USER_AGENT).unwrap()
}

pub fn create_test_service(server: &MockServer) -> LookupService<GuildStatsClient> {
    let client = create_test_client(&server.uri(), Duration::from_secs(5));
    LookupService::new(Arc::new(client))
}
