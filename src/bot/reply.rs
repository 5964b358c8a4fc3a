//! Chat reply formatting.
//!
//! Numbers are grouped with `.` (`7.500`), matching the stats provider.

use crate::domain::entities::CharacterStats;
use crate::error::AppError;
use crate::utils::number_format::group_thousands;

/// Placeholder shown when the page had no monthly total.
pub const MISSING_VALUE: &str = "n/a";

/// Message posted right away, before the stats page is fetched.
pub fn acknowledgment(name: &str) -> String {
    format!("🔍 Looking up {name}...")
}

/// Reply for input rejected before any lookup.
pub fn invalid_input(err: &AppError) -> String {
    format!("⚠️ {err}")
}

/// Final reply for a successful lookup.
pub fn success(name: &str, stats: &CharacterStats) -> String {
    let total = stats
        .monthly_total
        .map(group_thousands)
        .unwrap_or_else(|| MISSING_VALUE.to_string());

    let mut lines = vec![
        format!("**{name}**"),
        format!("📅 **Monthly total:** {total}"),
    ];

    if let Some(entry) = stats.latest() {
        lines.push(format!(
            "🆕 **Latest EXP ({}):** +{}",
            entry.date.format("%Y-%m-%d"),
            group_thousands(entry.exp)
        ));
    }

    lines.push(format!("🔗 [View details]({})", stats.url));
    lines.join("\n")
}

/// Final reply for a failed lookup.
pub fn failure(name: &str, err: &AppError) -> String {
    match err.source_url() {
        Some(url) => format!("❌ {name}: {err}\n🔗 Check manually: {url}"),
        None => format!("❌ {name}: {err}"),
    }
}

/// Final reply for either outcome.
pub fn render(name: &str, result: &Result<CharacterStats, AppError>) -> String {
    match result {
        Ok(stats) => success(name, stats),
        Err(err) => failure(name, err),
    }
}
