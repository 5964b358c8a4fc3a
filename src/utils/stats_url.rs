//! Stats page URL construction.
//!
//! Builds the guildstats.eu "experience history" URL for a character name.

use url::Url;
use url::form_urlencoded::byte_serialize;

/// Tab id of the experience history view on the character page.
pub const EXP_HISTORY_TAB: &str = "9";

/// Errors that can occur while building a stats page URL.
#[derive(Debug, thiserror::Error)]
pub enum StatsUrlError {
    #[error("Invalid base URL: {0}")]
    InvalidBase(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Builds `<base>/character?nick=<name>&tab=9`.
///
/// The name is percent-encoded with spaces as `%20`, so
/// `"Gandalf the Grey"` becomes `nick=Gandalf%20the%20Grey`.
///
/// # Errors
///
/// Returns [`StatsUrlError::InvalidBase`] if `base` does not parse or cannot
/// carry a path. Returns [`StatsUrlError::UnsupportedProtocol`] for non-HTTP(S)
/// schemes.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     character_url("https://www.guildstats.eu", "Gandalf").unwrap(),
///     "https://www.guildstats.eu/character?nick=Gandalf&tab=9"
/// );
/// ```
pub fn character_url(base: &str, name: &str) -> Result<String, StatsUrlError> {
    let mut url = Url::parse(base).map_err(|e| StatsUrlError::InvalidBase(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(StatsUrlError::UnsupportedProtocol),
    }

    url.path_segments_mut()
        .map_err(|_| StatsUrlError::InvalidBase(base.to_string()))?
        .pop_if_empty()
        .push("character");

    // byte_serialize emits `+` for spaces and `%2B` for a literal plus
    let nick = byte_serialize(name.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    url.set_query(Some(&format!("nick={nick}&tab={EXP_HISTORY_TAB}")));
    url.set_fragment(None);

    Ok(url.to_string())
}
