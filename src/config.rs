//! Bot configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and passed explicitly
//! to [`crate::bot::run`]. Nothing else reads the environment.
//!
//! ```bash
//! export DISCORD_TOKEN="..."
//! ```
//!
//! ## Required Variables
//!
//! - `DISCORD_TOKEN` - Bot authentication token, must be non-empty
//!
//! ## Optional Variables
//!
//! - `COMMAND_PREFIX` - Chat command prefix (default: `!`)
//! - `STATS_BASE_URL` - Stats provider base URL (default: `https://www.guildstats.eu`)
//! - `HTTP_TIMEOUT_SECS` - Stats page fetch timeout (default: 15, max: 120)
//! - `HTTP_USER_AGENT` - `User-Agent` sent to the stats provider (default: desktop Chrome)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_COMMAND_PREFIX: &str = "!";
pub const DEFAULT_STATS_BASE_URL: &str = "https://www.guildstats.eu";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Bot configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Static Discord bot token (`DISCORD_TOKEN`).
    pub discord_token: String,
    pub command_prefix: String,
    pub stats_base_url: String,
    pub http_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `DISCORD_TOKEN` is not set.
    pub fn from_env() -> Result<Self> {
        let discord_token = env::var("DISCORD_TOKEN").context("DISCORD_TOKEN must be set")?;

        let command_prefix =
            env::var("COMMAND_PREFIX").unwrap_or_else(|_| DEFAULT_COMMAND_PREFIX.to_string());
        let stats_base_url =
            env::var("STATS_BASE_URL").unwrap_or_else(|_| DEFAULT_STATS_BASE_URL.to_string());

        let http_timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

        let user_agent =
            env::var("HTTP_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            discord_token,
            command_prefix,
            stats_base_url,
            http_timeout_secs,
            user_agent,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `discord_token` is empty or whitespace
    /// - `command_prefix` is empty or contains whitespace
    /// - `stats_base_url` is not an HTTP(S) URL
    /// - `http_timeout_secs` is outside `1..=120`
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.discord_token.trim().is_empty() {
            anyhow::bail!("DISCORD_TOKEN must not be empty");
        }

        if self.command_prefix.is_empty() || self.command_prefix.chars().any(char::is_whitespace) {
            anyhow::bail!(
                "COMMAND_PREFIX must be non-empty and contain no whitespace, got '{}'",
                self.command_prefix
            );
        }

        if !self.stats_base_url.starts_with("http://")
            && !self.stats_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "STATS_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.stats_base_url
            );
        }

        if self.http_timeout_secs == 0 || self.http_timeout_secs > 120 {
            anyhow::bail!(
                "HTTP_TIMEOUT_SECS must be between 1 and 120, got {}",
                self.http_timeout_secs
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Discord token: {}", mask_token(&self.discord_token));
        tracing::info!("  Command prefix: {}", self.command_prefix);
        tracing::info!("  Stats provider: {}", self.stats_base_url);
        tracing::info!("  HTTP timeout: {}s", self.http_timeout_secs);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a secret token for logging, keeping only the last four characters.
///
/// - `MTIzNDU2Nzg5.abc.xyz1` → `***xyz1`
/// - `abc` → `***`
fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "***".to_string();
    }

    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("***{tail}")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
