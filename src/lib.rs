//! # Character EXP Bot
//!
//! A Discord bot that reports a game character's experience figures scraped
//! from guildstats.eu.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, the stats source trait and the extractor
//! - **Application Layer** ([`application`]) - Lookup orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP client for the stats provider
//! - **Bot Layer** ([`bot`]) - Discord command parsing, replies and gateway client
//!
//! ## Usage
//!
//! ```bash
//! export DISCORD_TOKEN="..."
//! cargo run
//! ```
//!
//! Then type `!char <name>` in any channel the bot can read.
//!
//! For a one-off lookup without Discord:
//!
//! ```bash
//! cargo run --bin lookup -- Gandalf
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod bot;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub mod config;
pub mod telemetry;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for the binaries
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LookupService;
    pub use crate::domain::entities::{CharacterQuery, CharacterStats, DailyEntry, FetchedPage};
    pub use crate::domain::sources::StatsSource;
    pub use crate::error::AppError;
    pub use crate::infrastructure::http::GuildStatsClient;
}
