//! HTTP implementations of domain source traits.
//!
//! - [`GuildStatsClient`] - guildstats.eu character pages via `reqwest`

pub mod guildstats_client;

pub use guildstats_client::GuildStatsClient;
