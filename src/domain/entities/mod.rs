//! Core domain entities.
//!
//! Plain data structures created and consumed within a single command
//! invocation. Nothing here is persisted or mutated after construction.
//!
//! # Entity Types
//!
//! - [`CharacterQuery`] - A validated character name
//! - [`CharacterStats`] - Monthly total plus daily entries for one character
//! - [`DailyEntry`] - EXP gained on one calendar day
//! - [`FetchedPage`] - Raw stats document and the URL it came from

pub mod query;
pub mod stats;

pub use query::CharacterQuery;
pub use stats::{CharacterStats, DailyEntry, FetchedPage};
