//! Domain layer containing entities, source contracts and extraction logic.
//!
//! # Architecture
//!
//! - [`entities`] - Query and result data structures
//! - [`sources`] - Stats page provider trait
//! - [`extractor`] - Pure text-to-stats extraction
//!
//! # Lookup Flow
//!
//! 1. Command input becomes an [`entities::CharacterQuery`]
//! 2. A [`sources::StatsSource`] fetches the character page
//! 3. [`extractor::extract`] turns the page text into [`entities::CharacterStats`]
//! 4. The bot layer formats the result (see [`crate::bot::reply`])

pub mod entities;
pub mod extractor;
pub mod sources;
