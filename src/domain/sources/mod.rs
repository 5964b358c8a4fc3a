//! Data source trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::http`; mock implementations
//! are generated via `mockall` for unit tests.

pub mod stats_source;

pub use stats_source::StatsSource;

#[cfg(test)]
pub use stats_source::MockStatsSource;
