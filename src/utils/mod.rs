//! Utility functions for URL construction and number formatting.
//!
//! - [`stats_url`] - Character page URL building
//! - [`number_format`] - Thousands grouping and stripping

pub mod number_format;
pub mod stats_url;
