//! Source trait for character stats documents.

use crate::domain::entities::FetchedPage;
use crate::error::AppError;
use async_trait::async_trait;

/// Provider of raw character stats pages.
///
/// Abstracts the network so the lookup pipeline can run against a mock
/// or a local test server.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::GuildStatsClient`] - guildstats.eu over HTTPS
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Fetches the experience history page for a character.
    ///
    /// `name` is already trimmed and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Fetch`] on network errors, timeouts and non-2xx
    /// responses. No retry is attempted.
    async fn fetch_page(&self, name: &str) -> Result<FetchedPage, AppError>;
}
