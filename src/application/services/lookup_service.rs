//! Character experience lookup service.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::domain::entities::{CharacterQuery, CharacterStats};
use crate::domain::extractor;
use crate::domain::sources::StatsSource;
use crate::error::AppError;

/// Service running one lookup: validate, fetch, extract.
///
/// Holds no per-request state, so a single instance is shared by every
/// concurrent command.
pub struct LookupService<S: StatsSource> {
    source: Arc<S>,
}

impl<S: StatsSource> LookupService<S> {
    /// Creates a new lookup service.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Looks up a character by raw command input, relative to today's local date.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a blank name without touching the network.
    /// Returns [`AppError::Fetch`] if the page cannot be obtained.
    /// Returns [`AppError::Extraction`] if the page holds no daily record.
    pub async fn lookup(&self, raw_name: &str) -> Result<CharacterStats, AppError> {
        let query = CharacterQuery::parse(raw_name)?;
        self.lookup_at(&query, Local::now().date_naive()).await
    }

    /// Looks up a validated character with an explicit reference date.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Fetch`] or [`AppError::Extraction`], see [`Self::lookup`].
    pub async fn lookup_at(
        &self,
        query: &CharacterQuery,
        today: NaiveDate,
    ) -> Result<CharacterStats, AppError> {
        let page = self.source.fetch_page(query.name()).await?;
        extractor::extract(&page.body, &page.url, today)
    }
}
