//! guildstats.eu implementation of the stats source.

use async_trait::async_trait;
use std::time::Duration;

use crate::config::Config;
use crate::domain::entities::FetchedPage;
use crate::domain::sources::StatsSource;
use crate::error::AppError;
use crate::utils::stats_url::character_url;

/// HTTP client for guildstats.eu character pages.
///
/// Issues a single GET per lookup with a fixed timeout and a browser
/// `User-Agent`. Cloning is cheap; the inner `reqwest::Client` shares its
/// connection pool.
#[derive(Clone)]
pub struct GuildStatsClient {
    client: reqwest::Client,
    base_url: String,
}

impl GuildStatsClient {
    /// Creates a client for the given provider base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Creates a client from the service configuration.
    ///
    /// # Errors
    ///
    /// See [`GuildStatsClient::new`].
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(
            config.stats_base_url.clone(),
            Duration::from_secs(config.http_timeout_secs),
            &config.user_agent,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl StatsSource for GuildStatsClient {
    async fn fetch_page(&self, name: &str) -> Result<FetchedPage, AppError> {
        let url =
            character_url(&self.base_url, name).map_err(|e| AppError::fetch(e.to_string(), None))?;

        tracing::debug!(%url, "Fetching stats page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::fetch(e.to_string(), Some(url.clone())))?;

        let status = response.status();
        tracing::debug!(%url, status = status.as_u16(), "Stats page responded");

        if !status.is_success() {
            return Err(AppError::fetch(
                format!("HTTP status {status}"),
                Some(url),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::fetch(e.to_string(), Some(url.clone())))?;

        Ok(FetchedPage { url, body })
    }
}
