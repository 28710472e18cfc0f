//! HTTP client for the Quantfoot API.

use crate::error::Error;
use crate::types::*;
use chrono::NaiveDate;
use reqwest::Client;
use std::time::Duration;

#[cfg(test)]
mod tests;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:8080").
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the Quantfoot API.
#[derive(Debug, Clone)]
pub struct QuantfootClient {
    client: Client,
    base_url: String,
}

impl QuantfootClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    /// Returns the base URL this client targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // Health
    // ========================================================================

    /// Performs a health check.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn health_check(&self) -> Result<HealthResponse, Error> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Players
    // ========================================================================

    /// Gets a player by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_player(&self, id: i64) -> Result<PlayerResponse, Error> {
        let url = format!("{}/api/players/{}", self.base_url, id);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Lists the first page of players.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_players(&self) -> Result<Vec<PlayerResponse>, Error> {
        let url = format!("{}/api/players", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Lists a team's players.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn players_by_team(&self, team_id: i64) -> Result<Vec<PlayerResponse>, Error> {
        let url = format!("{}/api/players/team/{}", self.base_url, team_id);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Teams
    // ========================================================================

    /// Gets a team by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_team(&self, id: i64) -> Result<TeamResponse, Error> {
        let url = format!("{}/api/teams/{}", self.base_url, id);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Lists the first page of teams.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_teams(&self) -> Result<Vec<TeamResponse>, Error> {
        let url = format!("{}/api/teams", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Lists teams of a country, exact match.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn teams_by_country(&self, country: &str) -> Result<Vec<TeamResponse>, Error> {
        let url = format!("{}/api/teams/country/{}", self.base_url, country);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Gets a team by case-sensitive exact name.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn team_by_name(&self, name: &str) -> Result<TeamResponse, Error> {
        let url = format!("{}/api/teams/name/{}", self.base_url, name);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Fixtures
    // ========================================================================

    /// Gets a fixture by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_fixture(&self, id: i64) -> Result<FixtureResponse, Error> {
        let url = format!("{}/api/fixtures/{}", self.base_url, id);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Lists the first page of fixtures, newest first.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_fixtures(&self) -> Result<Vec<FixtureResponse>, Error> {
        let url = format!("{}/api/fixtures", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Lists fixtures on a calendar day.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn fixtures_on(&self, date: NaiveDate) -> Result<Vec<FixtureResponse>, Error> {
        let url = format!(
            "{}/api/fixtures/date/{}",
            self.base_url,
            date.format("%Y-%m-%d")
        );
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Lists a team's fixtures, newest first.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn fixtures_by_team(&self, team_id: i64) -> Result<Vec<FixtureResponse>, Error> {
        let url = format!("{}/api/fixtures/team/{}", self.base_url, team_id);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Lists fixtures with an exact status code.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn fixtures_with_status(
        &self,
        status: &str,
    ) -> Result<Vec<FixtureResponse>, Error> {
        let url = format!("{}/api/fixtures/status/{}", self.base_url, status);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Lists fixtures currently in play.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn live_fixtures(&self) -> Result<Vec<FixtureResponse>, Error> {
        let url = format!("{}/api/fixtures/live", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Lists today's fixtures (UTC).
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn todays_fixtures(&self) -> Result<Vec<FixtureResponse>, Error> {
        let url = format!("{}/api/fixtures/today", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();

        if status.is_success() {
            Ok(resp.json().await?)
        } else if status.as_u16() == 404 {
            let text = resp.text().await.unwrap_or_default();
            Err(Error::NotFound(text))
        } else {
            let text = resp.text().await.unwrap_or_default();
            Err(Error::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}
