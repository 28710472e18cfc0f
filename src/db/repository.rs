//! Read repositories over the marts tables.
//!
//! Every operation is a single parameterized query; a missing row is
//! `Ok(None)`, never an error, and a failed query propagates unchanged to
//! the caller. Queries run on the request future, so a disconnecting caller
//! cancels the in-flight query when axum drops the handler.

use crate::db::schema::{Fixture, Player, Team};
use crate::models::FixtureStatus;
use chrono::NaiveDate;
use sqlx::PgPool;

/// Page cap for unfiltered listings.
const LIST_LIMIT: i64 = 100;
/// Page cap for a single team's fixture history.
const TEAM_FIXTURES_LIMIT: i64 = 50;

const PLAYER_SELECT: &str = r#"
SELECT p.player_id, p.player_name, p.age, p.position, p.jersey_number,
       p.photo_url, p.team_id,
       t.team_name, t.team_code, t.team_country, t.team_logo
FROM marts.players p
LEFT JOIN marts.teams t ON t.team_id = p.team_id
"#;

const TEAM_SELECT: &str = r#"
SELECT team_id, team_name, team_code, team_country, team_founded,
       is_national_team, team_logo,
       venue_id, venue_name, venue_address, venue_city, venue_capacity,
       venue_surface
FROM marts.teams
"#;

const FIXTURE_SELECT: &str = r#"
SELECT fixture_id, fixture_datetime, fixture_date, season, status,
       status_long, minutes_elapsed,
       league_id, league_name, league_type, league_country, league_round,
       venue_id, venue_name, venue_city, venue_capacity,
       home_team_id, home_team_name, home_team_code, home_team_winner,
       away_team_id, away_team_name, away_team_code, away_team_winner,
       goals_home, goals_away, halftime_home, halftime_away,
       fulltime_home, fulltime_away,
       result, goal_difference, total_goals, referee
FROM marts.fixtures
"#;

/// Read access to `marts.players`.
#[derive(Clone)]
pub struct PlayerRepository {
    pool: PgPool,
}

impl PlayerRepository {
    /// Creates a repository over the given pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Point lookup by player id.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn by_id(&self, id: i64) -> Result<Option<Player>, sqlx::Error> {
        sqlx::query_as::<_, Player>(&format!("{PLAYER_SELECT} WHERE p.player_id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// First page of players, ordered by id for stable output.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn all(&self) -> Result<Vec<Player>, sqlx::Error> {
        sqlx::query_as::<_, Player>(&format!(
            "{PLAYER_SELECT} ORDER BY p.player_id LIMIT $1"
        ))
        .bind(LIST_LIMIT)
        .fetch_all(&self.pool)
        .await
    }

    /// All players of one team, ordered by position.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn by_team(&self, team_id: i64) -> Result<Vec<Player>, sqlx::Error> {
        sqlx::query_as::<_, Player>(&format!(
            "{PLAYER_SELECT} WHERE p.team_id = $1 ORDER BY p.position, p.player_id"
        ))
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
    }
}

/// Read access to `marts.teams`.
#[derive(Clone)]
pub struct TeamRepository {
    pool: PgPool,
}

impl TeamRepository {
    /// Creates a repository over the given pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Point lookup by team id.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn by_id(&self, id: i64) -> Result<Option<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>(&format!("{TEAM_SELECT} WHERE team_id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// First page of teams, ordered by id for stable output.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn all(&self) -> Result<Vec<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>(&format!("{TEAM_SELECT} ORDER BY team_id LIMIT $1"))
            .bind(LIST_LIMIT)
            .fetch_all(&self.pool)
            .await
    }

    /// Teams of one country, exact match.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn by_country(&self, country: &str) -> Result<Vec<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>(&format!(
            "{TEAM_SELECT} WHERE team_country = $1 ORDER BY team_name, team_id"
        ))
        .bind(country)
        .fetch_all(&self.pool)
        .await
    }

    /// Single team by case-sensitive exact name.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn by_name(&self, name: &str) -> Result<Option<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>(&format!("{TEAM_SELECT} WHERE team_name = $1"))
            .bind(name)
            .fetch_optional(&self.pool)
            .await
    }
}

/// Read access to `marts.fixtures`.
#[derive(Clone)]
pub struct FixtureRepository {
    pool: PgPool,
}

impl FixtureRepository {
    /// Creates a repository over the given pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Point lookup by fixture id.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn by_id(&self, id: i64) -> Result<Option<Fixture>, sqlx::Error> {
        sqlx::query_as::<_, Fixture>(&format!("{FIXTURE_SELECT} WHERE fixture_id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// First page of fixtures, most recent date first.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn all(&self) -> Result<Vec<Fixture>, sqlx::Error> {
        sqlx::query_as::<_, Fixture>(&format!(
            "{FIXTURE_SELECT} ORDER BY fixture_date DESC, fixture_id LIMIT $1"
        ))
        .bind(LIST_LIMIT)
        .fetch_all(&self.pool)
        .await
    }

    /// Fixtures on one calendar day, half-open range `[date, date+1)`,
    /// kickoff ascending.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn by_date(&self, date: NaiveDate) -> Result<Vec<Fixture>, sqlx::Error> {
        // NaiveDate::MAX has no successor; the resulting empty range is fine.
        let end = date.succ_opt().unwrap_or(date);
        sqlx::query_as::<_, Fixture>(&format!(
            "{FIXTURE_SELECT} WHERE fixture_date >= $1 AND fixture_date < $2 \
             ORDER BY fixture_datetime, fixture_id"
        ))
        .bind(date)
        .bind(end)
        .fetch_all(&self.pool)
        .await
    }

    /// A team's fixtures, home or away, newest first.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn by_team(&self, team_id: i64) -> Result<Vec<Fixture>, sqlx::Error> {
        sqlx::query_as::<_, Fixture>(&format!(
            "{FIXTURE_SELECT} WHERE home_team_id = $1 OR away_team_id = $1 \
             ORDER BY fixture_date DESC, fixture_id LIMIT $2"
        ))
        .bind(team_id)
        .bind(TEAM_FIXTURES_LIMIT)
        .fetch_all(&self.pool)
        .await
    }

    /// Fixtures with one exact status code, kickoff ascending.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn by_status(&self, status: &str) -> Result<Vec<Fixture>, sqlx::Error> {
        sqlx::query_as::<_, Fixture>(&format!(
            "{FIXTURE_SELECT} WHERE status = $1 ORDER BY fixture_datetime, fixture_id"
        ))
        .bind(status)
        .fetch_all(&self.pool)
        .await
    }

    /// Fixtures currently in play, kickoff ascending.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn live(&self) -> Result<Vec<Fixture>, sqlx::Error> {
        let codes: Vec<String> = FixtureStatus::LIVE_CODES
            .iter()
            .map(|c| (*c).to_string())
            .collect();
        sqlx::query_as::<_, Fixture>(&format!(
            "{FIXTURE_SELECT} WHERE status = ANY($1) ORDER BY fixture_datetime, fixture_id"
        ))
        .bind(codes)
        .fetch_all(&self.pool)
        .await
    }
}
