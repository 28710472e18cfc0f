//! Row types for the marts schema.
//!
//! The marts tables are written exclusively by the external ingestion
//! pipeline; every type here is a read-only projection of one row.

use crate::models::FixtureStatus;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Player row from `marts.players`, joined with its owning team's summary
/// columns. The team columns are null when the player has no team.
#[derive(Debug, Clone, FromRow)]
pub struct Player {
    /// Player identifier.
    pub player_id: i64,
    /// Player name.
    pub player_name: String,
    /// Age in years.
    pub age: Option<i32>,
    /// Playing position.
    pub position: Option<String>,
    /// Jersey number.
    pub jersey_number: Option<i64>,
    /// Photo URL.
    pub photo_url: Option<String>,
    /// Owning team identifier.
    pub team_id: Option<i64>,
    /// Owning team name.
    pub team_name: Option<String>,
    /// Owning team short code.
    pub team_code: Option<String>,
    /// Owning team country.
    pub team_country: Option<String>,
    /// Owning team logo URL.
    pub team_logo: Option<String>,
}

/// Team row from `marts.teams`, venue columns included.
#[derive(Debug, Clone, FromRow)]
pub struct Team {
    /// Team identifier.
    pub team_id: i64,
    /// Team name.
    pub team_name: String,
    /// Short team code.
    pub team_code: Option<String>,
    /// Country the team plays in.
    pub team_country: Option<String>,
    /// Founding year.
    pub team_founded: Option<i32>,
    /// Whether this is a national side.
    pub is_national_team: Option<bool>,
    /// Logo URL.
    pub team_logo: Option<String>,
    /// Home venue identifier.
    pub venue_id: Option<i64>,
    /// Home venue name.
    pub venue_name: Option<String>,
    /// Home venue street address.
    pub venue_address: Option<String>,
    /// Home venue city.
    pub venue_city: Option<String>,
    /// Home venue capacity.
    pub venue_capacity: Option<i32>,
    /// Home venue playing surface.
    pub venue_surface: Option<String>,
}

/// Fixture row from `marts.fixtures`.
#[derive(Debug, Clone, FromRow)]
pub struct Fixture {
    /// Fixture identifier.
    pub fixture_id: i64,
    /// Kickoff timestamp.
    pub fixture_datetime: DateTime<Utc>,
    /// Calendar date of the fixture.
    pub fixture_date: NaiveDate,
    /// Season year.
    pub season: i64,
    /// Short status code.
    pub status: String,
    /// Long status label.
    pub status_long: Option<String>,
    /// Minutes elapsed while in play.
    pub minutes_elapsed: Option<i32>,
    /// League identifier.
    pub league_id: i64,
    /// League name.
    pub league_name: String,
    /// Competition type.
    pub league_type: Option<String>,
    /// Country of the competition.
    pub league_country: Option<String>,
    /// Round label.
    pub league_round: Option<String>,
    /// Venue identifier.
    pub venue_id: Option<i64>,
    /// Venue name.
    pub venue_name: Option<String>,
    /// Venue city.
    pub venue_city: Option<String>,
    /// Venue capacity.
    pub venue_capacity: Option<i32>,
    /// Home team identifier.
    pub home_team_id: i64,
    /// Home team name.
    pub home_team_name: String,
    /// Home team short code.
    pub home_team_code: Option<String>,
    /// Whether the home side won.
    pub home_team_winner: Option<bool>,
    /// Away team identifier.
    pub away_team_id: i64,
    /// Away team name.
    pub away_team_name: String,
    /// Away team short code.
    pub away_team_code: Option<String>,
    /// Whether the away side won.
    pub away_team_winner: Option<bool>,
    /// Home goals.
    pub goals_home: Option<i32>,
    /// Away goals.
    pub goals_away: Option<i32>,
    /// Home goals at half-time.
    pub halftime_home: Option<i32>,
    /// Away goals at half-time.
    pub halftime_away: Option<i32>,
    /// Home goals at full-time.
    pub fulltime_home: Option<i32>,
    /// Away goals at full-time.
    pub fulltime_away: Option<i32>,
    /// Result label.
    pub result: Option<String>,
    /// Home goals minus away goals.
    pub goal_difference: Option<i32>,
    /// Total goals scored.
    pub total_goals: Option<i32>,
    /// Referee name.
    pub referee: Option<String>,
}

impl Fixture {
    /// Parses the stored status code. Recomputed on every call so the
    /// derived predicates can never drift from a status update.
    #[must_use]
    pub fn status(&self) -> FixtureStatus {
        FixtureStatus::from_code(&self.status)
    }
}
