//! Response models for the REST API.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;


/// Match progress states derived from the short status code written by the
/// ingestion pipeline. Codes outside the known set parse to [`Self::Unknown`]
/// with the original code preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureStatus {
    /// Kickoff time still to be defined ("TBD").
    Tbd,
    /// Not started ("NS").
    NotStarted,
    /// First half in play ("1H").
    FirstHalf,
    /// Half-time break ("HT").
    Halftime,
    /// Second half in play ("2H").
    SecondHalf,
    /// In play, phase unspecified ("LIVE").
    Live,
    /// Finished after regular time ("FT").
    FullTime,
    /// Finished after extra time ("AET").
    AfterExtraTime,
    /// Finished after a penalty shootout ("PEN").
    Penalties,
    /// Unmapped status code, kept verbatim.
    Unknown(String),
}

impl FixtureStatus {
    /// Status codes that count as in-play.
    pub const LIVE_CODES: [&'static str; 4] = ["1H", "HT", "2H", "LIVE"];

    /// Parses a short status code.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "TBD" => Self::Tbd,
            "NS" => Self::NotStarted,
            "1H" => Self::FirstHalf,
            "HT" => Self::Halftime,
            "2H" => Self::SecondHalf,
            "LIVE" => Self::Live,
            "FT" => Self::FullTime,
            "AET" => Self::AfterExtraTime,
            "PEN" => Self::Penalties,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Returns the short status code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Tbd => "TBD",
            Self::NotStarted => "NS",
            Self::FirstHalf => "1H",
            Self::Halftime => "HT",
            Self::SecondHalf => "2H",
            Self::Live => "LIVE",
            Self::FullTime => "FT",
            Self::AfterExtraTime => "AET",
            Self::Penalties => "PEN",
            Self::Unknown(code) => code,
        }
    }

    /// Whether the match is currently in play.
    #[must_use]
    pub fn is_live(&self) -> bool {
        matches!(
            self,
            Self::FirstHalf | Self::Halftime | Self::SecondHalf | Self::Live
        )
    }

    /// Whether the match has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::FullTime | Self::AfterExtraTime | Self::Penalties)
    }

    /// Whether the match has yet to start.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        matches!(self, Self::Tbd | Self::NotStarted)
    }
}

impl std::fmt::Display for FixtureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Team summary embedded in a player response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamSummary {
    /// Team identifier.
    pub id: i64,
    /// Team name.
    pub team_name: String,
    /// Short team code.
    pub team_code: Option<String>,
    /// Country the team plays in.
    pub team_country: Option<String>,
    /// Logo URL.
    pub team_logo: Option<String>,
}

/// Player response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlayerResponse {
    /// Player identifier.
    pub id: i64,
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
    /// Owning team, when the player is attached to one.
    pub team: Option<TeamSummary>,
}

/// Venue details. All fields are optional; fixture rows only carry a subset
/// of the venue columns, so address and surface are absent there.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VenueDto {
    /// Venue identifier.
    pub venue_id: Option<i64>,
    /// Venue name.
    pub venue_name: Option<String>,
    /// Street address.
    pub venue_address: Option<String>,
    /// City.
    pub venue_city: Option<String>,
    /// Seating capacity.
    pub venue_capacity: Option<i32>,
    /// Playing surface.
    pub venue_surface: Option<String>,
}

/// Team response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamResponse {
    /// Team identifier.
    pub id: i64,
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
    /// Home venue, when known.
    pub venue: Option<VenueDto>,
}

/// League details embedded in a fixture response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeagueDto {
    /// League identifier.
    pub league_id: i64,
    /// League name.
    pub league_name: String,
    /// Competition type (league or cup).
    pub league_type: Option<String>,
    /// Country of the competition.
    pub league_country: Option<String>,
    /// Round label.
    pub league_round: Option<String>,
}

/// One side of a fixture.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FixtureTeamDto {
    /// Team identifier.
    pub team_id: i64,
    /// Team name.
    pub team_name: String,
    /// Short team code.
    pub team_code: Option<String>,
    /// Whether this side won, once decided.
    pub winner: Option<bool>,
}

/// Score breakdown for a fixture.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreDto {
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
    /// Total goals scored.
    pub total_goals: Option<i32>,
    /// Home goals minus away goals.
    pub goal_difference: Option<i32>,
}

/// Fixture response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FixtureResponse {
    /// Fixture identifier.
    pub id: i64,
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
    /// Competition details.
    pub league: LeagueDto,
    /// Venue, when known.
    pub venue: Option<VenueDto>,
    /// Home side.
    pub home_team: FixtureTeamDto,
    /// Away side.
    pub away_team: FixtureTeamDto,
    /// Score breakdown, once any goals are recorded.
    pub score: Option<ScoreDto>,
    /// Result label.
    pub result: Option<String>,
    /// Referee name.
    pub referee: Option<String>,
    /// Whether the match is in play. Derived from `status` on every read.
    pub is_live: bool,
    /// Whether the match has finished. Derived from `status` on every read.
    pub is_finished: bool,
    /// Whether the match has yet to start. Derived from `status` on every read.
    pub is_scheduled: bool,
}
