//! API request handlers.

use crate::error::ApiError;
use crate::models::{FixtureResponse, HealthResponse, PlayerResponse, TeamResponse};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::error;

/// Logs a failed query with its operation context and returns an opaque
/// server error; no fault detail crosses the API boundary.
fn db_error(operation: &str, err: sqlx::Error) -> ApiError {
    error!(operation, error = %err, "database query failed");
    ApiError::Database(format!("an error occurred while {operation}"))
}

// ============================================================================
// Health Check
// ============================================================================

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Players
// ============================================================================

/// List players.
#[utoipa::path(
    get,
    path = "/api/players",
    responses(
        (status = 200, description = "First page of players", body = Vec<PlayerResponse>),
        (status = 500, description = "Internal error")
    ),
    tag = "Players"
)]
pub async fn list_players(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PlayerResponse>>, ApiError> {
    let players = state
        .players
        .all_players()
        .await
        .map_err(|e| db_error("retrieving players", e))?;
    Ok(Json(players))
}

/// Get a player by id.
#[utoipa::path(
    get,
    path = "/api/players/{id}",
    params(
        ("id" = i64, Path, description = "Player id")
    ),
    responses(
        (status = 200, description = "Player details", body = PlayerResponse),
        (status = 404, description = "Player not found"),
        (status = 500, description = "Internal error")
    ),
    tag = "Players"
)]
pub async fn get_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let player = state
        .players
        .player_by_id(id)
        .await
        .map_err(|e| db_error("retrieving the player", e))?;
    player.map(Json).ok_or(ApiError::PlayerNotFound(id))
}

/// List a team's players, ordered by position.
#[utoipa::path(
    get,
    path = "/api/players/team/{team_id}",
    params(
        ("team_id" = i64, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "Players of the team; empty when none", body = Vec<PlayerResponse>),
        (status = 500, description = "Internal error")
    ),
    tag = "Players"
)]
pub async fn list_players_by_team(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<i64>,
) -> Result<Json<Vec<PlayerResponse>>, ApiError> {
    let players = state
        .players
        .players_by_team(team_id)
        .await
        .map_err(|e| db_error("retrieving team players", e))?;
    Ok(Json(players))
}

// ============================================================================
// Teams
// ============================================================================

/// List teams.
#[utoipa::path(
    get,
    path = "/api/teams",
    responses(
        (status = 200, description = "First page of teams", body = Vec<TeamResponse>),
        (status = 500, description = "Internal error")
    ),
    tag = "Teams"
)]
pub async fn list_teams(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = state
        .teams
        .all_teams()
        .await
        .map_err(|e| db_error("retrieving teams", e))?;
    Ok(Json(teams))
}

/// Get a team by id.
#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    params(
        ("id" = i64, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "Team details", body = TeamResponse),
        (status = 404, description = "Team not found"),
        (status = 500, description = "Internal error")
    ),
    tag = "Teams"
)]
pub async fn get_team(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state
        .teams
        .team_by_id(id)
        .await
        .map_err(|e| db_error("retrieving the team", e))?;
    team.map(Json).ok_or(ApiError::TeamNotFound(id))
}

/// List teams of a country, exact match.
#[utoipa::path(
    get,
    path = "/api/teams/country/{country}",
    params(
        ("country" = String, Path, description = "Country name")
    ),
    responses(
        (status = 200, description = "Teams of the country", body = Vec<TeamResponse>),
        (status = 500, description = "Internal error")
    ),
    tag = "Teams"
)]
pub async fn list_teams_by_country(
    State(state): State<Arc<AppState>>,
    Path(country): Path<String>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = state
        .teams
        .teams_by_country(&country)
        .await
        .map_err(|e| db_error("retrieving teams", e))?;
    Ok(Json(teams))
}

/// Get a team by case-sensitive exact name.
#[utoipa::path(
    get,
    path = "/api/teams/name/{name}",
    params(
        ("name" = String, Path, description = "Team name, case-sensitive")
    ),
    responses(
        (status = 200, description = "Team details", body = TeamResponse),
        (status = 404, description = "Team not found"),
        (status = 500, description = "Internal error")
    ),
    tag = "Teams"
)]
pub async fn get_team_by_name(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state
        .teams
        .team_by_name(&name)
        .await
        .map_err(|e| db_error("retrieving the team", e))?;
    team.map(Json).ok_or(ApiError::TeamNameNotFound(name))
}

// ============================================================================
// Fixtures
// ============================================================================

/// List fixtures, most recent first.
#[utoipa::path(
    get,
    path = "/api/fixtures",
    responses(
        (status = 200, description = "First page of fixtures", body = Vec<FixtureResponse>),
        (status = 500, description = "Internal error")
    ),
    tag = "Fixtures"
)]
pub async fn list_fixtures(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FixtureResponse>>, ApiError> {
    let fixtures = state
        .fixtures
        .all_fixtures()
        .await
        .map_err(|e| db_error("retrieving fixtures", e))?;
    Ok(Json(fixtures))
}

/// Get a fixture by id.
#[utoipa::path(
    get,
    path = "/api/fixtures/{id}",
    params(
        ("id" = i64, Path, description = "Fixture id")
    ),
    responses(
        (status = 200, description = "Fixture details", body = FixtureResponse),
        (status = 404, description = "Fixture not found"),
        (status = 500, description = "Internal error")
    ),
    tag = "Fixtures"
)]
pub async fn get_fixture(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<FixtureResponse>, ApiError> {
    let fixture = state
        .fixtures
        .fixture_by_id(id)
        .await
        .map_err(|e| db_error("retrieving the fixture", e))?;
    fixture.map(Json).ok_or(ApiError::FixtureNotFound(id))
}

/// List fixtures on a calendar day, kickoff ascending.
#[utoipa::path(
    get,
    path = "/api/fixtures/date/{date}",
    params(
        ("date" = String, Path, description = "Calendar date, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Fixtures on the date", body = Vec<FixtureResponse>),
        (status = 400, description = "Malformed date"),
        (status = 500, description = "Internal error")
    ),
    tag = "Fixtures"
)]
pub async fn list_fixtures_by_date(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<Json<Vec<FixtureResponse>>, ApiError> {
    let day = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| ApiError::InvalidDate(date))?;
    let fixtures = state
        .fixtures
        .fixtures_by_date(day)
        .await
        .map_err(|e| db_error("retrieving fixtures", e))?;
    Ok(Json(fixtures))
}

/// List a team's fixtures, home or away, newest first.
#[utoipa::path(
    get,
    path = "/api/fixtures/team/{team_id}",
    params(
        ("team_id" = i64, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "Fixtures of the team", body = Vec<FixtureResponse>),
        (status = 500, description = "Internal error")
    ),
    tag = "Fixtures"
)]
pub async fn list_fixtures_by_team(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<i64>,
) -> Result<Json<Vec<FixtureResponse>>, ApiError> {
    let fixtures = state
        .fixtures
        .fixtures_by_team(team_id)
        .await
        .map_err(|e| db_error("retrieving team fixtures", e))?;
    Ok(Json(fixtures))
}

/// List fixtures with an exact status code, kickoff ascending.
#[utoipa::path(
    get,
    path = "/api/fixtures/status/{status}",
    params(
        ("status" = String, Path, description = "Short status code, e.g. FT")
    ),
    responses(
        (status = 200, description = "Fixtures with the status", body = Vec<FixtureResponse>),
        (status = 500, description = "Internal error")
    ),
    tag = "Fixtures"
)]
pub async fn list_fixtures_by_status(
    State(state): State<Arc<AppState>>,
    Path(status): Path<String>,
) -> Result<Json<Vec<FixtureResponse>>, ApiError> {
    let fixtures = state
        .fixtures
        .fixtures_by_status(&status)
        .await
        .map_err(|e| db_error("retrieving fixtures", e))?;
    Ok(Json(fixtures))
}

/// List fixtures currently in play.
#[utoipa::path(
    get,
    path = "/api/fixtures/live",
    responses(
        (status = 200, description = "Fixtures in play", body = Vec<FixtureResponse>),
        (status = 500, description = "Internal error")
    ),
    tag = "Fixtures"
)]
pub async fn list_live_fixtures(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FixtureResponse>>, ApiError> {
    let fixtures = state
        .fixtures
        .live_fixtures()
        .await
        .map_err(|e| db_error("retrieving live fixtures", e))?;
    Ok(Json(fixtures))
}

/// List today's fixtures (UTC).
#[utoipa::path(
    get,
    path = "/api/fixtures/today",
    responses(
        (status = 200, description = "Today's fixtures", body = Vec<FixtureResponse>),
        (status = 500, description = "Internal error")
    ),
    tag = "Fixtures"
)]
pub async fn list_today_fixtures(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FixtureResponse>>, ApiError> {
    let fixtures = state
        .fixtures
        .todays_fixtures()
        .await
        .map_err(|e| db_error("retrieving fixtures", e))?;
    Ok(Json(fixtures))
}
