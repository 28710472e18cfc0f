//! Route configuration.

use crate::api::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;

/// Creates the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Players
        .route("/api/players", get(handlers::list_players))
        .route("/api/players/{id}", get(handlers::get_player))
        .route(
            "/api/players/team/{team_id}",
            get(handlers::list_players_by_team),
        )
        // Teams
        .route("/api/teams", get(handlers::list_teams))
        .route("/api/teams/{id}", get(handlers::get_team))
        .route(
            "/api/teams/country/{country}",
            get(handlers::list_teams_by_country),
        )
        .route("/api/teams/name/{name}", get(handlers::get_team_by_name))
        // Fixtures
        .route("/api/fixtures", get(handlers::list_fixtures))
        .route("/api/fixtures/{id}", get(handlers::get_fixture))
        .route(
            "/api/fixtures/date/{date}",
            get(handlers::list_fixtures_by_date),
        )
        .route(
            "/api/fixtures/team/{team_id}",
            get(handlers::list_fixtures_by_team),
        )
        .route(
            "/api/fixtures/status/{status}",
            get(handlers::list_fixtures_by_status),
        )
        .route("/api/fixtures/live", get(handlers::list_live_fixtures))
        .route("/api/fixtures/today", get(handlers::list_today_fixtures))
        .with_state(state)
}
