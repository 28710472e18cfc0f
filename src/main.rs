//! Quantfoot Backend Server
//!
//! REST API server over the football marts schema.

use quantfoot_backend::api::create_router;
use quantfoot_backend::config::Config;
use quantfoot_backend::db::DatabasePool;
use quantfoot_backend::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use quantfoot_backend::models::{
    FixtureResponse, FixtureTeamDto, HealthResponse, LeagueDto, PlayerResponse, ScoreDto,
    TeamResponse, TeamSummary, VenueDto,
};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        quantfoot_backend::api::handlers::health_check,
        quantfoot_backend::api::handlers::list_players,
        quantfoot_backend::api::handlers::get_player,
        quantfoot_backend::api::handlers::list_players_by_team,
        quantfoot_backend::api::handlers::list_teams,
        quantfoot_backend::api::handlers::get_team,
        quantfoot_backend::api::handlers::list_teams_by_country,
        quantfoot_backend::api::handlers::get_team_by_name,
        quantfoot_backend::api::handlers::list_fixtures,
        quantfoot_backend::api::handlers::get_fixture,
        quantfoot_backend::api::handlers::list_fixtures_by_date,
        quantfoot_backend::api::handlers::list_fixtures_by_team,
        quantfoot_backend::api::handlers::list_fixtures_by_status,
        quantfoot_backend::api::handlers::list_live_fixtures,
        quantfoot_backend::api::handlers::list_today_fixtures,
    ),
    components(
        schemas(
            HealthResponse,
            PlayerResponse,
            TeamSummary,
            TeamResponse,
            VenueDto,
            FixtureResponse,
            LeagueDto,
            FixtureTeamDto,
            ScoreDto,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Players", description = "Player read endpoints"),
        (name = "Teams", description = "Team read endpoints"),
        (name = "Fixtures", description = "Fixture read endpoints"),
    ),
    info(
        title = "Quantfoot API",
        version = "0.1.0",
        description = "Read-only REST API over the football marts schema",
        license(name = "MIT")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration, then apply environment overrides
    let mut config = match std::env::var("QUANTFOOT_CONFIG") {
        Ok(path) => Config::load(&path)?,
        Err(_) => Config::default(),
    };
    if let Ok(host) = std::env::var("HOST") {
        config.server.host = host;
    }
    if let Ok(port) = std::env::var("PORT") {
        config.server.port = port.parse()?;
    }
    if let Ok(url) = std::env::var("DATABASE_URL") {
        config.database.url = url;
    }

    // Connect to the marts database
    let db = DatabasePool::new(&config.database).await?;
    let state = Arc::new(AppState::new(db));

    info!(
        "Starting Quantfoot Backend on {}:{}",
        config.server.host, config.server.port
    );
    info!(
        "Swagger UI available at http://{}:{}/swagger-ui/",
        config.server.host, config.server.port
    );

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = create_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start the server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
