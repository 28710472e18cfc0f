//! # Quantfoot Backend - REST API Server
//!
//! A read-only REST API over the quantfoot football "marts" schema — the
//! warehouse tables maintained by the external data pipeline. Built with
//! [Axum](https://crates.io/crates/axum) for async HTTP handling,
//! [sqlx](https://crates.io/crates/sqlx) for PostgreSQL access, and
//! OpenAPI/Swagger documentation via [utoipa](https://crates.io/crates/utoipa).
//!
//! ## Key Features
//!
//! - **Pure read projection**: players, teams, and fixtures are created and
//!   updated only by the ingestion pipeline; every endpoint here is a GET.
//!
//! - **Derived match state**: fixture responses carry `is_live`,
//!   `is_finished`, and `is_scheduled` flags recomputed from the stored
//!   status code on every read.
//!
//! - **OpenAPI Documentation**: auto-generated Swagger UI at `/swagger-ui/`.
//!
//! - **CORS Support**: cross-origin resource sharing enabled for frontend
//!   integration.
//!
//! - **Structured Logging**: request tracing with `tower-http`; query faults
//!   are logged with operation context and surfaced as opaque 500s.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Route handlers and router configuration |
//! | [`config`] | TOML configuration with validation |
//! | [`db`] | Connection pool, marts row types, read repositories |
//! | [`error`] | API error types with `IntoResponse` implementation |
//! | [`models`] | Response DTOs with OpenAPI schemas |
//! | [`services`] | Entity-to-DTO projection layer |
//! | [`state`] | Application state management |
//!
//! ## API Endpoints
//!
//! ### Health
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/health` | Health check |
//!
//! ### Players
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/players` | First page of players |
//! | GET | `/api/players/{id}` | Player by id |
//! | GET | `/api/players/team/{team_id}` | Squad of a team, ordered by position |
//!
//! ### Teams
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/teams` | First page of teams |
//! | GET | `/api/teams/{id}` | Team by id |
//! | GET | `/api/teams/country/{country}` | Teams of a country |
//! | GET | `/api/teams/name/{name}` | Team by exact name |
//!
//! ### Fixtures
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/fixtures` | First page of fixtures, newest first |
//! | GET | `/api/fixtures/{id}` | Fixture by id |
//! | GET | `/api/fixtures/date/{date}` | Fixtures on a day (`YYYY-MM-DD`) |
//! | GET | `/api/fixtures/team/{team_id}` | A team's fixtures, newest first |
//! | GET | `/api/fixtures/status/{status}` | Fixtures with an exact status code |
//! | GET | `/api/fixtures/live` | Fixtures in play |
//! | GET | `/api/fixtures/today` | Today's fixtures (UTC) |
//!
//! ## Example Usage
//!
//! ### Starting the Server
//!
//! ```bash
//! # Development mode
//! DATABASE_URL=postgres://localhost/quantfoot cargo run
//!
//! # With custom host/port
//! HOST=127.0.0.1 PORT=3000 cargo run
//!
//! # From a configuration file
//! QUANTFOOT_CONFIG=config.toml cargo run
//! ```
//!
//! ### API Requests
//!
//! ```bash
//! # A player with their owning team
//! curl http://localhost:8080/api/players/874
//!
//! # Arsenal by exact name
//! curl http://localhost:8080/api/teams/name/Arsenal
//!
//! # Everything played on a given day
//! curl http://localhost:8080/api/fixtures/date/2024-12-07
//!
//! # Matches in play right now
//! curl http://localhost:8080/api/fixtures/live
//! ```
//!
//! ## Swagger UI
//!
//! Once the server is running, access the interactive API documentation at:
//!
//! ```text
//! http://localhost:8080/swagger-ui/
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
