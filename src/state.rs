//! Application state management.

use crate::db::DatabasePool;
use crate::db::repository::{FixtureRepository, PlayerRepository, TeamRepository};
use crate::services::{FixtureService, PlayerService, TeamService};

/// Application state shared across all handlers.
///
/// Every request works on its own pooled connection; there is no shared
/// mutable state and nothing to lock.
#[derive(Clone)]
pub struct AppState {
    /// Database pool.
    pub db: DatabasePool,
    /// Player read service.
    pub players: PlayerService,
    /// Team read service.
    pub teams: TeamService,
    /// Fixture read service.
    pub fixtures: FixtureService,
}

impl AppState {
    /// Creates the application state over a database pool.
    #[must_use]
    pub fn new(db: DatabasePool) -> Self {
        let players = PlayerService::new(PlayerRepository::new(db.pool().clone()));
        let teams = TeamService::new(TeamRepository::new(db.pool().clone()));
        let fixtures = FixtureService::new(FixtureRepository::new(db.pool().clone()));

        Self {
            db,
            players,
            teams,
            fixtures,
        }
    }
}
