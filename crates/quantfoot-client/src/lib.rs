//! HTTP client library for the Quantfoot API.
//!
//! This crate provides a typed HTTP client for the quantfoot backend's
//! read-only REST endpoints, plus the pure client-side fixture list filters
//! used by list views.
//!
//! # Example
//!
//! ```no_run
//! use quantfoot_client::{ClientConfig, QuantfootClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), quantfoot_client::Error> {
//!     let client = QuantfootClient::new(ClientConfig {
//!         base_url: "http://localhost:8080".into(),
//!         timeout: Duration::from_secs(30),
//!     })?;
//!
//!     // Check health
//!     let health = client.health_check().await?;
//!     println!("Status: {}", health.status);
//!
//!     // Fetch a player with their owning team
//!     let player = client.get_player(874).await?;
//!     println!("{}", player.player_name);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod filter;
mod types;

pub use client::{ClientConfig, QuantfootClient};
pub use error::Error;
pub use filter::{FixtureFilter, filter_fixtures};
pub use types::*;
