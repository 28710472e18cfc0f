//! Database module for PostgreSQL connection and marts reads.

mod pool;
pub mod repository;
pub mod schema;

pub use pool::DatabasePool;
pub use schema::*;
