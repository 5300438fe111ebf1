//! External concerns: database connection, schema DDL, repositories.

pub mod database;

pub use database::{init_database, DatabaseConfig, SeaOrmUserRepository};
