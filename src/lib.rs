//! # User Admin
//!
//! Administrative CLI for managing user accounts in a relational database.
//!
//! ## Architecture
//!
//! - **domain**: User entity, repository trait, and error types
//! - **application**: one handler per CLI command
//! - **infrastructure**: SeaORM connection, schema DDL, and repository
//! - **config**: TOML configuration with env/CLI overrides

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmUserRepository};
