pub mod entities;
pub mod migrator;
pub mod repositories;

pub use repositories::SeaOrmUserRepository;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use self::migrator::Migrator;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./users.db?mode=rwc")
    pub url: String,
    /// Connection pool size
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./users.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    info!("Connecting to database: {}", config.url);
    let mut opts = ConnectOptions::new(&config.url);
    opts.max_connections(config.max_connections);
    let db = Database::connect(opts).await?;
    info!("Database connected successfully");
    Ok(db)
}

/// Create every table, doing nothing for tables that already exist.
pub async fn create_all(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await
}

/// Drop every table, doing nothing when they are already absent.
pub async fn drop_all(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::down(db, None).await
}

/// Destructive reset: drop everything, then recreate the full table set.
pub async fn reset(db: &DatabaseConnection) -> Result<(), DbErr> {
    info!("Resetting database schema");
    Migrator::fresh(db).await
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectOptions, Database, EntityTrait};

    use super::*;

    async fn connect() -> DatabaseConnection {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1);
        Database::connect(opts).await.unwrap()
    }

    #[tokio::test]
    async fn create_all_and_drop_all_are_idempotent() {
        let db = connect().await;

        create_all(&db).await.unwrap();
        create_all(&db).await.unwrap();

        drop_all(&db).await.unwrap();
        drop_all(&db).await.unwrap();
    }

    #[tokio::test]
    async fn reset_recreates_an_empty_users_table() {
        let db = connect().await;
        create_all(&db).await.unwrap();

        let row = entities::user::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            username: sea_orm::Set("alice".to_string()),
            email: sea_orm::Set("a@x.com".to_string()),
            password: sea_orm::Set("pw".to_string()),
        };
        use sea_orm::ActiveModelTrait;
        row.insert(&db).await.unwrap();

        reset(&db).await.unwrap();

        let rows = entities::user::Entity::find().all(&db).await.unwrap();
        assert!(rows.is_empty());
    }
}
