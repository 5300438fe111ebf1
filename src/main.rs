//! User Admin — administrative CLI
//!
//! Manages user accounts persisted in a relational database. Reads
//! configuration from a TOML file (~/.config/user-admin/config.toml).
//!
//! ```sh
//! # Reset the database and seed it
//! user-admin initialize
//!
//! # Create and inspect users
//! user-admin create-user alice a@x.com pw
//! user-admin get-user alice
//! user-admin list-users 20 0
//!
//! # Point at another database
//! user-admin --database-url sqlite://./staging.db?mode=rwc get-all-users
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use user_admin::application::handlers;
use user_admin::config::{default_config_path, AppConfig};
use user_admin::infrastructure::database;
use user_admin::init_database;

/// Administrative CLI for managing user accounts.
#[derive(Parser, Debug)]
#[command(
    name = "user-admin",
    version,
    about = "Manage user accounts in a relational database"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "USER_ADMIN_CONFIG")]
    config: Option<PathBuf>,

    /// Override the database connection URL.
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Skip ensuring the schema exists on startup.
    #[arg(long)]
    no_migrate: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Drop and recreate all tables, then insert a sample user (bob).
    Initialize,

    /// Retrieve and print a single user by exact username.
    GetUser {
        /// Exact username of the user to retrieve.
        username: String,
    },

    /// Retrieve and print all users.
    GetAllUsers,

    /// Update a user's email address.
    ChangeEmail {
        /// Exact username of the user to update.
        username: String,
        /// New email address to set for the user.
        new_email: String,
    },

    /// Create a new user.
    CreateUser {
        /// Username for the new user.
        username: String,
        /// Email address for the new user.
        email: String,
        /// Password for the new user.
        password: String,
    },

    /// Delete a user by exact username.
    DeleteUser {
        /// Exact username of the user to delete.
        username: String,
    },

    /// Find users by partial match of username OR email (case-insensitive).
    FindUser {
        /// Search text to match against username or email.
        query: String,
    },

    /// List users using limit/offset pagination.
    ListUsers {
        /// Maximum number of users to return (page size).
        #[arg(default_value_t = 10)]
        limit: u64,
        /// Number of users to skip before returning results.
        #[arg(default_value_t = 0)]
        offset: u64,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            init_tracing(cli.log_level.as_deref().unwrap_or(&cfg.logging.level));
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            let cfg = AppConfig::default();
            init_tracing(cli.log_level.as_deref().unwrap_or(&cfg.logging.level));
            error!(
                "Failed to load config from {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            cfg
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(url) = cli.database_url {
        info!("CLI override: database_url = {}", url);
        config.database.url = url;
    }

    // ── Database ───────────────────────────────────────────────
    let db = init_database(&config.database_config()).await?;

    // `initialize` rebuilds the schema itself; everything else just needs
    // the tables to exist.
    if !cli.no_migrate && !matches!(cli.command, Command::Initialize) {
        database::create_all(&db).await?;
    }

    // ── Dispatch ───────────────────────────────────────────────
    let result = match cli.command {
        Command::Initialize => handlers::initialize(&db).await,
        Command::GetUser { username } => handlers::get_user(&db, &username).await,
        Command::GetAllUsers => handlers::get_all_users(&db).await,
        Command::ChangeEmail {
            username,
            new_email,
        } => handlers::change_email(&db, &username, &new_email).await,
        Command::CreateUser {
            username,
            email,
            password,
        } => handlers::create_user(&db, &username, &email, &password).await,
        Command::DeleteUser { username } => handlers::delete_user(&db, &username).await,
        Command::FindUser { query } => handlers::find_user(&db, &query).await,
        Command::ListUsers { limit, offset } => handlers::list_users(&db, limit, offset).await,
    };

    db.close().await?;
    result?;

    Ok(())
}

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
