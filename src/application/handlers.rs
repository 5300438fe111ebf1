//! One handler per CLI command.
//!
//! Every handler acquires the repository, performs a single lookup or
//! mutation, and prints line-oriented text. Not-found outcomes are normal
//! control flow and return `Ok(())`; only unexpected storage failures
//! bubble up as errors.

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::domain::{CreateUserOutcome, DomainError, DomainResult, NewUser, UserRepository};
use crate::infrastructure::database::{self, SeaOrmUserRepository};

const SEED_USERNAME: &str = "bob";
const SEED_EMAIL: &str = "bob@mail.com";
const SEED_PASSWORD: &str = "bobpass";

fn repo(db: &DatabaseConnection) -> SeaOrmUserRepository {
    SeaOrmUserRepository::new(db.clone())
}

/// Drop and recreate the full table set, then insert the seed user.
pub async fn initialize(db: &DatabaseConnection) -> DomainResult<()> {
    database::reset(db).await?;

    let seed = NewUser::new(SEED_USERNAME, SEED_EMAIL, SEED_PASSWORD);
    match repo(db).create(seed).await? {
        CreateUserOutcome::Created(user) => {
            info!("Seed user created: {}", user);
            println!("Database Initialized");
            Ok(())
        }
        // The schema was just recreated, so nothing can collide with the seed.
        CreateUserOutcome::Conflict => Err(DomainError::Conflict(
            "seed user already exists after reset".to_string(),
        )),
    }
}

pub async fn get_user(db: &DatabaseConnection, username: &str) -> DomainResult<()> {
    match repo(db).find_by_username(username).await? {
        Some(user) => println!("{}", user),
        None => println!("{} not found!", username),
    }
    Ok(())
}

pub async fn get_all_users(db: &DatabaseConnection) -> DomainResult<()> {
    let users = repo(db).all().await?;
    if users.is_empty() {
        println!("No users found");
        return Ok(());
    }
    for user in users {
        println!("{}", user);
    }
    Ok(())
}

pub async fn change_email(
    db: &DatabaseConnection,
    username: &str,
    new_email: &str,
) -> DomainResult<()> {
    match repo(db).update_email(username, new_email).await? {
        Some(user) => println!("Updated {}'s email to {}", user.username, user.email),
        None => println!("{} not found! Unable to update email.", username),
    }
    Ok(())
}

pub async fn create_user(
    db: &DatabaseConnection,
    username: &str,
    email: &str,
    password: &str,
) -> DomainResult<()> {
    let new_user = NewUser::new(username, email, password);
    match repo(db).create(new_user).await? {
        CreateUserOutcome::Created(user) => println!("{}", user),
        CreateUserOutcome::Conflict => println!("Username or email already taken!"),
    }
    Ok(())
}

pub async fn delete_user(db: &DatabaseConnection, username: &str) -> DomainResult<()> {
    if repo(db).delete_by_username(username).await? {
        println!("{} deleted", username);
    } else {
        println!("{} not found! Unable to delete user.", username);
    }
    Ok(())
}

pub async fn find_user(db: &DatabaseConnection, query: &str) -> DomainResult<()> {
    let users = repo(db).search(query).await?;
    if users.is_empty() {
        println!("No users found matching '{}'", query);
        return Ok(());
    }
    for user in users {
        println!("{}", user);
    }
    Ok(())
}

pub async fn list_users(db: &DatabaseConnection, limit: u64, offset: u64) -> DomainResult<()> {
    for user in repo(db).page(limit, offset).await? {
        println!("{}", user);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectOptions, Database, DatabaseConnection};

    use super::*;

    async fn setup() -> DatabaseConnection {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1);
        Database::connect(opts).await.unwrap()
    }

    async fn usernames(db: &DatabaseConnection) -> Vec<String> {
        repo(db)
            .all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect()
    }

    #[tokio::test]
    async fn initialize_seeds_exactly_bob() {
        let db = setup().await;
        initialize(&db).await.unwrap();

        let users = repo(&db).all().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "bob");
        assert_eq!(users[0].email, "bob@mail.com");
        assert_eq!(users[0].password, "bobpass");
        assert!(users[0].id > 0);
    }

    #[tokio::test]
    async fn initialize_twice_fully_resets_prior_state() {
        let db = setup().await;
        initialize(&db).await.unwrap();
        create_user(&db, "alice", "a@x.com", "pw").await.unwrap();

        initialize(&db).await.unwrap();
        assert_eq!(usernames(&db).await, vec!["bob"]);
    }

    #[tokio::test]
    async fn create_then_delete_end_to_end() {
        let db = setup().await;
        initialize(&db).await.unwrap();

        create_user(&db, "alice", "a@x.com", "pw").await.unwrap();
        assert_eq!(usernames(&db).await, vec!["bob", "alice"]);

        delete_user(&db, "bob").await.unwrap();
        assert_eq!(usernames(&db).await, vec!["alice"]);
    }

    #[tokio::test]
    async fn conflicting_create_leaves_storage_unchanged() {
        let db = setup().await;
        initialize(&db).await.unwrap();

        create_user(&db, "bob", "second@mail.com", "pw2")
            .await
            .unwrap();

        let users = repo(&db).all().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "bob@mail.com");
        assert_eq!(users[0].password, "bobpass");
    }

    #[tokio::test]
    async fn not_found_handlers_are_not_errors() {
        let db = setup().await;
        initialize(&db).await.unwrap();

        get_user(&db, "nobody").await.unwrap();
        change_email(&db, "nobody", "n@x.com").await.unwrap();
        delete_user(&db, "nobody").await.unwrap();
        find_user(&db, "no-such-substring").await.unwrap();
        list_users(&db, 10, 100).await.unwrap();

        assert_eq!(usernames(&db).await, vec!["bob"]);
    }
}
