use async_trait::async_trait;

use super::{CreateUserOutcome, NewUser, User};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user inside its own transaction.
    ///
    /// Rolls back and reports [`CreateUserOutcome::Conflict`] when the
    /// username or email is already taken.
    async fn create(&self, new_user: NewUser) -> DomainResult<CreateUserOutcome>;

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;
    async fn all(&self) -> DomainResult<Vec<User>>;

    /// Set a new email on the user with the given username.
    ///
    /// Returns `None` without touching storage when no such user exists.
    async fn update_email(&self, username: &str, new_email: &str) -> DomainResult<Option<User>>;

    /// Delete by exact username. Returns `false` when no row matched.
    async fn delete_by_username(&self, username: &str) -> DomainResult<bool>;

    /// Case-insensitive substring match against username OR email.
    async fn search(&self, query: &str) -> DomainResult<Vec<User>>;

    /// Limit/offset page over the natural storage order.
    async fn page(&self, limit: u64, offset: u64) -> DomainResult<Vec<User>>;
}
