use std::fmt;

use serde::{Deserialize, Serialize};

/// User account as seen by the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Surrogate primary key, assigned by storage on insert.
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id={} username={} email={}",
            self.id, self.username, self.email
        )
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Result of a create attempt.
///
/// A uniqueness violation on username or email is an expected outcome,
/// not an error, so it gets its own variant instead of a `DomainError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateUserOutcome {
    /// The user was inserted; carries the row with its generated id.
    Created(User),
    /// Username or email is already taken; the transaction was rolled back.
    Conflict,
}
