//! Core business entities, types and traits.

pub mod error;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use user::{CreateUserOutcome, NewUser, User, UserRepository};
