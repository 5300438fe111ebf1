//! User aggregate
//!
//! Contains the User entity, DTOs, and repository interface.

pub mod model;
pub mod repository;

pub use model::{CreateUserOutcome, NewUser, User};
pub use repository::UserRepository;
