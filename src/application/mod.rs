//! Command handlers composed from the repository and schema operations.

pub mod handlers;
