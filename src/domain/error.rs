use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}
