use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or create the schema.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Failed to sign a test bearer token.
    #[error(transparent)]
    Token(#[from] jsonwebtoken::errors::Error),
}
