/// Unified error type for connecting to and preparing a database
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// PostgreSQL-specific errors (SeaORM)
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// The initial connection could not be established
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Applying pending migrations failed
    #[error("Migration error: {0}")]
    MigrationError(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
