/// Error type for connecting to and probing the document store
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Error reported by the MongoDB driver
    #[cfg(feature = "mongodb")]
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// Connection could not be established or verified
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Health probe failed on an established connection
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
