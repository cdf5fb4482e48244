/// Unified database error type for connection operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Connection could not be established or verified
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
