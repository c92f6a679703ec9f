use thiserror::Error;

/// Error raised by a driver, pool or statement collaborator.
pub type DriverError = Box<dyn std::error::Error + Send + Sync>;

/// Error type for pgbind operations
#[derive(Debug, Error)]
pub enum PgBindError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported connection type: {0}")]
    UnsupportedConnectionType(String),

    #[error("Bind failed: {0}")]
    BindFailure(#[source] DriverError),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// The single failure surfaced by [`QueryBinder::bind`](crate::traits::QueryBinder::bind).
///
/// Whatever stage failed, the caller sees one error carrying the parameter
/// index, the type name that was being bound and the underlying cause.
#[derive(Debug, Error)]
#[error(
    "Failed to bind parameter {index} ({}): {source}",
    .type_name.as_deref().unwrap_or("untyped")
)]
pub struct BindError {
    index: usize,
    type_name: Option<String>,
    #[source]
    source: PgBindError,
}

impl BindError {
    pub fn new(index: usize, type_name: Option<String>, source: PgBindError) -> Self {
        Self {
            index,
            type_name,
            source,
        }
    }

    /// Positional index of the parameter that failed.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Element or declared type name in effect, if the bind was typed.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// The underlying failure.
    pub fn kind(&self) -> &PgBindError {
        &self.source
    }

    pub fn into_inner(self) -> PgBindError {
        self.source
    }
}

/// Result type alias for pgbind operations
pub type Result<T> = std::result::Result<T, PgBindError>;
