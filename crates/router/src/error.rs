use thiserror::Error;

/// Route registration errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouteError {
    /// Another route already uses this path
    #[error("Duplicate route path: {0}")]
    DuplicatePath(String),

    /// Paths must be absolute
    #[error("Route path must start with '/': {0}")]
    InvalidPath(String),
}
