//! Error types for procroute.

use thiserror::Error;

/// Boxed error returned from handlers.
///
/// Handlers are application code and may fail with any error type; the
/// router only needs the error to be displayable and thread-safe.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure of the routing mechanism itself.
///
/// A handler's own failure never appears here - it is encoded into the
/// response payload instead. The only way [`Router::handle`] fails is a
/// procedure name with no registered handler.
///
/// [`Router::handle`]: crate::router::Router::handle
#[derive(Debug, Error)]
pub enum RouterError {
    /// No handler is registered under the requested procedure name.
    #[error("unrecognized procedure '{0}'")]
    UnrecognizedProcedure(String),
}

/// Result type alias using RouterError.
pub type Result<T> = std::result::Result<T, RouterError>;
