//! Error types for the reporting API client.
//!
//! # Design
//! Every contract violation is raised at the call that breaks it:
//! malformed input is `InvalidArgument`, dispatching before a URL is known
//! is `Precondition`, and counting a non-list body is `Domain`. Faults from
//! the injected transport arrive wrapped in `Transport` with their original
//! source intact.
//!
//! The reporting server signals many application errors with a 200 status
//! and a `"result": "error"` body. Those are not represented here; callers
//! inspect `QueryResult::has_error` instead.

use std::error::Error as StdError;

/// Errors returned by dispatchers, queries, and query results.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// A caller-supplied value was rejected (URL, HTTP method, parameter or
    /// field name).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation needs state that has not been provided yet.
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// The decoded response has the wrong shape for the requested operation.
    #[error("domain error: {0}")]
    Domain(String),

    /// The transport failed to complete the HTTP exchange.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl QueryError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        QueryError::InvalidArgument(message.into())
    }
}

/// A fault raised by an `HttpTransport` implementation.
///
/// The source error is kept as-is so callers can downcast to the concrete
/// transport error type.
#[derive(Debug, thiserror::Error)]
#[error("transport error: {source}")]
pub struct TransportError {
    #[source]
    source: Box<dyn StdError + Send + Sync>,
}

impl TransportError {
    pub fn new(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Borrow the underlying transport error.
    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.source.as_ref()
    }
}

#[cfg(feature = "ureq")]
impl From<ureq::Error> for TransportError {
    fn from(err: ureq::Error) -> Self {
        TransportError::new(err)
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;
