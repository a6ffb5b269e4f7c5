use soap_client::SoapError;
use thiserror::Error;

/// High-level API errors for router operations
///
/// A rejected login is not an error: it is reported as `Ok(false)` from
/// [`Session::login`](crate::Session::login).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request construction, connection, or body read failure
    ///
    /// Covers everything that stops a request/response cycle from
    /// completing: an unusable host, an unreachable router, a connection
    /// dropped mid-body.
    #[error("Transport error: {0}")]
    Transport(#[from] SoapError),

    /// Response parsing error
    ///
    /// The router answered with a success code but the expected payload
    /// element was missing or malformed.
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
