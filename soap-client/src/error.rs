//! Error types for the SOAP client

use thiserror::Error;

/// Errors that can occur while exchanging a SOAP request with the router
#[derive(Debug, Error)]
pub enum SoapError {
    /// The endpoint URL could not be built from the host and configuration
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Connection or HTTP communication error
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// The response body could not be fully read
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// The client configuration is unusable
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<ureq::Error> for SoapError {
    fn from(error: ureq::Error) -> Self {
        match error {
            ureq::Error::Transport(transport) if transport.kind() == ureq::ErrorKind::InvalidUrl => {
                SoapError::InvalidUrl(transport.to_string())
            }
            other => SoapError::Network(other.to_string()),
        }
    }
}
