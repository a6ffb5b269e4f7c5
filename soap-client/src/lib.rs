//! Private SOAP transport for Netgear router communication
//!
//! This crate performs exactly one HTTP POST per call against the router's
//! SOAP endpoint (`http://<host>:5000/soap/server_sa/` by default) and hands
//! back the raw response text. Envelope construction and response
//! interpretation live in `netgear-api`.

mod config;
mod error;

pub use config::{SoapClientConfig, DEFAULT_PATH, DEFAULT_PORT};
pub use error::SoapError;

use tracing::{debug, warn};

/// A minimal SOAP client for the router's management interface
#[derive(Debug, Clone)]
pub struct SoapClient {
    agent: ureq::Agent,
    config: SoapClientConfig,
}

impl SoapClient {
    /// Create a new SOAP client with default configuration
    ///
    /// No timeouts of our own are applied; ureq's built-in 30 second
    /// connect timeout still holds. Use [`SoapClient::with_config`] to set
    /// connect, read, or whole-request timeouts.
    pub fn new() -> Self {
        let config = SoapClientConfig::default();
        Self {
            agent: build_agent(&config),
            config,
        }
    }

    /// Create a SOAP client with a custom configuration
    pub fn with_config(config: SoapClientConfig) -> Result<Self, SoapError> {
        config.validate()?;
        Ok(Self {
            agent: build_agent(&config),
            config,
        })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &SoapClientConfig {
        &self.config
    }

    /// Send a SOAP request and return the raw response text
    ///
    /// # Arguments
    /// * `host` - Router host name or IP address
    /// * `action` - Full SOAP action URN, sent in the `SOAPAction` header
    /// * `body` - Complete XML envelope
    ///
    /// An HTTP error status is not treated as a failure: the router reports
    /// errors inside the envelope, so the body is returned either way.
    pub fn send(&self, host: &str, action: &str, body: &str) -> Result<String, SoapError> {
        let url = self.config.endpoint_url(host)?;

        debug!(%url, action, "Sending SOAP request");

        let response = match self
            .agent
            .post(&url)
            .set("Content-Type", "text/xml; charset=\"utf-8\"")
            .set("SOAPAction", action)
            .send_string(body)
        {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                debug!(status, action, "Router answered with HTTP error status");
                response
            }
            Err(e) => {
                warn!(%url, action, "SOAP request failed: {}", e);
                return Err(e.into());
            }
        };

        let text = response
            .into_string()
            .map_err(|e| SoapError::Body(e.to_string()))?;

        debug!(action, bytes = text.len(), "Received SOAP response");

        Ok(text)
    }
}

impl Default for SoapClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Every request opens its own connection; idle sockets are never pooled.
fn build_agent(config: &SoapClientConfig) -> ureq::Agent {
    let mut builder = ureq::AgentBuilder::new()
        .max_idle_connections(0)
        .max_idle_connections_per_host(0);
    if let Some(timeout) = config.connect_timeout {
        builder = builder.timeout_connect(timeout);
    }
    if let Some(timeout) = config.read_timeout {
        builder = builder.timeout_read(timeout);
    }
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}
