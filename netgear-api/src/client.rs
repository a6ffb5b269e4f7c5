use soap_client::{SoapClient, SoapClientConfig};
use tracing::debug;

use crate::{Result, RouterOperation};

/// A client for executing router operations against an actual router
///
/// This client bridges the stateless operation definitions and the network
/// requests made by the soap-client crate. It holds no per-router state and
/// can be shared between sessions.
#[derive(Debug, Clone, Default)]
pub struct NetgearClient {
    soap_client: SoapClient,
}

impl NetgearClient {
    /// Create a new client with the default transport configuration
    pub fn new() -> Self {
        Self {
            soap_client: SoapClient::new(),
        }
    }

    /// Create a client with a custom transport configuration
    ///
    /// # Example
    /// ```rust
    /// use std::time::Duration;
    /// use netgear_api::{NetgearClient, SoapClientConfig};
    ///
    /// let client = NetgearClient::with_config(
    ///     SoapClientConfig::with_timeout(Duration::from_secs(10)),
    /// ).unwrap();
    /// ```
    pub fn with_config(config: SoapClientConfig) -> Result<Self> {
        Ok(Self {
            soap_client: SoapClient::with_config(config)?,
        })
    }

    /// Create a client around an existing SOAP client
    pub fn with_soap_client(soap_client: SoapClient) -> Self {
        Self { soap_client }
    }

    /// Execute a router operation against a host
    ///
    /// Builds the operation's envelope, sends it to the operation's action,
    /// and parses the raw response text.
    pub fn execute<Op: RouterOperation>(&self, host: &str, request: &Op::Request) -> Result<Op::Response> {
        let envelope = Op::build_envelope(request);
        let action = Op::action_uri();

        debug!(host, service = Op::SERVICE.name(), action = Op::ACTION, "Executing operation");

        let response = self.soap_client.send(host, &action, &envelope)?;

        Op::parse_response(&response)
    }
}
