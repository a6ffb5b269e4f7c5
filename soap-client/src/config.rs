//! Configuration for the SOAP transport
//!
//! The router firmware listens on a fixed port and path, so the defaults
//! here are all a caller normally needs. Timeouts are opt-in: a default
//! client waits as long as the router takes.

use std::time::Duration;

use crate::SoapError;

/// Port the router's SOAP service listens on
pub const DEFAULT_PORT: u16 = 5000;

/// Path of the router's SOAP endpoint
pub const DEFAULT_PATH: &str = "/soap/server_sa/";

/// Configuration for a [`SoapClient`](crate::SoapClient)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapClientConfig {
    /// TCP port of the SOAP service
    /// Default: 5000
    pub port: u16,

    /// Request path of the SOAP endpoint, must start with `/`
    /// Default: "/soap/server_sa/"
    pub path: String,

    /// Maximum time to establish the connection
    /// Default: none
    pub connect_timeout: Option<Duration>,

    /// Maximum time to wait on each read from the socket
    /// Default: none
    pub read_timeout: Option<Duration>,

    /// Deadline for the whole request, connect through body read
    /// Default: none
    pub timeout: Option<Duration>,
}

impl Default for SoapClientConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            path: DEFAULT_PATH.to_string(),
            connect_timeout: None,
            read_timeout: None,
            timeout: None,
        }
    }
}

impl SoapClientConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config that gives up on any request after `timeout`
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..Default::default()
        }
    }

    /// Set the port, mostly useful against a test server
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the endpoint path
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the connect timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the per-read timeout
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Validate the configuration and return any issues
    pub fn validate(&self) -> Result<(), SoapError> {
        if self.port == 0 {
            return Err(SoapError::Config("Port must be greater than 0".to_string()));
        }

        if !self.path.starts_with('/') {
            return Err(SoapError::Config(format!(
                "Endpoint path must start with '/': {}",
                self.path
            )));
        }

        if self.timeout == Some(Duration::ZERO) {
            return Err(SoapError::Config(
                "Request timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Build the endpoint URL for a router host
    pub fn endpoint_url(&self, host: &str) -> Result<String, SoapError> {
        let host = host.trim();
        if host.is_empty() {
            return Err(SoapError::InvalidUrl("Router host is empty".to_string()));
        }
        if host.contains('/') || host.contains(char::is_whitespace) {
            return Err(SoapError::InvalidUrl(format!("Invalid router host: {}", host)));
        }

        Ok(format!("http://{}:{}{}", host, self.port, self.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SoapClientConfig::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.path, "/soap/server_sa/");
        assert!(config.connect_timeout.is_none());
        assert!(config.read_timeout.is_none());
        assert!(config.timeout.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_endpoint_url() {
        let config = SoapClientConfig::default();
        assert_eq!(
            config.endpoint_url("192.168.1.1").unwrap(),
            "http://192.168.1.1:5000/soap/server_sa/"
        );
        assert_eq!(
            config.endpoint_url("routerlogin.net").unwrap(),
            "http://routerlogin.net:5000/soap/server_sa/"
        );
    }

    #[test]
    fn test_endpoint_url_rejects_bad_hosts() {
        let config = SoapClientConfig::default();
        assert!(matches!(config.endpoint_url(""), Err(SoapError::InvalidUrl(_))));
        assert!(matches!(config.endpoint_url("   "), Err(SoapError::InvalidUrl(_))));
        assert!(matches!(
            config.endpoint_url("192.168.1.1/admin"),
            Err(SoapError::InvalidUrl(_))
        ));
        assert!(matches!(
            config.endpoint_url("my router"),
            Err(SoapError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_builder_methods() {
        let config = SoapClientConfig::with_timeout(Duration::from_secs(3))
            .port(8080)
            .path("/soap/")
            .connect_timeout(Duration::from_secs(1))
            .read_timeout(Duration::from_secs(2));

        assert_eq!(config.port, 8080);
        assert_eq!(config.path, "/soap/");
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(1)));
        assert_eq!(config.read_timeout, Some(Duration::from_secs(2)));
        assert_eq!(
            config.endpoint_url("10.0.0.1").unwrap(),
            "http://10.0.0.1:8080/soap/"
        );
    }

    #[test]
    fn test_validate() {
        assert!(SoapClientConfig::new().port(0).validate().is_err());
        assert!(SoapClientConfig::new().path("soap").validate().is_err());
        assert!(SoapClientConfig::with_timeout(Duration::ZERO).validate().is_err());
    }
}
