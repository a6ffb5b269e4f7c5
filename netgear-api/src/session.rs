//! Router session
//!
//! A [`Session`] ties one router host to one set of admin credentials and
//! remembers whether the last login attempt succeeded. Nothing happens on
//! the network until [`Session::login`] or
//! [`Session::get_attached_devices`] is called, and each of those performs
//! exactly one request.
//!
//! `login` takes `&mut self`; to drive one session from several threads,
//! wrap it in a `Mutex`.

use std::fmt;
use tracing::{debug, info, warn};

use crate::device::AttachedDevice;
use crate::operations::{AuthenticateOperation, Credentials, GetAttachDeviceOperation, GetAttachDeviceRequest};
use crate::{NetgearClient, Result};

/// One relationship with a specific router
#[derive(Clone)]
pub struct Session {
    host: String,
    credentials: Credentials,
    authenticated: bool,
    client: NetgearClient,
}

impl Session {
    /// Create a session with the default client; performs no I/O
    pub fn new(host: impl Into<String>, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::with_client(host, username, password, NetgearClient::new())
    }

    /// Create a session that sends its requests through `client`
    pub fn with_client(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        client: NetgearClient,
    ) -> Self {
        Self {
            host: host.into(),
            credentials: Credentials::new(username, password),
            authenticated: false,
            client,
        }
    }

    /// Router host this session talks to
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Admin username used for login
    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    /// Whether the most recent login attempt was accepted
    pub fn is_logged_in(&self) -> bool {
        self.authenticated
    }

    /// Authenticate against the router
    ///
    /// Returns `Ok(true)` when the router accepts the credentials and
    /// `Ok(false)` when it rejects them. A transport failure is returned as
    /// an error. In every case other than `Ok(true)` the session is left
    /// unauthenticated.
    pub fn login(&mut self) -> Result<bool> {
        let result = self
            .client
            .execute::<AuthenticateOperation>(&self.host, &self.credentials);

        self.authenticated = matches!(result, Ok(true));

        match &result {
            Ok(true) => info!(host = %self.host, username = %self.credentials.username, "Logged in to router"),
            Ok(false) => warn!(host = %self.host, username = %self.credentials.username, "Router rejected login"),
            Err(e) => warn!(host = %self.host, "Login request failed: {}", e),
        }

        result
    }

    /// List the devices currently attached to the router
    ///
    /// The request does not depend on [`is_logged_in`](Self::is_logged_in);
    /// a router that has not accepted a login answers with a non-success
    /// code, which yields an empty list rather than an error.
    pub fn get_attached_devices(&self) -> Result<Vec<AttachedDevice>> {
        let devices = self
            .client
            .execute::<GetAttachDeviceOperation>(&self.host, &GetAttachDeviceRequest)
            .inspect_err(|e| warn!(host = %self.host, "Device list request failed: {}", e))?;

        debug!(host = %self.host, count = devices.len(), "Fetched attached devices");

        Ok(devices)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("host", &self.host)
            .field("credentials", &self.credentials)
            .field("authenticated", &self.authenticated)
            .finish_non_exhaustive()
    }
}
