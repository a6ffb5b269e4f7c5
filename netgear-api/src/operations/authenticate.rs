//! Authenticate operation for the ParentalControl service

use std::fmt;

use crate::operation::{escape_xml, SESSION_ID};
use crate::parser::is_success;
use crate::{ApiError, RouterOperation, Service};

/// Authenticate operation
pub struct AuthenticateOperation;

/// Login credentials for the router's admin account
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl RouterOperation for AuthenticateOperation {
    type Request = Credentials;
    /// Whether the router accepted the credentials
    type Response = bool;

    const SERVICE: Service = Service::ParentalControl;
    const ACTION: &'static str = "Authenticate";

    fn build_envelope(request: &Self::Request) -> String {
        format!(
            r#"<?xml version="1.0" encoding="utf-8" ?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
<SOAP-ENV:Header>
<SessionID xsi:type="xsd:string" xmlns:xsi="http://www.w3.org/1999/XMLSchema-instance">{session_id}</SessionID>
</SOAP-ENV:Header>
<SOAP-ENV:Body>
<Authenticate>
  <NewUsername>{username}</NewUsername>
  <NewPassword>{password}</NewPassword>
</Authenticate>
</SOAP-ENV:Body>
</SOAP-ENV:Envelope>
"#,
            session_id = SESSION_ID,
            username = escape_xml(&request.username),
            password = escape_xml(&request.password),
        )
    }

    fn parse_response(response: &str) -> Result<Self::Response, ApiError> {
        Ok(is_success(response))
    }
}
