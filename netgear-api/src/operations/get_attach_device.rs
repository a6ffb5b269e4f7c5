//! GetAttachDevice operation for the DeviceInfo service

use crate::device::AttachedDevice;
use crate::operation::SESSION_ID;
use crate::parser::parse_attached_devices;
use crate::{ApiError, RouterOperation, Service};

/// GetAttachDevice operation
pub struct GetAttachDeviceOperation;

/// Request for GetAttachDevice operation
///
/// The action takes no parameters; the envelope only carries the fixed
/// session identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetAttachDeviceRequest;

impl RouterOperation for GetAttachDeviceOperation {
    type Request = GetAttachDeviceRequest;
    type Response = Vec<AttachedDevice>;

    const SERVICE: Service = Service::DeviceInfo;
    const ACTION: &'static str = "GetAttachDevice";

    fn build_envelope(_request: &Self::Request) -> String {
        format!(
            r#"<?xml version="1.0" encoding="utf-8" standalone="no"?>
<SOAP-ENV:Envelope xmlns:SOAPSDK1="http://www.w3.org/2001/XMLSchema" xmlns:SOAPSDK2="http://www.w3.org/2001/XMLSchema-instance" xmlns:SOAPSDK3="http://schemas.xmlsoap.org/soap/encoding/" xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
<SOAP-ENV:Header>
<SessionID>{session_id}</SessionID>
</SOAP-ENV:Header>
<SOAP-ENV:Body>
<M1:{action} xmlns:M1="{service_uri}">
</M1:{action}>
</SOAP-ENV:Body>
</SOAP-ENV:Envelope>
"#,
            session_id = SESSION_ID,
            action = Self::ACTION,
            service_uri = Self::SERVICE.service_uri(),
        )
    }

    fn parse_response(response: &str) -> Result<Self::Response, ApiError> {
        parse_attached_devices(response)
    }
}
