/// SOAP services exposed by the router's management interface
///
/// Only the services needed for login and device listing are modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// ParentalControl service - hosts the `Authenticate` action
    ParentalControl,

    /// DeviceInfo service - reports router and attached-device information
    DeviceInfo,
}

impl Service {
    /// Get the name of this service as a string
    pub fn name(&self) -> &'static str {
        match self {
            Service::ParentalControl => "ParentalControl",
            Service::DeviceInfo => "DeviceInfo",
        }
    }

    /// The service URN used in SOAP action headers and envelopes
    pub fn service_uri(&self) -> &'static str {
        match self {
            Service::ParentalControl => "urn:NETGEAR-ROUTER:service:ParentalControl:1",
            Service::DeviceInfo => "urn:NETGEAR-ROUTER:service:DeviceInfo:1",
        }
    }

    /// Full SOAP action URN for an action on this service
    pub fn action_uri(&self, action: &str) -> String {
        format!("{}#{}", self.service_uri(), action)
    }
}
