//! Router SOAP operations
//!
//! One module per SOAP action, named after the action.

pub mod authenticate;
pub mod get_attach_device;

pub use authenticate::{AuthenticateOperation, Credentials};
pub use get_attach_device::{GetAttachDeviceOperation, GetAttachDeviceRequest};
