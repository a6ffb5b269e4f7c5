//! Netgear router API for listing attached devices
//!
//! This crate talks to the SOAP management interface that Netgear routers
//! expose on port 5000. It uses the private `soap-client` crate for the
//! HTTP exchange and handles envelope construction and response parsing.
//!
//! ```no_run
//! use netgear_api::Session;
//!
//! let mut session = Session::new("192.168.1.1", "admin", "password");
//! if session.login()? {
//!     for device in session.get_attached_devices()? {
//!         println!("{} {} {}", device.name, device.ip_address, device.mac_address);
//!     }
//! }
//! # Ok::<(), netgear_api::ApiError>(())
//! ```

pub mod client;
pub mod device;
pub mod error;
pub mod logging;
pub mod operation;
pub mod operations;
pub mod parser;
pub mod service;
pub mod session;

pub use client::NetgearClient;
pub use device::AttachedDevice;
pub use error::{ApiError, Result};
pub use operation::{RouterOperation, SESSION_ID};
pub use service::Service;
pub use session::Session;
pub use soap_client::{SoapClientConfig, SoapError};
