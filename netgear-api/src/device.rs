//! Attached device records
//!
//! The router reports every field as text. The raw strings are kept as the
//! canonical values; the typed accessors are best-effort views over them.

use serde::Serialize;
use std::net::IpAddr;

/// Number of fields that make up one device record
pub const RECORD_WIDTH: usize = 6;

/// A device currently attached to the router
///
/// Values are built fresh on every query and have no identity beyond their
/// contents: two queries describing the same device yield equal values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AttachedDevice {
    /// Signal strength as reported by the router (a percentage for wireless links)
    #[serde(rename = "signal")]
    pub signal_strength: String,
    #[serde(rename = "ip")]
    pub ip_address: String,
    pub name: String,
    #[serde(rename = "mac")]
    pub mac_address: String,
    /// Connection type, e.g. "wireless" or "wired"
    #[serde(rename = "type")]
    pub link_type: String,
    /// Negotiated link rate in Mbps
    pub link_rate: String,
}

impl AttachedDevice {
    /// Build a device from one complete record
    ///
    /// Returns `None` unless `fields` holds exactly [`RECORD_WIDTH`] entries,
    /// in the order signal, IP, name, MAC, type, link rate.
    pub fn from_record(fields: &[&str]) -> Option<Self> {
        match fields {
            [signal, ip, name, mac, link_type, link_rate] => Some(Self {
                signal_strength: signal.to_string(),
                ip_address: ip.to_string(),
                name: name.to_string(),
                mac_address: mac.to_string(),
                link_type: link_type.to_string(),
                link_rate: link_rate.to_string(),
            }),
            _ => None,
        }
    }

    /// Signal strength as a percentage, if the router reported one
    pub fn signal_percent(&self) -> Option<u8> {
        self.signal_strength
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|value| *value <= 100)
    }

    /// Parsed IP address
    pub fn ip_addr(&self) -> Option<IpAddr> {
        self.ip_address.trim().parse().ok()
    }

    /// Link rate in Mbps
    pub fn link_rate_mbps(&self) -> Option<u32> {
        self.link_rate.trim().parse().ok()
    }

    /// Whether the device is connected over wifi
    pub fn is_wireless(&self) -> bool {
        self.link_type.trim().eq_ignore_ascii_case("wireless")
    }
}
