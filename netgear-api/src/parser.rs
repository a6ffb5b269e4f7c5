//! Response parsing for the router's SOAP replies
//!
//! The firmware returns loosely formed XML, so responses are inspected with
//! substring checks and a capture pattern rather than an XML decoder.
//!
//! The device list arrives as one flat `;`-delimited string:
//!
//! ```text
//! <NewAttachDevice>10;192.168.1.2;Laptop;AA:BB:CC:DD:EE:FF;wireless;130;</NewAttachDevice>
//! ```
//!
//! Fields are consumed in fixed-width records of [`RECORD_WIDTH`]. The
//! record count is `(field_count - 1) / RECORD_WIDTH`, which discards the
//! empty field after the trailing delimiter and silently drops an
//! incomplete trailing record.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use crate::device::{AttachedDevice, RECORD_WIDTH};
use crate::{ApiError, Result};

/// Marker the router embeds in every successful response
pub const SUCCESS_MARKER: &str = "<ResponseCode>000</ResponseCode>";

/// Delimiter between device fields
pub const FIELD_DELIMITER: char = ';';

fn device_payload_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)<NewAttachDevice>(.*?)</NewAttachDevice>")
            .expect("NewAttachDevice pattern is valid")
    })
}

fn response_code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"<ResponseCode>\s*([^<]*?)\s*</ResponseCode>")
            .expect("ResponseCode pattern is valid")
    })
}

/// Whether the response carries the success response code
pub fn is_success(response: &str) -> bool {
    response.contains(SUCCESS_MARKER)
}

/// The response code reported by the router, if any
pub fn response_code(response: &str) -> Option<&str> {
    response_code_pattern()
        .captures(response)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract the flattened device string from a device-list response
///
/// # Errors
///
/// Returns `ApiError::ParseError` if the `NewAttachDevice` element is absent.
pub fn extract_device_payload(response: &str) -> Result<&str> {
    device_payload_pattern()
        .captures(response)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| ApiError::ParseError("Missing NewAttachDevice element".to_string()))
}

/// Split a flattened device string into complete device records
pub fn split_device_records(payload: &str) -> Vec<AttachedDevice> {
    let fields: Vec<&str> = payload.split(FIELD_DELIMITER).collect();
    let count = fields.len().saturating_sub(1) / RECORD_WIDTH;

    fields
        .chunks_exact(RECORD_WIDTH)
        .take(count)
        .filter_map(AttachedDevice::from_record)
        .collect()
}

/// Parse a complete device-list response
///
/// A response without the success code yields an empty list rather than an
/// error; the router uses non-success codes for expected conditions such as
/// an unauthenticated session.
pub fn parse_attached_devices(response: &str) -> Result<Vec<AttachedDevice>> {
    if !is_success(response) {
        debug!(
            response_code = response_code(response).unwrap_or("<none>"),
            "Device list request was not successful"
        );
        return Ok(Vec::new());
    }

    let payload = extract_device_payload(response)?;
    let devices = split_device_records(payload);

    debug!(count = devices.len(), "Parsed attached devices");

    Ok(devices)
}
