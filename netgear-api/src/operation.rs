use crate::error::ApiError;
use crate::service::Service;

/// Session identifier sent in the header of every request
///
/// This firmware family requires the same fixed value regardless of login
/// state. It is a protocol constant, not a per-session secret.
pub const SESSION_ID: &str = "A7D88AE69687E58D9A00";

/// Base trait for all router SOAP operations
///
/// Each operation knows which service and action it targets, how to render
/// its complete SOAP envelope from typed request data, and how to interpret
/// the raw response text.
pub trait RouterOperation {
    /// The request data for this operation
    type Request;

    /// The parsed response data for this operation
    type Response;

    /// The SOAP service this operation belongs to
    const SERVICE: Service;

    /// The SOAP action name for this operation
    const ACTION: &'static str;

    /// Build the complete SOAP envelope for a request
    fn build_envelope(request: &Self::Request) -> String;

    /// Interpret the raw response text
    fn parse_response(response: &str) -> Result<Self::Response, ApiError>;

    /// Full action URN sent in the `SOAPAction` header
    fn action_uri() -> String {
        Self::SERVICE.action_uri(Self::ACTION)
    }
}

/// Escape XML special characters in a text value
pub(crate) fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
