//! Test helpers for running sessions against a mock router

use mockito::{Matcher, Mock, Server};
use netgear_api::{NetgearClient, Session, SoapClientConfig};
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

pub const LOGIN_ACTION: &str = "urn:NETGEAR-ROUTER:service:ParentalControl:1#Authenticate";
pub const DEVICES_ACTION: &str = "urn:NETGEAR-ROUTER:service:DeviceInfo:1#GetAttachDevice";
pub const ENDPOINT: &str = "/soap/server_sa/";

/// Create a session whose requests go to the mock server
pub fn session_for(server: &Server, username: &str, password: &str) -> Session {
    let config = SoapClientConfig::with_timeout(Duration::from_secs(5))
        .port(server.socket_address().port());
    let client = NetgearClient::with_config(config).expect("valid config");
    Session::with_client("127.0.0.1", username, password, client)
}

/// A login reply carrying the given response code
pub fn login_response(code: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<soap-env:Envelope xmlns:soap-env="http://schemas.xmlsoap.org/soap/envelope/" soap-env:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/">
<soap-env:Body>
<m:AuthenticateResponse xmlns:m="urn:NETGEAR-ROUTER:service:ParentalControl:1">
</m:AuthenticateResponse>
<ResponseCode>{}</ResponseCode>
</soap-env:Body>
</soap-env:Envelope>"#,
        code
    )
}

/// A device-list reply with the given payload and response code
pub fn devices_response(code: &str, payload: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<soap-env:Envelope xmlns:soap-env="http://schemas.xmlsoap.org/soap/envelope/" soap-env:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/">
<soap-env:Body>
<m:GetAttachDeviceResponse xmlns:m="urn:NETGEAR-ROUTER:service:DeviceInfo:1">
<NewAttachDevice>{}</NewAttachDevice>
</m:GetAttachDeviceResponse>
<ResponseCode>{}</ResponseCode>
</soap-env:Body>
</soap-env:Envelope>"#,
        payload, code
    )
}

/// Mock the login action with the given reply body
pub fn mock_login(server: &mut Server, body: &str) -> Mock {
    server
        .mock("POST", ENDPOINT)
        .match_header("SOAPAction", LOGIN_ACTION)
        .with_status(200)
        .with_body(body)
        .create()
}

/// Mock the device-list action with the given reply body
pub fn mock_devices(server: &mut Server, body: &str) -> Mock {
    server
        .mock("POST", ENDPOINT)
        .match_header("SOAPAction", DEVICES_ACTION)
        .match_body(Matcher::Regex(
            "<SessionID>A7D88AE69687E58D9A00</SessionID>".to_string(),
        ))
        .with_status(200)
        .with_body(body)
        .create()
}

/// A port on localhost with nothing listening
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    listener.local_addr().expect("local addr").port()
}

/// A router that declares a 500-byte reply, sends a fragment, and hangs up
pub fn truncating_router() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();

    thread::spawn(move || {
        let Ok((stream, _)) = listener.accept() else { return };
        let Ok(mut writer) = stream.try_clone() else { return };
        let mut reader = BufReader::new(stream);

        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            match reader.read_line(&mut line) {
                Ok(0) | Err(_) => return,
                Ok(_) => {}
            }
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap_or(0);
                }
            }
        }
        let mut body = vec![0u8; content_length];
        let _ = reader.read_exact(&mut body);

        let _ = writer.write_all(
            b"HTTP/1.1 200 OK\r\nContent-Type: text/xml\r\nContent-Length: 500\r\n\r\n<ResponseCode>000</ResponseCode><NewAttachDevice>10;",
        );
        let _ = writer.flush();
    });

    port
}
