//! List the devices attached to a Netgear router
//!
//! Usage:
//!   cargo run -p netgear-api --example list_devices -- <host> <username> <password>
//!
//! Set `NETGEAR_LOG_MODE=debug` to see the SOAP exchange.

use netgear_api::logging::init_logging_from_env;
use netgear_api::Session;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("list_devices");

    if args.len() != 4 {
        eprintln!("Usage: {} <host> <username> <password>", program);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} 192.168.1.1 admin password", program);
        std::process::exit(1);
    }

    if let Err(e) = init_logging_from_env() {
        eprintln!("Warning: {}", e);
    }

    let mut session = Session::new(&args[1], &args[2], &args[3]);

    match session.login() {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("Login rejected by {}", session.host());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Login failed: {}", e);
            std::process::exit(1);
        }
    }

    match session.get_attached_devices() {
        Ok(devices) if devices.is_empty() => println!("No attached devices reported"),
        Ok(devices) => {
            println!("{:<16} {:<18} {:<9} {:>6} {:>5}  NAME", "IP", "MAC", "TYPE", "SIGNAL", "RATE");
            for device in devices {
                println!(
                    "{:<16} {:<18} {:<9} {:>6} {:>5}  {}",
                    device.ip_address,
                    device.mac_address,
                    device.link_type,
                    device.signal_strength,
                    device.link_rate,
                    device.name
                );
            }
        }
        Err(e) => {
            eprintln!("Failed to list devices: {}", e);
            std::process::exit(1);
        }
    }
}
