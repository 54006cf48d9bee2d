use std::process::ExitCode;

use clap::Parser;
use hidport_lib::config::Protocol;
use hidport_lib::constants::{DEFAULT_PATH, TERMINATOR};
use hidport_lib::{Command, UsbPort};
use tracing::debug;

/// Send one raw command to a HID-attached inverter and print the reply.
#[derive(Parser)]
#[command(name = "hidport", version, about)]
struct Args {
    /// Fully-encoded command text; a CR terminator is appended if missing
    command: String,

    /// Device node to open
    #[arg(long, default_value = DEFAULT_PATH)]
    path: String,

    /// Protocol identifier recorded in the port descriptor (PI30 or PI18)
    #[arg(long, default_value = "PI30")]
    protocol: String,

    /// Command code recorded in the result; defaults to the command text
    /// without its terminator
    #[arg(long)]
    code: Option<String>,

    /// Exit zero even when the response never saw a terminator
    #[arg(long)]
    incomplete_ok: bool,
}

fn resolve_code(code: Option<String>, command: &str) -> String {
    code.unwrap_or_else(|| command.trim_end_matches('\r').to_string())
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let protocol = match args.protocol.as_str() {
        "PI30" => Protocol::Pi30,
        "PI18" => Protocol::Pi18,
        other => {
            eprintln!("unknown protocol {other:?}, expected PI30 or PI18");
            return ExitCode::FAILURE;
        }
    };

    let code = resolve_code(args.code, &args.command);
    let mut full_command = args.command.into_bytes();
    if full_command.last() != Some(&TERMINATOR) {
        full_command.push(TERMINATOR);
    }

    let port = UsbPort::new(args.path.as_str(), protocol);
    debug!(descriptor = ?port.to_dto(), "sending over");

    let result = port.send_and_receive(&Command::new(code, full_command));

    for message in &result.error_messages {
        eprintln!("{message}");
    }
    if result.error {
        return ExitCode::FAILURE;
    }

    println!("hex:  {}", hex::encode(&result.raw_response));
    println!("text: {}", String::from_utf8_lossy(&result.raw_response).trim_end());

    if !result.is_complete() {
        eprintln!("response is incomplete: no terminator within the attempt budget");
        if !args.incomplete_ok {
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
