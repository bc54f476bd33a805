//! apns-frame: build and inspect legacy APNs binary frames.
//!
//! - `encode <FILE>`: notification YAML -> frame bytes on stdout
//! - `inspect <HEX>`: frame hex -> decoded fields as JSON
//!
//! Logs go to stderr (`RUST_LOG=apns_core=trace` shows frame sizes).

use std::io::Write;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

use apns_cli::{config, inspect};
use apns_core::error::{ApnsError, Result};

#[derive(Parser)]
#[command(name = "apns-frame")]
#[command(about = "Encode and inspect legacy APNs binary notification frames", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a notification document into a frame
    Encode {
        /// Path to the notification YAML
        file: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Hex)]
        format: Format,
    },

    /// Decode a hex-encoded frame
    Inspect {
        /// Frame bytes as hex
        hex: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Hex,
    Raw,
}

fn run(cli: Cli) -> Result<()> {
    let mut out = std::io::stdout().lock();
    match cli.command {
        Commands::Encode { file, format } => {
            let doc = config::load_from_file(&file)?;
            let env = doc.to_envelope()?;
            let frame = env.to_bytes()?;
            tracing::info!(%file, identifier = env.identifier, frame_len = frame.len(), "encoded");
            let written = match format {
                Format::Hex => writeln!(out, "{}", hex::encode(&frame)),
                Format::Raw => out.write_all(&frame),
            };
            written.map_err(|e| ApnsError::Internal(format!("write failed: {e}")))
        }
        Commands::Inspect { hex } => {
            let report = inspect::inspect_hex(&hex)?;
            let s = serde_json::to_string_pretty(&report)
                .map_err(|e| ApnsError::Internal(format!("render failed: {e}")))?;
            writeln!(out, "{s}").map_err(|e| ApnsError::Internal(format!("write failed: {e}")))
        }
    }
}

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error[{}]: {e}", e.code().as_str());
            ExitCode::FAILURE
        }
    }
}
