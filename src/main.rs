use anyhow::Context;
use cellocator_rs::checksum::checksum_hex;
use cellocator_rs::logging::{log_error, log_warn};
use cellocator_rs::{init_logger, log_info, DecodedFrame};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cellocator-cli")]
#[command(about = "Inspect Cellocator telemetry frames")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a 140 character hex frame and print every field as JSON
    Decode {
        frame: String,
        /// Fail when the embedded checksum differs from the computed one
        #[arg(short, long)]
        verify: bool,
    },
    /// Print the 8-bit additive checksum of a hex byte range
    Checksum { range: String },
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode { frame, verify } => {
            let decoded = DecodedFrame::new(frame.trim()).inspect_err(|e| {
                log_error(&format!("Frame rejected: {e}"));
            })?;

            let edc = decoded.error_detection_code();
            if !edc.is_valid() {
                log_warn(&format!(
                    "Checksum mismatch: frame {}, computed {}",
                    edc.code_hex(),
                    edc.checksum_hex()
                ));
            }

            let report = decoded.report();
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?
            );

            if verify {
                edc.verify()?;
                log_info("Checksum verified");
            }
        }
        Commands::Checksum { range } => {
            println!("{}", checksum_hex(&range)?);
        }
    }

    Ok(())
}
