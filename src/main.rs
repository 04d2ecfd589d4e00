use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use dtmf_wav_rs::encoder;

/// Generate a wave file of DTMF dialing tones for a phone number.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Output wave file path
    output: PathBuf,

    /// Length of each tone in seconds, between 0.1 and 1.0
    tone_secs: f64,

    /// Phone number to dial: digits 0-9, '#', '*', and '-' for a pause
    digits: String,
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = Args::parse();

    encoder::synthesize(&args.output, args.tone_secs, &args.digits)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    Ok(())
}
