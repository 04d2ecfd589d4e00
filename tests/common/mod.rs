//! Test infrastructure for dtmf-wav-rs integration tests.
//!
//! Provides scratch output paths and header helpers shared by the
//! integration tests.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

// Re-export key types from the main crate
pub use dtmf_wav_rs::constants::SAMPLE_RATE;
pub use dtmf_wav_rs::error::Error;
pub use dtmf_wav_rs::wav::{WavHeader, HEADER_LEN};

/// Temp directory holding one wave file path; removed when the test drops it.
pub struct ScratchWav {
    pub dir: tempfile::TempDir,
    pub path: PathBuf,
}

impl ScratchWav {
    pub fn new() -> Self {
        let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("out.wav");

        Self { dir, path }
    }
}

impl Default for ScratchWav {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of samples one synthesis run should produce for `symbols` symbols.
pub fn expected_sample_count(symbols: usize, tone_secs: f64) -> usize {
    symbols * (SAMPLE_RATE as f64 * tone_secs) as usize
}

/// Parse the header of an emitted file.
pub fn read_header(path: &Path) -> WavHeader {
    let mut reader = BufReader::new(File::open(path).expect("Failed to open wave file"));

    WavHeader::read_from(&mut reader).expect("Failed to parse wave header")
}
