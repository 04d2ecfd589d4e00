//! Tone encoder: drives the keypad mapper across a digit string, synthesizes
//! the combined sine-wave samples, and writes the result as a 16-bit mono PCM
//! wave file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::constants::{MAX_TONE_SECS, MIN_TONE_SECS, SAMPLE_RATE};
use crate::error::{Error, Result};
use crate::keypad::{self, FrequencyPair};
use crate::wav::WavHeader;

// Peak amplitude per component tone. The two components sum to 32764 at
// worst, which stays inside i16 range.
const AMPLITUDE: f64 = 16382.0;

/// Synthesize DTMF tones for `digits` and write them to a wave file at
/// `path`, one tone of `tone_secs` seconds per symbol, no gaps in between.
///
/// Both inputs are validated before any file I/O, so a rejected call leaves
/// the filesystem untouched. A failure while writing may leave a partial
/// file behind; there is no rollback.
pub fn synthesize<P: AsRef<Path>>(path: P, tone_secs: f64, digits: &str) -> Result<()> {
    let path = path.as_ref();

    validate(tone_secs, digits)?;

    // Computed once and used for both the loop bound and the buffer size,
    // so the header's data size always matches the samples written.
    let samples_per_tone = (SAMPLE_RATE as f64 * tone_secs) as usize;
    let samples = render(digits, samples_per_tone);

    debug!(
        "Rendered {} samples ({} symbols, {} samples per tone)",
        samples.len(),
        digits.len(),
        samples_per_tone
    );

    let header = WavHeader::for_samples(samples.len());

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    header.write_to(&mut writer)?;
    for sample in &samples {
        writer.write_i16::<LittleEndian>(*sample)?;
    }
    writer.flush()?;

    info!(
        "Wrote {} ({} tones, {} data bytes)",
        path.display(),
        digits.len(),
        header.data_size
    );

    Ok(())
}

/// Render every symbol's tone block into one contiguous buffer, in input
/// order.
pub fn render(digits: &str, samples_per_tone: usize) -> Vec<i16> {
    let mut samples = Vec::with_capacity(digits.chars().count() * samples_per_tone);

    for symbol in digits.chars() {
        render_tone(keypad::frequencies(symbol), samples_per_tone, &mut samples);
    }

    samples
}

// Generate one tone block: the sum of both component sine waves, scaled by
// AMPLITUDE and cast to i16.
fn render_tone(pair: FrequencyPair, samples_per_tone: usize, samples: &mut Vec<i16>) {
    for n in 0..samples_per_tone {
        // Convert the sample index to radians per Hz
        let phase = n as f64 * std::f64::consts::PI * 2.0 / SAMPLE_RATE as f64;

        let sample =
            AMPLITUDE * ((phase * pair.high as f64).sin() + (phase * pair.low as f64).sin());

        samples.push(sample as i16);
    }
}

// Fail fast on anything we cannot dial, before any file is created.
fn validate(tone_secs: f64, digits: &str) -> Result<()> {
    if let Some((position, symbol)) = digits
        .chars()
        .enumerate()
        .find(|(_, symbol)| !keypad::is_dial_symbol(*symbol))
    {
        return Err(Error::InvalidSymbol { symbol, position });
    }

    if !(MIN_TONE_SECS..=MAX_TONE_SECS).contains(&tone_secs) {
        return Err(Error::InvalidDuration { seconds: tone_secs });
    }

    Ok(())
}
