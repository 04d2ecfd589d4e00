//! RIFF/WAVE container header.
//!
//! The header is written field by field at its documented byte offset and
//! width, all multi-byte fields little-endian. Dumping a native struct image
//! would tie the layout to platform packing rules, so every field goes
//! through byteorder explicitly instead.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::constants::{BIT_DEPTH, BYTES_PER_SAMPLE, CHANNELS, SAMPLE_RATE};
use crate::error::{Error, Result};

/// Serialized header size in bytes: 12-byte RIFF descriptor, 24-byte fmt
/// sub-chunk, 8-byte data sub-chunk preamble.
pub const HEADER_LEN: usize = 44;

const FMT_CHUNK_SIZE: u32 = 16;
const PCM_FORMAT: u16 = 1;

/// The fmt and size fields of a 16-bit mono PCM wave file.
///
/// Constructed once per synthesis run from the final sample count,
/// serialized, never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WavHeader {
    pub chunk_size: u32,
    pub audio_format: u16,
    pub num_channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub data_size: u32,
}

impl WavHeader {
    /// Build a header describing `sample_count` mono i16 samples.
    pub fn for_samples(sample_count: usize) -> Self {
        let data_size = (sample_count * CHANNELS as usize * BYTES_PER_SAMPLE as usize) as u32;

        WavHeader {
            // 4 ("WAVE") + (8 + fmt sub-chunk) + (8 + data sub-chunk)
            chunk_size: 4 + (8 + FMT_CHUNK_SIZE) + (8 + data_size),
            audio_format: PCM_FORMAT,
            num_channels: CHANNELS,
            sample_rate: SAMPLE_RATE,
            byte_rate: SAMPLE_RATE * CHANNELS as u32 * BYTES_PER_SAMPLE as u32,
            block_align: CHANNELS * BYTES_PER_SAMPLE,
            bits_per_sample: BIT_DEPTH,
            data_size,
        }
    }

    /// Serialize all header fields in documented order.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(b"RIFF")?;
        writer.write_u32::<LittleEndian>(self.chunk_size)?;
        writer.write_all(b"WAVE")?;

        writer.write_all(b"fmt ")?;
        writer.write_u32::<LittleEndian>(FMT_CHUNK_SIZE)?;
        writer.write_u16::<LittleEndian>(self.audio_format)?;
        writer.write_u16::<LittleEndian>(self.num_channels)?;
        writer.write_u32::<LittleEndian>(self.sample_rate)?;
        writer.write_u32::<LittleEndian>(self.byte_rate)?;
        writer.write_u16::<LittleEndian>(self.block_align)?;
        writer.write_u16::<LittleEndian>(self.bits_per_sample)?;

        writer.write_all(b"data")?;
        writer.write_u32::<LittleEndian>(self.data_size)?;

        Ok(())
    }

    /// Deserialize a header written by [`WavHeader::write_to`].
    ///
    /// Reads the same fields in the same order and rejects unknown chunk
    /// tags. The reader is left positioned at the first data byte.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        expect_tag(reader, b"RIFF")?;
        let chunk_size = reader.read_u32::<LittleEndian>()?;
        expect_tag(reader, b"WAVE")?;

        expect_tag(reader, b"fmt ")?;
        let fmt_size = reader.read_u32::<LittleEndian>()?;
        if fmt_size != FMT_CHUNK_SIZE {
            return Err(Error::BadHeader(format!(
                "expected fmt sub-chunk size {FMT_CHUNK_SIZE}, got {fmt_size}"
            )));
        }
        let audio_format = reader.read_u16::<LittleEndian>()?;
        let num_channels = reader.read_u16::<LittleEndian>()?;
        let sample_rate = reader.read_u32::<LittleEndian>()?;
        let byte_rate = reader.read_u32::<LittleEndian>()?;
        let block_align = reader.read_u16::<LittleEndian>()?;
        let bits_per_sample = reader.read_u16::<LittleEndian>()?;

        expect_tag(reader, b"data")?;
        let data_size = reader.read_u32::<LittleEndian>()?;

        Ok(WavHeader {
            chunk_size,
            audio_format,
            num_channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample,
            data_size,
        })
    }
}

fn expect_tag<R: Read>(reader: &mut R, expected: &[u8; 4]) -> Result<()> {
    let mut tag = [0u8; 4];
    reader.read_exact(&mut tag)?;

    if &tag != expected {
        return Err(Error::BadHeader(format!(
            "expected {:?} tag, got {:?}",
            String::from_utf8_lossy(expected),
            String::from_utf8_lossy(&tag)
        )));
    }

    Ok(())
}
