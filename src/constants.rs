// Define some constants for the audio parameters
pub const SAMPLE_RATE: u32 = 44100; // 44.1 kHz sample rate
pub const BIT_DEPTH: u16 = 16; // 16 bits per sample
pub const CHANNELS: u16 = 1; // Mono channel
pub const BYTES_PER_SAMPLE: u16 = 2; // i16 PCM

// Accepted tone length range in seconds
pub const MIN_TONE_SECS: f64 = 0.1;
pub const MAX_TONE_SECS: f64 = 1.0;
