//! Error handling for the DTMF encoder.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid dial symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("tone length must be within range [0.1, 1.0], got {seconds}")]
    InvalidDuration { seconds: f64 },

    #[error("malformed wave header: {0}")]
    BadHeader(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
