use thiserror::Error;

/// Errors raised by the diff core before any comparison starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    #[error("input too short: {len} bytes is less than the window size of {window}")]
    InputTooShort { len: usize, window: usize },

    #[error("window size must be at least 1 byte")]
    ZeroWindow,

    #[error("invalid hash parameters: base {base}, modulus {modulus}")]
    InvalidHashParams { base: u64, modulus: u64 },
}

pub type Result<T> = std::result::Result<T, DiffError>;
