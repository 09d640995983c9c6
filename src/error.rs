//! Error type shared by the band integrator, response
//! curve loaders and the cube statistics.
//!
//! The radiometric kernel itself never fails: invalid
//! physical inputs surface as NaN / Inf in the returned
//! values.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("length mismatch: {wavelengths} wavelengths, {responses} responses")]
    LengthMismatch {
        wavelengths: usize,
        responses: usize,
    },

    #[error("integration needs at least 2 samples, found {0}")]
    TooFewSamples(usize),

    #[error("wavelengths must be strictly increasing: {prev} um at index {index} is followed by {next} um")]
    NotIncreasing { index: usize, prev: f64, next: f64 },

    #[error("invalid wavelength {value} um at index {index}: must be finite and positive")]
    InvalidWavelength { index: usize, value: f64 },

    #[error("pixel ({row}, {col}) out of bounds for image of size ({rows}, {cols})")]
    PixelOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("channel {channel} out of bounds: image has {channels} channels")]
    ChannelOutOfBounds { channel: usize, channels: usize },

    #[error("invalid region rows {row_start}..{row_end}, cols {col_start}..{col_end} for image of size ({rows}, {cols})")]
    InvalidRegion {
        row_start: usize,
        row_end: usize,
        col_start: usize,
        col_end: usize,
        rows: usize,
        cols: usize,
    },

    #[error("unknown normalization `{0}`: expected `minmax` or `zscore`")]
    UnknownNormalization(String),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the call was rejected because of its
    /// arguments (as opposed to a failing collaborator).
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Error::Parse { .. } | Error::Io(_) | Error::Json(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
