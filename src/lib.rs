//! formant-acf: normalized short-lag autocorrelation features for audio frames
//!
//! This library turns a frame of audio into a short, fixed-length vector of
//! normalized autocorrelation coefficients, a lightweight stand-in for
//! formant/pitch-related spectral features. The autocorrelation is computed by
//! direct summation; no FFT is involved.
//!
//! # Core Types
//!
//! - [`Vector`] - Fixed-length, non-empty real vector with named arithmetic
//! - [`FormantExtractor`] - Windowing, DC removal, autocorrelation and
//!   normalization of one frame
//! - [`Sound`] - One channel of samples read from a 16-bit PCM WAV file
//!
//! # Example
//!
//! ```
//! use formant_acf::{FormantExtractor, Vector};
//!
//! let extractor = FormantExtractor::new(4, 6)?;
//! let frame = Vector::new(vec![3.1, 14.1, -5.1, 46.1, -21.1, 31.5, -28.5, 4.6])?;
//! let features = extractor.standard_form(&frame)?;
//! println!("{}", features);
//! # Ok::<(), formant_acf::Error>(())
//! ```

pub mod formant;
pub mod sound;
pub mod vector;
pub mod window;

pub mod utils;

// Re-export main types at crate root
pub use formant::{FormantConfig, FormantExtractor};
pub use sound::Sound;
pub use vector::Vector;

use thiserror::Error;

/// Errors that can occur in formant-acf operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Construction error: {0}")]
    Construction(String),

    #[error("Dimension mismatch: expected length {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(String),

    #[error("WAV decoding error: {0}")]
    AudioRead(#[from] hound::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
