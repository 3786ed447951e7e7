//! Autocorrelation "formant" features
//!
//! This module turns one frame of audio into a short vector of normalized
//! autocorrelation coefficients. The coefficients are not resonance
//! frequencies; they are a cheap spectral-envelope descriptor that stands in
//! for formant features when feeding a model.
//!
//! The algorithm, per frame of length `2H`:
//! 1. Multiply by a Hann window
//! 2. Subtract the mean (DC removal)
//! 3. Compute the full raw autocorrelation (length `4H - 1`)
//! 4. Divide every lag by the frame length (biased estimator)
//! 5. Keep lag zero and the positive lags
//! 6. Keep the first `order + 1` of those
//! 7. Normalize by the lag-zero value

use serde::{Deserialize, Serialize};

use crate::sound::Sound;
use crate::window;
use crate::{Error, Result, Vector};

/// Added to the zero-lag energy before normalizing so that a silent frame
/// yields finite coefficients
const ENERGY_FLOOR: f64 = 1e-20;

/// Parameters of a [`FormantExtractor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormantConfig {
    /// Half the frame length in samples
    pub halfwidth: usize,
    /// Number of non-zero lags kept in the output
    pub order: usize,
}

impl Default for FormantConfig {
    fn default() -> Self {
        Self {
            halfwidth: 128,
            order: 32,
        }
    }
}

/// Computes normalized short-lag autocorrelation vectors from frames
///
/// The Hann window and the bias divisor are computed once here and shared by
/// every call to [`standard_form`](Self::standard_form), which only takes
/// `&self`; one extractor can serve many threads.
#[derive(Debug, Clone)]
pub struct FormantExtractor {
    config: FormantConfig,
    /// Hann window, length `2H`
    window: Vector,
    /// Constant `2H`, length `4H - 1`
    bias_divisor: Vector,
}

impl FormantExtractor {
    /// Create an extractor for frames of `2 * halfwidth` samples
    ///
    /// # Arguments
    /// * `halfwidth` - Half the frame length in samples (must be positive)
    /// * `order` - Number of positive-lag coefficients to keep
    ///   (must be below `2 * halfwidth`)
    ///
    /// # Errors
    /// Returns [`Error::Construction`] if `halfwidth` is zero or `order` is too
    /// large for the frame.
    ///
    /// # Example
    /// ```
    /// use formant_acf::{FormantExtractor, Vector};
    ///
    /// let extractor = FormantExtractor::new(4, 6).unwrap();
    /// let frame = Vector::new(vec![3.1, 14.1, -5.1, 46.1, -21.1, 31.5, -28.5, 4.6]).unwrap();
    /// let acf = extractor.standard_form(&frame).unwrap();
    /// assert_eq!(acf.len(), 7);
    /// assert!((acf.first() - 1.0).abs() < 1e-9);
    /// ```
    pub fn new(halfwidth: usize, order: usize) -> Result<Self> {
        Self::from_config(&FormantConfig { halfwidth, order })
    }

    /// Create an extractor from a [`FormantConfig`]
    pub fn from_config(config: &FormantConfig) -> Result<Self> {
        let FormantConfig { halfwidth, order } = *config;

        if halfwidth == 0 {
            return Err(Error::Construction(
                "halfwidth must be positive".to_string(),
            ));
        }
        let frame_len = 2 * halfwidth;
        if order >= frame_len {
            return Err(Error::Construction(format!(
                "order {} needs more than the {} lags of a {}-sample frame",
                order,
                frame_len - 1,
                frame_len
            )));
        }

        let window = window::hann(frame_len)?;
        let bias_divisor = Vector::filled(2 * frame_len - 1, frame_len as f64)?;

        tracing::debug!(halfwidth, order, frame_len, "created formant extractor");

        Ok(Self {
            config: *config,
            window,
            bias_divisor,
        })
    }

    pub fn config(&self) -> &FormantConfig {
        &self.config
    }

    pub fn halfwidth(&self) -> usize {
        self.config.halfwidth
    }

    pub fn order(&self) -> usize {
        self.config.order
    }

    /// Required frame length (`2 * halfwidth`)
    pub fn frame_len(&self) -> usize {
        2 * self.config.halfwidth
    }

    /// The cached Hann window
    pub fn window(&self) -> &Vector {
        &self.window
    }

    /// The cached bias divisor
    pub fn bias_divisor(&self) -> &Vector {
        &self.bias_divisor
    }

    /// Compute the normalized autocorrelation vector of one frame
    ///
    /// Returns `order + 1` coefficients. The first is the normalized zero lag
    /// (1.0 up to the energy floor); the rest are the normalized positive lags.
    ///
    /// # Errors
    /// Returns [`Error::DimensionMismatch`] if `frame.len() != 2 * halfwidth`.
    pub fn standard_form(&self, frame: &Vector) -> Result<Vector> {
        let frame_len = self.frame_len();
        if frame.len() != frame_len {
            return Err(Error::DimensionMismatch {
                expected: frame_len,
                found: frame.len(),
            });
        }

        let windowed = window::apply(&self.window, frame)?;
        let centered = windowed.subtract_scalar(windowed.mean());
        let acov = centered
            .autocorrelate()
            .divide(&self.bias_divisor)?
            .slice_from(frame_len as isize - 1)?
            .slice_to(self.config.order as isize + 1)?;

        let energy = acov.first();
        tracing::trace!(energy, "standard form");

        Ok(acov.divide_scalar(energy + ENERGY_FLOOR))
    }

    /// [`standard_form`](Self::standard_form) over a borrowed slice
    pub fn standard_form_slice(&self, frame: &[f64]) -> Result<Vector> {
        if frame.len() != self.frame_len() {
            return Err(Error::DimensionMismatch {
                expected: self.frame_len(),
                found: frame.len(),
            });
        }
        self.standard_form(&Vector::from_slice(frame)?)
    }

    /// Compute one coefficient vector per frame of `sound`
    ///
    /// Frames are taken with [`Sound::frames`], i.e. `2H` samples long with a
    /// hop of `H`. A sound shorter than one frame gives an empty list.
    pub fn standard_forms(&self, sound: &Sound) -> Result<Vec<Vector>> {
        let forms = sound
            .frames(self.config.halfwidth)
            .map(|frame| self.standard_form_slice(frame))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            frames = forms.len(),
            num_samples = sound.num_samples(),
            "computed standard forms"
        );

        Ok(forms)
    }
}
