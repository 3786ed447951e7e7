//! Sound type for audio input
//!
//! A [`Sound`] is one channel of real samples plus its sample rate. Sounds are
//! read from 16-bit PCM WAV data with `hound`; multi-channel files produce one
//! `Sound` per channel. The helpers here prepare a channel for frame-wise
//! feature extraction: peak normalization, zero padding and overlapping
//! frames with a hop of half the frame length.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::{Error, Result, Vector};

/// Full-scale value of a signed 16-bit sample
const I16_FULL_SCALE: f64 = 32768.0;

/// One channel of audio samples
#[derive(Debug, Clone, PartialEq)]
pub struct Sound {
    /// Audio samples, nominally in [-1, 1)
    samples: Vec<f64>,
    /// Sample rate in Hz
    sample_rate: f64,
}

impl Sound {
    /// Create a Sound from raw samples
    ///
    /// # Example
    /// ```
    /// use formant_acf::Sound;
    ///
    /// let sound = Sound::from_samples(&[0.0, 0.5, -0.5, 0.0], 16000.0);
    /// assert_eq!(sound.num_samples(), 4);
    /// ```
    pub fn from_samples(samples: &[f64], sample_rate: f64) -> Self {
        Self {
            samples: samples.to_vec(),
            sample_rate,
        }
    }

    /// Create a Sound from owned samples (avoids cloning)
    pub fn from_samples_owned(samples: Vec<f64>, sample_rate: f64) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Load every channel of a 16-bit PCM WAV file
    ///
    /// Returns one Sound per channel, all of equal length.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the file cannot be opened, [`Error::AudioRead`]
    /// if it is not a valid WAV stream and [`Error::UnsupportedFormat`] for
    /// anything other than 16-bit integer samples.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Self>> {
        let path = path.as_ref();
        let file = File::open(path)?;
        tracing::debug!(path = %path.display(), "reading WAV file");
        Self::from_reader(BufReader::new(file))
    }

    /// Load every channel of a 16-bit PCM WAV stream
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Self>> {
        let reader = hound::WavReader::new(reader)?;
        let spec = reader.spec();

        if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != 16 {
            return Err(Error::UnsupportedFormat(format!(
                "expected 16-bit integer PCM, got {}-bit {:?}",
                spec.bits_per_sample, spec.sample_format
            )));
        }

        let channels = spec.channels as usize;
        if channels == 0 {
            return Err(Error::UnsupportedFormat("WAV header has no channels".to_string()));
        }
        let sample_rate = spec.sample_rate as f64;

        let interleaved = reader
            .into_samples::<i16>()
            .collect::<std::result::Result<Vec<_>, _>>()?;

        // Deinterleave into separate channels
        let mut channel_samples: Vec<Vec<f64>> = (0..channels).map(|_| Vec::new()).collect();
        for (i, &sample) in interleaved.iter().enumerate() {
            channel_samples[i % channels].push(sample as f64 / I16_FULL_SCALE);
        }

        tracing::debug!(
            channels,
            sample_rate,
            frames = interleaved.len() / channels,
            "decoded WAV stream"
        );

        Ok(channel_samples
            .into_iter()
            .map(|samples| Sound {
                samples,
                sample_rate,
            })
            .collect())
    }

    /// Get the sample rate in Hz
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Get a reference to the audio samples
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Get the number of samples
    pub fn num_samples(&self) -> usize {
        self.samples.len()
    }

    /// Get the total duration in seconds
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate
    }

    /// Largest absolute sample value
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0_f64, |acc, &s| acc.max(s.abs()))
    }

    /// Scale so that the largest absolute sample is 1.0
    ///
    /// A silent sound is returned unchanged.
    pub fn normalize_peak(&self) -> Sound {
        let peak = self.peak();
        if peak == 0.0 {
            tracing::warn!("normalizing a silent sound; leaving it unchanged");
            return self.clone();
        }
        Sound {
            samples: self.samples.iter().map(|&s| s / peak).collect(),
            sample_rate: self.sample_rate,
        }
    }

    /// Add `count` zeros before and after the samples
    pub fn pad(&self, count: usize) -> Sound {
        let mut samples = Vec::with_capacity(self.samples.len() + 2 * count);
        samples.resize(count, 0.0);
        samples.extend_from_slice(&self.samples);
        samples.resize(samples.len() + count, 0.0);
        Sound {
            samples,
            sample_rate: self.sample_rate,
        }
    }

    /// Copy `len` samples starting at `start` into a [`Vector`]
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] if `len` is zero or the range runs
    /// past the end of the sound.
    pub fn frame(&self, start: usize, len: usize) -> Result<Vector> {
        if len == 0 {
            return Err(Error::InvalidParameter(
                "frame length must be positive".to_string(),
            ));
        }
        let end = start
            .checked_add(len)
            .filter(|&end| end <= self.samples.len())
            .ok_or_else(|| {
                Error::InvalidParameter(format!(
                    "frame {}..{} exceeds {} samples",
                    start,
                    start.saturating_add(len),
                    self.samples.len()
                ))
            })?;
        Vector::from_slice(&self.samples[start..end])
    }

    /// Overlapping frames of `2 * halfwidth` samples with a hop of `halfwidth`
    ///
    /// Yields `num_samples / halfwidth - 1` frames (none when the sound is
    /// shorter than one frame, or when `halfwidth` is zero). Frame `i` starts
    /// at sample `i * halfwidth`.
    pub fn frames(&self, halfwidth: usize) -> impl Iterator<Item = &[f64]> + '_ {
        let count = if halfwidth == 0 {
            0
        } else {
            (self.samples.len() / halfwidth).saturating_sub(1)
        };
        (0..count).map(move |i| {
            let start = i * halfwidth;
            &self.samples[start..start + 2 * halfwidth]
        })
    }
}
