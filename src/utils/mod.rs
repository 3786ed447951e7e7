//! Utility modules for signal processing
//!
//! Low-level numeric routines used by the feature pipeline.

pub mod autocorrelation;

pub use autocorrelation::autocorrelate;
