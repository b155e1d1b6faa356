//! Configuration for the recognition pipeline.
//!
//! [`RecognizerConfig`] centralizes the two parameters the pipeline depends
//! on: the resampling cardinality and the side length of the normalization
//! square. Both are fixed for a recognizer's lifetime once it is built.
//!
//! # Example
//!
//! ```
//! use unistroke::RecognizerConfig;
//!
//! let config = RecognizerConfig::default();
//! assert_eq!(config.num_samples, 64);
//!
//! let coarse = RecognizerConfig::default().with_num_samples(16);
//! ```

use crate::error::{RecognizerError, Result};

/// Minimum number of resampled points for meaningful geometry.
pub const MIN_SAMPLES: usize = 2;

/// Default resampling cardinality.
pub const DEFAULT_NUM_SAMPLES: usize = 64;

/// Default side length of the normalization square.
pub const DEFAULT_SQUARE_SIZE: f64 = 250.0;

/// Configuration for stroke normalization and matching.
///
/// `num_samples` is the fixed point count every stroke and template is
/// resampled to; `square_size` is the side length the bounding box is scaled
/// to, and also fixes the score denominator (half the square's diagonal).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecognizerConfig {
    /// Number of points every stroke is resampled to. Must be at least
    /// [`MIN_SAMPLES`].
    pub num_samples: usize,

    /// Side length of the square the stroke's bounding box is scaled to.
    pub square_size: f64,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            num_samples: DEFAULT_NUM_SAMPLES,
            square_size: DEFAULT_SQUARE_SIZE,
        }
    }
}

impl RecognizerConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RecognizerError::InvalidConfig`] if `num_samples` is below
    /// [`MIN_SAMPLES`] or `square_size` is not a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if self.num_samples < MIN_SAMPLES {
            return Err(RecognizerError::invalid_config(format!(
                "num_samples must be at least {MIN_SAMPLES}, got {}",
                self.num_samples
            )));
        }
        if !self.square_size.is_finite() || self.square_size <= 0.0 {
            return Err(RecognizerError::invalid_config(format!(
                "square_size must be a positive finite number, got {}",
                self.square_size
            )));
        }
        Ok(())
    }

    /// Set the resampling cardinality.
    #[must_use]
    pub const fn with_num_samples(mut self, num_samples: usize) -> Self {
        self.num_samples = num_samples;
        self
    }

    /// Set the normalization square side length.
    #[must_use]
    pub const fn with_square_size(mut self, square_size: f64) -> Self {
        self.square_size = square_size;
        self
    }
}
