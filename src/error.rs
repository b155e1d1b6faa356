//! Error types for unistroke recognition.
//!
//! All failures in the crate surface through [`RecognizerError`], split into
//! recoverable input problems (degenerate strokes, bad configuration) and the
//! internal invariant kind that signals a bug rather than bad input.

use thiserror::Error;

/// Main error type for recognizer operations.
#[derive(Error, Debug)]
pub enum RecognizerError {
    /// Stroke has too few points to establish a path.
    #[error("stroke too short: need at least {min} points, got {actual}")]
    StrokeTooShort { min: usize, actual: usize },

    /// All stroke points coincide, so the resampling interval is undefined.
    #[error("degenerate stroke: zero path length, all points coincide")]
    ZeroPathLength,

    /// A stroke coordinate is NaN or infinite.
    #[error("non-finite coordinate at point {index}")]
    NonFinitePoint { index: usize },

    /// Configuration validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Two point sequences compared by path distance had different lengths.
    ///
    /// Unreachable through the public API: the template store and the
    /// normalizer both guarantee exactly `num_samples` points. Seeing this
    /// indicates a bug in the normalization pipeline, not a bad input.
    #[error("internal length mismatch: expected {expected} points, got {actual}")]
    InternalLengthMismatch { expected: usize, actual: usize },

    /// Recognizer construction was given no templates to match against.
    #[error("template vocabulary is empty")]
    EmptyVocabulary,

    /// A vocabulary entry could not be normalized.
    #[error("template {name:?} is not a usable gesture shape")]
    BadTemplate {
        name: String,
        #[source]
        source: Box<RecognizerError>,
    },

    /// Template file could not be read.
    #[cfg(feature = "serde")]
    #[error("failed to read template file")]
    TemplateIo(#[from] std::io::Error),

    /// Template data could not be parsed.
    #[cfg(feature = "serde")]
    #[error("failed to parse template data")]
    TemplateParse(#[from] serde_json::Error),
}

/// Result type alias for recognizer operations.
pub type Result<T> = std::result::Result<T, RecognizerError>;

impl RecognizerError {
    /// Create a stroke-too-short error.
    #[must_use]
    pub const fn stroke_too_short(min: usize, actual: usize) -> Self {
        Self::StrokeTooShort { min, actual }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create an internal length mismatch error.
    #[must_use]
    pub const fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::InternalLengthMismatch { expected, actual }
    }

    /// Wrap a normalization failure with the offending template's name.
    #[must_use]
    pub fn bad_template(name: impl Into<String>, source: Self) -> Self {
        Self::BadTemplate {
            name: name.into(),
            source: Box::new(source),
        }
    }

    /// Whether this error is the degenerate-stroke condition: an input the
    /// user should simply redraw, as opposed to a configuration or internal
    /// problem.
    #[must_use]
    pub const fn is_degenerate_stroke(&self) -> bool {
        matches!(self, Self::StrokeTooShort { .. } | Self::ZeroPathLength)
    }
}
