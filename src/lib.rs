//! Unistroke Gesture Recognition
//!
//! Classification of single freehand pen/touch strokes against a fixed
//! vocabulary of named gesture templates, using geometric normalization
//! followed by nearest-neighbor matching (the "$1" unistroke method).
//!
//! # Features
//!
//! - **Pose-invariant**: resampling plus rotation/scale/translation
//!   normalization makes strokes comparable point by point
//! - **Deterministic**: pure computation, stable tie-breaking, no hidden
//!   state
//! - **Share-freely**: a built [`Recognizer`] is immutable and `Send + Sync`
//! - **Batteries included**: a built-in digit vocabulary and an optional
//!   JSON template loader
//!
//! # Quick Start
//!
//! ```
//! use unistroke::{vocabulary, Recognizer, RecognizerConfig};
//!
//! let recognizer = Recognizer::new(vocabulary::digits(), RecognizerConfig::default())?;
//!
//! // A stroke fresh off a capture surface; here, the authored "7" shape.
//! let stroke = vocabulary::digits().swap_remove(7).points;
//! let result = recognizer.recognize(&stroke)?;
//!
//! assert_eq!(result.name, "7");
//! assert_eq!(result.template_index, 7);
//! assert!(result.score > 0.99);
//! # Ok::<(), unistroke::RecognizerError>(())
//! ```
//!
//! # Pipeline
//!
//! | Stage | Operation | Module |
//! |-------|-----------|--------|
//! | 1 | Resample to `num_samples` equal-arc points | [`normalize`] |
//! | 2 | Rotate by the negated indicative angle | [`normalize`] |
//! | 3 | Scale bounding box to `square_size²` | [`normalize`] |
//! | 4 | Translate centroid to the origin | [`normalize`] |
//! | 5 | Nearest template by mean point-wise distance | [`matching`] |
//!
//! Templates go through stages 1–4 once, at construction; every
//! [`recognize`](Recognizer::recognize) call runs the full pipeline on its
//! query and scans the immutable store.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod geometry;
#[cfg(feature = "serde")]
pub mod loader;
pub mod matching;
pub mod normalize;
pub mod recognizer;
pub mod template;
pub mod vocabulary;

// Re-exports for convenient access
pub use config::{RecognizerConfig, DEFAULT_NUM_SAMPLES, DEFAULT_SQUARE_SIZE, MIN_SAMPLES};
pub use error::{RecognizerError, Result};
pub use geometry::{centroid, distance, path_length, BoundingBox, Point};
#[cfg(feature = "serde")]
pub use loader::{templates_from_file, templates_from_json, templates_to_json};
pub use matching::{max_path_distance, path_distance, score_for_distance};
pub use normalize::{
    indicative_angle, normalize_stroke, resample, rotate_by, scale_to_square,
    translate_to_origin,
};
pub use recognizer::{Recognition, Recognizer};
pub use template::{RawTemplate, Template, TemplateStore};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
