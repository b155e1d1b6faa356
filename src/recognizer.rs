//! The recognizer façade.
//!
//! [`Recognizer`] ties the pipeline together: it is built once from a raw
//! vocabulary and a configuration, normalizing every template eagerly, and
//! from then on answers [`recognize`](Recognizer::recognize) calls against
//! that immutable state. Recognition never mutates the recognizer, so a
//! fully constructed value can be shared across threads freely.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::RecognizerConfig;
use crate::error::{RecognizerError, Result};
use crate::geometry::Point;
use crate::matching::{best_match, score_for_distance};
use crate::normalize::normalize_stroke;
use crate::template::{RawTemplate, TemplateStore};

/// The outcome of classifying one stroke.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Recognition {
    /// Label of the winning template.
    pub name: String,
    /// Similarity score: 1.0 for a perfect match, uncapped downward.
    pub score: f64,
    /// Index of the winning template in vocabulary order, for caller-side
    /// highlighting. Carries no other semantics.
    pub template_index: usize,
}

/// Unistroke gesture recognizer.
///
/// # Example
///
/// ```
/// use unistroke::{Point, RawTemplate, Recognizer, RecognizerConfig};
///
/// let vocabulary = vec![RawTemplate::new(
///     "line",
///     vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
/// )];
/// let recognizer = Recognizer::new(vocabulary, RecognizerConfig::default())?;
///
/// let stroke = [
///     Point::new(3.0, 7.0),
///     Point::new(40.0, 6.0),
///     Point::new(110.0, 8.0),
/// ];
/// let result = recognizer.recognize(&stroke)?;
/// assert_eq!(result.name, "line");
/// # Ok::<(), unistroke::RecognizerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Recognizer {
    store: TemplateStore,
    config: RecognizerConfig,
}

impl Recognizer {
    /// Build a recognizer from a raw vocabulary.
    ///
    /// This is the only point where templates are processed; cost is
    /// O(vocabulary × `num_samples`).
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the vocabulary is
    /// empty, or a template's stroke is degenerate.
    pub fn new(templates: Vec<RawTemplate>, config: RecognizerConfig) -> Result<Self> {
        let store = TemplateStore::build(templates, &config)?;
        Ok(Self { store, config })
    }

    /// Build a recognizer with the default configuration.
    ///
    /// # Errors
    ///
    /// Same as [`Recognizer::new`].
    pub fn with_default_config(templates: Vec<RawTemplate>) -> Result<Self> {
        Self::new(templates, RecognizerConfig::default())
    }

    /// Classify a raw stroke against the vocabulary.
    ///
    /// Cost is O(vocabulary × `num_samples`) per call; no state is mutated.
    ///
    /// # Errors
    ///
    /// Returns a degenerate-stroke error ([`RecognizerError::StrokeTooShort`]
    /// or [`RecognizerError::ZeroPathLength`]) for strokes that cannot
    /// establish a path; the caller should prompt for a redraw.
    pub fn recognize(&self, stroke: &[Point]) -> Result<Recognition> {
        if stroke.len() < 2 {
            return Err(RecognizerError::stroke_too_short(2, stroke.len()));
        }

        let query = normalize_stroke(stroke, &self.config)?;
        let (template_index, distance) = best_match(&query, &self.store)?;
        let template = self
            .store
            .get(template_index)
            .ok_or(RecognizerError::EmptyVocabulary)?;

        Ok(Recognition {
            name: template.name().to_owned(),
            score: score_for_distance(distance, self.config.square_size),
            template_index,
        })
    }

    /// The immutable template store.
    #[must_use]
    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// The configuration this recognizer was built with.
    #[must_use]
    pub const fn config(&self) -> &RecognizerConfig {
        &self.config
    }
}
