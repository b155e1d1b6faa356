//! Gesture templates and the immutable template store.
//!
//! A [`RawTemplate`] is authored data: a name and the stroke that draws it.
//! [`TemplateStore::build`] normalizes every raw template once, eagerly, and
//! the resulting store never changes again. A template's position in the
//! store is the stable index callers use to correlate results with their own
//! UI state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::RecognizerConfig;
use crate::error::{RecognizerError, Result};
use crate::geometry::Point;
use crate::normalize::normalize_stroke;

/// A named gesture shape as authored: raw points, any length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawTemplate {
    /// Label returned when this template wins a match.
    pub name: String,
    /// The stroke that draws the shape, in drawing order.
    pub points: Vec<Point>,
}

impl RawTemplate {
    /// Create a raw template from a name and stroke points.
    #[must_use]
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// A normalized template: exactly `num_samples` pose-normalized points.
///
/// Only constructed by [`TemplateStore::build`]; fields are private so the
/// fixed-length invariant cannot be broken from outside.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    name: String,
    points: Vec<Point>,
}

impl Template {
    /// The template's label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The normalized points, always exactly the store's `num_samples`.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Ordered, immutable set of normalized templates.
///
/// Built once from the raw vocabulary; store order equals vocabulary order
/// and is the externally visible template index.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    templates: Vec<Template>,
}

impl TemplateStore {
    /// Normalize a raw vocabulary into a store.
    ///
    /// Templates are processed in input order; processing happens exactly
    /// once, here.
    ///
    /// # Errors
    ///
    /// - [`RecognizerError::InvalidConfig`] if the configuration is invalid
    /// - [`RecognizerError::EmptyVocabulary`] if `raw` is empty
    /// - [`RecognizerError::BadTemplate`] naming the offending entry if a
    ///   template's stroke is degenerate
    pub fn build(raw: Vec<RawTemplate>, config: &RecognizerConfig) -> Result<Self> {
        config.validate()?;
        if raw.is_empty() {
            return Err(RecognizerError::EmptyVocabulary);
        }

        let mut templates = Vec::with_capacity(raw.len());
        for entry in raw {
            let points = normalize_stroke(&entry.points, config)
                .map_err(|e| RecognizerError::bad_template(entry.name.clone(), e))?;
            templates.push(Template {
                name: entry.name,
                points,
            });
        }

        Ok(Self { templates })
    }

    /// Number of templates in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the store holds no templates. Always false for a built store.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Template at `index` in vocabulary order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Template> {
        self.templates.get(index)
    }

    /// Iterate templates in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }
}
