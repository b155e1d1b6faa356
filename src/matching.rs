//! Nearest-neighbor matching over normalized point sequences.
//!
//! The similarity metric is path distance: the mean Euclidean distance
//! between corresponding points of two equal-length sequences. Lower is more
//! similar. [`best_match`] scans the store in order and keeps the first of
//! any equal minima, making the result deterministic under ties.

use crate::error::{RecognizerError, Result};
use crate::geometry::{distance, Point};
use crate::template::TemplateStore;

/// Mean point-wise Euclidean distance between two equal-length sequences.
///
/// # Errors
///
/// Returns [`RecognizerError::InternalLengthMismatch`] if the sequences
/// differ in length. Both sides of every comparison in this crate come out
/// of the same normalization pipeline, so this error indicates a bug in that
/// pipeline rather than a user input problem.
pub fn path_distance(a: &[Point], b: &[Point]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(RecognizerError::length_mismatch(a.len(), b.len()));
    }
    let sum: f64 = a.iter().zip(b.iter()).map(|(&p, &q)| distance(p, q)).sum();
    Ok(sum / a.len() as f64)
}

/// The largest meaningful path distance for a given normalization square:
/// half the square's diagonal.
#[inline]
#[must_use]
pub fn max_path_distance(square_size: f64) -> f64 {
    0.5 * (2.0 * square_size * square_size).sqrt()
}

/// Map a path distance to the similarity score `1 − d / d_max`.
///
/// A perfect match scores 1.0. The score is deliberately not clamped:
/// strokes more dissimilar than half the square's diagonal score negative.
#[inline]
#[must_use]
pub fn score_for_distance(distance: f64, square_size: f64) -> f64 {
    1.0 - distance / max_path_distance(square_size)
}

/// Scan the store for the template nearest to `query`.
///
/// Returns the winning store index and its path distance. The scan uses a
/// strict `<`, so among equal minima the earliest template in vocabulary
/// order wins.
///
/// # Errors
///
/// Propagates [`RecognizerError::InternalLengthMismatch`] from
/// [`path_distance`]; unreachable when `query` was produced by the same
/// configuration the store was built with.
pub(crate) fn best_match(query: &[Point], store: &TemplateStore) -> Result<(usize, f64)> {
    let mut best_index = 0;
    let mut best_distance = f64::INFINITY;
    for (index, template) in store.iter().enumerate() {
        let d = path_distance(query, template.points())?;
        if d < best_distance {
            best_distance = d;
            best_index = index;
        }
    }
    Ok((best_index, best_distance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RecognizerConfig;
    use crate::template::{RawTemplate, TemplateStore};
    use approx::assert_relative_eq;

    #[test]
    fn test_path_distance_self_is_zero() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(20.0, 0.0),
        ];
        assert_relative_eq!(path_distance(&points, &points).unwrap(), 0.0);
    }

    #[test]
    fn test_path_distance_symmetry() {
        let a = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let b = vec![Point::new(0.0, 3.0), Point::new(10.0, 7.0)];
        let ab = path_distance(&a, &b).unwrap();
        let ba = path_distance(&b, &a).unwrap();
        assert_relative_eq!(ab, ba);
        // Mean of 3 and 7.
        assert_relative_eq!(ab, 5.0);
    }

    #[test]
    fn test_path_distance_length_mismatch() {
        let a = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let b = vec![Point::new(0.0, 0.0)];
        assert!(matches!(
            path_distance(&a, &b),
            Err(RecognizerError::InternalLengthMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_max_path_distance() {
        // Half the diagonal of the 250-square.
        assert_relative_eq!(
            max_path_distance(250.0),
            125.0 * std::f64::consts::SQRT_2,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_score_endpoints() {
        assert_relative_eq!(score_for_distance(0.0, 250.0), 1.0);
        assert_relative_eq!(score_for_distance(max_path_distance(250.0), 250.0), 0.0);
        // Uncapped below zero.
        assert!(score_for_distance(2.0 * max_path_distance(250.0), 250.0) < 0.0);
    }

    #[test]
    fn test_best_match_tie_breaks_to_first() {
        let config = RecognizerConfig::default().with_num_samples(8);
        let line = vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
        let store = TemplateStore::build(
            vec![
                RawTemplate::new("first", line.clone()),
                RawTemplate::new("second", line.clone()),
            ],
            &config,
        )
        .unwrap();

        // Both templates normalize identically; the query matches both at
        // distance zero and the earlier index must win.
        let query = store.get(1).unwrap().points().to_vec();
        let (index, d) = best_match(&query, &store).unwrap();
        assert_eq!(index, 0);
        assert_relative_eq!(d, 0.0);
    }
}
