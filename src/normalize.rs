//! Stroke normalization pipeline.
//!
//! This module implements the pose normalization that makes raw strokes
//! comparable by point-wise distance:
//!
//! 1. Resample to a fixed number of equal-arc-length points
//! 2. Rotate about the centroid by the negated indicative angle
//! 3. Scale the bounding box to a fixed square (non-uniform)
//! 4. Translate the centroid to the origin
//!
//! [`normalize_stroke`] runs the full pipeline; the individual steps are
//! public so callers can run partial pipelines (e.g. rendering template
//! thumbnails without the rotation step).
//!
//! Every step is a pure function: same input, same output, no hidden state.

use crate::config::{RecognizerConfig, MIN_SAMPLES};
use crate::error::{RecognizerError, Result};
use crate::geometry::{centroid, distance, path_length, BoundingBox, Point};

/// Run the full normalization pipeline on a raw stroke.
///
/// Produces exactly `config.num_samples` points with the stroke's centroid
/// at the origin and its bounding box scaled to
/// `config.square_size × config.square_size`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the stroke is
/// degenerate (fewer than two points, or zero path length).
pub fn normalize_stroke(points: &[Point], config: &RecognizerConfig) -> Result<Vec<Point>> {
    config.validate()?;

    let resampled = resample(points, config.num_samples)?;
    let angle = indicative_angle(&resampled);
    let rotated = rotate_by(&resampled, -angle);
    let scaled = scale_to_square(&rotated, config.square_size);
    Ok(translate_to_origin(&scaled))
}

/// Redistribute `points` into `num_samples` points spaced at equal arc
/// length along the stroke's polyline.
///
/// The first input point is always emitted as point 0; interior points are
/// linear interpolations at exact arc-length boundaries. The walk keeps an
/// explicit cursor over the input and measures each emitted point against
/// the remainder of the segment it was cut from, so no collection is mutated
/// while being traversed.
///
/// # Errors
///
/// - [`RecognizerError::InvalidConfig`] if `num_samples` is below
///   [`MIN_SAMPLES`]
/// - [`RecognizerError::StrokeTooShort`] if `points` has fewer than two
///   entries
/// - [`RecognizerError::NonFinitePoint`] if a coordinate is NaN or infinite
/// - [`RecognizerError::ZeroPathLength`] if all points coincide, which would
///   make the sampling interval zero
pub fn resample(points: &[Point], num_samples: usize) -> Result<Vec<Point>> {
    if num_samples < MIN_SAMPLES {
        return Err(RecognizerError::invalid_config(format!(
            "num_samples must be at least {MIN_SAMPLES}, got {num_samples}"
        )));
    }
    if points.len() < 2 {
        return Err(RecognizerError::stroke_too_short(2, points.len()));
    }
    if let Some(index) = points
        .iter()
        .position(|p| !p.x.is_finite() || !p.y.is_finite())
    {
        return Err(RecognizerError::NonFinitePoint { index });
    }

    let total = path_length(points);
    if total <= 0.0 {
        return Err(RecognizerError::ZeroPathLength);
    }

    let interval = total / (num_samples - 1) as f64;
    let mut resampled = Vec::with_capacity(num_samples);
    resampled.push(points[0]);

    // `prev` is either the last input vertex consumed or the last emitted
    // sample; `accumulated` is the arc walked since the last emission and is
    // always strictly below `interval`, so the interpolation divisor below
    // is nonzero whenever the branch is taken.
    let mut accumulated = 0.0;
    let mut prev = points[0];
    let mut i = 1;
    while i < points.len() {
        let d = distance(prev, points[i]);
        if accumulated + d >= interval {
            let t = (interval - accumulated) / d;
            let sample = prev.lerp(points[i], t);
            resampled.push(sample);
            prev = sample;
            accumulated = 0.0;
        } else {
            accumulated += d;
            prev = points[i];
            i += 1;
        }
    }

    // Rounding in the arc accumulation can leave the final sample unemitted;
    // it belongs at the stroke's endpoint.
    if resampled.len() == num_samples - 1 {
        resampled.push(points[points.len() - 1]);
    }

    Ok(resampled)
}

/// Angle from the stroke's first point to its centroid.
///
/// This is the orientation reference the rotation step cancels.
#[must_use]
pub fn indicative_angle(points: &[Point]) -> f64 {
    let c = centroid(points);
    (c.y - points[0].y).atan2(c.x - points[0].x)
}

/// Rotate every point about the stroke's centroid by `radians`.
#[must_use]
pub fn rotate_by(points: &[Point], radians: f64) -> Vec<Point> {
    let c = centroid(points);
    let (sin, cos) = radians.sin_cos();
    points
        .iter()
        .map(|p| {
            let dx = p.x - c.x;
            let dy = p.y - c.y;
            Point::new(dx * cos - dy * sin + c.x, dx * sin + dy * cos + c.y)
        })
        .collect()
}

/// Scale the stroke's bounding box to `size × size`.
///
/// The axes scale independently, so aspect ratio is not preserved. A
/// zero-extent dimension keeps a divisor of 1: strokes degenerate along one
/// axis are stretched only along the other.
#[must_use]
pub fn scale_to_square(points: &[Point], size: f64) -> Vec<Point> {
    let bb = BoundingBox::from_points(points);
    let width = if bb.width() > 0.0 { bb.width() } else { 1.0 };
    let height = if bb.height() > 0.0 { bb.height() } else { 1.0 };
    points
        .iter()
        .map(|p| {
            Point::new(
                (p.x - bb.min_x) * (size / width),
                (p.y - bb.min_y) * (size / height),
            )
        })
        .collect()
}

/// Translate the stroke so its centroid lands at the origin.
#[must_use]
pub fn translate_to_origin(points: &[Point]) -> Vec<Point> {
    let c = centroid(points);
    points
        .iter()
        .map(|p| Point::new(p.x - c.x, p.y - c.y))
        .collect()
}
