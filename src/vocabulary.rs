//! Built-in gesture vocabulary: the digits "0" through "9".
//!
//! Each digit is authored as a single stroke on a 100×100 canvas in screen
//! coordinates (y grows downward), the way a user would draw it without
//! lifting the pen. The shapes are deliberately coarse: the recognizer
//! resamples them to the configured cardinality anyway, so only the traced
//! path matters.

use std::f64::consts::PI;

use crate::geometry::Point;
use crate::template::RawTemplate;

/// The ten-digit vocabulary, in label order "0" to "9".
#[must_use]
pub fn digits() -> Vec<RawTemplate> {
    vec![
        RawTemplate::new("0", digit_zero()),
        RawTemplate::new("1", digit_one()),
        RawTemplate::new("2", digit_two()),
        RawTemplate::new("3", digit_three()),
        RawTemplate::new("4", digit_four()),
        RawTemplate::new("5", digit_five()),
        RawTemplate::new("6", digit_six()),
        RawTemplate::new("7", digit_seven()),
        RawTemplate::new("8", digit_eight()),
        RawTemplate::new("9", digit_nine()),
    ]
}

/// Sample an elliptical arc. Angles in degrees, y-down screen sense:
/// 270° is above the center, 90° below.
fn arc(cx: f64, cy: f64, rx: f64, ry: f64, start_deg: f64, end_deg: f64, steps: usize) -> Vec<Point> {
    (0..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            let angle = (start_deg + t * (end_deg - start_deg)).to_radians();
            Point::new(cx + rx * angle.cos(), cy + ry * angle.sin())
        })
        .collect()
}

fn poly(points: &[(f64, f64)]) -> Vec<Point> {
    points.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// Closed oval, drawn from the top, counter-clockwise on screen.
fn digit_zero() -> Vec<Point> {
    arc(50.0, 50.0, 32.0, 42.0, 270.0, 630.0, 24)
}

/// Upward flag, then straight down.
fn digit_one() -> Vec<Point> {
    poly(&[(38.0, 24.0), (52.0, 10.0), (52.0, 90.0)])
}

/// Top arch, diagonal to the baseline, base stroke right.
fn digit_two() -> Vec<Point> {
    let mut points = arc(50.0, 32.0, 25.0, 20.0, 180.0, 360.0, 10);
    points.extend(poly(&[(28.0, 88.0), (76.0, 88.0)]));
    points
}

/// Two right-facing bumps.
fn digit_three() -> Vec<Point> {
    let mut points = arc(48.0, 30.0, 22.0, 19.0, 210.0, 450.0, 12);
    points.extend(arc(48.0, 70.0, 24.0, 21.0, 270.0, 510.0, 12));
    points
}

/// Diagonal down, across, then the stem.
fn digit_four() -> Vec<Point> {
    poly(&[
        (62.0, 10.0),
        (26.0, 58.0),
        (78.0, 58.0),
        (64.0, 34.0),
        (64.0, 92.0),
    ])
}

/// Cap stroke, short descent, belly arc.
fn digit_five() -> Vec<Point> {
    let mut points = poly(&[(74.0, 12.0), (32.0, 12.0), (30.0, 44.0)]);
    points.extend(arc(46.0, 64.0, 26.0, 24.0, 230.0, 470.0, 12));
    points
}

/// Sweep down from the top right into a closed bottom loop.
fn digit_six() -> Vec<Point> {
    let mut points = poly(&[(68.0, 14.0), (46.0, 36.0), (33.0, 58.0)]);
    points.extend(arc(50.0, 72.0, 20.0, 18.0, 180.0, 540.0, 16));
    points
}

/// Bar, then diagonal descent.
fn digit_seven() -> Vec<Point> {
    poly(&[(26.0, 14.0), (76.0, 14.0), (58.0, 52.0), (42.0, 90.0)])
}

/// One continuous crossing figure-eight.
fn digit_eight() -> Vec<Point> {
    (0..=32)
        .map(|i| {
            let t = 2.0 * PI * i as f64 / 32.0;
            Point::new(50.0 + 20.0 * (2.0 * t).sin(), 50.0 - 38.0 * t.cos())
        })
        .collect()
}

/// Closed top bubble, then a tail down the right side.
fn digit_nine() -> Vec<Point> {
    let mut points = arc(52.0, 32.0, 21.0, 20.0, 0.0, 360.0, 16);
    points.extend(poly(&[(72.0, 52.0), (67.0, 90.0)]));
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RecognizerConfig;
    use crate::geometry::path_length;
    use crate::normalize::normalize_stroke;

    #[test]
    fn test_vocabulary_order_and_labels() {
        let vocabulary = digits();
        assert_eq!(vocabulary.len(), 10);
        let names: Vec<&str> = vocabulary.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    }

    #[test]
    fn test_every_digit_is_a_usable_stroke() {
        let config = RecognizerConfig::default();
        for template in digits() {
            assert!(template.points.len() >= 2, "digit {}", template.name);
            assert!(
                path_length(&template.points) > 0.0,
                "digit {} has zero path length",
                template.name
            );
            let normalized = normalize_stroke(&template.points, &config).unwrap();
            assert_eq!(normalized.len(), config.num_samples);
        }
    }

    #[test]
    fn test_digits_stay_on_canvas() {
        for template in digits() {
            for p in &template.points {
                assert!(p.x >= 0.0 && p.x <= 100.0, "digit {}", template.name);
                assert!(p.y >= 0.0 && p.y <= 100.0, "digit {}", template.name);
            }
        }
    }
}
