//! Built-in digit vocabulary, end to end.

use approx::assert_relative_eq;
use unistroke::{vocabulary, Point, Recognizer, RecognizerConfig};

#[test]
fn every_digit_self_matches() {
    let recognizer = Recognizer::with_default_config(vocabulary::digits()).unwrap();

    for (index, template) in vocabulary::digits().into_iter().enumerate() {
        let result = recognizer.recognize(&template.points).unwrap();
        assert_eq!(result.name, template.name, "digit {}", template.name);
        assert_eq!(result.template_index, index);
        assert_relative_eq!(result.score, 1.0, epsilon = 1e-12);
    }
}

#[test]
fn digits_survive_coarse_sampling() {
    let config = RecognizerConfig::default().with_num_samples(16);
    let recognizer = Recognizer::new(vocabulary::digits(), config).unwrap();

    for template in vocabulary::digits() {
        let result = recognizer.recognize(&template.points).unwrap();
        assert_eq!(result.name, template.name, "digit {}", template.name);
    }
}

#[test]
fn digits_match_when_redrawn_elsewhere() {
    let recognizer = Recognizer::with_default_config(vocabulary::digits()).unwrap();

    // The same shapes drawn smaller and in a different screen region.
    for template in vocabulary::digits() {
        let moved: Vec<Point> = template
            .points
            .iter()
            .map(|p| Point::new(p.x * 0.4 + 300.0, p.y * 0.4 + 120.0))
            .collect();
        let result = recognizer.recognize(&moved).unwrap();
        assert_eq!(result.name, template.name, "digit {}", template.name);
        assert!(result.score > 0.99, "digit {}: {}", template.name, result.score);
    }
}

#[cfg(feature = "serde")]
#[test]
fn vocabulary_round_trips_through_json() {
    let json = unistroke::templates_to_json(&vocabulary::digits()).unwrap();
    let parsed = unistroke::templates_from_json(&json).unwrap();
    assert_eq!(parsed, vocabulary::digits());

    // A recognizer built from the reloaded vocabulary behaves identically.
    let recognizer = Recognizer::with_default_config(parsed).unwrap();
    let result = recognizer
        .recognize(&vocabulary::digits()[8].points)
        .unwrap();
    assert_eq!(result.name, "8");
}
