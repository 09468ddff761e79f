use rand::Rng;
use serde::{Deserialize, Serialize};

use super::super::text::{contains_emoji, words};

const BASELINE: f64 = 0.5;
const QUESTION_BOOST: f64 = 0.15;
const CALL_TO_ACTION_BOOST: f64 = 0.1;
const EMOJI_BOOST: f64 = 0.05;
const DIGIT_BOOST: f64 = 0.05;
const OPTIMAL_LENGTH_BOOST: f64 = 0.05;
const OPTIMAL_WORDS: std::ops::RangeInclusive<usize> = 100..=300;
const POINTING_DOWN: &str = "\u{1F447}";

/// Surface features the prediction is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngagementSignals {
    pub has_question: bool,
    pub has_call_to_action: bool,
    pub has_emoji: bool,
    pub has_digit: bool,
    pub optimal_length: bool,
}

impl EngagementSignals {
    pub fn detect(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let word_count = words(text).len();

        Self {
            has_question: text.contains('?'),
            has_call_to_action: lowered.contains("comment")
                || lowered.contains("share")
                || text.contains(POINTING_DOWN),
            has_emoji: contains_emoji(text),
            has_digit: text.chars().any(|ch| ch.is_ascii_digit()),
            optimal_length: OPTIMAL_WORDS.contains(&word_count),
        }
    }

    /// Baseline plus fixed boosts, capped at 1.
    pub fn score(&self) -> f64 {
        let mut score = BASELINE;
        if self.has_question {
            score += QUESTION_BOOST;
        }
        if self.has_call_to_action {
            score += CALL_TO_ACTION_BOOST;
        }
        if self.has_emoji {
            score += EMOJI_BOOST;
        }
        if self.has_digit {
            score += DIGIT_BOOST;
        }
        if self.optimal_length {
            score += OPTIMAL_LENGTH_BOOST;
        }
        score.min(1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementScore {
    pub predicted_likes: u32,
    pub predicted_comments: u32,
    pub predicted_shares: u32,
    /// `0..=10` ranking scalar.
    pub viral_potential: f64,
    pub confidence: f64,
}

impl EngagementScore {
    pub fn from_signals<R: Rng + ?Sized>(signals: EngagementSignals, rng: &mut R) -> Self {
        let score = signals.score();
        Self {
            predicted_likes: (score * 1000.0).floor() as u32,
            predicted_comments: (score * 100.0).floor() as u32,
            predicted_shares: (score * 50.0).floor() as u32,
            viral_potential: score * 10.0,
            confidence: rng.gen_range(0.7..0.9),
        }
    }
}

/// Predict engagement from text features. Only the confidence draws from `rng`.
pub fn predict_engagement<R: Rng + ?Sized>(text: &str, rng: &mut R) -> EngagementScore {
    EngagementScore::from_signals(EngagementSignals::detect(text), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn plain_statement_scores_baseline() {
        let mut rng = StdRng::seed_from_u64(7);
        let result = predict_engagement("Shipping the release today.", &mut rng);
        assert_eq!(result.predicted_likes, 500);
        assert_eq!(result.predicted_comments, 50);
        assert_eq!(result.predicted_shares, 25);
        assert!((result.viral_potential - 5.0).abs() < 1e-9);
        assert!((0.7..0.9).contains(&result.confidence));
    }

    #[test]
    fn all_features_raise_prediction() {
        let signals = EngagementSignals::detect(
            "What did 2024 teach you? Drop a comment below \u{1F447}",
        );
        assert!(signals.has_question);
        assert!(signals.has_call_to_action);
        assert!(signals.has_emoji);
        assert!(signals.has_digit);
        assert!(!signals.optimal_length);
        assert!((signals.score() - 0.85).abs() < 1e-9);
    }

    #[test]
    fn predictions_never_decrease_as_features_are_added() {
        let steps = [
            EngagementSignals::default(),
            EngagementSignals {
                has_question: true,
                ..Default::default()
            },
            EngagementSignals {
                has_question: true,
                has_call_to_action: true,
                ..Default::default()
            },
            EngagementSignals {
                has_question: true,
                has_call_to_action: true,
                has_emoji: true,
                ..Default::default()
            },
            EngagementSignals {
                has_question: true,
                has_call_to_action: true,
                has_emoji: true,
                has_digit: true,
                optimal_length: true,
            },
        ];

        let mut rng = StdRng::seed_from_u64(1);
        let predictions: Vec<EngagementScore> = steps
            .iter()
            .map(|signals| EngagementScore::from_signals(*signals, &mut rng))
            .collect();
        for pair in predictions.windows(2) {
            assert!(pair[1].predicted_likes >= pair[0].predicted_likes);
            assert!(pair[1].predicted_comments >= pair[0].predicted_comments);
            assert!(pair[1].predicted_shares >= pair[0].predicted_shares);
            assert!(pair[1].viral_potential >= pair[0].viral_potential);
        }
        assert!(predictions[4].viral_potential <= 10.0);
    }

    #[test]
    fn optimal_length_band_is_inclusive() {
        let hundred = vec!["word"; 100].join(" ");
        let three_hundred_one = vec!["word"; 301].join(" ");
        assert!(EngagementSignals::detect(&hundred).optimal_length);
        assert!(!EngagementSignals::detect(&three_hundred_one).optimal_length);
    }

    #[test]
    fn seeded_rng_reproduces_confidence() {
        let text = "Share your thoughts?";
        let first = predict_engagement(text, &mut StdRng::seed_from_u64(99));
        let second = predict_engagement(text, &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }
}
