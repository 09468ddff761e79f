use serde::{Deserialize, Serialize};

use super::super::text::{normalize_token, words};

const POSITIVE_WORDS: [&str; 10] = [
    "great",
    "excellent",
    "amazing",
    "wonderful",
    "fantastic",
    "love",
    "best",
    "awesome",
    "incredible",
    "outstanding",
];

const NEGATIVE_WORDS: [&str; 10] = [
    "bad",
    "terrible",
    "awful",
    "hate",
    "worst",
    "horrible",
    "disgusting",
    "pathetic",
    "useless",
    "failure",
];

const NEUTRAL_BASELINE: f64 = 0.5;
const DENSITY_GAIN: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub score: f64,
    pub label: SentimentLabel,
    /// Clamped to `[0, 1]`; short texts dense with sentiment words saturate at 1.
    pub confidence: f64,
}

pub fn check_sentiment(text: &str) -> SentimentScore {
    let tokens: Vec<String> = words(text).into_iter().map(normalize_token).collect();
    if tokens.is_empty() {
        return SentimentScore {
            score: NEUTRAL_BASELINE,
            label: SentimentLabel::Neutral,
            confidence: NEUTRAL_BASELINE,
        };
    }

    let positive = tokens
        .iter()
        .filter(|token| POSITIVE_WORDS.contains(&token.as_str()))
        .count();
    let negative = tokens
        .iter()
        .filter(|token| NEGATIVE_WORDS.contains(&token.as_str()))
        .count();
    let total = tokens.len() as f64;

    let (score, label) = if positive > negative {
        (
            NEUTRAL_BASELINE + (positive as f64 / total) * DENSITY_GAIN,
            SentimentLabel::Positive,
        )
    } else if negative > positive {
        (
            NEUTRAL_BASELINE - (negative as f64 / total) * DENSITY_GAIN,
            SentimentLabel::Negative,
        )
    } else {
        (NEUTRAL_BASELINE, SentimentLabel::Neutral)
    };

    let confidence = positive.abs_diff(negative) as f64 / total + NEUTRAL_BASELINE;

    SentimentScore {
        score: score.clamp(0.0, 1.0),
        label,
        confidence: confidence.clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuated_praise_reads_positive() {
        let result = check_sentiment("This is great! Isn't it amazing?");
        assert_eq!(result.label, SentimentLabel::Positive);
        assert!(result.score > 0.5);
        assert!((result.confidence - (2.0 / 6.0 + 0.5)).abs() < 1e-9);
    }

    #[test]
    fn complaints_read_negative() {
        let result = check_sentiment("The worst launch, a total failure, and awful support.");
        assert_eq!(result.label, SentimentLabel::Negative);
        assert!(result.score < 0.5);
        assert!(result.score >= 0.0);
    }

    #[test]
    fn balanced_counts_stay_neutral() {
        let result = check_sentiment("Great product, bad timing.");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.score, 0.5);
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn confidence_is_clamped_for_dense_short_text() {
        let result = check_sentiment("Awesome!");
        assert_eq!(result.label, SentimentLabel::Positive);
        assert_eq!(result.score, 1.0);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn empty_text_is_neutral() {
        let result = check_sentiment("   ");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.score, 0.5);
    }

    #[test]
    fn substrings_do_not_match() {
        let result = check_sentiment("The greatest badge in the lovely garden.");
        assert_eq!(result.label, SentimentLabel::Neutral);
    }
}
