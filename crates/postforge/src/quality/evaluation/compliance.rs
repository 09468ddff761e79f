use serde::{Deserialize, Serialize};

use super::super::domain::Content;
use super::super::text::hashtags;

pub(crate) const CHARACTER_LIMIT: usize = 3000;
pub(crate) const HASHTAG_LIMIT: usize = 30;
const SELF_PROMOTION_LIMIT: usize = 2;
const VIOLATION_PENALTY: f64 = 0.3;
const WARNING_PENALTY: f64 = 0.1;

const DIRECT_MESSAGE_CUES: [&str; 2] = ["DM me", "message me"];
const SELF_PROMOTION_WORDS: [&str; 5] = ["buy", "purchase", "sale", "discount", "offer"];

/// Platform-policy findings. Violations weigh three times as much as warnings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceScore {
    pub score: f64,
    pub violations: Vec<String>,
    pub warnings: Vec<String>,
}

pub fn check_compliance(content: &Content) -> ComplianceScore {
    let text = content.text.as_str();
    let mut violations = Vec::new();
    let mut warnings = Vec::new();

    if DIRECT_MESSAGE_CUES.iter().any(|cue| text.contains(cue)) {
        warnings.push("Direct message requests may reduce organic reach".to_string());
    }

    let lowered = text.to_lowercase();
    let promotion_hits = SELF_PROMOTION_WORDS
        .iter()
        .filter(|word| lowered.contains(*word))
        .count();
    if promotion_hits > SELF_PROMOTION_LIMIT {
        violations.push("Excessive self-promotion detected".to_string());
    }

    if text.chars().count() > CHARACTER_LIMIT {
        violations.push("Content exceeds LinkedIn character limit".to_string());
    }

    if hashtags(text).len() > HASHTAG_LIMIT {
        violations.push("Too many hashtags (LinkedIn recommends 3-5)".to_string());
    }

    let penalty =
        violations.len() as f64 * VIOLATION_PENALTY + warnings.len() as f64 * WARNING_PENALTY;

    ComplianceScore {
        score: (1.0 - penalty).max(0.0),
        violations,
        warnings,
    }
}
