use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{QualityError, Validations};

pub(crate) const READY_TO_PUBLISH_THRESHOLD: f64 = 0.8;
pub(crate) const REVIEW_THRESHOLD: f64 = 0.6;
const LOW_SENTIMENT: f64 = 0.4;
const LOW_VIRAL_POTENTIAL: f64 = 5.0;

/// Fixed convex weights for the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub readability: f64,
    pub sentiment: f64,
    pub engagement: f64,
    pub compliance: f64,
    pub brand_alignment: f64,
}

pub const WEIGHTS: ScoringWeights = ScoringWeights {
    readability: 0.20,
    sentiment: 0.15,
    engagement: 0.30,
    compliance: 0.25,
    brand_alignment: 0.10,
};

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.readability + self.sentiment + self.engagement + self.compliance + self.brand_alignment
    }
}

fn ensure_finite(evaluator: &'static str, value: f64) -> Result<f64, QualityError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(QualityError::NonFiniteScore { evaluator })
    }
}

/// Weighted sum of the five sub-scores; engagement enters as `viral_potential / 10`.
pub(crate) fn overall_score(validations: &Validations) -> Result<f64, QualityError> {
    let readability = ensure_finite("readability", validations.readability.score)?;
    let sentiment = ensure_finite("sentiment", validations.sentiment.score)?;
    let engagement = ensure_finite("engagement", validations.engagement.viral_potential / 10.0)?;
    let compliance = ensure_finite("compliance", validations.compliance.score)?;
    let brand_alignment = ensure_finite("brand_alignment", validations.brand_alignment.score)?;

    Ok(readability * WEIGHTS.readability
        + sentiment * WEIGHTS.sentiment
        + engagement * WEIGHTS.engagement
        + compliance * WEIGHTS.compliance
        + brand_alignment * WEIGHTS.brand_alignment)
}

pub(crate) fn improvement_suggestions(validations: &Validations) -> Vec<String> {
    let mut suggestions = validations.readability.recommendations.clone();

    if validations.sentiment.score < LOW_SENTIMENT {
        suggestions
            .push("Consider adding more positive language to improve sentiment".to_string());
    }
    if validations.engagement.viral_potential < LOW_VIRAL_POTENTIAL {
        suggestions.push("Add a question or call-to-action to increase engagement".to_string());
    }

    suggestions.extend(validations.compliance.violations.iter().cloned());
    suggestions.extend(validations.compliance.warnings.iter().cloned());
    suggestions.extend(validations.brand_alignment.misalignments.iter().cloned());

    deduplicate(suggestions)
}

/// Drop exact repeats, keeping the first occurrence in place.
pub(crate) fn deduplicate(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

pub(crate) fn ready_to_publish(overall: f64) -> bool {
    overall >= READY_TO_PUBLISH_THRESHOLD
}

pub(crate) fn requires_review(overall: f64) -> bool {
    overall < REVIEW_THRESHOLD
}
