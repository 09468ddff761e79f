mod brand;
mod compliance;
mod engagement;
mod policy;
mod readability;
mod sentiment;

pub use brand::{check_brand_alignment, BrandAlignmentScore};
pub use compliance::{check_compliance, ComplianceScore};
pub use engagement::{predict_engagement, EngagementScore, EngagementSignals};
pub use policy::{ScoringWeights, WEIGHTS};
pub use readability::{check_readability, ReadabilityLevel, ReadabilityScore};
pub use sentiment::{check_sentiment, SentimentLabel, SentimentScore};

pub(crate) use policy::deduplicate;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{Content, UserProfile};

/// Input rejected at the boundary or an evaluator that produced an unusable score.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QualityError {
    #[error("content text is empty")]
    EmptyText,
    #[error("{evaluator} evaluator produced a non-finite score")]
    NonFiniteScore { evaluator: &'static str },
}

/// One result per evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validations {
    pub readability: ReadabilityScore,
    pub sentiment: SentimentScore,
    pub engagement: EngagementScore,
    pub compliance: ComplianceScore,
    pub brand_alignment: BrandAlignmentScore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub overall_score: f64,
    pub validations: Validations,
    pub suggestions: Vec<String>,
    pub ready_to_publish: bool,
    pub requires_review: bool,
}

/// Run every evaluator over the content and fold them into a report.
///
/// The evaluators share nothing, so their order is irrelevant; `rng` only
/// feeds the engagement confidence. Any evaluator failure aborts the whole
/// evaluation rather than producing a partial report.
pub fn validate_content<R: Rng + ?Sized>(
    content: &Content,
    profile: &UserProfile,
    rng: &mut R,
) -> Result<QualityReport, QualityError> {
    if content.text.trim().is_empty() {
        return Err(QualityError::EmptyText);
    }

    let validations = Validations {
        readability: check_readability(&content.text),
        sentiment: check_sentiment(&content.text),
        engagement: predict_engagement(&content.text, rng),
        compliance: check_compliance(content),
        brand_alignment: check_brand_alignment(content, profile),
    };

    let overall_score = policy::overall_score(&validations)?;
    let suggestions = policy::improvement_suggestions(&validations);

    debug!(
        overall_score,
        readability = validations.readability.score,
        sentiment = validations.sentiment.score,
        viral_potential = validations.engagement.viral_potential,
        compliance = validations.compliance.score,
        brand_alignment = validations.brand_alignment.score,
        "content evaluated"
    );

    Ok(QualityReport {
        overall_score,
        ready_to_publish: policy::ready_to_publish(overall_score),
        requires_review: policy::requires_review(overall_score),
        validations,
        suggestions,
    })
}
