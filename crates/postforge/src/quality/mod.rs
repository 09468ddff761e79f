//! Content quality pipeline: template-driven ideas and draft parsing, five
//! independent heuristic evaluators folded into one report, a ranked variation
//! generator, and an enhancement pass.
//!
//! Everything below the service is a pure function of its arguments. The only
//! randomness (engagement confidence, hook and emoji choice, idea estimates)
//! comes from a caller-supplied `rand::Rng`, so seeded runs are reproducible.

pub mod domain;
pub mod enhancer;
pub mod evaluation;
pub mod generation;
pub mod router;
pub mod service;
mod text;
pub mod variations;

#[cfg(test)]
mod tests;

pub use domain::{Content, ContentType, Tone, UserProfile};
pub use enhancer::{enhance, EnhancedContent};
pub use evaluation::{
    validate_content, BrandAlignmentScore, ComplianceScore, EngagementScore, QualityError,
    QualityReport, ReadabilityLevel, ReadabilityScore, SentimentLabel, SentimentScore,
    Validations,
};
pub use generation::{
    generate_ideas, parse_generated_content, ContentIdea, ContentPillar, IdeaRequest,
};
pub use router::content_router;
pub use service::ContentQualityService;
pub use variations::{generate_variations, Variation, VariationKind, DEFAULT_VARIATION_COUNT};
