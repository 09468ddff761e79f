use std::sync::{Mutex, MutexGuard};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use super::domain::{Content, ContentType, Tone, UserProfile};
use super::enhancer::{enhance, EnhancedContent};
use super::evaluation::{validate_content, QualityError, QualityReport};
use super::generation::{generate_ideas, parse_generated_content, ContentIdea, IdeaRequest};
use super::variations::{generate_variations, Variation};
use crate::config::GenerationConfig;

/// Facade over idea generation, draft parsing, the evaluators, the variation
/// generator, and the enhancer, owning the one random source they draw from.
pub struct ContentQualityService {
    rng: Mutex<StdRng>,
    default_variation_count: usize,
}

impl ContentQualityService {
    pub fn new(config: &GenerationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            rng: Mutex::new(rng),
            default_variation_count: config.default_variation_count,
        }
    }

    pub fn default_variation_count(&self) -> usize {
        self.default_variation_count
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        // The generator carries no invariant a panicking holder could break.
        self.rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn validate(
        &self,
        content: &Content,
        profile: &UserProfile,
    ) -> Result<QualityReport, QualityError> {
        let report = validate_content(content, profile, &mut *self.rng()).map_err(|err| {
            warn!(error = %err, "content validation rejected");
            err
        })?;

        info!(
            overall_score = report.overall_score,
            ready_to_publish = report.ready_to_publish,
            requires_review = report.requires_review,
            suggestions = report.suggestions.len(),
            "content validated"
        );
        Ok(report)
    }

    /// Ranked variations; `count` falls back to the configured default.
    pub fn variations(
        &self,
        content: &Content,
        count: Option<usize>,
    ) -> Result<Vec<Variation>, QualityError> {
        if content.text.trim().is_empty() {
            warn!("variation request without text");
            return Err(QualityError::EmptyText);
        }

        let count = count.unwrap_or(self.default_variation_count);
        let variations = generate_variations(content, count, &mut *self.rng());
        info!(requested = count, returned = variations.len(), "variations ranked");
        Ok(variations)
    }

    pub fn enhance(
        &self,
        content: &Content,
        profile: &UserProfile,
    ) -> Result<EnhancedContent, QualityError> {
        if content.text.trim().is_empty() {
            warn!("enhancement request without text");
            return Err(QualityError::EmptyText);
        }

        let enhanced = enhance(content, profile, &mut *self.rng());
        info!(
            emojis = enhanced.enhancements.emojis.emoji_count,
            hashtags = enhanced.content.hashtags.len(),
            "content enhanced"
        );
        Ok(enhanced)
    }

    pub fn ideas(&self, request: &IdeaRequest) -> Vec<ContentIdea> {
        let ideas = generate_ideas(request, &mut *self.rng());
        info!(
            pillar = ?request.pillar,
            requested = request.idea_count,
            returned = ideas.len(),
            "ideas generated"
        );
        ideas
    }

    /// Parse a drafted post into content of the given type and tone.
    pub fn parse_draft(
        &self,
        raw: &str,
        content_type: ContentType,
        tone: Tone,
    ) -> Result<Content, QualityError> {
        if raw.trim().is_empty() {
            warn!("parse request without text");
            return Err(QualityError::EmptyText);
        }

        let content = Content {
            content_type,
            tone,
            ..parse_generated_content(raw)
        };
        info!(
            hashtags = content.hashtags.len(),
            has_call_to_action = content.call_to_action.is_some(),
            "draft parsed"
        );
        Ok(content)
    }
}
