use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::super::domain::{Content, Tone, UserProfile};

static PROFESSIONAL_TONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(strategy|analysis|insights|professional|business)\b").unwrap());

static CASUAL_TONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(hey|awesome|cool|amazing)\b").unwrap());

const FACTOR_WEIGHT: f64 = 0.3;
const MISALIGNMENT_PENALTY: f64 = 0.2;
const SCORE_FLOOR: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandAlignmentScore {
    pub score: f64,
    pub alignment_factors: Vec<String>,
    pub misalignments: Vec<String>,
}

pub fn check_brand_alignment(content: &Content, profile: &UserProfile) -> BrandAlignmentScore {
    let text = content.text.to_lowercase();
    let mut alignment_factors = Vec::new();
    let mut misalignments = Vec::new();

    let industry = profile.industry.trim().to_lowercase();
    if !industry.is_empty() && text.contains(&industry) {
        alignment_factors.push("Industry relevance".to_string());
    }

    let shows_expertise = profile
        .expertise
        .iter()
        .map(|skill| skill.trim().to_lowercase())
        .any(|skill| !skill.is_empty() && text.contains(&skill));
    if shows_expertise {
        alignment_factors.push("Expertise demonstration".to_string());
    }

    match profile.brand_voice {
        Tone::Professional if !PROFESSIONAL_TONE_RE.is_match(&text) => {
            misalignments.push("Tone may not match professional brand".to_string());
        }
        Tone::Casual if !CASUAL_TONE_RE.is_match(&text) => {
            misalignments.push("Tone may be too formal for casual brand".to_string());
        }
        _ => {}
    }

    let raw = alignment_factors.len() as f64 * FACTOR_WEIGHT
        - misalignments.len() as f64 * MISALIGNMENT_PENALTY;

    BrandAlignmentScore {
        score: raw.max(SCORE_FLOOR),
        alignment_factors,
        misalignments,
    }
}
