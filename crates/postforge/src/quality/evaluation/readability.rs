use serde::{Deserialize, Serialize};

use super::super::text::{sentences, syllables_in_word, words};

const LONG_SENTENCE_WORDS: f64 = 20.0;
const COMPLEX_WORD_RATIO_LIMIT: f64 = 0.15;
const STANDARD_READING_EASE: f64 = 60.0;

/// Seven-band Flesch classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadabilityLevel {
    #[serde(rename = "Very Easy")]
    VeryEasy,
    #[serde(rename = "Easy")]
    Easy,
    #[serde(rename = "Fairly Easy")]
    FairlyEasy,
    #[serde(rename = "Standard")]
    Standard,
    #[serde(rename = "Fairly Difficult")]
    FairlyDifficult,
    #[serde(rename = "Difficult")]
    Difficult,
    #[serde(rename = "Very Difficult")]
    VeryDifficult,
}

impl ReadabilityLevel {
    pub fn from_flesch(score: f64) -> Self {
        if score >= 90.0 {
            Self::VeryEasy
        } else if score >= 80.0 {
            Self::Easy
        } else if score >= 70.0 {
            Self::FairlyEasy
        } else if score >= 60.0 {
            Self::Standard
        } else if score >= 50.0 {
            Self::FairlyDifficult
        } else if score >= 30.0 {
            Self::Difficult
        } else {
            Self::VeryDifficult
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::FairlyEasy => "Fairly Easy",
            Self::Standard => "Standard",
            Self::FairlyDifficult => "Fairly Difficult",
            Self::Difficult => "Difficult",
            Self::VeryDifficult => "Very Difficult",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityScore {
    /// Flesch reading ease clamped to `[0, 100]` and scaled to `[0, 1]`.
    pub score: f64,
    pub level: ReadabilityLevel,
    pub avg_sentence_length: f64,
    pub complex_word_ratio: f64,
    pub recommendations: Vec<String>,
}

impl ReadabilityScore {
    fn floor() -> Self {
        Self {
            score: 0.0,
            level: ReadabilityLevel::VeryDifficult,
            avg_sentence_length: 0.0,
            complex_word_ratio: 0.0,
            recommendations: Vec::new(),
        }
    }
}

pub fn check_readability(text: &str) -> ReadabilityScore {
    let sentence_count = sentences(text).len();
    let words = words(text);
    if sentence_count == 0 || words.is_empty() {
        return ReadabilityScore::floor();
    }

    let word_count = words.len() as f64;
    let syllable_counts: Vec<usize> = words.iter().map(|word| syllables_in_word(word)).collect();
    let total_syllables: usize = syllable_counts.iter().sum();
    let complex_words = syllable_counts.iter().filter(|&&count| count > 2).count();

    let avg_sentence_length = word_count / sentence_count as f64;
    let avg_syllables_per_word = total_syllables as f64 / word_count;
    let flesch = 206.835 - 1.015 * avg_sentence_length - 84.6 * avg_syllables_per_word;
    let complex_word_ratio = complex_words as f64 / word_count;

    let mut recommendations = Vec::new();
    if flesch < STANDARD_READING_EASE {
        recommendations.push("Consider simplifying language for better readability".to_string());
    }
    if avg_sentence_length > LONG_SENTENCE_WORDS {
        recommendations.push("Break long sentences into shorter ones".to_string());
    }
    if complex_word_ratio > COMPLEX_WORD_RATIO_LIMIT {
        recommendations
            .push("Replace complex words with simpler alternatives where possible".to_string());
    }

    ReadabilityScore {
        score: flesch.clamp(0.0, 100.0) / 100.0,
        level: ReadabilityLevel::from_flesch(flesch),
        avg_sentence_length,
        complex_word_ratio,
        recommendations,
    }
}
