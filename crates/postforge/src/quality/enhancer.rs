//! Post-generation polish: emoji accents, hashtag selection, paragraphing, and
//! personalization hints.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::domain::{Content, Tone, UserProfile};
use super::evaluation::deduplicate;
use super::text::{hashtags, sentences, words};

const MAX_EMOJIS: usize = 3;
const EMOJI_STRIDE: usize = 3;
const TOP_RELEVANT_HASHTAGS: usize = 8;
const MAX_HASHTAGS: usize = 10;
const LONG_SENTENCE_WORDS: f64 = 20.0;
const SINGLE_PARAGRAPH_LIMIT: usize = 500;
const SENTENCES_PER_PARAGRAPH: usize = 3;

const PARAGRAPH_BREAK_SUGGESTION: &str = "Add paragraph breaks to improve visual flow";

const BASE_HASHTAGS: [&str; 3] = ["linkedin", "professional", "career"];
const POPULAR_HASHTAGS: [&str; 5] = ["leadership", "innovation", "growth", "success", "motivation"];
const KEYWORD_STOP_WORDS: [&str; 10] = [
    "this", "that", "with", "have", "will", "from", "they", "been", "were", "said",
];

fn emoji_palette(tone: Tone) -> [&'static str; 10] {
    match tone {
        Tone::Professional => [
            "\u{1F4BC}", "\u{1F4CA}", "\u{1F3AF}", "\u{1F4A1}", "\u{1F680}", "\u{1F4C8}",
            "\u{2705}", "\u{1F50D}", "\u{26A1}", "\u{1F31F}",
        ],
        Tone::Casual => [
            "\u{1F60A}", "\u{1F44D}", "\u{1F64C}", "\u{1F4AA}", "\u{1F525}", "\u{2728}",
            "\u{1F389}", "\u{1F44F}", "\u{1F4AF}", "\u{1F91D}",
        ],
        Tone::Inspirational => [
            "\u{2728}", "\u{1F31F}", "\u{1F4AB}", "\u{1F3C6}", "\u{1F389}", "\u{1F680}",
            "\u{1F4AA}", "\u{1F308}", "\u{2B50}", "\u{1F525}",
        ],
        Tone::Educational => [
            "\u{1F4DA}", "\u{1F9E0}", "\u{1F4A1}", "\u{1F4C8}", "\u{1F50D}", "\u{1F4DD}",
            "\u{1F393}", "\u{1F4AD}", "\u{1F52C}", "\u{1F4CA}",
        ],
        Tone::Conversational => [
            "\u{1F914}", "\u{1F4AD}", "\u{1F5E3}\u{FE0F}", "\u{1F465}", "\u{1F91D}",
            "\u{1F4AC}", "\u{1F442}", "\u{1F3AF}", "\u{2728}", "\u{1F4A1}",
        ],
    }
}

fn trending_hashtags(industry: &str) -> &'static [&'static str] {
    match industry.trim().to_ascii_lowercase().as_str() {
        "marketing" => &[
            "marketing",
            "digitalmarketing",
            "contentmarketing",
            "socialmedia",
            "branding",
            "seo",
        ],
        "finance" => &[
            "finance",
            "fintech",
            "investing",
            "banking",
            "cryptocurrency",
            "blockchain",
        ],
        "healthcare" => &[
            "healthcare",
            "medtech",
            "wellness",
            "innovation",
            "patientcare",
            "medical",
        ],
        "education" => &[
            "education",
            "learning",
            "teaching",
            "edtech",
            "students",
            "knowledge",
        ],
        "sales" => &["sales", "b2b", "salesstrategy", "prospecting", "closing", "crm"],
        _ => &[
            "tech",
            "innovation",
            "ai",
            "digitaltransformation",
            "startup",
            "coding",
            "software",
        ],
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiEnhancement {
    pub enhanced_text: String,
    pub emoji_count: usize,
    /// Byte offsets of the accented sentences in the text as it was when each was found.
    pub positions: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashtagPlacement {
    End,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashtagOptimization {
    pub recommended_hashtags: Vec<String>,
    pub trending_hashtags: Vec<String>,
    pub existing_hashtags: Vec<String>,
    pub optimal_count: usize,
    pub placement: HashtagPlacement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityImprovement {
    pub avg_sentence_length: f64,
    pub suggestions: Vec<String>,
    pub readability_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalTouch {
    pub suggestions: Vec<String>,
    pub personality_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enhancements {
    pub emojis: EmojiEnhancement,
    pub hashtags: HashtagOptimization,
    pub readability: ReadabilityImprovement,
    pub personal_touch: PersonalTouch,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedContent {
    pub content: Content,
    pub enhancements: Enhancements,
}

/// Prefix every third sentence with a palette emoji, up to three in total.
pub fn add_emojis<R: Rng + ?Sized>(text: &str, tone: Tone, rng: &mut R) -> EmojiEnhancement {
    let palette = emoji_palette(tone);
    let mut enhanced = text.to_string();
    let mut positions = Vec::new();

    for sentence in sentences(text).into_iter().step_by(EMOJI_STRIDE) {
        if positions.len() >= MAX_EMOJIS {
            break;
        }
        let emoji = palette[rng.gen_range(0..palette.len())];
        if let Some(start) = enhanced.find(sentence) {
            enhanced = enhanced.replacen(sentence, &format!("{emoji} {sentence}"), 1);
            positions.push(start);
        }
    }

    EmojiEnhancement {
        enhanced_text: enhanced,
        emoji_count: positions.len(),
        positions,
    }
}

fn extract_keywords(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_alphanumeric() || *ch == '_' || ch.is_whitespace())
        .collect();
    cleaned
        .split_whitespace()
        .filter(|word| word.chars().count() > 3)
        .filter(|word| !KEYWORD_STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

fn hashtag_relevance(tag: &str, keywords: &[String], lowered_text: &str) -> u32 {
    let mut score = 0;
    if keywords.iter().any(|keyword| keyword == tag) {
        score += 3;
    }
    if lowered_text.contains(tag) {
        score += 2;
    }
    if POPULAR_HASHTAGS.contains(&tag) {
        score += 1;
    }
    score
}

pub fn optimal_hashtag_count(char_count: usize) -> usize {
    if char_count < 500 {
        5
    } else if char_count < 1000 {
        8
    } else {
        10
    }
}

/// Rank the industry's trending tags against the text and prepend the evergreen ones.
pub fn optimize_hashtags(text: &str, industry: &str) -> HashtagOptimization {
    let trending = trending_hashtags(industry);
    let keywords = extract_keywords(text);
    let lowered = text.to_lowercase();

    let mut scored: Vec<(&str, u32)> = trending
        .iter()
        .map(|tag| (*tag, hashtag_relevance(tag, &keywords, &lowered)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let recommended: Vec<String> = BASE_HASHTAGS
        .iter()
        .copied()
        .chain(scored.into_iter().take(TOP_RELEVANT_HASHTAGS).map(|(tag, _)| tag))
        .map(str::to_string)
        .collect();
    let mut recommended = deduplicate(recommended);
    recommended.truncate(MAX_HASHTAGS);

    HashtagOptimization {
        recommended_hashtags: recommended,
        trending_hashtags: trending.iter().map(|tag| tag.to_string()).collect(),
        existing_hashtags: hashtags(text).into_iter().map(str::to_string).collect(),
        optimal_count: optimal_hashtag_count(text.chars().count()),
        placement: HashtagPlacement::End,
    }
}

pub fn improve_readability(text: &str) -> ReadabilityImprovement {
    let sentences = sentences(text);
    let avg_sentence_length = if sentences.is_empty() {
        0.0
    } else {
        let total: usize = sentences.iter().map(|sentence| words(sentence).len()).sum();
        total as f64 / sentences.len() as f64
    };

    let mut suggestions = Vec::new();
    if avg_sentence_length > LONG_SENTENCE_WORDS {
        suggestions.push(
            "Consider breaking long sentences into shorter ones for better readability"
                .to_string(),
        );
    }
    if !text.contains("\n\n") && text.chars().count() > SINGLE_PARAGRAPH_LIMIT {
        suggestions.push(PARAGRAPH_BREAK_SUGGESTION.to_string());
    }

    ReadabilityImprovement {
        avg_sentence_length,
        suggestions,
        readability_score: (100.0 - (avg_sentence_length - 15.0) * 2.0).max(0.0),
    }
}

pub fn personal_touch(text: &str, profile: &UserProfile) -> PersonalTouch {
    let lowered = text.to_lowercase();
    let mut suggestions = Vec::new();

    let industry = profile.industry.trim();
    if !industry.is_empty() && !lowered.contains(&industry.to_lowercase()) {
        suggestions.push(format!("Consider mentioning your {industry} experience"));
    }

    let role = profile.role.trim();
    if !role.is_empty() && !lowered.contains(&role.to_lowercase()) {
        suggestions.push(format!("Share insights from your {role} perspective"));
    }

    let personality_score = if suggestions.is_empty() { 0.6 } else { 0.8 };
    PersonalTouch {
        suggestions,
        personality_score,
    }
}

fn insert_paragraph_breaks(text: &str) -> String {
    let pieces: Vec<&str> = text.split(". ").collect();
    pieces
        .chunks(SENTENCES_PER_PARAGRAPH)
        .map(|chunk| chunk.join(". "))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Apply emoji accents, paragraphing, and end-placed hashtags to `content`.
pub fn enhance<R: Rng + ?Sized>(
    content: &Content,
    profile: &UserProfile,
    rng: &mut R,
) -> EnhancedContent {
    let emojis = add_emojis(&content.text, content.tone, rng);
    let hashtags = optimize_hashtags(&content.text, &profile.industry);
    let readability = improve_readability(&content.text);
    let personal_touch = personal_touch(&content.text, profile);

    let mut text = emojis.enhanced_text.clone();
    if readability
        .suggestions
        .iter()
        .any(|suggestion| suggestion == PARAGRAPH_BREAK_SUGGESTION)
    {
        text = insert_paragraph_breaks(&text);
    }

    if hashtags.placement == HashtagPlacement::End && !hashtags.recommended_hashtags.is_empty() {
        let tags = hashtags
            .recommended_hashtags
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ");
        text.push_str("\n\n");
        text.push_str(&tags);
    }

    let mut enhanced = content.with_text(text);
    enhanced.hashtags = hashtags.recommended_hashtags.clone();

    EnhancedContent {
        content: enhanced,
        enhancements: Enhancements {
            emojis,
            hashtags,
            readability,
            personal_touch,
        },
    }
}
