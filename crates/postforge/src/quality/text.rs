//! Tokenization shared by the evaluators, the variation rewrites, and the enhancer.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

static EMOJI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x{1F600}-\x{1F64F}\x{1F300}-\x{1F5FF}\x{1F680}-\x{1F6FF}\x{1F1E0}-\x{1F1FF}]")
        .unwrap()
});

static HASHTAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#(\w+)").unwrap());

const VOWELS: &str = "aeiouy";

/// Sentences split on runs of `.`, `!`, `?`; trimmed, empty pieces dropped.
pub(crate) fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK_RE
        .split(text)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

pub(crate) fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Vowel-group syllable estimate: one per run of vowels, minus a trailing
/// silent `e`, never below one. Words of three characters or fewer count once.
pub(crate) fn syllables_in_word(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.chars().count() <= 3 {
        return 1;
    }

    let mut count = 0usize;
    let mut previous_was_vowel = false;
    for ch in word.chars() {
        let is_vowel = VOWELS.contains(ch);
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }

    if word.ends_with('e') {
        count = count.saturating_sub(1);
    }

    count.max(1)
}

pub(crate) fn contains_emoji(text: &str) -> bool {
    EMOJI_RE.is_match(text)
}

/// Hashtag bodies (without `#`) in order of appearance.
pub(crate) fn hashtags(text: &str) -> Vec<&str> {
    HASHTAG_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Lowercased token with leading and trailing punctuation removed.
pub(crate) fn normalize_token(token: &str) -> String {
    token
        .trim_matches(|ch: char| !ch.is_alphanumeric())
        .to_lowercase()
}
