//! Pure string rewrites behind each variation.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use super::super::text::sentences;

pub const HOOKS: [&str; 6] = [
    "\u{1F680} Here's something that will change your perspective:",
    "\u{1F4A1} I just realized something important:",
    "\u{1F525} This might be controversial, but:",
    "\u{1F4C8} After 5 years in the industry, I've learned:",
    "\u{26A1} Quick story that changed everything:",
    "\u{1F3AF} The one thing nobody talks about:",
];

const INSIGHT_ELABORATION: &str = "\nThis insight completely transformed my approach";
const MISTAKE_ELABORATION: &str = "\nMany professionals fall into this same trap";
const KEYCAP: &str = "\u{FE0F}\u{20E3}";

struct Substitution {
    pattern: Regex,
    replacement: &'static str,
}

fn word_rules(pairs: &[(&str, &'static str)]) -> Vec<Substitution> {
    pairs
        .iter()
        .map(|&(word, replacement)| Substitution {
            pattern: Regex::new(&format!(r"(?i)\b{}\b", regex::escape(word))).unwrap(),
            replacement,
        })
        .collect()
}

static PROFESSIONAL_RULES: Lazy<Vec<Substitution>> = Lazy::new(|| {
    word_rules(&[
        ("awesome", "excellent"),
        ("cool", "impressive"),
        ("hey", "Hello"),
        ("gonna", "going to"),
        ("wanna", "want to"),
        ("can't", "cannot"),
        ("won't", "will not"),
    ])
});

static CASUAL_RULES: Lazy<Vec<Substitution>> = Lazy::new(|| {
    word_rules(&[
        ("excellent", "awesome"),
        ("impressive", "cool"),
        ("hello", "Hey"),
        ("going to", "gonna"),
        ("want to", "wanna"),
        ("cannot", "can't"),
        ("will not", "won't"),
    ])
});

const PROFESSIONAL_EMOJI: [(&str, &str); 2] = [("\u{1F525}", "\u{1F4CA}"), ("\u{1F4AA}", "\u{1F4BC}")];
const CASUAL_EMOJI: [(&str, &str); 2] = [("\u{1F4CA}", "\u{1F525}"), ("\u{1F4BC}", "\u{1F4AA}")];

fn apply(text: &str, rules: &[Substitution], emoji: &[(&str, &str)]) -> String {
    let mut rewritten = text.to_string();
    for rule in rules {
        rewritten = rule
            .pattern
            .replace_all(&rewritten, rule.replacement)
            .into_owned();
    }
    for (from, to) in emoji {
        rewritten = rewritten.replace(from, to);
    }
    rewritten
}

pub fn make_professional(text: &str) -> String {
    apply(text, &PROFESSIONAL_RULES, &PROFESSIONAL_EMOJI)
}

pub fn make_casual(text: &str) -> String {
    apply(text, &CASUAL_RULES, &CASUAL_EMOJI)
}

/// Keep the first, middle, and last sentence. Three or fewer sentences pass through.
pub fn shorten_content(text: &str) -> String {
    let sentences = sentences(text);
    if sentences.len() <= 3 {
        return text.to_string();
    }

    let last = sentences.len() - 1;
    format!(
        "{}. {}. {}.",
        sentences[0],
        sentences[sentences.len() / 2],
        sentences[last]
    )
}

/// Follow lesson and mistake sentences with a stock elaboration.
pub fn expand_content(text: &str) -> String {
    let sentences = sentences(text);
    if sentences.is_empty() {
        return text.to_string();
    }

    let mut expanded: Vec<&str> = Vec::with_capacity(sentences.len() * 2);
    for sentence in sentences {
        expanded.push(sentence);
        if sentence.contains("learned") || sentence.contains("realized") {
            expanded.push(INSIGHT_ELABORATION);
        }
        if sentence.contains("mistake") || sentence.contains("error") {
            expanded.push(MISTAKE_ELABORATION);
        }
    }

    format!("{}.", expanded.join(". "))
}

/// Replace the first line with a random stock hook.
pub fn swap_hook<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let hook = HOOKS[rng.gen_range(0..HOOKS.len())];
    let body = text.split('\n').skip(1).collect::<Vec<_>>().join("\n");
    format!("{hook}\n\n{body}")
}

/// Intro sentence, keycap-numbered body sentences, closing sentence.
pub fn convert_to_list(text: &str) -> String {
    let sentences = sentences(text);
    if sentences.len() < 3 {
        return text.to_string();
    }

    let last = sentences.len() - 1;
    let mut list = format!("{}.\n\n", sentences[0]);
    for (index, point) in sentences[1..last].iter().enumerate() {
        list.push_str(&format!("{}{KEYCAP} {point}.\n\n", index + 1));
    }
    list.push_str(&format!("{}.", sentences[last]));
    list
}
