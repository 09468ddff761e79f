//! Template-driven post ideas and parsing of drafted posts into [`Content`].

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::domain::{Content, UserProfile};
use super::text::hashtags;

pub const DEFAULT_IDEA_COUNT: usize = 3;
pub const MAX_IDEA_COUNT: usize = 20;

const INDUSTRY_PLACEHOLDER: &str = "[industry]";
const UNKNOWN_INDUSTRY: &str = "your industry";
const POINTING_DOWN: &str = "\u{1F447}";
const BASE_HASHTAGS: [&str; 3] = ["linkedin", "professional", "career"];
const INDUSTRY_TAGS_KEPT: usize = 3;
const PILLAR_TAGS_KEPT: usize = 2;

static HASHTAG_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:#\w+\s*)+$").unwrap());

/// Theme an idea is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContentPillar {
    #[default]
    Leadership,
    IndustryInsights,
    PersonalGrowth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookType {
    Story,
    List,
    Question,
    Controversial,
    Statistic,
    HowTo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

struct IdeaTemplate {
    title: &'static str,
    hook: HookType,
    difficulty: Difficulty,
    minutes: u32,
}

const LEADERSHIP_IDEAS: [IdeaTemplate; 3] = [
    IdeaTemplate {
        title: "The leadership lesson I learned from my biggest failure",
        hook: HookType::Story,
        difficulty: Difficulty::Medium,
        minutes: 15,
    },
    IdeaTemplate {
        title: "5 signs you're ready to lead a team",
        hook: HookType::List,
        difficulty: Difficulty::Easy,
        minutes: 10,
    },
    IdeaTemplate {
        title: "What makes a great leader in 2024?",
        hook: HookType::Question,
        difficulty: Difficulty::Easy,
        minutes: 8,
    },
];

const INDUSTRY_INSIGHT_IDEAS: [IdeaTemplate; 2] = [
    IdeaTemplate {
        title: "The future of [industry] is changing faster than you think",
        hook: HookType::Controversial,
        difficulty: Difficulty::Hard,
        minutes: 20,
    },
    IdeaTemplate {
        title: "3 trends that will reshape [industry] in the next 5 years",
        hook: HookType::Statistic,
        difficulty: Difficulty::Medium,
        minutes: 15,
    },
];

const PERSONAL_GROWTH_IDEAS: [IdeaTemplate; 2] = [
    IdeaTemplate {
        title: "How I overcame imposter syndrome in my career",
        hook: HookType::Story,
        difficulty: Difficulty::Medium,
        minutes: 12,
    },
    IdeaTemplate {
        title: "The daily habits that transformed my productivity",
        hook: HookType::HowTo,
        difficulty: Difficulty::Easy,
        minutes: 10,
    },
];

impl ContentPillar {
    fn templates(self) -> &'static [IdeaTemplate] {
        match self {
            ContentPillar::Leadership => &LEADERSHIP_IDEAS,
            ContentPillar::IndustryInsights => &INDUSTRY_INSIGHT_IDEAS,
            ContentPillar::PersonalGrowth => &PERSONAL_GROWTH_IDEAS,
        }
    }

    fn hashtags(self) -> [&'static str; 4] {
        match self {
            ContentPillar::Leadership => ["leadership", "management", "teamwork", "motivation"],
            ContentPillar::IndustryInsights => ["insights", "trends", "future", "analysis"],
            ContentPillar::PersonalGrowth => ["growth", "development", "mindset", "success"],
        }
    }
}

/// Section headings for an idea's outline. Hooks without a dedicated outline use the story arc.
fn outline(hook: HookType) -> &'static [&'static str] {
    match hook {
        HookType::List => &[
            "Hook: Why this matters",
            "Point 1: First key insight",
            "Point 2: Second key insight",
            "Point 3: Third key insight",
            "Conclusion: Tie it together",
        ],
        HookType::Question => &[
            "Hook: Pose the question",
            "Context: Why it matters",
            "Your perspective: Share your view",
            "Call to action: Ask for responses",
        ],
        HookType::Story
        | HookType::Controversial
        | HookType::Statistic
        | HookType::HowTo => &[
            "Hook: Set the scene",
            "Challenge: What went wrong",
            "Action: What you did about it",
            "Result: What you learned",
            "Call to action: Ask for engagement",
        ],
    }
}

fn industry_hashtags(industry: &str) -> &'static [&'static str] {
    match industry.trim().to_ascii_lowercase().as_str() {
        "technology" => &["tech", "innovation", "digitaltransformation", "ai", "startup"],
        "marketing" => &[
            "marketing",
            "digitalmarketing",
            "contentmarketing",
            "socialmedia",
            "branding",
        ],
        "finance" => &["finance", "fintech", "investing", "banking", "cryptocurrency"],
        "healthcare" => &["healthcare", "medtech", "wellness", "innovation", "patientcare"],
        _ => &[],
    }
}

/// Evergreen tags, then up to three industry tags and two pillar tags, without `#`.
pub fn suggested_hashtags(industry: &str, pillar: ContentPillar) -> Vec<String> {
    BASE_HASHTAGS
        .iter()
        .chain(industry_hashtags(industry).iter().take(INDUSTRY_TAGS_KEPT))
        .chain(pillar.hashtags().iter().take(PILLAR_TAGS_KEPT))
        .map(|tag| tag.to_string())
        .collect()
}

fn default_idea_count() -> usize {
    DEFAULT_IDEA_COUNT
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaRequest {
    #[serde(default)]
    pub profile: UserProfile,
    #[serde(default)]
    pub pillar: ContentPillar,
    #[serde(default = "default_idea_count")]
    pub idea_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentIdea {
    pub id: String,
    pub title: String,
    pub hook_type: HookType,
    pub outline: Vec<String>,
    pub suggested_hashtags: Vec<String>,
    pub expected_engagement: u32,
    /// `0..10`, used for ordering only.
    pub viral_potential: f64,
    pub difficulty: Difficulty,
    pub minutes_to_create: u32,
}

fn personalize_title(title: &str, profile: &UserProfile) -> String {
    let industry = profile.industry.trim();
    let industry = if industry.is_empty() {
        UNKNOWN_INDUSTRY
    } else {
        industry
    };
    title.replace(INDUSTRY_PLACEHOLDER, industry)
}

/// Cycle through the pillar's templates until `idea_count` ideas exist, then
/// order them by viral potential, highest first.
///
/// The engagement estimate and viral potential are drawn from `rng`; ideas
/// get ids `idea_1..` in template order before sorting.
pub fn generate_ideas<R: Rng + ?Sized>(request: &IdeaRequest, rng: &mut R) -> Vec<ContentIdea> {
    let templates = request.pillar.templates();
    let hashtags = suggested_hashtags(&request.profile.industry, request.pillar);
    let count = request.idea_count.min(MAX_IDEA_COUNT);

    let mut ideas: Vec<ContentIdea> = (0..count)
        .map(|index| {
            let template = &templates[index % templates.len()];
            ContentIdea {
                id: format!("idea_{}", index + 1),
                title: personalize_title(template.title, &request.profile),
                hook_type: template.hook,
                outline: outline(template.hook)
                    .iter()
                    .map(|step| step.to_string())
                    .collect(),
                suggested_hashtags: hashtags.clone(),
                expected_engagement: rng.gen_range(100..1100),
                viral_potential: rng.gen_range(0.0..10.0),
                difficulty: template.difficulty,
                minutes_to_create: template.minutes,
            }
        })
        .collect();

    ideas.sort_by(|a, b| b.viral_potential.total_cmp(&a.viral_potential));
    ideas
}

fn is_call_to_action(line: &str) -> bool {
    line.contains('?') || line.contains(POINTING_DOWN) || line.to_lowercase().contains("comment")
}

/// Turn a drafted post into [`Content`]: every `#tag` becomes a hashtag and
/// the last body line becomes the call to action when it asks something,
/// points down, or mentions comments. Trailing hashtag-only lines are not body.
///
/// The text itself is kept whole; type and tone stay at their defaults.
pub fn parse_generated_content(raw: &str) -> Content {
    let text = raw.trim();

    let mut body: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    while body.last().is_some_and(|line| HASHTAG_LINE_RE.is_match(line)) {
        body.pop();
    }

    let call_to_action = body
        .last()
        .filter(|line| is_call_to_action(line))
        .map(|line| line.to_string());

    Content {
        hashtags: hashtags(text).into_iter().map(str::to_string).collect(),
        call_to_action,
        ..Content::from_text(text)
    }
}
