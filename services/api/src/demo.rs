use chrono::Local;
use clap::Args;
use postforge::config::AppConfig;
use postforge::error::AppError;
use postforge::quality::{
    Content, ContentIdea, ContentPillar, ContentType, EnhancedContent, IdeaRequest, QualityReport,
    Tone, Variation,
};
use serde::Serialize;

use crate::cli::{IdeaArgs, ParseArgs, PostArgs, VariationArgs};
use crate::infra::{quality_service, read_post_text, sample_profile};

const SAMPLE_DRAFT: &str = "Last quarter our on-call pager went off 212 times.\n\n\
    We stopped adding alerts and started deleting them. \
    Every alert now needs an owner, a runbook, and a clear customer impact.\n\n\
    Pages dropped by 70 percent and the team finally sleeps through the night. \
    It's honestly been awesome to watch the kubernetes platform get calmer.\n\n\
    How does your team decide which alerts deserve a human?\n\n\
    #observability #sre #oncall";

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed for reproducible demo output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Number of ranked variations to show
    #[arg(long, default_value_t = 3)]
    pub(crate) count: usize,
}

pub(crate) fn run_validate(args: PostArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = quality_service(&config.generation, args.seed);
    let text = read_post_text(args.text.clone(), args.file.as_deref())?;

    let report = service.validate(&args.content(text), &args.profile.profile())?;
    if args.json {
        return print_json(&report);
    }
    render_report(&report);
    Ok(())
}

pub(crate) fn run_variations(args: VariationArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = quality_service(&config.generation, args.post.seed);
    let text = read_post_text(args.post.text.clone(), args.post.file.as_deref())?;

    let variations = service.variations(&args.post.content(text), args.count)?;
    if args.post.json {
        return print_json(&variations);
    }
    render_variations(&variations);
    Ok(())
}

pub(crate) fn run_enhance(args: PostArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = quality_service(&config.generation, args.seed);
    let text = read_post_text(args.text.clone(), args.file.as_deref())?;

    let enhanced = service.enhance(&args.content(text), &args.profile.profile())?;
    if args.json {
        return print_json(&enhanced);
    }
    render_enhanced(&enhanced);
    Ok(())
}

pub(crate) fn run_ideas(args: IdeaArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = quality_service(&config.generation, args.seed);
    let request = IdeaRequest {
        profile: args.profile.profile(),
        pillar: args.pillar,
        idea_count: args.count,
    };

    let ideas = service.ideas(&request);
    if args.json {
        return print_json(&ideas);
    }
    render_ideas(args.pillar, &ideas);
    Ok(())
}

pub(crate) fn run_parse(args: ParseArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = quality_service(&config.generation, None);
    let raw = read_post_text(args.text.clone(), args.file.as_deref())?;

    let content = service.parse_draft(&raw, args.content_type, args.tone)?;
    if args.json {
        return print_json(&content);
    }
    render_parsed(&content);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = quality_service(&config.generation, args.seed);
    let profile = sample_profile();

    println!("Content quality demo ({})", Local::now().format("%Y-%m-%d %H:%M"));
    println!(
        "Author: {} in {} writing for {}",
        profile.role, profile.industry, profile.target_audience
    );

    println!();
    let ideas = service.ideas(&IdeaRequest {
        profile: profile.clone(),
        pillar: ContentPillar::Leadership,
        idea_count: 3,
    });
    render_ideas(ContentPillar::Leadership, &ideas);

    println!("\nDraft:\n{SAMPLE_DRAFT}\n");
    let draft = service.parse_draft(SAMPLE_DRAFT, ContentType::Text, Tone::Professional)?;
    render_parsed(&draft);

    println!();
    let report = service.validate(&draft, &profile)?;
    render_report(&report);

    println!();
    let variations = service.variations(&draft, Some(args.count))?;
    render_variations(&variations);

    println!();
    let enhanced = service.enhance(&draft, &profile)?;
    render_enhanced(&enhanced);

    let rescored = service.validate(&enhanced.content, &profile)?;
    println!(
        "\nEnhanced post scores {:.2} (draft {:.2})",
        rescored.overall_score, report.overall_score
    );
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn render_ideas(pillar: ContentPillar, ideas: &[ContentIdea]) {
    println!("Ideas for {:?} ({}):", pillar, ideas.len());
    for idea in ideas {
        println!(
            "- {} [{:?}, {:?}, ~{} min] viral {:.1}/10",
            idea.title,
            idea.hook_type,
            idea.difficulty,
            idea.minutes_to_create,
            idea.viral_potential
        );
        for step in &idea.outline {
            println!("    {step}");
        }
    }
    if let Some(first) = ideas.first() {
        let tags: Vec<String> = first
            .suggested_hashtags
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect();
        println!("Suggested hashtags: {}", tags.join(" "));
    }
}

pub(crate) fn render_parsed(content: &Content) {
    println!(
        "Parsed {} post ({:?}), {} hashtags",
        content.tone.label(),
        content.content_type,
        content.hashtags.len()
    );
    match &content.call_to_action {
        Some(cta) => println!("Call to action: {cta}"),
        None => println!("Call to action: none detected"),
    }
}

fn verdict(report: &QualityReport) -> &'static str {
    if report.ready_to_publish {
        "ready to publish"
    } else if report.requires_review {
        "needs review"
    } else {
        "acceptable"
    }
}

pub(crate) fn render_report(report: &QualityReport) {
    let validations = &report.validations;
    println!(
        "Quality report: {:.2} ({})",
        report.overall_score,
        verdict(report)
    );
    println!(
        "- Readability: {:.2} [{}] avg {:.1} words/sentence",
        validations.readability.score,
        validations.readability.level.label(),
        validations.readability.avg_sentence_length
    );
    println!(
        "- Sentiment: {:.2} ({:?}, confidence {:.2})",
        validations.sentiment.score, validations.sentiment.label, validations.sentiment.confidence
    );
    println!(
        "- Engagement: viral {:.1}/10, ~{} likes / {} comments / {} shares",
        validations.engagement.viral_potential,
        validations.engagement.predicted_likes,
        validations.engagement.predicted_comments,
        validations.engagement.predicted_shares
    );
    println!(
        "- Compliance: {:.2} ({} violations, {} warnings)",
        validations.compliance.score,
        validations.compliance.violations.len(),
        validations.compliance.warnings.len()
    );
    println!(
        "- Brand alignment: {:.2} ({})",
        validations.brand_alignment.score,
        if validations.brand_alignment.alignment_factors.is_empty() {
            "no alignment factors".to_string()
        } else {
            validations.brand_alignment.alignment_factors.join(", ")
        }
    );

    if report.suggestions.is_empty() {
        println!("Suggestions: none");
    } else {
        println!("Suggestions:");
        for suggestion in &report.suggestions {
            println!("  - {suggestion}");
        }
    }
}

pub(crate) fn render_variations(variations: &[Variation]) {
    println!("Ranked variations ({}):", variations.len());
    for (rank, variation) in variations.iter().enumerate() {
        println!(
            "{}. {} [{:?}] viral {:.1}/10",
            rank + 1,
            variation.label,
            variation.kind,
            variation.expected_performance.viral_potential
        );
        for line in variation.content.lines().filter(|line| !line.trim().is_empty()) {
            println!("     {line}");
        }
    }
}

pub(crate) fn render_enhanced(enhanced: &EnhancedContent) {
    let enhancements = &enhanced.enhancements;
    println!(
        "Enhanced {} post ({} emojis added, {} hashtags):",
        enhanced.content.tone.label(),
        enhancements.emojis.emoji_count,
        enhanced.content.hashtags.len()
    );
    println!("{}", enhanced.content.text);
    println!(
        "Personality score {:.2}; readability {:.2}",
        enhancements.personal_touch.personality_score, enhancements.readability.readability_score
    );
    for suggestion in enhancements
        .readability
        .suggestions
        .iter()
        .chain(&enhancements.personal_touch.suggestions)
    {
        println!("  - {suggestion}");
    }
}

#[cfg(test)]
mod tests {
    use postforge::config::GenerationConfig;

    use super::*;

    #[test]
    fn sample_draft_parses_with_question_and_tags() {
        let service = quality_service(&GenerationConfig::default(), Some(2));
        let draft = service
            .parse_draft(SAMPLE_DRAFT, ContentType::Text, Tone::Professional)
            .expect("draft parses");

        assert_eq!(
            draft.call_to_action.as_deref(),
            Some("How does your team decide which alerts deserve a human?")
        );
        assert_eq!(draft.hashtags, vec!["observability", "sre", "oncall"]);
        assert!(service.validate(&draft, &sample_profile()).is_ok());
    }
}
