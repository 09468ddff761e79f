use super::common::*;
use crate::quality::domain::{Content, ContentType, Tone};
use crate::quality::generation::{ContentPillar, IdeaRequest};
use crate::quality::{ContentQualityService, QualityError};

#[test]
fn seeded_services_agree() {
    let first = service()
        .validate(&post(ENGAGING_POST), &profile())
        .expect("first");
    let second = service()
        .validate(&post(ENGAGING_POST), &profile())
        .expect("second");

    assert_eq!(first, second);
}

#[test]
fn variations_default_to_configured_count() {
    let service = service();
    let variations = service
        .variations(&post(ENGAGING_POST), None)
        .expect("variations");

    assert_eq!(variations.len(), service.default_variation_count());
}

#[test]
fn variation_count_is_capped_by_candidates() {
    let variations = service()
        .variations(&post(ENGAGING_POST), Some(25))
        .expect("variations");

    assert_eq!(variations.len(), 6);
    assert!(variations.windows(2).all(|pair| {
        pair[0].expected_performance.viral_potential >= pair[1].expected_performance.viral_potential
    }));
}

#[test]
fn zero_variations_is_an_empty_list() {
    let variations = service()
        .variations(&post(ENGAGING_POST), Some(0))
        .expect("variations");
    assert!(variations.is_empty());
}

#[test]
fn blank_text_is_rejected_by_every_operation() {
    let service = ContentQualityService::new(&generation_config());
    let blank = Content::from_text("   ");

    assert_eq!(service.validate(&blank, &profile()), Err(QualityError::EmptyText));
    assert_eq!(service.variations(&blank, None), Err(QualityError::EmptyText));
    match service.enhance(&blank, &profile()) {
        Err(QualityError::EmptyText) => {}
        other => panic!("expected empty text rejection, got {other:?}"),
    }
}

#[test]
fn enhancement_replaces_hashtags_with_recommendations() {
    let mut content = post(ENGAGING_POST);
    content.hashtags = vec!["throwback".to_string()];

    let enhanced = service().enhance(&content, &profile()).expect("enhanced");

    assert_eq!(
        enhanced.content.hashtags,
        enhanced.enhancements.hashtags.recommended_hashtags
    );
    assert!(!enhanced.content.hashtags.contains(&"throwback".to_string()));
    assert!(enhanced.content.text.ends_with(&format!(
        "#{}",
        enhanced.content.hashtags.last().expect("at least one hashtag")
    )));
}

#[test]
fn ideas_are_reproducible_under_a_seed() {
    let request = IdeaRequest {
        profile: profile(),
        pillar: ContentPillar::IndustryInsights,
        idea_count: 4,
    };

    let first = service().ideas(&request);
    let second = service().ideas(&request);

    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
    assert!(first
        .iter()
        .all(|idea| idea.title.contains("technology")));
}

#[test]
fn parsed_draft_feeds_validation() {
    let service = service();
    let raw = format!("{ENGAGING_POST}\nDrop a comment with your story.\n\n#cloud #migration");

    let content = service
        .parse_draft(&raw, ContentType::Carousel, Tone::Educational)
        .expect("draft parses");

    assert_eq!(content.content_type, ContentType::Carousel);
    assert_eq!(content.tone, Tone::Educational);
    assert_eq!(
        content.call_to_action.as_deref(),
        Some("Drop a comment with your story.")
    );
    assert_eq!(content.hashtags, vec!["cloud", "migration"]);

    let report = service.validate(&content, &profile()).expect("report");
    assert!(report
        .validations
        .brand_alignment
        .alignment_factors
        .iter()
        .any(|factor| factor == "Expertise demonstration"));
}

#[test]
fn blank_draft_is_rejected() {
    match service().parse_draft(" \n ", ContentType::Text, Tone::Casual) {
        Err(QualityError::EmptyText) => {}
        other => panic!("expected empty text rejection, got {other:?}"),
    }
}
