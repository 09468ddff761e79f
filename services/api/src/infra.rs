use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use postforge::config::GenerationConfig;
use postforge::error::AppError;
use postforge::quality::{ContentQualityService, Tone, UserProfile};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn quality_service(
    generation: &GenerationConfig,
    seed_override: Option<u64>,
) -> Arc<ContentQualityService> {
    let mut generation = generation.clone();
    if seed_override.is_some() {
        generation.seed = seed_override;
    }
    Arc::new(ContentQualityService::new(&generation))
}

pub(crate) fn parse_tone(raw: &str) -> Result<Tone, String> {
    let wanted = raw.trim().to_ascii_lowercase();
    Tone::ALL
        .into_iter()
        .find(|tone| tone.label() == wanted)
        .ok_or_else(|| {
            let known: Vec<&str> = Tone::ALL.iter().map(Tone::label).collect();
            format!("unknown tone '{wanted}' (expected one of: {})", known.join(", "))
        })
}

/// Parse a CLI keyword through the type's wire name (`industry_insights`, `carousel`).
pub(crate) fn parse_keyword<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    let keyword = raw.trim().to_ascii_lowercase();
    serde_json::from_value(serde_json::Value::String(keyword.clone()))
        .map_err(|_| format!("unknown value '{keyword}'"))
}

/// Post body from `--text`, then `--file`, then stdin.
pub(crate) fn read_post_text(text: Option<String>, file: Option<&Path>) -> Result<String, AppError> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return Ok(fs::read_to_string(path)?);
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

pub(crate) fn sample_profile() -> UserProfile {
    UserProfile {
        industry: "technology".to_string(),
        role: "Platform Engineering Lead".to_string(),
        expertise: vec!["kubernetes".to_string(), "observability".to_string()],
        brand_voice: Tone::Professional,
        target_audience: "infrastructure engineers".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use postforge::quality::{ContentPillar, ContentType};

    use super::*;

    #[test]
    fn tones_parse_case_insensitively() {
        assert_eq!(parse_tone(" Casual "), Ok(Tone::Casual));
        assert_eq!(parse_tone("EDUCATIONAL"), Ok(Tone::Educational));
        assert!(parse_tone("sarcastic").is_err());
    }

    #[test]
    fn keywords_parse_through_wire_names() {
        assert_eq!(
            parse_keyword::<ContentPillar>("Personal_Growth"),
            Ok(ContentPillar::PersonalGrowth)
        );
        assert_eq!(parse_keyword::<ContentType>("poll"), Ok(ContentType::Poll));
        assert!(parse_keyword::<ContentType>("podcast").is_err());
    }

    #[test]
    fn inline_text_wins_over_file() {
        let text = read_post_text(
            Some("inline".to_string()),
            Some(Path::new("/definitely/not/here.txt")),
        )
        .expect("inline text");
        assert_eq!(text, "inline");
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        match read_post_text(None, Some(Path::new("/definitely/not/here.txt"))) {
            Err(AppError::Io(_)) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn seed_override_replaces_configured_seed() {
        let generation = GenerationConfig {
            default_variation_count: 2,
            seed: Some(1),
        };
        let service = quality_service(&generation, Some(9));
        assert_eq!(service.default_variation_count(), 2);
    }
}
