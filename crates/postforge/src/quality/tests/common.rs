use std::sync::Arc;

use axum::response::Response;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;

use crate::config::GenerationConfig;
use crate::quality::domain::{Content, Tone, UserProfile};
use crate::quality::{content_router, ContentQualityService};

pub(super) const SEED: u64 = 42;

pub(super) const ENGAGING_POST: &str = "I spent 3 years leading our cloud migration. \
    The biggest lesson was simple: communicate early and often. \
    Our team shipped 40 services without a single outage. \
    What has your experience been with large migrations?";

pub(super) fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

pub(super) fn profile() -> UserProfile {
    UserProfile {
        industry: "technology".to_string(),
        role: "Engineering Manager".to_string(),
        expertise: vec!["cloud".to_string(), "migration".to_string()],
        brand_voice: Tone::Professional,
        target_audience: "engineering leaders".to_string(),
    }
}

pub(super) fn post(text: &str) -> Content {
    Content {
        call_to_action: Some("Share your story in the comments".to_string()),
        ..Content::from_text(text)
    }
}

pub(super) fn generation_config() -> GenerationConfig {
    GenerationConfig {
        default_variation_count: 3,
        seed: Some(SEED),
    }
}

pub(super) fn service() -> Arc<ContentQualityService> {
    Arc::new(ContentQualityService::new(&generation_config()))
}

pub(super) fn router() -> axum::Router {
    content_router(service())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
