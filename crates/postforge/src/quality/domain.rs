use serde::{Deserialize, Serialize};

/// Format a post is published as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    #[default]
    Text,
    Image,
    Video,
    Carousel,
    Poll,
    Event,
}

/// Voice a post is written in; also used as the declared brand voice of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Inspirational,
    Educational,
    Conversational,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Inspirational,
        Tone::Educational,
        Tone::Conversational,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Inspirational => "inspirational",
            Tone::Educational => "educational",
            Tone::Conversational => "conversational",
        }
    }
}

/// A generated post under evaluation. Evaluators only ever borrow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub text: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_to_action: Option<String>,
    #[serde(default)]
    pub content_type: ContentType,
    #[serde(default)]
    pub tone: Tone,
}

impl Content {
    /// Plain text post with default type and tone.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            hashtags: Vec::new(),
            call_to_action: None,
            content_type: ContentType::default(),
            tone: Tone::default(),
        }
    }

    /// Same post metadata with different body text.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }
}

/// Author context supplied by the caller for brand and personalization checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub brand_voice: Tone,
    #[serde(default)]
    pub target_audience: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_labels_match_wire_names() {
        for tone in Tone::ALL {
            let wire = serde_json::to_value(tone).expect("tone serializes");
            assert_eq!(wire, tone.label());
        }
    }

    #[test]
    fn content_fields_default_when_absent() {
        let content: Content =
            serde_json::from_str(r#"{"text":"Hello"}"#).expect("content deserializes");
        assert_eq!(content, Content::from_text("Hello"));
        assert_eq!(content.content_type, ContentType::Text);
        assert!(content.call_to_action.is_none());
    }
}
