use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::platform::{ContentType, Platform};

/// One piece of marketing content, as produced by the generation service.
///
/// Exactly one payload is expected to be populated and it must match
/// `content_type`. Items arriving from outside the process are not trusted
/// to honour that; [`ContentItem::payload`] checks it. Adaptation never
/// mutates an item; every step produces a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub brand_id: String,
    pub content_type: ContentType,
    /// Platform this item has been adapted for, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<TextContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_content: Option<ImageContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_content: Option<VideoContent>,
    /// Free-form notes appended by adaptation steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Text post body plus explicit tags and mentions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub text: String,
    /// Hashtags without the leading `#`.
    #[serde(default)]
    pub hashtags: Vec<String>,
    /// Mentions without the leading `@`.
    #[serde(default)]
    pub mentions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageContent {
    /// Prompt the image was (or will be) generated from.
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoContent {
    pub title: String,
    pub script: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Prompt for a thumbnail that has not been produced yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

/// Borrowed view of the payload selected by an item's `content_type`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payload<'a> {
    Text(&'a TextContent),
    Image(&'a ImageContent),
    Video(&'a VideoContent),
}

impl ContentItem {
    /// Build a text item with a fresh id.
    #[must_use]
    pub fn text(brand_id: impl Into<String>, text: TextContent) -> Self {
        Self::empty(brand_id.into(), ContentType::Text).with_text(text)
    }

    /// Build an image item with a fresh id.
    #[must_use]
    pub fn image(brand_id: impl Into<String>, image: ImageContent) -> Self {
        let mut item = Self::empty(brand_id.into(), ContentType::Image);
        item.image_content = Some(image);
        item
    }

    /// Build a video item with a fresh id.
    #[must_use]
    pub fn video(brand_id: impl Into<String>, video: VideoContent) -> Self {
        let mut item = Self::empty(brand_id.into(), ContentType::Video);
        item.video_content = Some(video);
        item
    }

    fn empty(brand_id: String, content_type: ContentType) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            brand_id,
            content_type,
            platform: None,
            text_content: None,
            image_content: None,
            video_content: None,
            notes: None,
            created_at: Some(Utc::now()),
        }
    }

    fn with_text(mut self, text: TextContent) -> Self {
        self.text_content = Some(text);
        self
    }

    /// Returns the payload matching `content_type`, or `None` when the
    /// declared payload is missing.
    #[must_use]
    pub fn payload(&self) -> Option<Payload<'_>> {
        match self.content_type {
            ContentType::Text => self.text_content.as_ref().map(Payload::Text),
            ContentType::Image => self.image_content.as_ref().map(Payload::Image),
            ContentType::Video => self.video_content.as_ref().map(Payload::Video),
        }
    }

    /// Copy of this item re-typed to `content_type` with every payload
    /// cleared, ready to receive a converted payload.
    #[must_use]
    pub fn retyped(&self, content_type: ContentType) -> Self {
        Self {
            content_type,
            text_content: None,
            image_content: None,
            video_content: None,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_populate_matching_payload() {
        let item = ContentItem::text(
            "acme",
            TextContent {
                text: "hello".to_string(),
                ..TextContent::default()
            },
        );
        assert_eq!(item.content_type, ContentType::Text);
        assert!(matches!(item.payload(), Some(Payload::Text(t)) if t.text == "hello"));
        assert!(!item.id.is_empty());
    }

    #[test]
    fn payload_is_none_when_declared_type_is_missing() {
        let mut item = ContentItem::image("acme", ImageContent::default());
        item.content_type = ContentType::Video;
        assert!(item.payload().is_none());
    }

    #[test]
    fn retyped_clears_all_payloads_and_keeps_identity() {
        let item = ContentItem::text("acme", TextContent::default());
        let converted = item.retyped(ContentType::Image);
        assert_eq!(converted.id, item.id);
        assert_eq!(converted.brand_id, "acme");
        assert_eq!(converted.content_type, ContentType::Image);
        assert!(converted.text_content.is_none());
    }

    #[test]
    fn deserializes_generation_service_shape() {
        let json = r#"{
            "id": "c-1",
            "brand_id": "acme",
            "content_type": "video",
            "video_content": {"title": "Launch", "script": "Hi", "duration_seconds": 45}
        }"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        let Some(Payload::Video(video)) = item.payload() else {
            panic!("expected video payload");
        };
        assert_eq!(video.duration_seconds, Some(45));
        assert!(video.thumbnail_prompt.is_none());
    }
}
