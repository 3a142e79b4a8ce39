//! Domain types shared across BrandPulse crates — platforms, client brand
//! profiles, trends, and generated content payloads.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The closed set of social platforms a campaign can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialPlatform {
    LinkedIn,
    Twitter,
    Instagram,
    TikTok,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 4] = [
        SocialPlatform::LinkedIn,
        SocialPlatform::Twitter,
        SocialPlatform::Instagram,
        SocialPlatform::TikTok,
    ];
}

impl std::fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::TikTok => "TikTok",
        };
        write!(f, "{label}")
    }
}

/// General audience sentiment attached to a trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// An emerging topic surfaced for a client's industry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trend {
    pub id: String,
    pub keyword: String,
    pub category: String,
    /// Estimated monthly search volume.
    pub volume: u64,
    /// Estimated growth, percent.
    pub growth: i64,
    pub sentiment: Sentiment,
    pub description: String,
}

/// A client brand profile managed by the agency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientProfile {
    pub id: Uuid,
    pub name: String,
    pub industry: String,
    /// Free-form brand voice descriptors, e.g. "Warm, Eco-conscious".
    pub voice: String,
    pub avatar_url: String,
}

/// A single generated social post for one platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub platform: SocialPlatform,
    pub content: String,
    pub hashtags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_image_prompt: Option<String>,
}

/// Requested output resolution for image generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    #[serde(rename = "1K")]
    OneK,
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    FourK,
}

/// Aspect ratio for video generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "16:9")]
    Wide,
    #[serde(rename = "9:16")]
    Tall,
}

/// A generated marketing image, base64-encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub data: String,
}

/// A generated marketing video, referenced by URI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedVideo {
    pub uri: String,
    pub mime_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_display_labels() {
        assert_eq!(SocialPlatform::LinkedIn.to_string(), "LinkedIn");
        assert_eq!(SocialPlatform::TikTok.to_string(), "TikTok");
    }

    #[test]
    fn test_image_size_wire_format() {
        let json = serde_json::to_string(&ImageSize::OneK).unwrap();
        assert_eq!(json, "\"1K\"");
        let ratio: AspectRatio = serde_json::from_str("\"9:16\"").unwrap();
        assert_eq!(ratio, AspectRatio::Tall);
    }
}
