//! Request/response DTOs for the REST surface.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use brandpulse_core::types::{AspectRatio, GeneratedImage, ImageSize, SocialPlatform};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateClientRequest {
    pub name: String,
    pub industry: String,
    pub voice: String,
    #[serde(default = "default_avatar_url")]
    pub avatar_url: String,
}

fn default_avatar_url() -> String {
    "https://picsum.photos/200/200".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateTextRequest {
    pub client_id: Uuid,
    pub topic: String,
    /// Platforms to write for; empty means all of them.
    #[serde(default)]
    pub platforms: Vec<SocialPlatform>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub image_prompt_seed: Option<String>,
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateImageRequest {
    pub prompt: String,
    #[serde(default = "default_image_size")]
    pub size: ImageSize,
}

fn default_image_size() -> ImageSize {
    ImageSize::OneK
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateVideoRequest {
    pub image: GeneratedImage,
    pub prompt: String,
    pub aspect_ratio: AspectRatio,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeTrendRequest {
    pub trend_id: String,
    pub client_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeTrendResponse {
    pub analysis: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverTrendsRequest {
    pub client_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub active_tests: usize,
}
