//! Generative backend client.
//!
//! Each operation owns its documented failure convention: text generation
//! fails open with a fallback record, trend analysis degrades to an error
//! string, trend discovery degrades to an empty list, and image/video
//! generation surface their errors to the caller.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::{debug, info, warn};
use uuid::Uuid;

use brandpulse_core::config::ContentConfig;
use brandpulse_core::types::{
    AspectRatio, GeneratedContent, GeneratedImage, GeneratedVideo, ImageSize, Sentiment,
    SocialPlatform, Trend,
};
use brandpulse_core::{BrandPulseError, BrandPulseResult};

/// Client for the generative backend.
pub struct GenerativeBackend {
    config: ContentConfig,
}

impl GenerativeBackend {
    pub fn new(config: ContentConfig) -> Self {
        info!(
            text_model = %config.text_model,
            image_model = %config.image_model,
            "Generative backend initialized"
        );
        Self { config }
    }

    fn ensure_key(&self) -> BrandPulseResult<()> {
        if self.config.api_key.is_empty() {
            return Err(BrandPulseError::Backend(
                "no API key configured".to_string(),
            ));
        }
        Ok(())
    }

    // ─── Social copy ───────────────────────────────────────────────────────

    /// Generate one post per requested platform. Fails open: a backend
    /// error yields a single fallback record carrying the error message.
    pub async fn generate_text(
        &self,
        topic: &str,
        voice: &str,
        platforms: &[SocialPlatform],
        language: &str,
        image_prompt_seed: Option<&str>,
    ) -> Vec<GeneratedContent> {
        match self
            .request_text(topic, voice, platforms, language, image_prompt_seed)
            .await
        {
            Ok(posts) => {
                metrics::counter!("content.posts_generated").increment(posts.len() as u64);
                posts
            }
            Err(e) => {
                warn!(error = %e, topic, "Text generation failed, returning fallback record");
                metrics::counter!("content.text_fallbacks").increment(1);
                vec![GeneratedContent {
                    platform: SocialPlatform::LinkedIn,
                    content: format!("Failed to generate content: {e}"),
                    hashtags: Vec::new(),
                    suggested_image_prompt: None,
                }]
            }
        }
    }

    async fn request_text(
        &self,
        topic: &str,
        voice: &str,
        platforms: &[SocialPlatform],
        language: &str,
        image_prompt_seed: Option<&str>,
    ) -> BrandPulseResult<Vec<GeneratedContent>> {
        self.ensure_key()?;

        // Backend request payload (stub — in production, HTTP POST to the
        // generation endpoint).
        let _payload = serde_json::json!({
            "model": self.config.text_model,
            "topic": topic,
            "voice": voice,
            "language": language,
            "platforms": platforms,
            "image_seed": image_prompt_seed,
        });

        let hashtags = derive_hashtags(topic);
        let posts = platforms
            .iter()
            .map(|platform| {
                let content = match platform {
                    SocialPlatform::LinkedIn => format!(
                        "{topic}: what it means for your team, and the three moves \
                         we recommend this quarter. Voice: {voice}."
                    ),
                    SocialPlatform::Twitter => {
                        format!("{topic} is moving fast. Here's the thread. 🧵")
                    }
                    SocialPlatform::Instagram | SocialPlatform::TikTok => format!(
                        "Hook: open on {topic}, cut to the product, end on the offer. \
                         Keep it {voice}."
                    ),
                };
                let suggested_image_prompt = match platform {
                    SocialPlatform::Instagram | SocialPlatform::TikTok => Some(format!(
                        "{} scene about {topic}, bold colors, no text overlay",
                        image_prompt_seed.unwrap_or("studio product")
                    )),
                    _ => None,
                };
                GeneratedContent {
                    platform: *platform,
                    content,
                    hashtags: hashtags.clone(),
                    suggested_image_prompt,
                }
            })
            .collect();

        debug!(topic, platforms = platforms.len(), "Generated social copy");
        Ok(posts)
    }

    // ─── Images & video ────────────────────────────────────────────────────

    /// Generate a marketing image. Raises on backend failure; the caller
    /// decides how to surface it.
    pub async fn generate_image(
        &self,
        prompt: &str,
        size: ImageSize,
    ) -> BrandPulseResult<Option<GeneratedImage>> {
        self.ensure_key()?;

        let _payload = serde_json::json!({
            "model": self.config.image_model,
            "prompt": prompt,
            "size": size,
        });

        // Stub render — in production the backend streams the encoded image.
        let pixels = format!("{}:{:?}:{}", self.config.image_model, size, prompt);
        metrics::counter!("content.images_generated").increment(1);
        Ok(Some(GeneratedImage {
            mime_type: "image/png".to_string(),
            data: BASE64.encode(pixels.as_bytes()),
        }))
    }

    /// Generate a short marketing video from a source image. Raises on
    /// backend failure. The render is asynchronous on the backend side, so
    /// this polls the operation until it is ready, bounded by
    /// `video_poll_attempts`.
    pub async fn generate_video(
        &self,
        source_image: &GeneratedImage,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> BrandPulseResult<Option<GeneratedVideo>> {
        self.ensure_key()?;

        // Accept both raw base64 and data-URL payloads.
        let image_data = source_image
            .data
            .rsplit(',')
            .next()
            .unwrap_or(&source_image.data);

        let operation_id = Uuid::new_v4();
        let _payload = serde_json::json!({
            "model": self.config.video_model,
            "prompt": prompt,
            "aspect_ratio": aspect_ratio,
            "image": { "mime_type": source_image.mime_type, "data": image_data },
        });

        let mut ready = false;
        for attempt in 1..=self.config.video_poll_attempts {
            tokio::time::sleep(Duration::from_millis(self.config.video_poll_interval_ms)).await;
            if self.poll_video_operation(operation_id, attempt) {
                ready = true;
                break;
            }
        }
        if !ready {
            return Err(BrandPulseError::Backend(format!(
                "video operation {operation_id} not ready after {} polls",
                self.config.video_poll_attempts
            )));
        }

        metrics::counter!("content.videos_generated").increment(1);
        Ok(Some(GeneratedVideo {
            uri: format!("https://cdn.brandpulse.dev/videos/{operation_id}.mp4"),
            mime_type: "video/mp4".to_string(),
        }))
    }

    /// Operation status check (stub — in production, GET the long-running
    /// operation until the render farm reports done).
    fn poll_video_operation(&self, _operation_id: Uuid, attempt: u32) -> bool {
        attempt >= 1
    }

    // ─── Trends ────────────────────────────────────────────────────────────

    /// Strategy note for one trend. Degrades to an error string, never
    /// raises.
    pub async fn analyze_trend(&self, trend: &Trend, voice: &str, industry: &str) -> String {
        if let Err(e) = self.ensure_key() {
            warn!(error = %e, keyword = %trend.keyword, "Trend analysis failed");
            return "Error generating analysis. Please check your API key.".to_string();
        }

        let _payload = serde_json::json!({
            "model": self.config.text_model,
            "keyword": trend.keyword,
            "description": trend.description,
            "industry": industry,
            "voice": voice,
        });

        metrics::counter!("content.trends_analyzed").increment(1);
        format!(
            "\"{}\" is gaining ground with {} audiences, so a {} brand can own the \
             conversation early. Lead with a {} take that ties {} back to a concrete \
             customer outcome. Publish one anchor post this week and repurpose it into \
             short-form clips while the topic still climbs.",
            trend.keyword, industry, industry, voice, trend.keyword
        )
    }

    /// Discover emerging trends for an industry. Degrades to an empty
    /// list, never raises.
    pub async fn find_trends(&self, industry: &str, voice: &str) -> Vec<Trend> {
        if let Err(e) = self.ensure_key() {
            warn!(error = %e, industry, "Trend discovery failed, returning empty list");
            return Vec::new();
        }

        let _payload = serde_json::json!({
            "model": self.config.text_model,
            "industry": industry,
            "voice": voice,
            "count": 5,
        });

        let seeds = [
            ("Zero-click search", "Marketing", 74_000, 95, Sentiment::Neutral),
            ("Founder-led video", "Social", 51_000, 130, Sentiment::Positive),
            ("Community commerce", "Commerce", 66_000, 70, Sentiment::Positive),
            ("Quiet luxury", "Design", 48_000, 40, Sentiment::Neutral),
            ("AI disclosure labels", "Policy", 39_000, 160, Sentiment::Negative),
        ];
        let trends = seeds
            .iter()
            .enumerate()
            .map(|(i, (keyword, category, volume, growth, sentiment))| Trend {
                id: format!("t_gen_{}", i + 1),
                keyword: keyword.to_string(),
                category: category.to_string(),
                volume: *volume,
                growth: *growth,
                sentiment: *sentiment,
                description: format!("{keyword} is trending across the {industry} industry."),
            })
            .collect();

        metrics::counter!("content.trend_discoveries").increment(1);
        trends
    }
}

fn derive_hashtags(topic: &str) -> Vec<String> {
    topic
        .split_whitespace()
        .filter(|word| word.len() > 3)
        .take(3)
        .map(|word| {
            let cleaned: String = word.chars().filter(|c| c.is_alphanumeric()).collect();
            format!("#{cleaned}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_backend() -> GenerativeBackend {
        GenerativeBackend::new(ContentConfig::default())
    }

    fn live_backend() -> GenerativeBackend {
        GenerativeBackend::new(ContentConfig {
            api_key: "test-key".to_string(),
            video_poll_interval_ms: 1,
            video_poll_attempts: 3,
            ..ContentConfig::default()
        })
    }

    fn sample_trend() -> Trend {
        Trend {
            id: "t1".to_string(),
            keyword: "Sustainable AI".to_string(),
            category: "Technology".to_string(),
            volume: 85_000,
            growth: 120,
            sentiment: Sentiment::Positive,
            description: "Green computing discussions".to_string(),
        }
    }

    #[tokio::test]
    async fn test_text_generation_covers_requested_platforms() {
        let backend = live_backend();
        let posts = backend
            .generate_text(
                "Sustainable AI",
                "Warm, Educational",
                &[SocialPlatform::LinkedIn, SocialPlatform::TikTok],
                "en",
                None,
            )
            .await;

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].platform, SocialPlatform::LinkedIn);
        assert!(posts[0].suggested_image_prompt.is_none());
        assert_eq!(posts[1].platform, SocialPlatform::TikTok);
        assert!(posts[1].suggested_image_prompt.is_some());
        assert!(posts.iter().all(|p| !p.hashtags.is_empty()));
    }

    #[tokio::test]
    async fn test_text_generation_fails_open() {
        let backend = offline_backend();
        let posts = backend
            .generate_text("Topic", "Voice", &[SocialPlatform::Twitter], "en", None)
            .await;

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].platform, SocialPlatform::LinkedIn);
        assert!(posts[0].content.contains("Failed to generate content"));
        assert!(posts[0].hashtags.is_empty());
    }

    #[tokio::test]
    async fn test_image_generation_raises_without_key() {
        let backend = offline_backend();
        let result = backend.generate_image("studio shot", ImageSize::OneK).await;
        assert!(matches!(result, Err(BrandPulseError::Backend(_))));

        let image = live_backend()
            .generate_image("studio shot", ImageSize::OneK)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert!(!image.data.is_empty());
    }

    #[tokio::test]
    async fn test_video_generation_polls_until_ready() {
        let backend = live_backend();
        let image = backend
            .generate_image("poster frame", ImageSize::OneK)
            .await
            .unwrap()
            .unwrap();

        let video = backend
            .generate_video(&image, "pan across the product", AspectRatio::Tall)
            .await
            .unwrap()
            .unwrap();
        assert!(video.uri.ends_with(".mp4"));
        assert_eq!(video.mime_type, "video/mp4");

        let offline = offline_backend();
        let result = offline
            .generate_video(&image, "pan across the product", AspectRatio::Tall)
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_trend_analysis_degrades_to_error_string() {
        let trend = sample_trend();

        let analysis = live_backend()
            .analyze_trend(&trend, "Warm", "Wellness")
            .await;
        assert!(analysis.contains("Sustainable AI"));

        let degraded = offline_backend()
            .analyze_trend(&trend, "Warm", "Wellness")
            .await;
        assert!(degraded.starts_with("Error generating analysis"));
    }

    #[tokio::test]
    async fn test_trend_discovery_degrades_to_empty_list() {
        let found = live_backend().find_trends("Fashion", "Edgy").await;
        assert_eq!(found.len(), 5);
        assert!(found.iter().all(|t| t.id.starts_with("t_gen_")));

        let degraded = offline_backend().find_trends("Fashion", "Edgy").await;
        assert!(degraded.is_empty());
    }

    #[test]
    fn test_hashtags_skip_short_words() {
        let tags = derive_hashtags("The rise of micro-learning");
        assert!(tags.contains(&"#rise".to_string()));
        assert!(tags.iter().all(|t| t.len() > 1));
    }
}
