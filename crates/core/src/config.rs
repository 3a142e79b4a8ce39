use serde::Deserialize;

use crate::types::SocialPlatform;

/// Root application configuration. Loaded from environment variables
/// with the prefix `BRANDPULSE__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub rollout: RolloutConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

/// Tuning knobs for the dynamic rollout simulator.
#[derive(Debug, Clone, Deserialize)]
pub struct RolloutConfig {
    /// Period between engagement ticks, milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Number of ticks before a winner is chosen.
    #[serde(default = "default_test_ticks")]
    pub test_ticks: u32,
    /// Platform every headline test runs on.
    #[serde(default = "default_testing_platform")]
    pub testing_platform: SocialPlatform,
    /// Platform a campaign graduates to once its winner is chosen.
    #[serde(default = "default_promotion_platform")]
    pub promotion_platform: SocialPlatform,
}

/// Generative backend settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    /// Backend API key. Empty means the backend is unreachable and every
    /// call takes its documented failure path.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_text_model")]
    pub text_model: String,
    #[serde(default = "default_image_model")]
    pub image_model: String,
    #[serde(default = "default_video_model")]
    pub video_model: String,
    #[serde(default = "default_video_poll_interval_ms")]
    pub video_poll_interval_ms: u64,
    #[serde(default = "default_video_poll_attempts")]
    pub video_poll_attempts: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

// Default functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_http_port() -> u16 {
    8080
}
fn default_tick_interval_ms() -> u64 {
    1500
}
fn default_test_ticks() -> u32 {
    4
}
fn default_testing_platform() -> SocialPlatform {
    SocialPlatform::TikTok
}
fn default_promotion_platform() -> SocialPlatform {
    SocialPlatform::Instagram
}
fn default_text_model() -> String {
    "pulse-text-1".to_string()
}
fn default_image_model() -> String {
    "pulse-image-1".to_string()
}
fn default_video_model() -> String {
    "pulse-video-1".to_string()
}
fn default_video_poll_interval_ms() -> u64 {
    5000
}
fn default_video_poll_attempts() -> u32 {
    24
}
fn default_metrics_port() -> u16 {
    9100
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
        }
    }
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            test_ticks: default_test_ticks(),
            testing_platform: default_testing_platform(),
            promotion_platform: default_promotion_platform(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            text_model: default_text_model(),
            image_model: default_image_model(),
            video_model: default_video_model(),
            video_poll_interval_ms: default_video_poll_interval_ms(),
            video_poll_attempts: default_video_poll_attempts(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            port: default_metrics_port(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            rollout: RolloutConfig::default(),
            content: ContentConfig::default(),
            metrics: MetricsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("BRANDPULSE")
                .separator("__")
                .try_parsing(true)
                .list_separator(","),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_tuning() {
        let config = RolloutConfig::default();
        assert_eq!(config.tick_interval_ms, 1500);
        assert_eq!(config.test_ticks, 4);
        assert_eq!(config.testing_platform, SocialPlatform::TikTok);
        assert_eq!(config.promotion_platform, SocialPlatform::Instagram);
    }

    #[test]
    fn test_content_defaults_have_no_key() {
        let config = ContentConfig::default();
        assert!(config.api_key.is_empty());
        assert!(config.video_poll_attempts > 0);
    }
}
