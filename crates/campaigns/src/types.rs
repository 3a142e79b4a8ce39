//! Campaign domain types — records, lifecycle status, and the rollout
//! variants that drive the headline-test state machine.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use brandpulse_core::types::SocialPlatform;

/// A marketing campaign owned by one client profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: Uuid,
    pub client_id: Uuid,
    pub name: String,
    pub platform: SocialPlatform,
    pub status: CampaignStatus,
    /// Target calendar date, set at creation and never touched again.
    pub date: NaiveDate,
    pub rollout: Rollout,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lifecycle status of a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    Scheduled,
    Published,
    Testing,
}

/// How a campaign publishes. `Standard` goes straight to its user-chosen
/// status; `Dynamic` runs a headline test first and carries the test
/// state inline, so a testing campaign without test details cannot be
/// represented.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum Rollout {
    Standard,
    Dynamic(TestDetails),
}

impl Rollout {
    /// Test state for dynamic campaigns, `None` for standard ones.
    pub fn test_details(&self) -> Option<&TestDetails> {
        match self {
            Rollout::Standard => None,
            Rollout::Dynamic(details) => Some(details),
        }
    }
}

/// State of one headline test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestDetails {
    /// Candidate headlines, fixed at test start.
    pub variants: Vec<String>,
    /// Accumulated engagement score per variant. Empty until the first
    /// tick, then holds exactly one entry per variant.
    pub engagement_stats: HashMap<String, u64>,
    pub is_testing: bool,
    pub winner: Option<String>,
}

impl TestDetails {
    pub fn new(variants: Vec<String>) -> Self {
        Self {
            variants,
            engagement_stats: HashMap::new(),
            is_testing: true,
            winner: None,
        }
    }
}

/// Mode selector on the campaign creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RolloutMode {
    Standard,
    Dynamic,
}

impl Default for RolloutMode {
    fn default() -> Self {
        RolloutMode::Standard
    }
}

/// Structured request submitted by the campaign creation form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCampaignRequest {
    pub client_id: Uuid,
    pub name: String,
    pub platform: SocialPlatform,
    pub status: CampaignStatus,
    pub date: NaiveDate,
    #[serde(default)]
    pub rollout_mode: RolloutMode,
    /// Candidate headlines for dynamic campaigns; ignored for standard ones.
    #[serde(default)]
    pub headline_variants: Vec<String>,
}
