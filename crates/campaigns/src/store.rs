//! In-memory campaign and client stores backed by DashMap.
//!
//! Session-scoped and ephemeral: records live as long as the process.
//! Every mutation goes through `update`, which rewrites exactly one
//! record in place, so interleaved timers for different campaigns can
//! never clobber each other's state.

use chrono::Utc;
use dashmap::DashMap;
use tracing::info;
use uuid::Uuid;

use brandpulse_core::types::{ClientProfile, SocialPlatform};

use crate::types::{
    Campaign, CampaignStatus, CreateCampaignRequest, Rollout, RolloutMode, TestDetails,
};

/// Drops blank and whitespace-only headline candidates.
pub fn filter_variants(variants: &[String]) -> Vec<String> {
    variants
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

// ─── Campaigns ─────────────────────────────────────────────────────────────

/// Thread-safe in-memory store owning the authoritative campaign list.
pub struct CampaignStore {
    campaigns: DashMap<Uuid, Campaign>,
}

impl CampaignStore {
    pub fn new() -> Self {
        Self {
            campaigns: DashMap::new(),
        }
    }

    /// Insert a fully built record. No uniqueness validation beyond the
    /// caller-generated id.
    pub fn create(&self, campaign: Campaign) {
        self.campaigns.insert(campaign.id, campaign);
    }

    /// Build and insert a campaign from a creation-form request.
    pub fn create_campaign(&self, req: CreateCampaignRequest) -> Campaign {
        let now = Utc::now();
        let rollout = match req.rollout_mode {
            RolloutMode::Standard => Rollout::Standard,
            RolloutMode::Dynamic => {
                Rollout::Dynamic(TestDetails::new(filter_variants(&req.headline_variants)))
            }
        };
        let campaign = Campaign {
            id: Uuid::new_v4(),
            client_id: req.client_id,
            name: req.name,
            platform: req.platform,
            status: req.status,
            date: req.date,
            rollout,
            created_at: now,
            updated_at: now,
        };
        info!(campaign_id = %campaign.id, name = %campaign.name, "Creating campaign");
        self.campaigns.insert(campaign.id, campaign.clone());
        campaign
    }

    /// Snapshot of the campaign with the given id, if it exists.
    pub fn get(&self, id: Uuid) -> Option<Campaign> {
        self.campaigns.get(&id).map(|r| r.value().clone())
    }

    /// Apply a mutation to exactly the campaign matching `id`, deriving
    /// the next state from the current one under the record's entry lock.
    /// Returns `false` (no-op) when the id is absent.
    pub fn update<F>(&self, id: Uuid, mutation: F) -> bool
    where
        F: FnOnce(&mut Campaign),
    {
        match self.campaigns.get_mut(&id) {
            Some(mut entry) => {
                let campaign = entry.value_mut();
                mutation(campaign);
                campaign.updated_at = Utc::now();
                true
            }
            None => false,
        }
    }

    /// Campaigns owned by the given client, most recently created first.
    pub fn list_by_client(&self, client_id: Uuid) -> Vec<Campaign> {
        let mut campaigns: Vec<Campaign> = self
            .campaigns
            .iter()
            .filter(|r| r.value().client_id == client_id)
            .map(|r| r.value().clone())
            .collect();
        campaigns.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        campaigns
    }

    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }

    /// Seeds the demo campaigns shipped with the dashboard, one per
    /// seeded client.
    pub fn seed_demo_campaigns(&self, clients: &[ClientProfile]) {
        let seeds = [
            ("Q4 Product Launch", CampaignStatus::Scheduled, SocialPlatform::LinkedIn, "2026-11-15"),
            ("Eco-Tips Series", CampaignStatus::Published, SocialPlatform::Instagram, "2026-10-20"),
            ("Black Friday Teaser", CampaignStatus::Draft, SocialPlatform::TikTok, "2026-11-20"),
        ];
        for (client, (name, status, platform, date)) in clients.iter().zip(seeds) {
            let now = Utc::now();
            self.create(Campaign {
                id: Uuid::new_v4(),
                client_id: client.id,
                name: name.to_string(),
                platform,
                status,
                date: date.parse().expect("static seed date"),
                rollout: Rollout::Standard,
                created_at: now,
                updated_at: now,
            });
        }
        info!(count = self.len(), "Seeded demo campaigns");
    }
}

impl Default for CampaignStore {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Clients ───────────────────────────────────────────────────────────────

/// Thread-safe in-memory store for client brand profiles.
pub struct ClientStore {
    clients: DashMap<Uuid, ClientProfile>,
}

impl ClientStore {
    pub fn new() -> Self {
        Self {
            clients: DashMap::new(),
        }
    }

    pub fn create(&self, name: String, industry: String, voice: String, avatar_url: String) -> ClientProfile {
        let profile = ClientProfile {
            id: Uuid::new_v4(),
            name,
            industry,
            voice,
            avatar_url,
        };
        info!(client_id = %profile.id, name = %profile.name, "Creating client profile");
        self.clients.insert(profile.id, profile.clone());
        profile
    }

    pub fn get(&self, id: Uuid) -> Option<ClientProfile> {
        self.clients.get(&id).map(|r| r.value().clone())
    }

    /// All client profiles, name-ordered.
    pub fn list(&self) -> Vec<ClientProfile> {
        let mut clients: Vec<ClientProfile> = self.clients.iter().map(|r| r.value().clone()).collect();
        clients.sort_by(|a, b| a.name.cmp(&b.name));
        clients
    }

    /// Seeds the demo brands shipped with the dashboard and returns them.
    pub fn seed_demo_clients(&self) -> Vec<ClientProfile> {
        let profiles = vec![
            self.create(
                "TechNova Solutions".to_string(),
                "SaaS".to_string(),
                "Professional, Visionary, Authoritative".to_string(),
                "https://picsum.photos/id/1/200/200".to_string(),
            ),
            self.create(
                "GreenLeaf Organics".to_string(),
                "Wellness".to_string(),
                "Warm, Eco-conscious, Educational".to_string(),
                "https://picsum.photos/id/2/200/200".to_string(),
            ),
            self.create(
                "UrbanStyle Gear".to_string(),
                "Fashion".to_string(),
                "Edgy, Hype, Gen-Z Friendly".to_string(),
                "https://picsum.photos/id/3/200/200".to_string(),
            ),
        ];
        info!(count = profiles.len(), "Seeded demo clients");
        profiles
    }
}

impl Default for ClientStore {
    fn default() -> Self {
        Self::new()
    }
}
