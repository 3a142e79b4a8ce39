//! Dynamic rollout simulator — drives a campaign's headline test from
//! start to graduation on a fixed tick schedule.
//!
//! Each campaign under test owns one spawned tick task. Ticks for one
//! campaign are strictly ordered by its own task loop; ticks for
//! different campaigns interleave freely and stay safe because every
//! mutation rewrites exactly one record through the store.

use std::sync::Arc;
use std::time::Duration;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rand::Rng;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

use brandpulse_core::config::RolloutConfig;
use brandpulse_core::{BrandPulseError, BrandPulseResult};

use crate::selector::select_winner;
use crate::store::{filter_variants, CampaignStore};
use crate::types::{CampaignStatus, Rollout, TestDetails};

/// Characters of the winning headline carried into the campaign name.
const WINNER_LABEL_CHARS: usize = 15;

/// Orchestrates headline tests across campaigns. One live timer per
/// campaign, registered in `active` so it can be cancelled from outside.
pub struct RolloutSimulator {
    store: Arc<CampaignStore>,
    config: RolloutConfig,
    active: Arc<DashMap<Uuid, JoinHandle<()>>>,
}

impl RolloutSimulator {
    pub fn new(store: Arc<CampaignStore>, config: RolloutConfig) -> Self {
        Self {
            store,
            config,
            active: Arc::new(DashMap::new()),
        }
    }

    /// Begin a headline test for the given campaign.
    ///
    /// Synchronously (observable before this returns): the campaign moves
    /// to `Testing` on the testing platform with a fresh [`TestDetails`].
    /// Deferred: a tick task accumulates engagement for `test_ticks`
    /// periods, then picks the winner and graduates the campaign.
    pub fn start_test(&self, campaign_id: Uuid, variants: &[String]) -> BrandPulseResult<()> {
        let variants = filter_variants(variants);
        if variants.is_empty() {
            return Err(BrandPulseError::EmptyVariants);
        }

        let slot = match self.active.entry(campaign_id) {
            Entry::Occupied(_) => return Err(BrandPulseError::TestAlreadyRunning(campaign_id)),
            Entry::Vacant(slot) => slot,
        };

        let testing_platform = self.config.testing_platform;
        let installed = self.store.update(campaign_id, |campaign| {
            campaign.status = CampaignStatus::Testing;
            campaign.platform = testing_platform;
            campaign.rollout = Rollout::Dynamic(TestDetails::new(variants.clone()));
        });
        if !installed {
            return Err(BrandPulseError::CampaignNotFound(campaign_id));
        }

        info!(
            campaign_id = %campaign_id,
            variants = variants.len(),
            platform = %testing_platform,
            "Starting headline test"
        );
        metrics::counter!("rollout.tests_started").increment(1);

        let store = Arc::clone(&self.store);
        let active = Arc::clone(&self.active);
        let config = self.config.clone();
        let handle = tokio::spawn(async move {
            let period = Duration::from_millis(config.tick_interval_ms);
            for tick in 1..=config.test_ticks {
                tokio::time::sleep(period).await;
                apply_tick(&store, campaign_id, tick);
            }
            complete_test(&store, &config, campaign_id);
            active.remove(&campaign_id);
        });
        slot.insert(handle);
        Ok(())
    }

    /// Defensive completion entry point. The tick task invokes completion
    /// exactly once by construction; calling this on an already finished
    /// campaign is a guarded no-op.
    pub fn finish_test(&self, campaign_id: Uuid) {
        complete_test(&self.store, &self.config, campaign_id);
    }

    /// Stop a live test and abandon it: the timer is aborted, the partial
    /// stats stay readable, and the campaign returns to `Draft` with no
    /// winner.
    pub fn cancel_test(&self, campaign_id: Uuid) -> BrandPulseResult<()> {
        let (_, handle) = self
            .active
            .remove(&campaign_id)
            .ok_or(BrandPulseError::TestNotRunning(campaign_id))?;
        handle.abort();

        self.store.update(campaign_id, |campaign| {
            if let Rollout::Dynamic(details) = &mut campaign.rollout {
                if details.is_testing {
                    details.is_testing = false;
                    campaign.status = CampaignStatus::Draft;
                }
            }
        });

        info!(campaign_id = %campaign_id, "Cancelled headline test");
        metrics::counter!("rollout.tests_cancelled").increment(1);
        Ok(())
    }

    /// Whether a timer is currently live for this campaign.
    pub fn is_running(&self, campaign_id: Uuid) -> bool {
        self.active.contains_key(&campaign_id)
    }

    pub fn active_tests(&self) -> usize {
        self.active.len()
    }
}

/// One engagement tick: every variant gains its length-scaled baseline
/// plus uniform noise, floored to a whole score. Finished or abandoned
/// tests are never touched.
fn apply_tick(store: &CampaignStore, campaign_id: Uuid, tick: u32) {
    let mut rng = rand::thread_rng();
    let applied = store.update(campaign_id, |campaign| {
        if let Rollout::Dynamic(details) = &mut campaign.rollout {
            if !details.is_testing {
                return;
            }
            for variant in &details.variants {
                let appeal =
                    (variant.chars().count() as f64 * 0.5 + rng.gen::<f64>() * 10.0).floor() as u64;
                *details
                    .engagement_stats
                    .entry(variant.clone())
                    .or_insert(0) += appeal;
            }
        }
    });
    if applied {
        debug!(campaign_id = %campaign_id, tick, "Applied engagement tick");
        metrics::counter!("rollout.ticks").increment(1);
    }
}

/// Pick the winner over the final stats and graduate the campaign in a
/// single store mutation. No-op unless the campaign still exists and is
/// still testing.
fn complete_test(store: &CampaignStore, config: &RolloutConfig, campaign_id: Uuid) {
    let mut chosen: Option<String> = None;
    store.update(campaign_id, |campaign| {
        if let Rollout::Dynamic(details) = &mut campaign.rollout {
            if !details.is_testing {
                return;
            }
            let winner = match select_winner(&details.variants, &details.engagement_stats) {
                Some(w) => w.to_string(),
                None => return,
            };
            let label: String = winner.chars().take(WINNER_LABEL_CHARS).collect();
            details.winner = Some(winner.clone());
            details.is_testing = false;
            campaign.status = CampaignStatus::Scheduled;
            campaign.platform = config.promotion_platform;
            campaign.name.push_str(&format!(" (Winner: {label})"));
            chosen = Some(winner);
        }
    });

    if let Some(winner) = &chosen {
        info!(
            campaign_id = %campaign_id,
            winner = %winner,
            platform = %config.promotion_platform,
            "Headline test complete, campaign graduated"
        );
        metrics::counter!("rollout.tests_completed").increment(1);
    }
}
