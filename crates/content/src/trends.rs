//! In-memory trend catalog — seeded demo trends plus anything surfaced
//! by trend discovery.

use dashmap::DashMap;
use tracing::info;

use brandpulse_core::types::{Sentiment, Trend};

/// Thread-safe catalog of trends keyed by trend id.
pub struct TrendCatalog {
    trends: DashMap<String, Trend>,
}

impl TrendCatalog {
    pub fn new() -> Self {
        Self {
            trends: DashMap::new(),
        }
    }

    pub fn get(&self, id: &str) -> Option<Trend> {
        self.trends.get(id).map(|r| r.value().clone())
    }

    /// Insert or replace a trend, e.g. one returned by discovery.
    pub fn upsert(&self, trend: Trend) {
        self.trends.insert(trend.id.clone(), trend);
    }

    /// All trends, highest search volume first.
    pub fn list(&self) -> Vec<Trend> {
        let mut trends: Vec<Trend> = self.trends.iter().map(|r| r.value().clone()).collect();
        trends.sort_by(|a, b| b.volume.cmp(&a.volume));
        trends
    }

    pub fn len(&self) -> usize {
        self.trends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trends.is_empty()
    }

    /// Seeds the demo trends shipped with the dashboard.
    pub fn seed_demo_trends(&self) {
        let seeds = [
            Trend {
                id: "t1".to_string(),
                keyword: "Sustainable AI".to_string(),
                category: "Technology".to_string(),
                volume: 85_000,
                growth: 120,
                sentiment: Sentiment::Positive,
                description: "Discussions around the energy consumption of large language \
                              models and green computing solutions."
                    .to_string(),
            },
            Trend {
                id: "t2".to_string(),
                keyword: "Micro-Learning".to_string(),
                category: "Education".to_string(),
                volume: 45_000,
                growth: 85,
                sentiment: Sentiment::Neutral,
                description: "Shift towards bite-sized educational content on short-form \
                              video platforms."
                    .to_string(),
            },
            Trend {
                id: "t3".to_string(),
                keyword: "Retro Tech Aesthetics".to_string(),
                category: "Design".to_string(),
                volume: 62_000,
                growth: 45,
                sentiment: Sentiment::Positive,
                description: "Visual trends embracing Y2K and 90s technology visuals in \
                              modern branding."
                    .to_string(),
            },
            Trend {
                id: "t4".to_string(),
                keyword: "Silent Walking".to_string(),
                category: "Wellness".to_string(),
                volume: 30_000,
                growth: 200,
                sentiment: Sentiment::Positive,
                description: "A mindfulness practice involving walking without music or \
                              podcasts."
                    .to_string(),
            },
        ];
        for trend in seeds {
            self.upsert(trend);
        }
        info!(count = self.len(), "Seeded demo trends");
    }
}

impl Default for TrendCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_orders_by_volume() {
        let catalog = TrendCatalog::new();
        catalog.seed_demo_trends();

        let listed = catalog.list();
        assert_eq!(listed.len(), 4);
        assert_eq!(listed[0].keyword, "Sustainable AI");
        assert!(listed.windows(2).all(|w| w[0].volume >= w[1].volume));
    }

    #[test]
    fn test_upsert_replaces_existing() {
        let catalog = TrendCatalog::new();
        catalog.seed_demo_trends();

        let mut updated = catalog.get("t4").unwrap();
        updated.volume = 95_000;
        catalog.upsert(updated);

        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get("t4").unwrap().volume, 95_000);
        assert_eq!(catalog.list()[0].keyword, "Silent Walking");
    }
}
