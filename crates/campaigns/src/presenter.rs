//! Maps a campaign snapshot to its display attributes — badge color,
//! icon, and an optional caption for campaigns under test.

use serde::{Deserialize, Serialize};

use crate::types::{Campaign, CampaignStatus, Rollout};

/// Icon kind rendered inside a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusIcon {
    CheckCircle,
    Clock,
    CircleDashed,
    Flask,
}

/// Visual encoding of one campaign's current status.
#[derive(Debug, Clone, Serialize)]
pub struct StatusBadge {
    pub color: &'static str,
    pub icon: StatusIcon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Pure mapping from a campaign snapshot to its badge. Reads only; the
/// snapshot may be stale with respect to a running test.
pub fn badge(campaign: &Campaign) -> StatusBadge {
    match campaign.status {
        CampaignStatus::Published => StatusBadge {
            color: "text-green-600 bg-green-50",
            icon: StatusIcon::CheckCircle,
            caption: None,
        },
        CampaignStatus::Scheduled => StatusBadge {
            color: "text-blue-600 bg-blue-50",
            icon: StatusIcon::Clock,
            caption: None,
        },
        CampaignStatus::Draft => StatusBadge {
            color: "text-slate-500 bg-slate-100",
            icon: StatusIcon::CircleDashed,
            caption: None,
        },
        CampaignStatus::Testing => {
            let caption = match &campaign.rollout {
                Rollout::Dynamic(details) if details.is_testing => Some(format!(
                    "Testing {} variants on {}",
                    details.variants.len(),
                    campaign.platform
                )),
                Rollout::Dynamic(_) => Some("Winner selected".to_string()),
                Rollout::Standard => None,
            };
            StatusBadge {
                color: "text-purple-600 bg-purple-50",
                icon: StatusIcon::Flask,
                caption,
            }
        }
    }
}
