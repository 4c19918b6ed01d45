use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only view of the posted project, as far as ranking is concerned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectContext {
    #[serde(default)]
    pub required_skills: Vec<String>,
}

/// One freelancer proposal against a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidCandidate {
    pub id: u64,
    pub freelancer_id: u64,
    pub amount: f64,
    #[serde(default)]
    pub proposal: String,
    #[serde(default)]
    pub proposed_timeline_days: Option<u32>,
    pub created_at: DateTime<Utc>,
}

/// Reputation snapshot of one bidder. Rate fields are optional: a fresh
/// account has none of them, and the extractor substitutes zeros.
/// `on_time_rate` is a 0-100 percentage, matching how the review bookkeeping
/// stores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidderReputation {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub avg_rating: Option<f64>,
    #[serde(default)]
    pub completion_rate: Option<f64>,
    #[serde(default)]
    pub on_time_rate: Option<f64>,
    #[serde(default)]
    pub portfolio_score: Option<f64>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub on_time_count: u32,
    #[serde(default)]
    pub delayed_count: u32,
    #[serde(default)]
    pub projects_completed: u32,
}

impl BidderReputation {
    /// On-time percentage recomputed from the delivery counters, rounded to
    /// one decimal. `None` when the bidder has no finished deliveries.
    pub fn derived_on_time_rate(&self) -> Option<f64> {
        let total = self.on_time_count + self.delayed_count;
        if total == 0 {
            return None;
        }
        let pct = self.on_time_count as f64 / total as f64 * 100.0;
        Some((pct * 10.0).round() / 10.0)
    }
}
