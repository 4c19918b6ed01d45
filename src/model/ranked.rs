use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Public reputation summary attached to each ranked bid.
#[derive(Debug, Clone, Serialize)]
pub struct BidderSummary {
    pub id: u64,
    pub username: String,
    pub avg_rating: Option<f64>,
    pub on_time_count: u32,
    pub delayed_count: u32,
    pub projects_completed: u32,
}

/// One scored bid in the response, carrying the bid's public fields and the
/// score rounded to one decimal (range 0-10).
#[derive(Debug, Clone, Serialize)]
pub struct RankedBid {
    pub id: u64,
    pub amount: f64,
    pub proposal: String,
    pub proposed_timeline_days: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub freelancer: BidderSummary,
    pub score: f64,
}

/// Full ranking response: the effective weight vector (empty map when
/// nothing was ranked) and the bids sorted by score descending.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RankingResult {
    pub weights_applied: BTreeMap<String, f64>,
    pub ranked_bids: Vec<RankedBid>,
}
