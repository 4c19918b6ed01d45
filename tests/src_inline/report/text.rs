use super::*;
use chrono::{TimeZone, Utc};

use crate::model::ranked::{BidderSummary, RankedBid};
use crate::model::weights::WeightVector;

fn ranked_bid(id: u64, username: &str, score: f64) -> RankedBid {
    RankedBid {
        id,
        amount: 250.0,
        proposal: "proposal".to_string(),
        proposed_timeline_days: Some(14),
        created_at: Utc.with_ymd_and_hms(2026, 3, 10, 8, 0, 0).unwrap(),
        freelancer: BidderSummary {
            id,
            username: username.to_string(),
            avg_rating: Some(4.5),
            on_time_count: 7,
            delayed_count: 3,
            projects_completed: 9,
        },
        score,
    }
}

#[test]
fn test_rows_appear_in_rank_order() {
    let result = RankingResult {
        weights_applied: WeightVector::base().to_map(),
        ranked_bids: vec![ranked_bid(2, "alpha", 8.1), ranked_bid(5, "beta", 3.4)],
    };
    let rendered = render_text(&result);
    assert!(rendered.starts_with("ranked bids: 2"));
    assert!(rendered.contains("weights:"));
    let alpha = rendered.find("alpha").unwrap();
    let beta = rendered.find("beta").unwrap();
    assert!(alpha < beta);
    assert!(rendered.contains("8.1"));
}

#[test]
fn test_empty_result_renders_header_only() {
    let rendered = render_text(&RankingResult::default());
    assert!(rendered.starts_with("ranked bids: 0"));
    assert!(!rendered.contains("weights:"));
}

#[test]
fn test_missing_timeline_renders_dash() {
    let mut bid = ranked_bid(1, "gamma", 5.0);
    bid.proposed_timeline_days = None;
    let result = RankingResult {
        weights_applied: WeightVector::base().to_map(),
        ranked_bids: vec![bid],
    };
    let line = render_text(&result)
        .lines()
        .find(|l| l.contains("gamma"))
        .unwrap()
        .to_string();
    assert!(line.contains(" - "));
}
