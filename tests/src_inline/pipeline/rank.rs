use super::*;
use chrono::{TimeZone, Utc};

use crate::directory::InMemoryDirectory;
use crate::model::entities::BidderReputation;

fn skills(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn project(required: &[&str]) -> ProjectContext {
    ProjectContext {
        required_skills: skills(required),
    }
}

fn bid(id: u64, freelancer_id: u64, amount: f64, days: u32) -> BidCandidate {
    BidCandidate {
        id,
        freelancer_id,
        amount,
        proposal: format!("proposal {id}"),
        proposed_timeline_days: Some(days),
        created_at: Utc.with_ymd_and_hms(2026, 3, 10, 8, 0, 0).unwrap(),
    }
}

fn bidder(id: u64, rating: f64, on_time_rate: f64, bidder_skills: &[&str]) -> BidderReputation {
    BidderReputation {
        id,
        username: format!("user{id}"),
        avg_rating: Some(rating),
        completion_rate: Some(0.8),
        on_time_rate: Some(on_time_rate),
        portfolio_score: Some(0.5),
        skills: skills(bidder_skills),
        on_time_count: 5,
        delayed_count: 1,
        projects_completed: 6,
    }
}

#[test]
fn test_cheaper_better_rated_matching_bid_wins_balanced() {
    let project = project(&["python"]);
    let bids = vec![bid(1, 10, 100.0, 10), bid(2, 20, 500.0, 5)];
    let directory: InMemoryDirectory = vec![
        bidder(10, 5.0, 100.0, &["python"]),
        bidder(20, 3.0, 50.0, &["java"]),
    ]
    .into_iter()
    .collect();

    let result = rank(&project, &bids, &directory, Priority::Balanced);

    assert_eq!(result.ranked_bids.len(), 2);
    assert_eq!(result.ranked_bids[0].id, 1);
    assert_eq!(result.ranked_bids[1].id, 2);
    // Bid 1 takes price, rating, on-time, and skill match outright; bid 2
    // only wins the timeline.
    assert_eq!(result.ranked_bids[0].score, 7.3);
    assert_eq!(result.ranked_bids[1].score, 0.9);
}

#[test]
fn test_weights_applied_sum_to_one() {
    let project = project(&[]);
    let bids = vec![bid(1, 10, 100.0, 10)];
    let directory: InMemoryDirectory =
        vec![bidder(10, 4.0, 90.0, &[])].into_iter().collect();

    for raw in ["price", "time", "rating", "balanced", "whatever"] {
        let result = rank(&project, &bids, &directory, Priority::parse(raw));
        let total: f64 = result.weights_applied.values().sum();
        assert!((total - 1.0).abs() < 1e-9, "priority {raw}: sum {total}");
        assert_eq!(result.weights_applied.len(), 7);
    }
}

#[test]
fn test_empty_bid_list_yields_empty_result() {
    let directory = InMemoryDirectory::new();
    let result = rank(&project(&["python"]), &[], &directory, Priority::Balanced);
    assert!(result.ranked_bids.is_empty());
    assert!(result.weights_applied.is_empty());
}

#[test]
fn test_all_unresolvable_bidders_yield_empty_result() {
    let directory = InMemoryDirectory::new();
    let bids = vec![bid(1, 10, 100.0, 10), bid(2, 20, 200.0, 20)];
    let result = rank(&project(&[]), &bids, &directory, Priority::Price);
    assert!(result.ranked_bids.is_empty());
    assert!(result.weights_applied.is_empty());
}

#[test]
fn test_price_priority_can_reorder_the_ranking() {
    let project = project(&["rust"]);
    // Bid 1 is expensive but strong on reputation; bid 2 is cheap and weak.
    let bids = vec![bid(1, 10, 900.0, 10), bid(2, 20, 100.0, 10)];
    let directory: InMemoryDirectory = vec![
        bidder(10, 5.0, 100.0, &["rust"]),
        bidder(20, 2.0, 40.0, &["rust"]),
    ]
    .into_iter()
    .collect();

    let balanced = rank(&project, &bids, &directory, Priority::Balanced);
    assert_eq!(balanced.ranked_bids[0].id, 1);

    let price_first = rank(&project, &bids, &directory, Priority::Price);
    assert_eq!(price_first.ranked_bids[0].id, 2);
    let price_weight = price_first.weights_applied["price"];
    assert!(price_weight > balanced.weights_applied["price"]);
}

#[test]
fn test_identical_bids_tie_in_input_order() {
    let project = project(&[]);
    let bids = vec![bid(7, 10, 100.0, 10), bid(3, 10, 100.0, 10), bid(9, 10, 100.0, 10)];
    let directory: InMemoryDirectory =
        vec![bidder(10, 4.0, 90.0, &[])].into_iter().collect();

    let result = rank(&project, &bids, &directory, Priority::Balanced);
    let ids = result.ranked_bids.iter().map(|b| b.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![7, 3, 9]);
    // Every feature is tied, so every normalized value is 0.5.
    let first = result.ranked_bids[0].score;
    assert!(result.ranked_bids.iter().all(|b| b.score == first));
}

#[test]
fn test_rank_is_deterministic() {
    let project = project(&["python", "sql"]);
    let bids = vec![bid(1, 10, 250.0, 12), bid(2, 20, 300.0, 8), bid(3, 10, 250.0, 12)];
    let directory: InMemoryDirectory = vec![
        bidder(10, 4.2, 75.0, &["python"]),
        bidder(20, 3.9, 88.0, &["sql", "python"]),
    ]
    .into_iter()
    .collect();

    let a = rank(&project, &bids, &directory, Priority::Rating);
    let b = rank(&project, &bids, &directory, Priority::Rating);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}
