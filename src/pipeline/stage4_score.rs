use crate::model::ranked::{BidderSummary, RankedBid};
use crate::model::weights::WeightVector;
use crate::pipeline::stage1_features::BidRow;
use crate::pipeline::stage2_normalize::NormalizedFeatures;

/// Aggregate the normalized features into per-bid scores and sort them
/// descending. The aggregate folds in price, rating, timeline, on-time rate,
/// and skill match; completion rate and portfolio score keep their base
/// weight but have no normalized term. The sort is stable, so equal scores
/// keep the input bid order.
pub fn run_stage4(
    rows: &[BidRow<'_>],
    normalized: &NormalizedFeatures,
    weights: &WeightVector,
) -> Vec<RankedBid> {
    let mut results = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let score = 10.0
            * (weights.price * normalized.price[i]
                + weights.rating * normalized.rating[i]
                + weights.timeline * normalized.timeline[i]
                + weights.on_time_rate * normalized.on_time_rate[i]
                + weights.skill_match * normalized.skill_match[i]);

        results.push(RankedBid {
            id: row.bid.id,
            amount: row.bid.amount,
            proposal: row.bid.proposal.clone(),
            proposed_timeline_days: row.bid.proposed_timeline_days,
            created_at: row.bid.created_at,
            freelancer: BidderSummary {
                id: row.bidder.id,
                username: row.bidder.username.clone(),
                avg_rating: row.bidder.avg_rating,
                on_time_count: row.bidder.on_time_count,
                delayed_count: row.bidder.delayed_count,
                projects_completed: row.bidder.projects_completed,
            },
            score: round1(score),
        });
    }

    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_score.rs"]
mod tests;
