use std::collections::BTreeSet;

use tracing::debug;

use crate::directory::BidderDirectory;
use crate::model::entities::{BidCandidate, BidderReputation, ProjectContext};
use crate::model::features::FeatureVector;

/// Substituted when a bid does not state a timeline.
pub const DEFAULT_TIMELINE_DAYS: f64 = 30.0;

/// Neutral skill match when the project lists no required skills.
pub const NEUTRAL_SKILL_MATCH: f64 = 0.5;

/// One bid joined with its resolved bidder and extracted features.
#[derive(Debug, Clone)]
pub struct BidRow<'a> {
    pub bid: &'a BidCandidate,
    pub bidder: &'a BidderReputation,
    pub features: FeatureVector,
}

#[derive(Debug)]
pub struct Stage1Output<'a> {
    pub rows: Vec<BidRow<'a>>,
}

pub fn run_stage1<'a, D: BidderDirectory>(
    project: &ProjectContext,
    bids: &'a [BidCandidate],
    directory: &'a D,
) -> Stage1Output<'a> {
    let mut rows = Vec::with_capacity(bids.len());
    for bid in bids {
        let Some(bidder) = directory.resolve(bid.freelancer_id) else {
            debug!(
                bid_id = bid.id,
                freelancer_id = bid.freelancer_id,
                "bidder unresolved, bid skipped"
            );
            continue;
        };
        rows.push(BidRow {
            bid,
            bidder,
            features: compute_features(bid, bidder, project),
        });
    }
    Stage1Output { rows }
}

/// Pure feature extraction. Absent optional fields degrade to documented
/// defaults and never fail.
pub fn compute_features(
    bid: &BidCandidate,
    bidder: &BidderReputation,
    project: &ProjectContext,
) -> FeatureVector {
    FeatureVector {
        price: bid.amount,
        timeline: bid
            .proposed_timeline_days
            .map(f64::from)
            .unwrap_or(DEFAULT_TIMELINE_DAYS),
        rating: bidder.avg_rating.unwrap_or(0.0) / 5.0,
        completion_rate: bidder.completion_rate.unwrap_or(0.0),
        on_time_rate: bidder.on_time_rate.unwrap_or(0.0),
        portfolio_score: bidder.portfolio_score.unwrap_or(0.0),
        skill_match: jaccard_skill_match(&project.required_skills, &bidder.skills),
    }
}

/// Jaccard similarity over lower-cased, whitespace-trimmed skill sets.
/// A project with no required skills matches everyone at the neutral 0.5.
pub fn jaccard_skill_match(project_skills: &[String], freelancer_skills: &[String]) -> f64 {
    if project_skills.is_empty() {
        return NEUTRAL_SKILL_MATCH;
    }
    let ps = canonical_set(project_skills);
    let fs = canonical_set(freelancer_skills);
    let union = ps.union(&fs).count();
    if union == 0 {
        return 0.0;
    }
    let inter = ps.intersection(&fs).count();
    inter as f64 / union as f64
}

fn canonical_set(skills: &[String]) -> BTreeSet<String> {
    skills.iter().map(|s| s.trim().to_lowercase()).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_features.rs"]
mod tests;
