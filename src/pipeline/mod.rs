pub mod stage1_features;
pub mod stage2_normalize;
pub mod stage3_weights;
pub mod stage4_score;

use tracing::debug;

use crate::directory::BidderDirectory;
use crate::model::entities::{BidCandidate, ProjectContext};
use crate::model::ranked::RankingResult;
use crate::model::weights::Priority;

/// Rank `bids` against `project` under the requested priority.
///
/// Pure and synchronous: the only shared state is the one-time-normalized
/// base weight vector. Bids whose bidder is unknown to `directory` are
/// skipped; an empty (or fully skipped) bid set yields an empty result with
/// an empty weight map.
pub fn rank<D: BidderDirectory>(
    project: &ProjectContext,
    bids: &[BidCandidate],
    directory: &D,
    priority: Priority,
) -> RankingResult {
    let stage1 = stage1_features::run_stage1(project, bids, directory);
    if stage1.rows.is_empty() {
        debug!(n_bids = bids.len(), "no scorable bids");
        return RankingResult::default();
    }

    let normalized = stage2_normalize::run_stage2(&stage1.rows);
    let weights = stage3_weights::run_stage3(priority);
    let ranked_bids = stage4_score::run_stage4(&stage1.rows, &normalized, &weights);

    debug!(
        n_bids = bids.len(),
        n_ranked = ranked_bids.len(),
        "ranking complete"
    );

    RankingResult {
        weights_applied: weights.to_map(),
        ranked_bids,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/rank.rs"]
mod tests;
