use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::directory::InMemoryDirectory;
use crate::model::entities::{BidCandidate, BidderReputation, ProjectContext};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid snapshot json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid snapshot: {0}")]
    Invalid(String),
}

/// Materialized input for one ranking call: the project, the bids filed
/// against it, and the reputation snapshots of the bidders involved.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    pub project: ProjectContext,
    #[serde(default)]
    pub bids: Vec<BidCandidate>,
    #[serde(default)]
    pub bidders: Vec<BidderReputation>,
}

impl Snapshot {
    pub fn directory(&self) -> InMemoryDirectory {
        self.bidders.iter().cloned().collect()
    }
}

pub fn load_snapshot(path: &Path) -> Result<Snapshot, SnapshotError> {
    let raw = fs::read_to_string(path)?;
    parse_snapshot(&raw)
}

/// Decode and validate a snapshot. Bidders that never had their on-time
/// percentage materialized get it recomputed from the delivery counters,
/// the same way the review bookkeeping would have written it.
pub fn parse_snapshot(raw: &str) -> Result<Snapshot, SnapshotError> {
    let mut snapshot: Snapshot = serde_json::from_str(raw)?;

    for bid in &snapshot.bids {
        if !bid.amount.is_finite() || bid.amount <= 0.0 {
            return Err(SnapshotError::Invalid(format!(
                "bid {} has non-positive amount {}",
                bid.id, bid.amount
            )));
        }
    }

    for bidder in &mut snapshot.bidders {
        if bidder.on_time_rate.is_none() {
            bidder.on_time_rate = bidder.derived_on_time_rate();
        }
    }

    Ok(snapshot)
}

#[cfg(test)]
#[path = "../tests/src_inline/input.rs"]
mod tests;
