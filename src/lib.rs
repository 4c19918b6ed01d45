//! Multi-criteria scoring and ranking of freelance project bids.
//!
//! The engine is a pure, synchronous library: callers hand it an
//! already-materialized project, its bids, and a bidder-reputation lookup,
//! and get back a descending-scored ranking plus the weight vector used.

pub mod directory;
pub mod input;
pub mod model;
pub mod pipeline;
pub mod report;

pub use directory::{BidderDirectory, InMemoryDirectory};
pub use model::entities::{BidCandidate, BidderReputation, ProjectContext};
pub use model::features::FeatureVector;
pub use model::ranked::{BidderSummary, RankedBid, RankingResult};
pub use model::weights::{Priority, WeightVector};
pub use pipeline::rank;
