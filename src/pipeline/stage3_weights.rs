use tracing::debug;

use crate::model::weights::{Priority, WeightVector};

/// Flat addition applied to the one weight the priority singles out, before
/// the vector is renormalized.
pub const PRIORITY_BOOST: f64 = 0.25;

/// Resolve the effective weight vector for one ranking call. Deterministic
/// and idempotent: the same priority always yields the same vector, and the
/// result sums to 1 within floating tolerance.
pub fn run_stage3(priority: Priority) -> WeightVector {
    let mut weights = WeightVector::base();
    match priority {
        Priority::Price => weights.price += PRIORITY_BOOST,
        Priority::Time => weights.timeline += PRIORITY_BOOST,
        Priority::Rating => weights.rating += PRIORITY_BOOST,
        Priority::Balanced => {}
    }
    let resolved = weights.normalized();
    debug!(?priority, price = resolved.price, "weights resolved");
    resolved
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_weights.rs"]
mod tests;
