use crate::pipeline::stage1_features::BidRow;

/// Per-bid normalized values for the five aggregated features, index-aligned
/// with the stage 1 rows. `completion_rate` and `portfolio_score` are
/// extracted and weighted but never enter the aggregate, so they are not
/// normalized here.
#[derive(Debug, Clone, Default)]
pub struct NormalizedFeatures {
    pub price: Vec<f64>,
    pub timeline: Vec<f64>,
    pub rating: Vec<f64>,
    pub on_time_rate: Vec<f64>,
    pub skill_match: Vec<f64>,
}

pub fn run_stage2(rows: &[BidRow<'_>]) -> NormalizedFeatures {
    let collect = |f: fn(&BidRow<'_>) -> f64| rows.iter().map(f).collect::<Vec<_>>();

    NormalizedFeatures {
        // Lower price and shorter timeline favor the client, so both are
        // inverted: after this stage, higher always means better.
        price: normalize_feature_list(&collect(|r| r.features.price), true),
        timeline: normalize_feature_list(&collect(|r| r.features.timeline), true),
        rating: normalize_feature_list(&collect(|r| r.features.rating), false),
        on_time_rate: normalize_feature_list(&collect(|r| r.features.on_time_rate), false),
        skill_match: normalize_feature_list(&collect(|r| r.features.skill_match), false),
    }
}

/// Min-max rescale of one feature across the bids of a single call.
/// A feature with no spread carries no signal, so every bid gets 0.5.
pub fn normalize_feature_list(values: &[f64], invert: bool) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if hi == lo {
        return vec![0.5; values.len()];
    }
    values
        .iter()
        .map(|&v| {
            let scaled = (v - lo) / (hi - lo);
            if invert { 1.0 - scaled } else { scaled }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_normalize.rs"]
mod tests;
