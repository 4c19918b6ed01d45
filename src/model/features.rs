/// Raw per-bid feature values, one fixed slot per scored dimension.
///
/// `price` and `timeline` are in bid units (currency, days); the remaining
/// fields are already ratios. Cross-sectional normalization rescales each
/// slot relative to the other bids of the same call, so absolute units never
/// mix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub price: f64,
    pub timeline: f64,
    pub rating: f64,
    pub completion_rate: f64,
    pub on_time_rate: f64,
    pub portfolio_score: f64,
    pub skill_match: f64,
}
