use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Caller-selected scoring emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Price,
    Time,
    Rating,
    Balanced,
}

impl Priority {
    /// Anything that is not a recognized emphasis keyword means balanced;
    /// this never fails.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "price" => Priority::Price,
            "time" => Priority::Time,
            "rating" => Priority::Rating,
            _ => Priority::Balanced,
        }
    }
}

/// Per-feature weights. Always kept normalized: `sum()` is 1 within 1e-9
/// for every vector handed out by this module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    pub price: f64,
    pub rating: f64,
    pub completion_rate: f64,
    pub on_time_rate: f64,
    pub skill_match: f64,
    pub portfolio_score: f64,
    pub timeline: f64,
}

// The raw table sums to 1.10; `base()` renormalizes it exactly once.
const RAW_BASE: WeightVector = WeightVector {
    price: 0.25,
    rating: 0.25,
    completion_rate: 0.15,
    on_time_rate: 0.15,
    skill_match: 0.15,
    portfolio_score: 0.05,
    timeline: 0.10,
};

static BASE_WEIGHTS: LazyLock<WeightVector> = LazyLock::new(|| RAW_BASE.normalized());

impl WeightVector {
    /// The immutable base distribution, normalized at first use and shared
    /// by every ranking call.
    pub fn base() -> WeightVector {
        *BASE_WEIGHTS
    }

    pub fn sum(&self) -> f64 {
        self.price
            + self.rating
            + self.completion_rate
            + self.on_time_rate
            + self.skill_match
            + self.portfolio_score
            + self.timeline
    }

    pub fn normalized(&self) -> WeightVector {
        let total = self.sum();
        WeightVector {
            price: self.price / total,
            rating: self.rating / total,
            completion_rate: self.completion_rate / total,
            on_time_rate: self.on_time_rate / total,
            skill_match: self.skill_match / total,
            portfolio_score: self.portfolio_score / total,
            timeline: self.timeline / total,
        }
    }

    /// Name-keyed view for the response body.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        BTreeMap::from([
            ("price".to_string(), self.price),
            ("rating".to_string(), self.rating),
            ("completion_rate".to_string(), self.completion_rate),
            ("on_time_rate".to_string(), self.on_time_rate),
            ("skill_match".to_string(), self.skill_match),
            ("portfolio_score".to_string(), self.portfolio_score),
            ("timeline".to_string(), self.timeline),
        ])
    }
}
