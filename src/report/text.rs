use std::fmt::Write as _;

use crate::model::ranked::RankingResult;

/// Human-readable ranking table, one row per bid in score order.
pub fn render_text(result: &RankingResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "ranked bids: {}", result.ranked_bids.len());
    if !result.weights_applied.is_empty() {
        let weights = result
            .weights_applied
            .iter()
            .map(|(name, w)| format!("{name}={w:.4}"))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(out, "weights: {weights}");
    }

    let _ = writeln!(
        out,
        "{:>4}  {:>8}  {:<20}  {:>12}  {:>6}  {:>6}",
        "rank", "bid", "freelancer", "amount", "days", "score"
    );
    for (i, bid) in result.ranked_bids.iter().enumerate() {
        let days = bid
            .proposed_timeline_days
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:>4}  {:>8}  {:<20}  {:>12.2}  {:>6}  {:>6.1}",
            i + 1,
            bid.id,
            bid.freelancer.username,
            bid.amount,
            days,
            bid.score
        );
    }

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
