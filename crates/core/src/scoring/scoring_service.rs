//! Weighted scoring and ranking of comparison candidates.

use log::debug;
use rust_decimal::Decimal;

use crate::weights::{WeightKey, WeightSet};

use super::scoring_model::{CandidateScores, ScoredCandidate};

fn sub_score(scores: &CandidateScores, key: WeightKey) -> Decimal {
    match key {
        WeightKey::CostScore => scores.cost_score,
        WeightKey::AreaScore => scores.area_score,
        WeightKey::ParkingScore => scores.parking_score,
        WeightKey::ModernityScore => scores.modernity_score,
    }
}

/// Weighted sum of the four sub-scores. With weights summing to 1.0 and
/// sub-scores on a 0-100 scale, the total lands on the same scale.
pub fn weighted_total(scores: &CandidateScores, weights: &WeightSet) -> Decimal {
    WeightKey::ALL
        .into_iter()
        .map(|key| {
            sub_score(scores, key)
                .checked_mul(weights.get(key))
                .unwrap_or(Decimal::ZERO)
        })
        .fold(Decimal::ZERO, |acc, term| acc.saturating_add(term))
}

/// Scores and ranks candidates, highest total first. Ties break on id so
/// the ordering is stable across calls.
pub fn rank_candidates(
    candidates: Vec<(String, CandidateScores)>,
    weights: &WeightSet,
) -> Vec<ScoredCandidate> {
    debug!("Ranking {} comparison candidates", candidates.len());

    let mut ranked: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|(id, scores)| {
            let total = weighted_total(&scores, weights);
            ScoredCandidate { id, scores, total }
        })
        .collect();

    ranked.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.id.cmp(&b.id)));
    ranked
}
