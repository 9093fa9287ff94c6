//! Candidate scoring models.

use crate::utils::coerce;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-dimension sub-scores for one candidate building, on a 0-100 scale.
///
/// Sub-scores come from the upstream scoring pipeline via JSON and are
/// coerced leniently: a missing or malformed dimension scores zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateScores {
    #[serde(deserialize_with = "coerce::lenient_decimal")]
    pub cost_score: Decimal,
    #[serde(deserialize_with = "coerce::lenient_decimal")]
    pub area_score: Decimal,
    #[serde(deserialize_with = "coerce::lenient_decimal")]
    pub parking_score: Decimal,
    #[serde(deserialize_with = "coerce::lenient_decimal")]
    pub modernity_score: Decimal,
}

/// A candidate with its weighted total, as returned by ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    pub id: String,
    pub scores: CandidateScores,
    pub total: Decimal,
}
