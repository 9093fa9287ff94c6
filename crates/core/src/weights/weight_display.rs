//! Human-readable rendering of a weight resolution.
//!
//! The comparison UI shows three stages per key: what the request asked
//! for, how the provided subset normalized, and what was finally applied.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::WEIGHT_DISPLAY_PRECISION;

use super::weights_model::{WeightKey, WeightMeta, WeightResolution};

const HUNDRED: Decimal = dec!(100);

/// Formats a fractional weight as a fixed-point percentage, e.g. `"25.0%"`.
///
/// Raw requested values flow through here unclamped, so the scale-up is
/// checked: a value too large to express as a percentage renders as zero.
pub fn format_percent(value: Decimal) -> String {
    let pct = value.checked_mul(HUNDRED).unwrap_or(Decimal::ZERO);
    format!("{:.prec$}%", pct, prec = WEIGHT_DISPLAY_PRECISION)
}

/// One row of the requested/normalized/final comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightBreakdownRow {
    pub key: WeightKey,
    /// Raw requested value as a percentage; `None` when the key was absent
    /// from the request.
    pub requested: Option<String>,
    pub normalized: String,
    pub final_weight: String,
    /// True when this key did not count as provided and fell back.
    pub missing_input: bool,
}

/// Builds the per-key three-stage comparison for a resolved weight set.
pub fn weight_breakdown(meta: &WeightMeta) -> Vec<WeightBreakdownRow> {
    WeightKey::ALL
        .into_iter()
        .map(|key| WeightBreakdownRow {
            key,
            requested: meta.requested.get(key).map(format_percent),
            normalized: format_percent(meta.normalized.get(key)),
            final_weight: format_percent(meta.weights.get(key)),
            missing_input: meta.requested.provided(key).is_none(),
        })
        .collect()
}

/// One-line summary of which rule produced the final weights. Driven by the
/// resolution variant, never by inspecting notice text.
pub fn weight_rule_summary(meta: &WeightMeta) -> String {
    match &meta.resolution {
        WeightResolution::FullRequest => {
            "All weights taken from the request and normalized to 100%".to_string()
        }
        WeightResolution::PartialRequest { missing } => {
            let keys: Vec<&str> = missing.iter().map(WeightKey::as_str).collect();
            format!(
                "Request weights normalized; {} default applied for: {}",
                meta.analysis_type,
                keys.join(", ")
            )
        }
        WeightResolution::Fallback => format!(
            "Default {} profile applied; the request carried no valid weights",
            meta.analysis_type
        ),
    }
}
