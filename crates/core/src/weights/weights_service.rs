//! Weight resolution.
//!
//! Blends a request's partial weight map with the default profile for the
//! analysis type. The resolution never fails; degraded input produces a
//! fallback outcome instead of an error.

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::weights_model::{
    AnalysisType, WeightInput, WeightKey, WeightMeta, WeightResolution, WeightSet,
};

const ONE: Decimal = dec!(1);

/// Resolves a request's weights against the default profile.
///
/// Policy:
/// - No provided key: the default profile applies unchanged (`Fallback`).
/// - Otherwise the provided keys are normalized to sum 1.0 among
///   themselves. Missing keys keep their default weight, and the provided
///   keys share the remaining mass in proportion to the request. When every
///   key is provided this reduces to plain normalization.
///
/// The final map sums to exactly 1.0: the largest provided key absorbs any
/// rounding residue left by decimal division.
pub fn resolve_weights(
    analysis_type: AnalysisType,
    requested: &WeightInput,
    defaults: &WeightSet,
) -> WeightMeta {
    let provided: Vec<(WeightKey, Decimal)> = WeightKey::ALL
        .into_iter()
        .filter_map(|k| requested.provided(k).map(|v| (k, v)))
        .collect();

    if provided.is_empty() {
        debug!(
            "No valid weights in request; using {} default profile",
            analysis_type
        );
        let resolution = WeightResolution::Fallback;
        return assemble(
            analysis_type,
            requested.clone(),
            WeightSet::zero(),
            defaults.clone(),
            resolution,
        );
    }

    let missing = requested.missing_keys();
    // Coerced request values can be arbitrarily large; accumulate
    // saturating so extreme input degrades instead of overflowing.
    let provided_total = provided
        .iter()
        .fold(Decimal::ZERO, |acc, (_, v)| acc.saturating_add(*v));

    let mut normalized = WeightSet::zero();
    for (key, value) in &provided {
        let share = value.checked_div(provided_total).unwrap_or(Decimal::ZERO);
        normalized.set(*key, share);
    }
    // A saturated total leaves the raw shares summing past 1.0; rescale
    // before the residue is settled so no share can be pushed negative.
    let share_sum = normalized.sum();
    if share_sum > Decimal::ZERO && share_sum != ONE {
        for (key, _) in &provided {
            let rescaled = normalized
                .get(*key)
                .checked_div(share_sum)
                .unwrap_or(Decimal::ZERO);
            normalized.set(*key, rescaled);
        }
    }
    settle_residue(&mut normalized, &provided, ONE);

    let mut weights = WeightSet::zero();
    let reserved = missing
        .iter()
        .fold(Decimal::ZERO, |acc, k| acc.saturating_add(defaults.get(*k)));
    let remaining = ONE.saturating_sub(reserved);
    if remaining > Decimal::ZERO {
        for key in &missing {
            weights.set(*key, defaults.get(*key));
        }
        for (key, _) in &provided {
            weights.set(*key, normalized.get(*key) * remaining);
        }
    } else {
        // Defaults for the missing keys already claim the whole map, so the
        // request keeps the normalized shares and the missing keys get zero.
        weights = normalized.clone();
    }
    settle_residue(&mut weights, &provided, ONE);

    let resolution = if missing.is_empty() {
        WeightResolution::FullRequest
    } else {
        debug!(
            "Partial weight request; defaults applied for {} of {} keys",
            missing.len(),
            WeightKey::ALL.len()
        );
        WeightResolution::PartialRequest { missing }
    };

    assemble(analysis_type, requested.clone(), normalized, weights, resolution)
}

/// Adds any rounding residue to the largest provided key so the map sums to
/// the exact target.
fn settle_residue(set: &mut WeightSet, provided: &[(WeightKey, Decimal)], target: Decimal) {
    let residue = target.saturating_sub(set.sum());
    if residue == Decimal::ZERO {
        return;
    }
    if let Some((key, _)) = provided
        .iter()
        .max_by(|(ka, _), (kb, _)| set.get(*ka).cmp(&set.get(*kb)))
        .map(|(k, v)| (*k, *v))
    {
        set.set(key, set.get(key).saturating_add(residue));
    }
}

fn assemble(
    analysis_type: AnalysisType,
    requested: WeightInput,
    normalized: WeightSet,
    weights: WeightSet,
    resolution: WeightResolution,
) -> WeightMeta {
    let source = resolution.source();
    let notices = resolution.notice().into_iter().collect();
    WeightMeta {
        analysis_type,
        requested,
        normalized,
        weights,
        resolution,
        source,
        notices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weights::WeightSource;

    fn balanced() -> WeightSet {
        WeightSet::default()
    }

    #[test]
    fn test_empty_input_falls_back_to_defaults() {
        let meta = resolve_weights(AnalysisType::Lease, &WeightInput::default(), &balanced());
        assert_eq!(meta.resolution, WeightResolution::Fallback);
        assert_eq!(meta.source, WeightSource::Fallback);
        assert_eq!(meta.weights, balanced());
        assert_eq!(meta.notices.len(), 1);
    }

    #[test]
    fn test_all_invalid_input_is_fallback() {
        let requested = WeightInput {
            cost_score: Some(Decimal::ZERO),
            area_score: Some(dec!(-1)),
            parking_score: None,
            modernity_score: None,
        };
        let meta = resolve_weights(AnalysisType::Invest, &requested, &balanced());
        assert_eq!(meta.resolution, WeightResolution::Fallback);
        assert_eq!(meta.weights, balanced());
    }

    #[test]
    fn test_partial_request_blends_with_defaults() {
        // Spec'd scenario: cost and area at 0.5 each, the rest omitted,
        // balanced defaults. The omitted keys keep 0.25 each and the
        // provided pair splits the remaining 0.5 evenly.
        let requested = WeightInput {
            cost_score: Some(dec!(0.5)),
            area_score: Some(dec!(0.5)),
            parking_score: None,
            modernity_score: None,
        };
        let meta = resolve_weights(AnalysisType::Purchase, &requested, &balanced());

        assert_eq!(meta.source, WeightSource::Request);
        assert_eq!(
            meta.resolution,
            WeightResolution::PartialRequest {
                missing: vec![WeightKey::ParkingScore, WeightKey::ModernityScore]
            }
        );
        assert_eq!(meta.normalized.cost_score, dec!(0.5));
        assert_eq!(meta.normalized.area_score, dec!(0.5));
        assert_eq!(meta.normalized.parking_score, Decimal::ZERO);

        assert_eq!(meta.weights.cost_score, dec!(0.25));
        assert_eq!(meta.weights.area_score, dec!(0.25));
        assert_eq!(meta.weights.parking_score, dec!(0.25));
        assert_eq!(meta.weights.modernity_score, dec!(0.25));
        assert_eq!(meta.weights.sum(), dec!(1));
        assert_eq!(meta.notices.len(), 1);
    }

    #[test]
    fn test_full_request_normalizes_to_one() {
        let requested = WeightInput {
            cost_score: Some(dec!(2)),
            area_score: Some(dec!(1)),
            parking_score: Some(dec!(1)),
            modernity_score: Some(dec!(4)),
        };
        let meta = resolve_weights(AnalysisType::Lease, &requested, &balanced());

        assert_eq!(meta.resolution, WeightResolution::FullRequest);
        assert_eq!(meta.source, WeightSource::Request);
        assert!(meta.notices.is_empty());
        assert_eq!(meta.weights.cost_score, dec!(0.25));
        assert_eq!(meta.weights.area_score, dec!(0.125));
        assert_eq!(meta.weights.parking_score, dec!(0.125));
        assert_eq!(meta.weights.modernity_score, dec!(0.5));
        assert_eq!(meta.weights.sum(), dec!(1));
        assert_eq!(meta.normalized, meta.weights);
    }

    #[test]
    fn test_residue_is_settled_exactly() {
        // Three equal keys divide into repeating decimals; the sum must
        // still come out at exactly 1.0.
        let requested = WeightInput {
            cost_score: Some(dec!(1)),
            area_score: Some(dec!(1)),
            parking_score: Some(dec!(1)),
            modernity_score: None,
        };
        let meta = resolve_weights(AnalysisType::Invest, &requested, &balanced());
        assert_eq!(meta.weights.sum(), dec!(1));
        assert_eq!(meta.normalized.sum(), dec!(1));
    }

    #[test]
    fn test_single_provided_key() {
        let requested = WeightInput {
            modernity_score: Some(dec!(0.7)),
            ..Default::default()
        };
        let meta = resolve_weights(AnalysisType::Lease, &requested, &balanced());
        // Only modernity provided: it takes the whole non-default mass.
        assert_eq!(meta.normalized.modernity_score, dec!(1));
        assert_eq!(meta.weights.modernity_score, dec!(0.25));
        assert_eq!(meta.weights.cost_score, dec!(0.25));
        assert_eq!(meta.weights.sum(), dec!(1));
    }

    #[test]
    fn test_blend_with_uneven_defaults() {
        let defaults = WeightSet::default_for(AnalysisType::Lease);
        let requested = WeightInput {
            cost_score: Some(dec!(3)),
            area_score: Some(dec!(1)),
            ..Default::default()
        };
        let meta = resolve_weights(AnalysisType::Lease, &requested, &defaults);
        // Missing parking (0.15) and modernity (0.20) reserve 0.35; cost
        // and area split the remaining 0.65 three-to-one.
        assert_eq!(meta.weights.parking_score, dec!(0.15));
        assert_eq!(meta.weights.modernity_score, dec!(0.20));
        assert_eq!(meta.weights.cost_score, dec!(0.4875));
        assert_eq!(meta.weights.area_score, dec!(0.1625));
        assert_eq!(meta.weights.sum(), dec!(1));
    }

    #[test]
    fn test_degenerate_defaults_fall_back_to_normalized() {
        // Defaults that give the whole mass to the missing keys leave no
        // room for the request; the normalized shares win.
        let defaults = WeightSet {
            cost_score: Decimal::ZERO,
            area_score: Decimal::ZERO,
            parking_score: dec!(0.5),
            modernity_score: dec!(0.5),
        };
        let requested = WeightInput {
            cost_score: Some(dec!(1)),
            area_score: Some(dec!(1)),
            ..Default::default()
        };
        let meta = resolve_weights(AnalysisType::Purchase, &requested, &defaults);
        assert_eq!(meta.weights.cost_score, dec!(0.5));
        assert_eq!(meta.weights.area_score, dec!(0.5));
        assert_eq!(meta.weights.parking_score, Decimal::ZERO);
        assert_eq!(meta.weights.sum(), dec!(1));
    }

    #[test]
    fn test_extreme_request_values_degrade_without_panic() {
        // Coercion can hand the resolver arbitrarily large values; the
        // accumulation must saturate and the map still settle to 1.0.
        let requested = WeightInput {
            cost_score: Some(Decimal::MAX),
            area_score: Some(Decimal::MAX),
            ..Default::default()
        };
        let meta = resolve_weights(AnalysisType::Lease, &requested, &balanced());
        assert_eq!(meta.weights.sum(), dec!(1));
        // The two saturated keys end up with equal shares of the
        // non-default mass.
        assert_eq!(meta.weights.cost_score, dec!(0.25));
        assert_eq!(meta.weights.area_score, dec!(0.25));
        for key in WeightKey::ALL {
            assert!(meta.weights.get(key) >= Decimal::ZERO);
        }
    }

    #[test]
    fn test_idempotent() {
        let requested = WeightInput {
            cost_score: Some(dec!(0.3)),
            parking_score: Some(dec!(0.1)),
            ..Default::default()
        };
        let a = resolve_weights(AnalysisType::Invest, &requested, &balanced());
        let b = resolve_weights(AnalysisType::Invest, &requested, &balanced());
        assert_eq!(a, b);
    }
}
