//! Scoring weight domain models.
//!
//! Weights are fractions in [0, 1]. A fully resolved [`WeightSet`] always
//! sums to exactly 1.0; partial user input is blended with a default
//! profile by the service in this module's sibling.

use crate::errors::Error;
use crate::utils::coerce;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The four scoring dimensions used to compare candidate buildings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WeightKey {
    CostScore,
    AreaScore,
    ParkingScore,
    ModernityScore,
}

impl WeightKey {
    pub const ALL: [WeightKey; 4] = [
        WeightKey::CostScore,
        WeightKey::AreaScore,
        WeightKey::ParkingScore,
        WeightKey::ModernityScore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeightKey::CostScore => "costScore",
            WeightKey::AreaScore => "areaScore",
            WeightKey::ParkingScore => "parkingScore",
            WeightKey::ModernityScore => "modernityScore",
        }
    }
}

impl fmt::Display for WeightKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which analysis the weights are being resolved for. Each type carries its
/// own default profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisType {
    Lease,
    Purchase,
    Invest,
}

impl AnalysisType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::Lease => "LEASE",
            AnalysisType::Purchase => "PURCHASE",
            AnalysisType::Invest => "INVEST",
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LEASE" => Ok(AnalysisType::Lease),
            "PURCHASE" => Ok(AnalysisType::Purchase),
            "INVEST" => Ok(AnalysisType::Invest),
            other => Err(Error::UnknownAnalysisType(other.to_string())),
        }
    }
}

/// A full weight map over all four scoring dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightSet {
    pub cost_score: Decimal,
    pub area_score: Decimal,
    pub parking_score: Decimal,
    pub modernity_score: Decimal,
}

impl WeightSet {
    pub fn get(&self, key: WeightKey) -> Decimal {
        match key {
            WeightKey::CostScore => self.cost_score,
            WeightKey::AreaScore => self.area_score,
            WeightKey::ParkingScore => self.parking_score,
            WeightKey::ModernityScore => self.modernity_score,
        }
    }

    pub fn set(&mut self, key: WeightKey, value: Decimal) {
        match key {
            WeightKey::CostScore => self.cost_score = value,
            WeightKey::AreaScore => self.area_score = value,
            WeightKey::ParkingScore => self.parking_score = value,
            WeightKey::ModernityScore => self.modernity_score = value,
        }
    }

    pub fn sum(&self) -> Decimal {
        self.cost_score
            .saturating_add(self.area_score)
            .saturating_add(self.parking_score)
            .saturating_add(self.modernity_score)
    }

    /// A map with every weight set to zero.
    pub fn zero() -> Self {
        WeightSet {
            cost_score: Decimal::ZERO,
            area_score: Decimal::ZERO,
            parking_score: Decimal::ZERO,
            modernity_score: Decimal::ZERO,
        }
    }

    /// Default profile for an analysis type. Each profile sums to 1.0.
    pub fn default_for(analysis_type: AnalysisType) -> Self {
        match analysis_type {
            AnalysisType::Lease => WeightSet {
                cost_score: dec!(0.40),
                area_score: dec!(0.25),
                parking_score: dec!(0.15),
                modernity_score: dec!(0.20),
            },
            AnalysisType::Purchase => WeightSet {
                cost_score: dec!(0.35),
                area_score: dec!(0.30),
                parking_score: dec!(0.15),
                modernity_score: dec!(0.20),
            },
            AnalysisType::Invest => WeightSet {
                cost_score: dec!(0.45),
                area_score: dec!(0.20),
                parking_score: dec!(0.15),
                modernity_score: dec!(0.20),
            },
        }
    }
}

impl Default for WeightSet {
    /// Balanced profile: every dimension at 25%.
    fn default() -> Self {
        WeightSet {
            cost_score: dec!(0.25),
            area_score: dec!(0.25),
            parking_score: dec!(0.25),
            modernity_score: dec!(0.25),
        }
    }
}

/// Partial weight map as supplied by a comparison request.
///
/// A key counts as *provided* only when it coerces to a value strictly
/// greater than zero; missing, zero, and negative values are all treated
/// identically as "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeightInput {
    #[serde(deserialize_with = "coerce::lenient_opt_decimal")]
    pub cost_score: Option<Decimal>,
    #[serde(deserialize_with = "coerce::lenient_opt_decimal")]
    pub area_score: Option<Decimal>,
    #[serde(deserialize_with = "coerce::lenient_opt_decimal")]
    pub parking_score: Option<Decimal>,
    #[serde(deserialize_with = "coerce::lenient_opt_decimal")]
    pub modernity_score: Option<Decimal>,
}

impl WeightInput {
    /// Coerces the known weight keys out of a raw JSON object. Unknown keys
    /// are ignored; a non-object value yields an empty input.
    pub fn from_json(value: &Value) -> Self {
        let mut input = WeightInput::default();
        if let Value::Object(map) = value {
            for key in WeightKey::ALL {
                if let Some(raw) = map.get(key.as_str()) {
                    input.set(key, Some(coerce::to_decimal(raw)));
                }
            }
        }
        input
    }

    pub fn get(&self, key: WeightKey) -> Option<Decimal> {
        match key {
            WeightKey::CostScore => self.cost_score,
            WeightKey::AreaScore => self.area_score,
            WeightKey::ParkingScore => self.parking_score,
            WeightKey::ModernityScore => self.modernity_score,
        }
    }

    pub fn set(&mut self, key: WeightKey, value: Option<Decimal>) {
        match key {
            WeightKey::CostScore => self.cost_score = value,
            WeightKey::AreaScore => self.area_score = value,
            WeightKey::ParkingScore => self.parking_score = value,
            WeightKey::ModernityScore => self.modernity_score = value,
        }
    }

    /// The value for a key, only if it counts as provided (strictly > 0).
    pub fn provided(&self, key: WeightKey) -> Option<Decimal> {
        self.get(key).filter(|v| *v > Decimal::ZERO)
    }

    pub fn provided_keys(&self) -> Vec<WeightKey> {
        WeightKey::ALL
            .into_iter()
            .filter(|k| self.provided(*k).is_some())
            .collect()
    }

    pub fn missing_keys(&self) -> Vec<WeightKey> {
        WeightKey::ALL
            .into_iter()
            .filter(|k| self.provided(*k).is_none())
            .collect()
    }
}

/// Where the final weights came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightSource {
    Request,
    Fallback,
}

/// How the request's weights were resolved against the default profile.
///
/// This is a tagged variant rather than a notice string so that callers can
/// branch on the outcome without parsing display text. Three cases, not two:
/// a partially valid request is distinct from both a fully valid one and a
/// fully invalid one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum WeightResolution {
    /// Every key was provided; weights are the normalized request.
    FullRequest,
    /// Some keys were provided; the rest fell back to the default profile.
    PartialRequest { missing: Vec<WeightKey> },
    /// No valid key was provided; the default profile applies unchanged.
    Fallback,
}

impl WeightResolution {
    pub fn source(&self) -> WeightSource {
        match self {
            WeightResolution::FullRequest | WeightResolution::PartialRequest { .. } => {
                WeightSource::Request
            }
            WeightResolution::Fallback => WeightSource::Fallback,
        }
    }

    /// Human-readable notice for the degraded cases; `None` when the
    /// request was fully honored.
    pub fn notice(&self) -> Option<String> {
        match self {
            WeightResolution::FullRequest => None,
            WeightResolution::PartialRequest { missing } => {
                let keys: Vec<&str> = missing.iter().map(WeightKey::as_str).collect();
                Some(format!(
                    "Some weight keys were missing or invalid; defaults applied for: {}",
                    keys.join(", ")
                ))
            }
            WeightResolution::Fallback => {
                Some("No valid weights in request; default profile applied".to_string())
            }
        }
    }
}

/// The full story of one weight resolution, assembled once per comparison
/// request and passed along to scoring and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightMeta {
    pub analysis_type: AnalysisType,
    /// The raw request, as coerced.
    pub requested: WeightInput,
    /// Provided keys normalized to sum 1.0 among themselves; missing keys
    /// are zero here.
    pub normalized: WeightSet,
    /// The final map used for scoring. Always sums to exactly 1.0.
    pub weights: WeightSet,
    pub resolution: WeightResolution,
    pub source: WeightSource,
    pub notices: Vec<String>,
}
