//! Lenient numeric coercion for upstream registry and request payloads.
//!
//! Government registry responses mix number and string fields, drop fields
//! entirely, and format amounts with thousands separators. Every value is
//! funneled through [`to_decimal`] before arithmetic so the calculators can
//! assume finite input. Coercion never fails: anything non-numeric becomes
//! zero.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Coerces any JSON value to a finite `Decimal`, defaulting to zero.
///
/// Numbers pass through (a float outside `Decimal` range becomes zero),
/// numeric strings are parsed with thousands separators tolerated, and
/// null, booleans, arrays, objects, and junk strings all yield zero.
pub fn to_decimal(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Decimal::from(i)
            } else if let Some(u) = n.as_u64() {
                Decimal::from(u)
            } else {
                n.as_f64()
                    .and_then(Decimal::from_f64)
                    .unwrap_or(Decimal::ZERO)
            }
        }
        Value::String(s) => parse_numeric_str(s),
        _ => Decimal::ZERO,
    }
}

fn parse_numeric_str(raw: &str) -> Decimal {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }
    if let Ok(d) = Decimal::from_str(&cleaned) {
        return d;
    }
    // Scientific notation ("1.2e4") falls through the plain parser.
    cleaned
        .parse::<f64>()
        .ok()
        .and_then(Decimal::from_f64)
        .unwrap_or(Decimal::ZERO)
}

/// Serde helper: deserializes any value as a `Decimal`, zero on garbage.
///
/// Combine with `#[serde(default)]` so missing fields become zero too.
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(to_decimal).unwrap_or(Decimal::ZERO))
}

/// Serde helper: like [`lenient_decimal`] but keeps "absent" distinct from
/// "present". A present field always coerces (possibly to zero); a null or
/// missing field is `None`.
pub fn lenient_opt_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(v) => Some(to_decimal(&v)),
    })
}
