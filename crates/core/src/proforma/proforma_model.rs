//! Pro-forma domain models.
//!
//! All monetary fields are in manwon (10,000 KRW); rates are percent as a
//! real number (4.6 means 4.6%). Results are plain value records recomputed
//! on every call, never cached.

use crate::utils::coerce;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Input for feasibility and cash-flow calculations.
///
/// Deserialization is lenient: missing or malformed fields become zero, so
/// a partially filled request from the UI still produces a usable result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProFormaParams {
    #[serde(deserialize_with = "coerce::lenient_decimal")]
    pub purchase_price: Decimal,
    #[serde(deserialize_with = "coerce::lenient_decimal")]
    pub deposit: Decimal,
    #[serde(deserialize_with = "coerce::lenient_decimal")]
    pub monthly_rent: Decimal,
    #[serde(deserialize_with = "coerce::lenient_decimal")]
    pub loan_amount: Decimal,
    #[serde(deserialize_with = "coerce::lenient_decimal")]
    pub interest_rate: Decimal,
}

/// Acquisition cost breakdown and required equity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityResult {
    pub acquisition_tax: Decimal,
    pub brokerage_fee: Decimal,
    pub legal_and_other_fees: Decimal,
    pub total_incidental_costs: Decimal,
    /// Cash required to close. Negative means the deposit and loan cover
    /// more than the full acquisition cost (over-leveraged, but valid).
    pub net_equity: Decimal,
}

/// Annual operating pro-forma under zero-vacancy, interest-only assumptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashflowResult {
    pub annual_pgi: Decimal,
    pub operating_expenses: Decimal,
    pub annual_noi: Decimal,
    /// NOI / purchase price as a percentage; 0 when the price is not positive.
    pub cap_rate: Decimal,
    pub annual_debt_service: Decimal,
    pub annual_btcf: Decimal,
    pub monthly_btcf: Decimal,
    /// Annual BTCF / net equity as a percentage; 0 when equity is not positive.
    pub equity_roi: Decimal,
}
