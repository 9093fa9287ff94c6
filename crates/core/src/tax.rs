//! Statutory tax and fee calculators for property acquisition.
//!
//! Rates are the flat composite rates used for commercial buildings; there
//! is no progressive bracket handling. Inputs are in manwon (10,000 KRW).

use crate::constants::{ACQUISITION_TAX_RATE, BROKERAGE_FEE_RATE};
use rust_decimal::Decimal;

/// Acquisition tax: purchase price x 4.6%.
///
/// The rate is the composite of 4.0% acquisition tax, 0.2% rural special
/// tax, and 0.4% local education tax. No bounds checking: a negative price
/// produces a negative tax, and the caller is expected to pass a
/// non-negative amount.
pub fn acquisition_tax(purchase_price: Decimal) -> Decimal {
    purchase_price
        .checked_mul(ACQUISITION_TAX_RATE)
        .unwrap_or(Decimal::ZERO)
}

/// Brokerage fee: purchase price x 0.99% (0.9% legal cap plus 10% VAT).
pub fn brokerage_fee(purchase_price: Decimal) -> Decimal {
    purchase_price
        .checked_mul(BROKERAGE_FEE_RATE)
        .unwrap_or(Decimal::ZERO)
}
