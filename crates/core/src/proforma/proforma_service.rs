//! Feasibility and cash-flow calculators.
//!
//! Pure functions over [`ProFormaParams`]. The uniform arithmetic policy:
//! every division guards a non-positive denominator and every operation
//! that could overflow `Decimal` degrades to zero instead of panicking, so
//! callers always receive finite numbers.

use crate::constants::{LEGAL_FEE_RATE, MONTHS_PER_YEAR, OPERATING_EXPENSE_RATIO};
use crate::tax::{acquisition_tax, brokerage_fee};
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::proforma_model::{CashflowResult, FeasibilityResult, ProFormaParams};

const HUNDRED: Decimal = dec!(100);

fn mul_or_zero(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or(Decimal::ZERO)
}

/// Ratio as a percentage, or zero when the denominator is not positive.
fn pct_ratio_or_zero(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    numerator
        .checked_div(denominator)
        .and_then(|r| r.checked_mul(HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

/// Computes the acquisition cost breakdown and net required equity.
///
/// Incidental costs are acquisition tax, brokerage fee, and a flat 0.2%
/// legal/other estimate. Net equity is the purchase price plus incidental
/// costs minus the assumed deposit and loan proceeds; a negative result is
/// a valid over-leveraged scenario, not an error.
pub fn investment_feasibility(params: &ProFormaParams) -> FeasibilityResult {
    let acquisition_tax = acquisition_tax(params.purchase_price);
    let brokerage_fee = brokerage_fee(params.purchase_price);
    let legal_and_other_fees = mul_or_zero(params.purchase_price, LEGAL_FEE_RATE);

    let total_incidental_costs = acquisition_tax + brokerage_fee + legal_and_other_fees;
    let net_equity = params
        .purchase_price
        .saturating_add(total_incidental_costs)
        .saturating_sub(params.deposit)
        .saturating_sub(params.loan_amount);

    FeasibilityResult {
        acquisition_tax,
        brokerage_fee,
        legal_and_other_fees,
        total_incidental_costs,
        net_equity,
    }
}

/// Computes the annual operating pro-forma.
///
/// Assumptions: zero vacancy, a flat 5% operating-expense ratio, and
/// interest-only debt service (no amortization schedule).
pub fn proforma_cashflow(params: &ProFormaParams) -> CashflowResult {
    debug!(
        "Computing pro-forma cashflow for price {} manwon",
        params.purchase_price
    );

    let annual_pgi = mul_or_zero(params.monthly_rent, MONTHS_PER_YEAR);
    let operating_expenses = mul_or_zero(annual_pgi, OPERATING_EXPENSE_RATIO);
    let annual_noi = annual_pgi - operating_expenses;

    let cap_rate = pct_ratio_or_zero(annual_noi, params.purchase_price);

    let annual_debt_service = params
        .interest_rate
        .checked_div(HUNDRED)
        .map(|rate| mul_or_zero(params.loan_amount, rate))
        .unwrap_or(Decimal::ZERO);

    let annual_btcf = annual_noi.saturating_sub(annual_debt_service);
    let monthly_btcf = annual_btcf
        .checked_div(MONTHS_PER_YEAR)
        .unwrap_or(Decimal::ZERO);

    let feasibility = investment_feasibility(params);
    let equity_roi = pct_ratio_or_zero(annual_btcf, feasibility.net_equity);

    CashflowResult {
        annual_pgi,
        operating_expenses,
        annual_noi,
        cap_rate,
        annual_debt_service,
        annual_btcf,
        monthly_btcf,
        equity_roi,
    }
}
