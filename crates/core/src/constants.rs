use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Composite acquisition tax rate for commercial property:
/// 4.0% acquisition + 0.2% rural special tax + 0.4% local education tax.
pub const ACQUISITION_TAX_RATE: Decimal = dec!(0.046);

/// Brokerage fee rate: 0.9% legal cap plus 10% VAT.
pub const BROKERAGE_FEE_RATE: Decimal = dec!(0.0099);

/// Flat estimate for legal and other closing fees.
pub const LEGAL_FEE_RATE: Decimal = dec!(0.002);

/// Operating expense ratio applied to potential gross income.
pub const OPERATING_EXPENSE_RATIO: Decimal = dec!(0.05);

pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Maximum number of buildings in one comparison set.
pub const MAX_COMPARISON_TARGETS: usize = 3;

/// Decimal places for weight percentages in display output.
pub const WEIGHT_DISPLAY_PRECISION: usize = 1;
