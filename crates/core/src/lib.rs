//! Sangga Core - investment analysis engine for Korean commercial buildings.
//!
//! This crate contains the calculation core behind the building comparison
//! dashboard: statutory acquisition taxes and fees, investment feasibility
//! and pro-forma cash-flow modelling, and scoring-weight resolution. It is
//! transport-agnostic: callers hand in plain value records (typically
//! deserialized from registry or request JSON) and get value records back.
//!
//! All monetary amounts are in manwon (10,000 KRW); rates are percent as a
//! real number. Calculators never fail and never return a non-finite
//! value: malformed input degrades to zero at the coercion boundary.

pub mod comparison;
pub mod constants;
pub mod errors;
pub mod proforma;
pub mod scoring;
pub mod tax;
pub mod utils;
pub mod weights;

// Re-export the main entry points
pub use comparison::ComparisonState;
pub use proforma::{
    investment_feasibility, proforma_cashflow, CashflowResult, FeasibilityResult, ProFormaParams,
};
pub use scoring::{rank_candidates, weighted_total, CandidateScores, ScoredCandidate};
pub use tax::{acquisition_tax, brokerage_fee};
pub use weights::{
    resolve_weights, AnalysisType, WeightInput, WeightKey, WeightMeta, WeightResolution,
    WeightSet, WeightSource,
};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
