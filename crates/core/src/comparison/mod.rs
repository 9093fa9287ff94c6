//! Comparison module - explicit selection state for the comparison set.

mod comparison_model;

pub use comparison_model::ComparisonState;
