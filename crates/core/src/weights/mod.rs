//! Weights module - scoring weight models, resolution, and display.

mod weight_display;
mod weights_model;
mod weights_service;

pub use weight_display::{format_percent, weight_breakdown, weight_rule_summary, WeightBreakdownRow};
pub use weights_model::{
    AnalysisType, WeightInput, WeightKey, WeightMeta, WeightResolution, WeightSet, WeightSource,
};
pub use weights_service::resolve_weights;
