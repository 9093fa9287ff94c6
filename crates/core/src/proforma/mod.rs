//! Pro-forma module - investment feasibility and cash-flow models.

mod proforma_model;
mod proforma_service;

pub use proforma_model::{CashflowResult, FeasibilityResult, ProFormaParams};
pub use proforma_service::{investment_feasibility, proforma_cashflow};
