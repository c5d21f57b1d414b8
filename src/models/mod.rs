//! Core data models for the Business Valuation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod financial_inputs;
mod tier;
mod valuation_result;
mod value_drivers;

pub use financial_inputs::{Addbacks, EbitdaComponents, FinancialInputs};
pub use tier::Tier;
pub use valuation_result::{AuditStep, AuditTrace, AuditWarning, ValuationResult};
pub use value_drivers::{Grade, GradeModifier, OverallGrade, ValueDriverGrades};
