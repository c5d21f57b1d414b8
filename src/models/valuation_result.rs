//! Valuation result models.
//!
//! This module contains the [`ValuationResult`] type and its associated
//! structures that capture all outputs from a valuation, including the
//! normalized EBITDA figures, the estimate range, and the audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Tier;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for one stage of
/// the valuation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during a valuation.
///
/// Warnings indicate conditions worth surfacing that do not prevent the
/// calculation, such as a NAICS code falling back to the default range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a valuation.
///
/// Records every decision made during the calculation process for
/// transparency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a valuation.
///
/// Immutable once computed; the caller persists it and forwards it to the
/// report and CRM collaborators.
///
/// # Example
///
/// ```
/// use valuation_engine::models::{AuditTrace, Tier, ValuationResult};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = ValuationResult {
///     valuation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     tier: Tier::Free,
///     base_ebitda: Decimal::new(100000, 0),
///     adjusted_ebitda: Decimal::new(100000, 0),
///     overall_score: "B".to_string(),
///     valuation_multiple: Decimal::new(403, 2),
///     low_estimate: Decimal::new(322400, 0),
///     mid_estimate: Decimal::new(403000, 0),
///     high_estimate: Decimal::new(483600, 0),
///     matched_naics: None,
///     audit_trace: AuditTrace {
///         steps: vec![],
///         warnings: vec![],
///         duration_us: 0,
///     },
/// };
/// assert!(result.low_estimate <= result.high_estimate);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Unique identifier for this valuation.
    pub valuation_id: Uuid,
    /// When the valuation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the valuation.
    pub engine_version: String,
    /// The tier the assessment was submitted under.
    pub tier: Tier,
    /// Sum of the five earnings components.
    pub base_ebitda: Decimal,
    /// Base EBITDA plus the four addbacks.
    pub adjusted_ebitda: Decimal,
    /// The overall grade, e.g. "B+".
    pub overall_score: String,
    /// The EBITDA multiple applied to the mid estimate.
    pub valuation_multiple: Decimal,
    /// The low end of the valuation range, whole currency units.
    pub low_estimate: Decimal,
    /// The mid-point valuation estimate, whole currency units.
    pub mid_estimate: Decimal,
    /// The high end of the valuation range, whole currency units.
    pub high_estimate: Decimal,
    /// The NAICS table code the multiplier range came from, if any.
    pub matched_naics: Option<String>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
