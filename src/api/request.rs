//! Request types for the Business Valuation Engine API.
//!
//! This module defines the JSON request structure for the `/valuate`
//! endpoint.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{FinancialInputs, Tier, ValueDriverGrades};

/// Request body for the `/valuate` endpoint.
///
/// Contains the raw financial inputs, the ten value-driver grades, the
/// product tier, and an optional NAICS industry code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationRequest {
    /// The five earnings components and four addbacks.
    #[serde(flatten)]
    pub financials: FinancialInputs,
    /// The ten value-driver grades, keyed by dimension name.
    ///
    /// Kept as an open string map so that grading gaps and typos are
    /// rejected with field-level errors rather than failing opaquely
    /// during deserialization.
    pub value_driver_grades: HashMap<String, String>,
    /// The NAICS industry code (2-6 digits), paid tier only.
    #[serde(default)]
    pub naics_code: Option<String>,
    /// The product tier the assessment was submitted under.
    pub tier: Tier,
}

impl ValuationRequest {
    /// Validates the grade map into the strongly-typed grade set.
    pub fn grades(&self) -> EngineResult<ValueDriverGrades> {
        ValueDriverGrades::from_map(&self.value_driver_grades)
    }
}
