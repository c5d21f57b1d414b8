//! EBITDA normalization.
//!
//! This module validates the raw financial inputs and sums them into the
//! base and adjusted EBITDA figures the valuation is built on.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, FinancialInputs};

/// The storage-safe magnitude bound for every financial input field
/// (999,999,999).
pub fn monetary_magnitude_limit() -> Decimal {
    Decimal::new(999_999_999, 0)
}

/// The result of EBITDA normalization, including the audit step.
#[derive(Debug, Clone)]
pub struct EbitdaNormalizationResult {
    /// Sum of the five earnings components.
    pub base_ebitda: Decimal,
    /// Base EBITDA plus the four addbacks.
    pub adjusted_ebitda: Decimal,
    /// The audit step recording this normalization.
    pub audit_step: AuditStep,
}

/// Normalizes the financial inputs into base and adjusted EBITDA.
///
/// Every component and addback magnitude is checked against the
/// storage-safe bound first; a value beyond it is rejected rather than
/// capped, so obviously-corrupt input never flows into an estimate.
///
/// # Errors
///
/// Returns [`EngineError::NumericOverflow`] naming the first field whose
/// magnitude exceeds the bound.
///
/// # Examples
///
/// ```
/// use valuation_engine::calculation::normalize_ebitda;
/// use valuation_engine::models::{Addbacks, EbitdaComponents, FinancialInputs};
/// use rust_decimal::Decimal;
///
/// let inputs = FinancialInputs {
///     ebitda_components: EbitdaComponents {
///         net_income: Decimal::new(100000, 0),
///         interest: Decimal::ZERO,
///         taxes: Decimal::ZERO,
///         depreciation: Decimal::ZERO,
///         amortization: Decimal::ZERO,
///     },
///     addbacks: Addbacks {
///         owner_salary: Decimal::ZERO,
///         personal_expenses: Decimal::ZERO,
///         one_time_expenses: Decimal::ZERO,
///         other: Decimal::ZERO,
///     },
/// };
///
/// let result = normalize_ebitda(&inputs, 1).unwrap();
/// assert_eq!(result.base_ebitda, Decimal::new(100000, 0));
/// assert_eq!(result.adjusted_ebitda, Decimal::new(100000, 0));
/// ```
pub fn normalize_ebitda(
    inputs: &FinancialInputs,
    step_number: u32,
) -> EngineResult<EbitdaNormalizationResult> {
    let limit = monetary_magnitude_limit();
    for (field, value) in inputs.fields() {
        if value.abs() > limit {
            return Err(EngineError::NumericOverflow {
                field: field.to_string(),
                value,
            });
        }
    }

    let c = &inputs.ebitda_components;
    let base_ebitda = c.net_income + c.interest + c.taxes + c.depreciation + c.amortization;

    let a = &inputs.addbacks;
    let adjusted_ebitda =
        base_ebitda + a.owner_salary + a.personal_expenses + a.one_time_expenses + a.other;

    let input_fields: serde_json::Map<String, serde_json::Value> = inputs
        .fields()
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                serde_json::Value::String(value.normalize().to_string()),
            )
        })
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "ebitda_normalization".to_string(),
        rule_name: "EBITDA Normalization".to_string(),
        input: serde_json::Value::Object(input_fields),
        output: serde_json::json!({
            "base_ebitda": base_ebitda.normalize().to_string(),
            "adjusted_ebitda": adjusted_ebitda.normalize().to_string(),
        }),
        reasoning: format!(
            "Base EBITDA {} from five components; adjusted to {} after addbacks",
            base_ebitda.normalize(),
            adjusted_ebitda.normalize()
        ),
    };

    Ok(EbitdaNormalizationResult {
        base_ebitda,
        adjusted_ebitda,
        audit_step,
    })
}
