//! Financial input models.
//!
//! This module defines the raw earnings components and discretionary
//! addbacks that feed EBITDA normalization.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The five earnings components that sum to base EBITDA.
///
/// All amounts are signed: a business can report a net loss, and tax or
/// interest lines can carry credits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EbitdaComponents {
    /// Net income for the period.
    pub net_income: Decimal,
    /// Interest expense added back.
    pub interest: Decimal,
    /// Income taxes added back.
    pub taxes: Decimal,
    /// Depreciation added back.
    pub depreciation: Decimal,
    /// Amortization added back.
    pub amortization: Decimal,
}

/// Discretionary normalization adjustments applied on top of base EBITDA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addbacks {
    /// Excess owner salary above a market-rate replacement.
    pub owner_salary: Decimal,
    /// Personal expenses run through the business.
    pub personal_expenses: Decimal,
    /// One-time, non-recurring expenses.
    pub one_time_expenses: Decimal,
    /// Any other normalization adjustment.
    pub other: Decimal,
}

/// The complete financial input to a valuation.
///
/// # Example
///
/// ```
/// use valuation_engine::models::{Addbacks, EbitdaComponents, FinancialInputs};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let inputs = FinancialInputs {
///     ebitda_components: EbitdaComponents {
///         net_income: Decimal::from_str("850000").unwrap(),
///         interest: Decimal::from_str("12000").unwrap(),
///         taxes: Decimal::from_str("96000").unwrap(),
///         depreciation: Decimal::from_str("40000").unwrap(),
///         amortization: Decimal::from_str("15000").unwrap(),
///     },
///     addbacks: Addbacks {
///         owner_salary: Decimal::from_str("120000").unwrap(),
///         personal_expenses: Decimal::from_str("18000").unwrap(),
///         one_time_expenses: Decimal::from_str("25000").unwrap(),
///         other: Decimal::ZERO,
///     },
/// };
/// assert_eq!(inputs.ebitda_components.net_income, Decimal::from_str("850000").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialInputs {
    /// The earnings components that sum to base EBITDA.
    pub ebitda_components: EbitdaComponents,
    /// The discretionary addbacks applied on top of base EBITDA.
    pub addbacks: Addbacks,
}

impl FinancialInputs {
    /// Returns every field as a `(name, value)` pair for validation and
    /// audit purposes, components first, addbacks after.
    pub fn fields(&self) -> [(&'static str, Decimal); 9] {
        let c = &self.ebitda_components;
        let a = &self.addbacks;
        [
            ("net_income", c.net_income),
            ("interest", c.interest),
            ("taxes", c.taxes),
            ("depreciation", c.depreciation),
            ("amortization", c.amortization),
            ("owner_salary", a.owner_salary),
            ("personal_expenses", a.personal_expenses),
            ("one_time_expenses", a.one_time_expenses),
            ("other", a.other),
        ]
    }
}
