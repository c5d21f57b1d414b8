//! Multiplier positioning and valuation range computation.
//!
//! This module maps the 0-100 overall score into a multiplier range with a
//! continuous, monotone piecewise function, then produces the low/mid/high
//! estimates per tier.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::MultiplierRange;
use crate::models::{AuditStep, Tier};

/// The result of the valuation range computation, including the audit step.
#[derive(Debug, Clone)]
pub struct ValuationRangeResult {
    /// The applied EBITDA multiple, rounded to two decimal places.
    pub multiple: Decimal,
    /// The low end of the valuation range, whole currency units.
    pub low_estimate: Decimal,
    /// The mid-point valuation estimate, whole currency units.
    pub mid_estimate: Decimal,
    /// The high end of the valuation range, whole currency units.
    pub high_estimate: Decimal,
    /// The audit step recording this computation.
    pub audit_step: AuditStep,
}

/// Positions the 0-100 score inside a multiplier range.
///
/// The bands:
/// - below 60: `min`
/// - 60 to 70: linear from `min` up to `avg`
/// - 70 to 80: `avg`
/// - 80 to 90: linear from `avg` up to 70% of the way to `max`
/// - 90 to 100: linear from the 70% point up to `max` (capped at 100)
///
/// The function is continuous and monotone over the whole scale, so a
/// strictly higher score never yields a strictly lower multiple.
pub fn position_multiple(percent_score: Decimal, range: &MultiplierRange) -> Decimal {
    let ten = Decimal::TEN;
    let b60 = Decimal::new(60, 0);
    let b70 = Decimal::new(70, 0);
    let b80 = Decimal::new(80, 0);
    let b90 = Decimal::new(90, 0);
    let b100 = Decimal::new(100, 0);
    let seventy_pct = Decimal::new(7, 1);
    let thirty_pct = Decimal::new(3, 1);

    let upper_span = range.max - range.avg;
    let lower_span = range.avg - range.min;

    if percent_score >= b90 {
        let fraction = (percent_score.min(b100) - b90) / ten;
        range.avg + upper_span * (seventy_pct + thirty_pct * fraction)
    } else if percent_score >= b80 {
        let fraction = (percent_score - b80) / ten;
        range.avg + upper_span * seventy_pct * fraction
    } else if percent_score >= b70 {
        range.avg
    } else if percent_score >= b60 {
        let fraction = (percent_score - b60) / ten;
        range.min + lower_span * fraction
    } else {
        range.min
    }
}

/// Computes the valuation range from the overall score and adjusted EBITDA.
///
/// The multiple is rounded to two decimal places before the estimates are
/// derived from it, so the reported numbers are mutually consistent. The
/// mid estimate is `adjusted_ebitda x multiple` on both tiers; the band
/// around it differs:
/// - free tier: a fixed +/-20% band around the mid estimate
/// - paid tier: `adjusted_ebitda x min` and `adjusted_ebitda x max`
///
/// All three estimates round to the nearest whole currency unit, half away
/// from zero.
///
/// # Examples
///
/// ```
/// use valuation_engine::calculation::compute_valuation;
/// use valuation_engine::config::MultiplierRange;
/// use valuation_engine::models::Tier;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let range = MultiplierRange {
///     min: Decimal::from_str("2.0").unwrap(),
///     avg: Decimal::from_str("3.5").unwrap(),
///     max: Decimal::from_str("5.0").unwrap(),
/// };
///
/// let result = compute_valuation(
///     Decimal::from_str("85").unwrap(),
///     Decimal::from_str("100000").unwrap(),
///     &range,
///     Tier::Free,
///     1,
/// );
/// assert_eq!(result.multiple, Decimal::from_str("4.03").unwrap());
/// assert_eq!(result.mid_estimate, Decimal::from_str("403000").unwrap());
/// ```
pub fn compute_valuation(
    percent_score: Decimal,
    adjusted_ebitda: Decimal,
    range: &MultiplierRange,
    tier: Tier,
    step_number: u32,
) -> ValuationRangeResult {
    let multiple = position_multiple(percent_score, range)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    let mid_raw = adjusted_ebitda * multiple;
    let (low_raw, high_raw) = match tier {
        Tier::Free => (mid_raw * Decimal::new(8, 1), mid_raw * Decimal::new(12, 1)),
        Tier::Paid => (adjusted_ebitda * range.min, adjusted_ebitda * range.max),
    };
    // A negative adjusted EBITDA flips the band; keep the range ordered.
    let (low_raw, high_raw) = if low_raw <= high_raw {
        (low_raw, high_raw)
    } else {
        (high_raw, low_raw)
    };

    let low_estimate = round_currency(low_raw);
    let mid_estimate = round_currency(mid_raw);
    let high_estimate = round_currency(high_raw);

    let audit_step = AuditStep {
        step_number,
        rule_id: "valuation_range".to_string(),
        rule_name: "Valuation Range Computation".to_string(),
        input: serde_json::json!({
            "percent_score": percent_score.normalize().to_string(),
            "adjusted_ebitda": adjusted_ebitda.normalize().to_string(),
            "range_min": range.min.to_string(),
            "range_avg": range.avg.to_string(),
            "range_max": range.max.to_string(),
            "tier": match tier {
                Tier::Free => "free",
                Tier::Paid => "paid",
            },
        }),
        output: serde_json::json!({
            "multiple": multiple.normalize().to_string(),
            "low_estimate": low_estimate.normalize().to_string(),
            "mid_estimate": mid_estimate.normalize().to_string(),
            "high_estimate": high_estimate.normalize().to_string(),
        }),
        reasoning: format!(
            "Score {} positions the multiple at {}x; estimates {} / {} / {}",
            percent_score.normalize(),
            multiple.normalize(),
            low_estimate.normalize(),
            mid_estimate.normalize(),
            high_estimate.normalize()
        ),
    };

    ValuationRangeResult {
        multiple,
        low_estimate,
        mid_estimate,
        high_estimate,
        audit_step,
    }
}

/// Rounds a monetary amount to the nearest whole currency unit.
fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
