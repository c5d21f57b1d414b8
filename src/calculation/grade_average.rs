//! Overall grade derivation.
//!
//! This module averages the ten value-driver grades into a single letter
//! with a `+`/`-` modifier, and maps the average onto the 0-100 score scale
//! that multiplier positioning consumes.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{AuditStep, Grade, GradeModifier, OverallGrade, ValueDriverGrades};

/// The deviation from the rounded score beyond which a `+`/`-` modifier is
/// attached (0.3).
pub fn grade_modifier_threshold() -> Decimal {
    Decimal::new(3, 1)
}

/// The result of deriving the overall grade, including the audit step.
#[derive(Debug, Clone)]
pub struct GradeAverageResult {
    /// The derived overall grade.
    pub overall: OverallGrade,
    /// The arithmetic mean of the ten grade scores (1-5 scale).
    pub mean: Decimal,
    /// The mean mapped onto the 0-100 score scale.
    pub percent_score: Decimal,
    /// The audit step recording this derivation.
    pub audit_step: AuditStep,
}

/// Derives the overall grade from the ten value-driver grades.
///
/// Each grade converts to its numeric score (A=5 through F=1); the
/// arithmetic mean is rounded (half away from zero) to the nearest score,
/// clamped to [1, 5], and mapped back to a letter. The modifier is `+` when
/// the mean sits more than 0.3 above the rounded score and `-` when it sits
/// more than 0.3 below.
///
/// The function is total: the `ValueDriverGrades` type already guarantees
/// ten grades from the closed letter set.
///
/// # Examples
///
/// ```
/// use valuation_engine::calculation::derive_overall_grade;
/// use valuation_engine::models::{Grade, GradeModifier, ValueDriverGrades};
///
/// let result = derive_overall_grade(&ValueDriverGrades::uniform(Grade::B), 1);
/// assert_eq!(result.overall.letter, Grade::B);
/// assert_eq!(result.overall.modifier, GradeModifier::None);
/// ```
pub fn derive_overall_grade(grades: &ValueDriverGrades, step_number: u32) -> GradeAverageResult {
    let scores = grades.grades().map(|g| g.score());
    let total: Decimal = scores.iter().copied().sum();
    let mean = total / Decimal::TEN;

    let rounded = mean
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(1)
        .clamp(1, 5);
    let letter = Grade::from_score(rounded);

    let canonical = Decimal::new(rounded, 0);
    let threshold = grade_modifier_threshold();
    let modifier = if mean > canonical + threshold {
        GradeModifier::Plus
    } else if mean < canonical - threshold {
        GradeModifier::Minus
    } else {
        GradeModifier::None
    };

    let overall = OverallGrade { letter, modifier };
    let percent_score = percent_score(mean);

    let grade_strings: Vec<String> = grades.grades().iter().map(|g| g.to_string()).collect();
    let audit_step = AuditStep {
        step_number,
        rule_id: "grade_average".to_string(),
        rule_name: "Overall Grade Derivation".to_string(),
        input: serde_json::json!({
            "grades": grade_strings,
        }),
        output: serde_json::json!({
            "mean": mean.normalize().to_string(),
            "overall_grade": overall.to_string(),
            "percent_score": percent_score.normalize().to_string(),
        }),
        reasoning: format!(
            "Mean score {} rounds to {} ({}); percent score {}",
            mean.normalize(),
            rounded,
            overall,
            percent_score.normalize()
        ),
    };

    GradeAverageResult {
        overall,
        mean,
        percent_score,
        audit_step,
    }
}

/// Maps a grade mean (1-5 scale) onto the 0-100 score scale.
///
/// The mapping interpolates linearly between the canonical letter anchors
/// F=50, D=65, C=75, B=85, A=95, so a whole-letter mean lands exactly on
/// its band's canonical score.
pub fn percent_score(mean: Decimal) -> Decimal {
    // Anchors indexed by integer score 1..=5.
    fn anchor(score: i64) -> Decimal {
        match score {
            5 => Decimal::new(95, 0),
            4 => Decimal::new(85, 0),
            3 => Decimal::new(75, 0),
            2 => Decimal::new(65, 0),
            _ => Decimal::new(50, 0),
        }
    }

    let clamped = mean.clamp(Decimal::ONE, Decimal::new(5, 0));
    let floor = clamped.floor();
    let lower = floor.to_i64().unwrap_or(1);
    if lower >= 5 {
        return anchor(5);
    }

    let fraction = clamped - floor;
    anchor(lower) + (anchor(lower + 1) - anchor(lower)) * fraction
}
