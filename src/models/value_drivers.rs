//! Value-driver grade models.
//!
//! This module defines the letter-grade enum, the ten-dimension grade set,
//! and the derived overall grade with its `+`/`-` modifier.

use std::collections::HashMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A letter grade for a single value-driver dimension.
///
/// The grade set is closed: anything outside A-F (E included) is rejected
/// at the boundary rather than mapped to a fallback score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// Excellent (score 5).
    A,
    /// Good (score 4).
    B,
    /// Average (score 3).
    C,
    /// Below average (score 2).
    D,
    /// Poor (score 1).
    F,
}

impl Grade {
    /// Returns the numeric score for this grade (A=5 through F=1).
    pub fn score(&self) -> Decimal {
        match self {
            Grade::A => Decimal::new(5, 0),
            Grade::B => Decimal::new(4, 0),
            Grade::C => Decimal::new(3, 0),
            Grade::D => Decimal::new(2, 0),
            Grade::F => Decimal::new(1, 0),
        }
    }

    /// Parses a grade letter, returning `None` for anything outside the
    /// closed set.
    pub fn from_letter(letter: &str) -> Option<Grade> {
        match letter {
            "A" => Some(Grade::A),
            "B" => Some(Grade::B),
            "C" => Some(Grade::C),
            "D" => Some(Grade::D),
            "F" => Some(Grade::F),
            _ => None,
        }
    }

    /// Maps an integer score back to its grade letter.
    ///
    /// The score must already be clamped to [1, 5].
    pub fn from_score(score: i64) -> Grade {
        match score {
            5 => Grade::A,
            4 => Grade::B,
            3 => Grade::C,
            2 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{}", letter)
    }
}

/// The `+`/`-` modifier attached to an overall grade when the mean deviates
/// far enough from the rounded letter's canonical score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeModifier {
    /// Mean sits more than 0.3 above the rounded score.
    Plus,
    /// Mean sits more than 0.3 below the rounded score.
    Minus,
    /// Mean is within 0.3 of the rounded score.
    None,
}

impl fmt::Display for GradeModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GradeModifier::Plus => "+",
            GradeModifier::Minus => "-",
            GradeModifier::None => "",
        };
        write!(f, "{}", s)
    }
}

/// The overall grade derived from the ten value-driver grades.
///
/// # Example
///
/// ```
/// use valuation_engine::models::{Grade, GradeModifier, OverallGrade};
///
/// let overall = OverallGrade {
///     letter: Grade::B,
///     modifier: GradeModifier::Plus,
/// };
/// assert_eq!(overall.to_string(), "B+");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallGrade {
    /// The rounded letter grade.
    pub letter: Grade,
    /// The deviation modifier.
    pub modifier: GradeModifier,
}

impl fmt::Display for OverallGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.modifier)
    }
}

/// The ten graded business-quality dimensions.
///
/// Every dimension carries exactly one grade; partial grading is rejected
/// at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueDriverGrades {
    /// Quality and consistency of historical financial performance.
    pub financial_performance: Grade,
    /// Revenue dependence on a small number of customers.
    pub customer_concentration: Grade,
    /// Depth and autonomy of the management team.
    pub management_team: Grade,
    /// Strength of the competitive position in the market.
    pub competitive_position: Grade,
    /// Realistic growth prospects for the business.
    pub growth_prospects: Grade,
    /// Documented systems and repeatable processes.
    pub systems_processes: Grade,
    /// Condition and quality of operating assets.
    pub asset_quality: Grade,
    /// Outlook of the industry the business operates in.
    pub industry_outlook: Grade,
    /// Exposure to identified risk factors.
    pub risk_factors: Grade,
    /// Dependence of the business on its owner.
    pub owner_dependency: Grade,
}

impl ValueDriverGrades {
    /// The ten dimension names, in canonical order.
    pub const DIMENSIONS: [&'static str; 10] = [
        "financial_performance",
        "customer_concentration",
        "management_team",
        "competitive_position",
        "growth_prospects",
        "systems_processes",
        "asset_quality",
        "industry_outlook",
        "risk_factors",
        "owner_dependency",
    ];

    /// Builds a grade set from a loosely-typed dimension map.
    ///
    /// Every one of the ten dimensions must be present with a letter from
    /// the closed grade set, and no extra dimensions are accepted.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MissingDimension`] if a dimension is absent
    /// - [`EngineError::UnknownDimension`] if an unrecognized key is present
    /// - [`EngineError::InvalidGrade`] if a value is not in {A, B, C, D, F}
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use valuation_engine::models::{Grade, ValueDriverGrades};
    ///
    /// let map: HashMap<String, String> = ValueDriverGrades::DIMENSIONS
    ///     .iter()
    ///     .map(|d| (d.to_string(), "B".to_string()))
    ///     .collect();
    ///
    /// let grades = ValueDriverGrades::from_map(&map).unwrap();
    /// assert_eq!(grades.management_team, Grade::B);
    /// ```
    pub fn from_map(map: &HashMap<String, String>) -> EngineResult<Self> {
        for key in map.keys() {
            if !Self::DIMENSIONS.contains(&key.as_str()) {
                return Err(EngineError::UnknownDimension {
                    dimension: key.clone(),
                });
            }
        }

        let lookup = |dimension: &str| -> EngineResult<Grade> {
            let value = map
                .get(dimension)
                .ok_or_else(|| EngineError::MissingDimension {
                    dimension: dimension.to_string(),
                })?;
            Grade::from_letter(value).ok_or_else(|| EngineError::InvalidGrade {
                dimension: dimension.to_string(),
                value: value.clone(),
            })
        };

        Ok(Self {
            financial_performance: lookup("financial_performance")?,
            customer_concentration: lookup("customer_concentration")?,
            management_team: lookup("management_team")?,
            competitive_position: lookup("competitive_position")?,
            growth_prospects: lookup("growth_prospects")?,
            systems_processes: lookup("systems_processes")?,
            asset_quality: lookup("asset_quality")?,
            industry_outlook: lookup("industry_outlook")?,
            risk_factors: lookup("risk_factors")?,
            owner_dependency: lookup("owner_dependency")?,
        })
    }

    /// Builds a grade set with the same grade in every dimension.
    pub fn uniform(grade: Grade) -> Self {
        Self {
            financial_performance: grade,
            customer_concentration: grade,
            management_team: grade,
            competitive_position: grade,
            growth_prospects: grade,
            systems_processes: grade,
            asset_quality: grade,
            industry_outlook: grade,
            risk_factors: grade,
            owner_dependency: grade,
        }
    }

    /// Returns all ten grades in canonical dimension order.
    pub fn grades(&self) -> [Grade; 10] {
        [
            self.financial_performance,
            self.customer_concentration,
            self.management_team,
            self.competitive_position,
            self.growth_prospects,
            self.systems_processes,
            self.asset_quality,
            self.industry_outlook,
            self.risk_factors,
            self.owner_dependency,
        ]
    }
}
