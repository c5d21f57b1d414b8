//! Property-based tests for the valuation calculation pipeline.
//!
//! These tests exercise the calculation functions directly (without the
//! HTTP layer) over generated inputs, covering the invariants the engine
//! guarantees: idempotence, monotonicity, range containment, hierarchy
//! precedence, and totality of the lookup.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashMap;

use valuation_engine::calculation::{
    compute_valuation, derive_overall_grade, lookup_multiplier_range, position_multiple,
};
use valuation_engine::config::{IndustryEntry, MultiplierRange, TablesMetadata, ValuationTables};
use valuation_engine::models::{Grade, Tier, ValueDriverGrades};

// =============================================================================
// Strategies
// =============================================================================

fn grade_strategy() -> impl Strategy<Value = Grade> {
    prop::sample::select(vec![Grade::A, Grade::B, Grade::C, Grade::D, Grade::F])
}

fn grades_strategy() -> impl Strategy<Value = ValueDriverGrades> {
    prop::collection::vec(grade_strategy(), 10).prop_map(|g| ValueDriverGrades {
        financial_performance: g[0],
        customer_concentration: g[1],
        management_team: g[2],
        competitive_position: g[3],
        growth_prospects: g[4],
        systems_processes: g[5],
        asset_quality: g[6],
        industry_outlook: g[7],
        risk_factors: g[8],
        owner_dependency: g[9],
    })
}

/// Multiplier ranges between 0.1x and 12.0x with min <= avg <= max.
fn range_strategy() -> impl Strategy<Value = MultiplierRange> {
    prop::collection::vec(1i64..=120, 3).prop_map(|mut tenths| {
        tenths.sort_unstable();
        MultiplierRange {
            min: Decimal::new(tenths[0], 1),
            avg: Decimal::new(tenths[1], 1),
            max: Decimal::new(tenths[2], 1),
        }
    })
}

/// Adjusted EBITDA values across the full storage-safe bound, signed.
fn ebitda_strategy() -> impl Strategy<Value = Decimal> {
    (-999_999_999i64..=999_999_999).prop_map(|units| Decimal::new(units, 0))
}

/// Percent scores across the whole 0-100 positioning scale, in tenths.
fn score_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=1000).prop_map(|tenths| Decimal::new(tenths, 1))
}

fn tier_strategy() -> impl Strategy<Value = Tier> {
    prop::sample::select(vec![Tier::Free, Tier::Paid])
}

/// Tables holding a 6-digit entry and its 2-digit ancestor.
fn tables_with(code: &str, leaf: MultiplierRange, ancestor: MultiplierRange) -> ValuationTables {
    let mut industries = HashMap::new();
    industries.insert(
        code.to_string(),
        IndustryEntry {
            name: "Leaf Industry".to_string(),
            range: leaf,
        },
    );
    industries.insert(
        code[..2].to_string(),
        IndustryEntry {
            name: "Ancestor Sector".to_string(),
            range: ancestor,
        },
    );

    ValuationTables::new(
        TablesMetadata {
            name: "Property Tables".to_string(),
            version: "test".to_string(),
            source: "generated".to_string(),
        },
        MultiplierRange {
            min: Decimal::new(20, 1),
            avg: Decimal::new(35, 1),
            max: Decimal::new(50, 1),
        },
        industries,
    )
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Identical inputs always produce identical outputs.
    #[test]
    fn prop_valuation_is_idempotent(
        grades in grades_strategy(),
        range in range_strategy(),
        ebitda in ebitda_strategy(),
        tier in tier_strategy(),
    ) {
        let score = derive_overall_grade(&grades, 1).percent_score;
        let first = compute_valuation(score, ebitda, &range, tier, 1);
        let second = compute_valuation(score, ebitda, &range, tier, 1);

        prop_assert_eq!(first.multiple, second.multiple);
        prop_assert_eq!(first.low_estimate, second.low_estimate);
        prop_assert_eq!(first.mid_estimate, second.mid_estimate);
        prop_assert_eq!(first.high_estimate, second.high_estimate);
    }

    /// A higher score never positions a lower multiple in the same range.
    #[test]
    fn prop_positioning_is_monotone(
        range in range_strategy(),
        a in score_strategy(),
        b in score_strategy(),
    ) {
        let (lower, higher) = if a <= b { (a, b) } else { (b, a) };

        prop_assert!(
            position_multiple(lower, &range) <= position_multiple(higher, &range),
            "score {} positioned above score {}",
            lower,
            higher
        );
    }

    /// The positioned multiple always stays inside the range.
    #[test]
    fn prop_multiple_stays_inside_range(
        range in range_strategy(),
        score in score_strategy(),
    ) {
        let multiple = position_multiple(score, &range);

        prop_assert!(multiple >= range.min);
        prop_assert!(multiple <= range.max);
    }

    /// Estimates are always ordered, on both tiers and for signed EBITDA.
    #[test]
    fn prop_estimates_are_contained(
        grades in grades_strategy(),
        range in range_strategy(),
        ebitda in ebitda_strategy(),
        tier in tier_strategy(),
    ) {
        let score = derive_overall_grade(&grades, 1).percent_score;
        let result = compute_valuation(score, ebitda, &range, tier, 1);

        prop_assert!(result.low_estimate <= result.mid_estimate);
        prop_assert!(result.mid_estimate <= result.high_estimate);
    }

    /// Moving every dimension up one grade never lowers the multiple.
    #[test]
    fn prop_uniform_grade_ladder_is_monotone(range in range_strategy()) {
        let ladder = [Grade::F, Grade::D, Grade::C, Grade::B, Grade::A];
        let mut previous = Decimal::MIN;

        for grade in ladder {
            let score = derive_overall_grade(&ValueDriverGrades::uniform(grade), 1).percent_score;
            let multiple = position_multiple(score, &range);
            prop_assert!(multiple >= previous);
            previous = multiple;
        }
    }

    /// The derived mean and percent score stay inside their scales.
    #[test]
    fn prop_grade_derivation_stays_in_bounds(grades in grades_strategy()) {
        let result = derive_overall_grade(&grades, 1);

        prop_assert!(result.mean >= Decimal::ONE);
        prop_assert!(result.mean <= Decimal::new(5, 0));
        prop_assert!(result.percent_score >= Decimal::new(50, 0));
        prop_assert!(result.percent_score <= Decimal::new(95, 0));
    }

    /// A 6-digit entry always wins over its 2-digit ancestor.
    #[test]
    fn prop_specific_entry_beats_ancestor(
        digits in proptest::string::string_regex("[0-9]{6}").unwrap(),
        leaf in range_strategy(),
        ancestor in range_strategy(),
    ) {
        let tables = tables_with(&digits, leaf, ancestor);
        let result = lookup_multiplier_range(Some(&digits), Tier::Paid, &tables, 1);

        prop_assert_eq!(result.matched_code.as_deref(), Some(digits.as_str()));
        prop_assert_eq!(result.range, leaf);
    }

    /// The lookup is total: arbitrary code strings resolve to a valid range.
    #[test]
    fn prop_lookup_is_total(
        code in proptest::string::string_regex(".{0,12}").unwrap(),
        tier in tier_strategy(),
    ) {
        let tables = tables_with(
            "238160",
            MultiplierRange {
                min: Decimal::new(59, 1),
                avg: Decimal::new(72, 1),
                max: Decimal::new(84, 1),
            },
            MultiplierRange {
                min: Decimal::new(25, 1),
                avg: Decimal::new(35, 1),
                max: Decimal::new(45, 1),
            },
        );
        let result = lookup_multiplier_range(Some(&code), tier, &tables, 1);

        prop_assert!(result.range.min <= result.range.avg);
        prop_assert!(result.range.avg <= result.range.max);
    }
}
