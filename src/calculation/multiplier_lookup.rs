//! Industry-aware multiplier lookup.
//!
//! This module resolves a NAICS code to a multiplier range by walking the
//! code hierarchy from most to least specific, falling back to the global
//! default range. The lookup is total: it always yields a usable range.

use crate::config::{MultiplierRange, ValuationTables};
use crate::models::{AuditStep, AuditWarning, Tier};

/// The result of a multiplier range lookup, including the audit step.
#[derive(Debug, Clone)]
pub struct MultiplierLookupResult {
    /// The resolved multiplier range.
    pub range: MultiplierRange,
    /// The table code the range came from; `None` when the default applied.
    pub matched_code: Option<String>,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
    /// A warning attached when a paid-tier code fell back to the default.
    pub warning: Option<AuditWarning>,
}

/// Resolves the multiplier range for a NAICS code and tier.
///
/// The free tier always resolves to the global default range and ignores
/// the code. The paid tier tries the full code first, then progressively
/// truncates it (6 -> 5 -> 4 -> 3 -> 2 digits) so that a more specific
/// entry always wins over its ancestors; when no level matches, the
/// default range applies and a warning is attached instead of an error.
///
/// # Examples
///
/// ```no_run
/// use valuation_engine::calculation::lookup_multiplier_range;
/// use valuation_engine::config::ConfigLoader;
/// use valuation_engine::models::Tier;
///
/// let loader = ConfigLoader::load("./config/valuation").unwrap();
/// let result = lookup_multiplier_range(Some("238160"), Tier::Paid, loader.tables(), 1);
/// assert_eq!(result.matched_code.as_deref(), Some("238160"));
/// ```
pub fn lookup_multiplier_range(
    code: Option<&str>,
    tier: Tier,
    tables: &ValuationTables,
    step_number: u32,
) -> MultiplierLookupResult {
    if !tier.is_paid() {
        let range = *tables.default_range();
        return MultiplierLookupResult {
            range,
            matched_code: None,
            audit_step: lookup_audit_step(step_number, code, None, &range, "free tier"),
            warning: None,
        };
    }

    if let Some(code) = code {
        let longest = code.len().min(6);
        for len in (2..=longest).rev() {
            // get() rather than slicing: a malformed code must miss, not panic.
            let Some(prefix) = code.get(..len) else {
                continue;
            };
            if let Some(entry) = tables.industry(prefix) {
                let detail = if prefix == code {
                    "exact match".to_string()
                } else {
                    format!("ancestor of '{}'", code)
                };
                return MultiplierLookupResult {
                    range: entry.range,
                    matched_code: Some(prefix.to_string()),
                    audit_step: lookup_audit_step(
                        step_number,
                        Some(code),
                        Some(prefix),
                        &entry.range,
                        &detail,
                    ),
                    warning: None,
                };
            }
        }
    }

    let range = *tables.default_range();
    let warning = code.map(|code| AuditWarning {
        code: "NAICS_FALLBACK".to_string(),
        message: format!(
            "NAICS code '{}' not found at any hierarchy level; using the default range",
            code
        ),
        severity: "low".to_string(),
    });

    MultiplierLookupResult {
        range,
        matched_code: None,
        audit_step: lookup_audit_step(step_number, code, None, &range, "default fallback"),
        warning,
    }
}

fn lookup_audit_step(
    step_number: u32,
    requested: Option<&str>,
    matched: Option<&str>,
    range: &MultiplierRange,
    detail: &str,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "multiplier_lookup".to_string(),
        rule_name: "Multiplier Range Lookup".to_string(),
        input: serde_json::json!({
            "naics_code": requested,
        }),
        output: serde_json::json!({
            "matched_code": matched,
            "min": range.min.to_string(),
            "avg": range.avg.to_string(),
            "max": range.max.to_string(),
        }),
        reasoning: format!(
            "Resolved range {}x-{}x ({})",
            range.min, range.max, detail
        ),
    }
}
