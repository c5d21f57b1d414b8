//! Configuration types for the multiplier tables.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML table files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Metadata about the multiplier table set.
#[derive(Debug, Clone, Deserialize)]
pub struct TablesMetadata {
    /// The human-readable name of the table set.
    pub name: String,
    /// The version or effective date of the tables.
    pub version: String,
    /// Where the table data was sourced from.
    pub source: String,
}

/// An EBITDA multiplier range.
///
/// Invariant after load: `0 < min <= avg <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MultiplierRange {
    /// The lowest multiple in the range.
    pub min: Decimal,
    /// The average multiple for the range.
    pub avg: Decimal,
    /// The highest multiple in the range.
    pub max: Decimal,
}

/// A single industry entry in the NAICS table.
#[derive(Debug, Clone, Deserialize)]
pub struct IndustryEntry {
    /// The industry name (e.g., "Roofing Contractors").
    pub name: String,
    /// The multiplier range for this industry.
    #[serde(flatten)]
    pub range: MultiplierRange,
}

/// Defaults configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    /// The global default multiplier range.
    pub default_range: MultiplierRange,
}

/// Industries configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct IndustriesConfig {
    /// Map of NAICS code (2-6 digits) to industry entry.
    pub industries: HashMap<String, IndustryEntry>,
}

/// The complete multiplier table set loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the table files in
/// a configuration directory. It is immutable after load; the lookup walk
/// in the calculation layer only reads it.
#[derive(Debug, Clone)]
pub struct ValuationTables {
    /// Table-set metadata.
    metadata: TablesMetadata,
    /// The global default multiplier range.
    default_range: MultiplierRange,
    /// Industry entries keyed by NAICS code.
    industries: HashMap<String, IndustryEntry>,
}

impl ValuationTables {
    /// Creates a new ValuationTables from its component parts.
    pub fn new(
        metadata: TablesMetadata,
        default_range: MultiplierRange,
        industries: HashMap<String, IndustryEntry>,
    ) -> Self {
        Self {
            metadata,
            default_range,
            industries,
        }
    }

    /// Returns the table-set metadata.
    pub fn metadata(&self) -> &TablesMetadata {
        &self.metadata
    }

    /// Returns the global default multiplier range.
    pub fn default_range(&self) -> &MultiplierRange {
        &self.default_range
    }

    /// Returns the industry entry for an exact NAICS code, if present.
    pub fn industry(&self, code: &str) -> Option<&IndustryEntry> {
        self.industries.get(code)
    }

    /// Returns all industry entries.
    pub fn industries(&self) -> &HashMap<String, IndustryEntry> {
        &self.industries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_multiplier_range_deserializes_from_yaml() {
        let yaml = r#"
min: "2.0"
avg: "3.5"
max: "5.0"
"#;
        let range: MultiplierRange = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(range.min, dec("2.0"));
        assert_eq!(range.avg, dec("3.5"));
        assert_eq!(range.max, dec("5.0"));
    }

    #[test]
    fn test_industry_entry_flattens_range() {
        let yaml = r#"
name: "Roofing Contractors"
min: "5.9"
avg: "7.2"
max: "8.4"
"#;
        let entry: IndustryEntry = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(entry.name, "Roofing Contractors");
        assert_eq!(entry.range.min, dec("5.9"));
        assert_eq!(entry.range.max, dec("8.4"));
    }

    #[test]
    fn test_industries_config_deserializes_code_map() {
        let yaml = r#"
industries:
  "23":
    name: "Construction"
    min: "2.5"
    avg: "3.5"
    max: "4.5"
  "238160":
    name: "Roofing Contractors"
    min: "5.9"
    avg: "7.2"
    max: "8.4"
"#;
        let config: IndustriesConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.industries.len(), 2);
        assert_eq!(config.industries["238160"].name, "Roofing Contractors");
    }

    #[test]
    fn test_tables_accessors() {
        let metadata = TablesMetadata {
            name: "Test Tables".to_string(),
            version: "2025-07-01".to_string(),
            source: "curated".to_string(),
        };
        let default_range = MultiplierRange {
            min: dec("2.0"),
            avg: dec("3.5"),
            max: dec("5.0"),
        };
        let mut industries = HashMap::new();
        industries.insert(
            "23".to_string(),
            IndustryEntry {
                name: "Construction".to_string(),
                range: MultiplierRange {
                    min: dec("2.5"),
                    avg: dec("3.5"),
                    max: dec("4.5"),
                },
            },
        );

        let tables = ValuationTables::new(metadata, default_range, industries);
        assert_eq!(tables.metadata().name, "Test Tables");
        assert_eq!(tables.default_range().avg, dec("3.5"));
        assert!(tables.industry("23").is_some());
        assert!(tables.industry("99").is_none());
    }
}
