//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading multiplier
//! tables from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::types::{
    DefaultsConfig, IndustriesConfig, MultiplierRange, TablesMetadata, ValuationTables,
};

/// Loads and provides access to the multiplier tables.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// validates every table entry before the engine accepts a request.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/valuation/
/// ├── tables.yaml      # Table-set metadata
/// ├── defaults.yaml    # Global default multiplier range
/// └── industries.yaml  # NAICS-coded multiplier ranges
/// ```
///
/// # Example
///
/// ```no_run
/// use valuation_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/valuation").unwrap();
/// println!("Default avg multiple: {}", loader.tables().default_range().avg);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    tables: ValuationTables,
}

impl ConfigLoader {
    /// Loads the multiplier tables from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/valuation")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any NAICS code is not 2-6 ASCII digits
    /// - Any range violates `0 < min <= avg <= max`
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata_path = path.join("tables.yaml");
        let metadata = Self::load_yaml::<TablesMetadata>(&metadata_path)?;

        let defaults_path = path.join("defaults.yaml");
        let defaults = Self::load_yaml::<DefaultsConfig>(&defaults_path)?;

        let industries_path = path.join("industries.yaml");
        let industries_config = Self::load_yaml::<IndustriesConfig>(&industries_path)?;

        Self::validate_range("default", &defaults.default_range)?;
        for (code, entry) in &industries_config.industries {
            Self::validate_code(code)?;
            Self::validate_range(code, &entry.range)?;
        }

        let tables = ValuationTables::new(
            metadata,
            defaults.default_range,
            industries_config.industries,
        );

        Ok(Self { tables })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Rejects codes that are not 2-6 ASCII digits.
    fn validate_code(code: &str) -> EngineResult<()> {
        let valid = (2..=6).contains(&code.len()) && code.bytes().all(|b| b.is_ascii_digit());
        if valid {
            Ok(())
        } else {
            Err(EngineError::InvalidMultiplierRange {
                code: code.to_string(),
                message: "NAICS code must be 2-6 digits".to_string(),
            })
        }
    }

    /// Rejects ranges that are non-positive or out of order.
    fn validate_range(code: &str, range: &MultiplierRange) -> EngineResult<()> {
        if range.min <= Decimal::ZERO {
            return Err(EngineError::InvalidMultiplierRange {
                code: code.to_string(),
                message: format!("min multiple {} must be positive", range.min),
            });
        }
        if range.min > range.avg || range.avg > range.max {
            return Err(EngineError::InvalidMultiplierRange {
                code: code.to_string(),
                message: format!(
                    "range must satisfy min <= avg <= max, got {} / {} / {}",
                    range.min, range.avg, range.max
                ),
            });
        }
        Ok(())
    }

    /// Returns the loaded multiplier tables.
    pub fn tables(&self) -> &ValuationTables {
        &self.tables
    }
}
