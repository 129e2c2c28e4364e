//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading accrual
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{
    AccrualConfig, AccrualParameters, BasePeriod, HoursBounds, SegmentDefinition, SegmentsConfig,
    StatuteMetadata,
};

const BUILTIN_STATUTE: &str = include_str!("../../config/tw_lsa/statute.yaml");
const BUILTIN_PARAMETERS: &str = include_str!("../../config/tw_lsa/parameters.yaml");
const BUILTIN_SEGMENTS: &str = include_str!("../../config/tw_lsa/segments.yaml");

/// Loads and provides access to accrual configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query the baseline hours and segment table.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/tw_lsa/
/// ├── statute.yaml     # Statute metadata
/// ├── parameters.yaml  # Baseline hours, hour bounds, thresholds
/// └── segments.yaml    # Tenure segment table
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/tw_lsa")?;
/// println!("Loaded statute: {}", loader.statute().name);
/// # Ok::<(), leave_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AccrualConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/tw_lsa")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The parsed configuration cannot drive a calculation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<StatuteMetadata>(&path.join("statute.yaml"))?;
        let parameters = Self::load_yaml::<AccrualParameters>(&path.join("parameters.yaml"))?;
        let segments = Self::load_yaml::<SegmentsConfig>(&path.join("segments.yaml"))?;

        let config = AccrualConfig::new(metadata, parameters, segments.segments)?;
        debug!(
            path = %path.display(),
            statute = %config.statute().code,
            segments = config.segments().len(),
            "Loaded accrual configuration"
        );

        Ok(Self { config })
    }

    /// Returns the configuration compiled into the crate.
    ///
    /// The built-in tables are the Labor Standards Act milestones: six months
    /// through six years, prorated against 2088 hours a year.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::config::ConfigLoader;
    /// use rust_decimal::Decimal;
    ///
    /// let loader = ConfigLoader::builtin().unwrap();
    /// assert_eq!(loader.segments().len(), 7);
    /// assert_eq!(loader.year_base_hours(), Decimal::from(2088));
    /// ```
    pub fn builtin() -> EngineResult<Self> {
        Self::from_yaml_strs(BUILTIN_STATUTE, BUILTIN_PARAMETERS, BUILTIN_SEGMENTS)
    }

    /// Builds a loader from in-memory YAML documents.
    pub fn from_yaml_strs(statute: &str, parameters: &str, segments: &str) -> EngineResult<Self> {
        let metadata = Self::parse_yaml::<StatuteMetadata>("statute.yaml", statute)?;
        let parameters = Self::parse_yaml::<AccrualParameters>("parameters.yaml", parameters)?;
        let segments = Self::parse_yaml::<SegmentsConfig>("segments.yaml", segments)?;

        let config = AccrualConfig::new(metadata, parameters, segments.segments)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&path_str, &content)
    }

    fn parse_yaml<T: serde::de::DeserializeOwned>(source: &str, content: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: source.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the underlying accrual configuration.
    pub fn config(&self) -> &AccrualConfig {
        &self.config
    }

    /// Returns the statute metadata.
    pub fn statute(&self) -> &StatuteMetadata {
        self.config.statute()
    }

    /// Returns the segment table in reporting order.
    pub fn segments(&self) -> &[SegmentDefinition] {
        self.config.segments()
    }

    /// Returns the accepted monthly hours range.
    pub fn hours_bounds(&self) -> HoursBounds {
        self.config.hours_bounds()
    }

    /// Ordinary hours in a full year (2088 under the built-in tables).
    pub fn year_base_hours(&self) -> Decimal {
        self.config.base_hours(BasePeriod::Year)
    }

    /// Ordinary hours in half a year (1044 under the built-in tables).
    pub fn half_year_base_hours(&self) -> Decimal {
        self.config.base_hours(BasePeriod::HalfYear)
    }

    /// Valid months needed before any leave is granted.
    pub fn minimum_entitled_months(&self) -> usize {
        self.config.parameters().minimum_entitled_months
    }

    /// Most months a single bulk-fill may create.
    pub fn bulk_fill_max_months(&self) -> usize {
        self.config.parameters().bulk_fill_max_months
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/tw_lsa"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.statute().code, "LSA-38");
    }

    #[test]
    fn test_builtin_matches_config_directory() {
        let from_disk = ConfigLoader::load(config_path()).unwrap();
        let builtin = ConfigLoader::builtin().unwrap();

        assert_eq!(from_disk.segments(), builtin.segments());
        assert_eq!(from_disk.hours_bounds(), builtin.hours_bounds());
        assert_eq!(from_disk.year_base_hours(), builtin.year_base_hours());
    }

    #[test]
    fn test_base_hours_derivation() {
        let loader = ConfigLoader::builtin().unwrap();
        assert_eq!(loader.year_base_hours(), Decimal::from(2088));
        assert_eq!(loader.half_year_base_hours(), Decimal::from(1044));
        assert_eq!(loader.config().hours_per_day(), Decimal::from(8));
    }

    #[test]
    fn test_segment_table() {
        let loader = ConfigLoader::builtin().unwrap();
        let table: Vec<(&str, usize, usize, BasePeriod, u32)> = loader
            .segments()
            .iter()
            .map(|s| {
                (
                    s.label.as_str(),
                    s.start_index,
                    s.length,
                    s.base,
                    s.entitlement_days,
                )
            })
            .collect();

        assert_eq!(
            table,
            vec![
                ("滿 6 個月", 0, 6, BasePeriod::HalfYear, 3),
                ("滿 1 年", 0, 12, BasePeriod::Year, 7),
                ("滿 2 年", 12, 12, BasePeriod::Year, 10),
                ("滿 3 年", 24, 12, BasePeriod::Year, 14),
                ("滿 4 年", 36, 12, BasePeriod::Year, 14),
                ("滿 5 年", 48, 12, BasePeriod::Year, 15),
                ("滿 6 年", 60, 12, BasePeriod::Year, 15),
            ]
        );
    }

    #[test]
    fn test_thresholds() {
        let loader = ConfigLoader::builtin().unwrap();
        assert_eq!(loader.minimum_entitled_months(), 6);
        assert_eq!(loader.bulk_fill_max_months(), 600);
        assert_eq!(loader.hours_bounds(), HoursBounds::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("statute.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_malformed_yaml_returns_parse_error() {
        let result = ConfigLoader::from_yaml_strs(BUILTIN_STATUTE, BUILTIN_PARAMETERS, "segments: [");

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert_eq!(path, "segments.yaml");
            }
            _ => panic!("Expected ConfigParseError"),
        }
    }

    #[test]
    fn test_empty_segment_table_is_rejected() {
        let result = ConfigLoader::from_yaml_strs(BUILTIN_STATUTE, BUILTIN_PARAMETERS, "segments: []");
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_inverted_bounds_are_rejected() {
        let parameters = BUILTIN_PARAMETERS
            .replace("min: \"0\"", "min: \"200\"");
        let result = ConfigLoader::from_yaml_strs(BUILTIN_STATUTE, &parameters, BUILTIN_SEGMENTS);

        match result {
            Err(EngineError::InvalidConfig { message }) => {
                assert!(message.contains("hours_bounds"));
            }
            _ => panic!("Expected InvalidConfig error"),
        }
    }

    #[test]
    fn test_unknown_base_period_is_parse_error() {
        let segments = r#"
segments:
  - label: "x"
    clause: "y"
    start_index: 0
    length: 6
    base: quarter
    entitlement_days: 1
"#;
        let result = ConfigLoader::from_yaml_strs(BUILTIN_STATUTE, BUILTIN_PARAMETERS, segments);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }
}
