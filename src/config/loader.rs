//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for reading an optional
//! YAML file that overrides the calculator's startup constants.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{LeaveError, LeaveResult};

use super::types::CalculatorConfig;

/// Loads and provides access to the calculator configuration.
///
/// # File Format
///
/// ```yaml
/// statutory_allowance_days: 25
/// rounding_precision: 2
/// leave_year_start:
///   month: 4
///   day: 6
/// ```
///
/// Any field may be omitted.
///
/// # Example
///
/// ```no_run
/// use leave_calculator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./leave.yaml")?;
/// println!("Rounding to {} places", loader.config().rounding_precision);
/// # Ok::<(), leave_calculator::error::LeaveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads and validates configuration from a YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist or cannot be read (`ConfigNotFound`)
    /// - The file is not valid YAML for [`CalculatorConfig`] (`ConfigParseError`)
    /// - A field holds an unusable value (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> LeaveResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| LeaveError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::from_yaml(&content, &path_str)?;
        info!(
            path = %path_str,
            allowance = %config.config.statutory_allowance_days,
            precision = config.config.rounding_precision,
            "Loaded calculator configuration"
        );
        Ok(config)
    }

    /// Loads configuration from `path` if given, otherwise the built-in
    /// defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> LeaveResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parses and validates YAML configuration text.
    ///
    /// `origin` names the source in error messages.
    pub fn from_yaml(content: &str, origin: &str) -> LeaveResult<Self> {
        let config: CalculatorConfig =
            serde_yaml::from_str(content).map_err(|e| LeaveError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }
}
