//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! parameters from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{FgtsPenaltyRates, NoticeRules, StatuteConfig, StatuteMetadata};

/// Loads and provides access to the statutory configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides access to the notice rules and FGTS penalty rates the engine
/// calculates with.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/clt/
/// ├── statute.yaml   # Statute metadata and legal references
/// ├── notice.yaml    # Lei 12.506/2011 notice parameters
/// └── fgts.yaml      # FGTS penalty rates
/// ```
///
/// # Example
///
/// ```no_run
/// use termination_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/clt").unwrap();
/// println!("Statute: {}", loader.metadata().name);
/// println!("Notice floor: {} days", loader.notice_rules().base_days);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StatuteConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/clt")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use termination_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/clt")?;
    /// # Ok::<(), termination_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<StatuteMetadata>(&path.join("statute.yaml"))?;
        let notice = Self::load_yaml::<NoticeRules>(&path.join("notice.yaml"))?;
        let fgts = Self::load_yaml::<FgtsPenaltyRates>(&path.join("fgts.yaml"))?;

        Ok(Self {
            config: StatuteConfig::new(metadata, notice, fgts),
        })
    }

    /// Creates a loader carrying the built-in statutory defaults.
    ///
    /// Useful for library callers that do not ship configuration files.
    pub fn with_defaults() -> Self {
        Self {
            config: StatuteConfig::default(),
        }
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

    /// Returns the full statutory configuration.
    pub fn statute(&self) -> &StatuteConfig {
        &self.config
    }

    /// Returns the statute metadata.
    pub fn metadata(&self) -> &StatuteMetadata {
        self.config.metadata()
    }

    /// Returns the notice-period accrual parameters.
    pub fn notice_rules(&self) -> &NoticeRules {
        self.config.notice()
    }

    /// Returns the FGTS penalty rates.
    pub fn fgts_rates(&self) -> &FgtsPenaltyRates {
        self.config.fgts()
    }
}
