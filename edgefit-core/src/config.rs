// Copyright 2025 Gibran Rodriguez <brangi000@gmail.com>
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Configuration management for EdgeFit

use crate::advisor::{Advisor, AdvisorReport};
use crate::model::ModelMetrics;
use crate::optimization::StrategyCatalog;
use crate::priority::Priority;
use crate::targets::TargetRegistry;
use crate::{EdgeFitError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Global configuration for EdgeFit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub advisor: AdvisorConfig,
    pub catalog: CatalogConfig,
}

/// Defaults applied when a request leaves them out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Priority used when none is given
    pub default_priority: Priority,
    /// Hardware identifier used when none is given
    pub default_target: String,
}

/// Where hardware profiles and strategies come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory of hardware profile JSON files
    pub hardware_dir: Option<String>,
    /// TOML strategy catalog; the built-in strategies are used when unset
    pub strategy_file: Option<String>,
    /// Register the built-in device profiles before loading `hardware_dir`
    pub include_builtin_hardware: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            advisor: AdvisorConfig {
                default_priority: Priority::Latency,
                default_target: "esp32-s3".to_string(),
            },
            catalog: CatalogConfig {
                hardware_dir: None,
                strategy_file: None,
                include_builtin_hardware: true,
            },
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| EdgeFitError::Configuration(e.to_string()))?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| EdgeFitError::Configuration(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.advisor.default_target.trim().is_empty() {
            return Err(EdgeFitError::Configuration(
                "default_target must not be empty".to_string(),
            ));
        }

        if !self.catalog.include_builtin_hardware && self.catalog.hardware_dir.is_none() {
            return Err(EdgeFitError::Configuration(
                "hardware_dir is required when built-in hardware is disabled".to_string(),
            ));
        }

        Ok(())
    }

    /// Default configuration targeting a built-in device
    pub fn preset(target: &str) -> Result<Self> {
        let target = target.to_lowercase();
        TargetRegistry::builtin().get_target(&target)?;

        let mut config = Self::default();
        config.advisor.default_target = target;
        Ok(config)
    }

    /// Hardware registry described by this configuration
    pub fn hardware_registry(&self) -> Result<TargetRegistry> {
        let mut registry = if self.catalog.include_builtin_hardware {
            TargetRegistry::builtin()
        } else {
            TargetRegistry::new()
        };

        if let Some(dir) = &self.catalog.hardware_dir {
            registry.load_dir(dir)?;
        }

        Ok(registry)
    }

    /// Strategy catalog described by this configuration
    pub fn strategy_catalog(&self) -> Result<StrategyCatalog> {
        match &self.catalog.strategy_file {
            Some(path) => StrategyCatalog::load(path),
            None => Ok(StrategyCatalog::builtin()),
        }
    }

    /// Advisor bound to the configured strategy catalog
    pub fn advisor(&self) -> Result<Advisor> {
        Ok(Advisor::new(self.strategy_catalog()?))
    }

    /// Advise on the configured default target under the default priority
    pub fn advise_default(&self, metrics: &ModelMetrics) -> Result<AdvisorReport> {
        self.validate()?;
        let registry = self.hardware_registry()?;
        let hardware = registry.get_target(&self.advisor.default_target)?;
        log::debug!(
            "Advising with defaults: target {}, priority {}",
            hardware.id,
            self.advisor.default_priority
        );
        self.advisor()?
            .advise_with_priority(metrics, hardware, self.advisor.default_priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.advisor.default_priority, Priority::Latency);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_config_file_operations() {
        let mut config = Config::default();
        config.catalog.hardware_dir = Some("/opt/edgefit/hardware".to_string());
        let temp_file = NamedTempFile::new().unwrap();

        config.save(temp_file.path()).unwrap();
        let loaded = Config::load(temp_file.path()).unwrap();

        assert_eq!(config, loaded);
    }

    #[test]
    fn test_invalid_priority_in_file() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(
            temp_file.path(),
            r#"
[advisor]
default_priority = "throughput"
default_target = "esp32-s3"

[catalog]
include_builtin_hardware = true
"#,
        )
        .unwrap();

        assert!(matches!(
            Config::load(temp_file.path()),
            Err(EdgeFitError::Configuration(_))
        ));
    }

    #[test]
    fn test_preset_configs() {
        let config = Config::preset("jetson-nano").unwrap();
        assert_eq!(config.advisor.default_target, "jetson-nano");

        let config = Config::preset("ESP32-C3").unwrap();
        assert_eq!(config.advisor.default_target, "esp32-c3");
    }

    #[test]
    fn test_invalid_target() {
        assert!(matches!(
            Config::preset("invalid_target"),
            Err(EdgeFitError::UnsupportedTarget { .. })
        ));
    }

    #[test]
    fn test_validate_requires_hardware_source() {
        let mut config = Config::default();
        config.catalog.include_builtin_hardware = false;
        assert!(config.validate().is_err());

        config.catalog.hardware_dir = Some("./hardware".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_advise_default_uses_configured_defaults() {
        let metrics = ModelMetrics::new("beef", 10, 2.0, 64 * 1024);

        let mut config = Config::preset("jetson-nano").unwrap();
        config.advisor.default_priority = Priority::Size;
        let report = config.advise_default(&metrics).unwrap();
        assert_eq!(report.target_hardware, "jetson-nano");
        assert_eq!(report.priority, Priority::Size);
        assert_eq!(report.recommendations.len(), 3);

        let report = Config::default().advise_default(&metrics).unwrap();
        assert_eq!(report.target_hardware, "esp32-s3");
        assert_eq!(report.priority, Priority::Latency);
    }

    #[test]
    fn test_advise_default_unknown_target() {
        let mut config = Config::default();
        config.advisor.default_target = "no-such-board".to_string();
        assert!(matches!(
            config.advise_default(&ModelMetrics::new("beef", 1, 1.0, 1024)),
            Err(EdgeFitError::UnsupportedTarget { .. })
        ));
    }

    #[test]
    fn test_catalogs_from_config() {
        let dir = TempDir::new().unwrap();
        let strategy_path = dir.path().join("strategies.toml");
        let mut catalog = StrategyCatalog::builtin().strategies().to_vec();
        catalog.truncate(2);
        std::fs::write(
            &strategy_path,
            StrategyCatalog::new(catalog).unwrap().to_toml().unwrap(),
        )
        .unwrap();

        let mut config = Config::default();
        config.catalog.strategy_file = Some(strategy_path.to_string_lossy().into_owned());
        config.catalog.hardware_dir = Some(dir.path().to_string_lossy().into_owned());

        assert_eq!(config.strategy_catalog().unwrap().len(), 2);
        assert_eq!(config.advisor().unwrap().catalog().len(), 2);
        assert_eq!(
            config.hardware_registry().unwrap().len(),
            TargetRegistry::builtin().len()
        );
    }
}
