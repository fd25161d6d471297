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

//! Target hardware profiles and the registry that serves them

pub mod arduino;
pub mod esp32;
pub mod jetson;
pub mod mobile;
pub mod raspberry_pi;
pub mod stm32;

use crate::{EdgeFitError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Well-known accelerator capability tags
pub mod accelerator {
    pub const FPU: &str = "fpu";
    pub const GPU: &str = "gpu";
    pub const NPU: &str = "npu";
    pub const DSP: &str = "dsp";
    pub const VECTOR_INSTRUCTIONS: &str = "vector_instructions";
}

/// CPU architecture family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CpuArchitecture {
    /// ARM Cortex-M microcontrollers
    CortexM,
    /// ARM Cortex-A application processors
    CortexA,
    /// Cadence Xtensa (ESP32 family)
    Xtensa,
    RiscV,
    Other,
}

impl CpuArchitecture {
    /// Application-class cores always ship a float unit and SIMD
    pub fn is_application_class(&self) -> bool {
        matches!(self, Self::CortexA)
    }
}

/// Power budget class, used by the energy scoring path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerClass {
    /// Coin cell or energy harvesting
    UltraLow,
    Battery,
    Mains,
}

/// Inference runtimes a device can host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Framework {
    TfliteMicro,
    OnnxRuntime,
}

/// Physical and architectural facts about one target device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareProfile {
    pub id: String,
    pub vendor: String,
    pub display_name: String,
    /// Usable RAM in bytes, after any reserved runtime overhead
    pub ram_bytes: u64,
    /// Usable flash/storage in bytes
    pub rom_bytes: u64,
    pub cpu_architecture: CpuArchitecture,
    #[serde(default)]
    pub accelerators: BTreeSet<String>,
    pub power_class: PowerClass,
    #[serde(default)]
    pub supported_frameworks: BTreeSet<Framework>,
    /// Supported CPU frequencies in MHz
    #[serde(default)]
    pub cpu_freq_mhz: Vec<u32>,
}

impl HardwareProfile {
    /// Check for a capability tag
    pub fn has_accelerator(&self, tag: &str) -> bool {
        self.accelerators.contains(tag)
    }

    /// True if any of the given tags is present
    pub fn has_any_accelerator(&self, tags: &[&str]) -> bool {
        tags.iter().any(|tag| self.has_accelerator(tag))
    }

    pub fn supports_framework(&self, framework: Framework) -> bool {
        self.supported_frameworks.contains(&framework)
    }

    /// Hardware floating point is available to the inference runtime
    pub fn has_float_unit(&self) -> bool {
        self.cpu_architecture.is_application_class()
            || self.has_any_accelerator(&[accelerator::FPU, accelerator::GPU])
    }

    /// An optimized INT8 kernel path exists for this device
    pub fn has_int8_kernel(&self) -> bool {
        self.cpu_architecture.is_application_class()
            || self.has_any_accelerator(&[
                accelerator::DSP,
                accelerator::VECTOR_INSTRUCTIONS,
                accelerator::NPU,
            ])
    }

    pub fn ram_kb(&self) -> f64 {
        self.ram_bytes as f64 / 1024.0
    }

    pub fn rom_kb(&self) -> f64 {
        self.rom_bytes as f64 / 1024.0
    }

    /// Validate physical limits and identity
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(EdgeFitError::InvalidHardware {
                id: self.id.clone(),
                reason: "identifier must not be empty".to_string(),
            });
        }

        if self.ram_bytes == 0 {
            return Err(EdgeFitError::InvalidHardware {
                id: self.id.clone(),
                reason: "ram_bytes must be greater than 0".to_string(),
            });
        }

        if self.rom_bytes == 0 {
            return Err(EdgeFitError::InvalidHardware {
                id: self.id.clone(),
                reason: "rom_bytes must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Load a single profile from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let profile: HardwareProfile = serde_json::from_str(&content)?;
        profile.validate()?;
        Ok(profile)
    }
}

/// Build an accelerator tag set
pub(crate) fn tags(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Registry of hardware profiles keyed by identifier
#[derive(Debug, Clone, Default)]
pub struct TargetRegistry {
    targets: BTreeMap<String, HardwareProfile>,
}

impl TargetRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in device profiles
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        let boards = [
            esp32::esp32_s3(),
            esp32::esp32_c3(),
            stm32::stm32f746_discovery(),
            arduino::nano_33_ble_sense(),
            jetson::jetson_nano(),
            mobile::mobile(),
        ];
        let pis = raspberry_pi::RpiVariant::ALL.map(raspberry_pi::profile);

        for profile in boards.into_iter().chain(pis) {
            // Built-in ids are unique
            registry.targets.insert(profile.id.clone(), profile);
        }

        registry
    }

    /// Add a profile, rejecting invalid profiles and duplicate identifiers
    pub fn register_target(&mut self, profile: HardwareProfile) -> Result<()> {
        profile.validate()?;
        if self.targets.contains_key(&profile.id) {
            return Err(EdgeFitError::DuplicateHardware { id: profile.id });
        }
        self.targets.insert(profile.id.clone(), profile);
        Ok(())
    }

    /// Load every `*.json` profile in a directory
    ///
    /// A missing directory yields no profiles. Files that fail to parse or
    /// validate are skipped with a warning. A duplicate identifier, against
    /// the registry or another file in the directory, is an error and leaves
    /// the registry unchanged.
    pub fn load_dir<P: AsRef<Path>>(&mut self, dir: P) -> Result<usize> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            log::debug!("Hardware directory {} not found, nothing to load", dir.display());
            return Ok(0);
        }

        let mut paths: Vec<_> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("json"))
            .collect();
        paths.sort();

        let mut staged: BTreeMap<String, HardwareProfile> = BTreeMap::new();
        for path in paths {
            let profile = match HardwareProfile::load(&path) {
                Ok(profile) => profile,
                Err(e) => {
                    log::warn!("Skipping hardware profile {}: {}", path.display(), e);
                    continue;
                }
            };

            if self.targets.contains_key(&profile.id) || staged.contains_key(&profile.id) {
                return Err(EdgeFitError::DuplicateHardware { id: profile.id });
            }
            staged.insert(profile.id.clone(), profile);
        }

        let loaded = staged.len();
        self.targets.append(&mut staged);

        log::info!("Loaded {} hardware profiles from {}", loaded, dir.display());
        Ok(loaded)
    }

    pub fn get_target(&self, id: &str) -> Result<&HardwareProfile> {
        self.targets
            .get(id)
            .ok_or_else(|| EdgeFitError::UnsupportedTarget {
                target: id.to_string(),
            })
    }

    /// Identifiers in sorted order
    pub fn list_targets(&self) -> Vec<&str> {
        self.targets.keys().map(|s| s.as_str()).collect()
    }

    pub fn profiles(&self) -> impl Iterator<Item = &HardwareProfile> {
        self.targets.values()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_profiles_are_valid() {
        let registry = TargetRegistry::builtin();
        assert!(!registry.is_empty());
        for profile in registry.profiles() {
            assert!(profile.validate().is_ok(), "{} failed validation", profile.id);
        }
    }

    #[test]
    fn test_builtin_includes_every_pi_variant() {
        let registry = TargetRegistry::builtin();
        assert_eq!(registry.len(), 10);
        for variant in raspberry_pi::RpiVariant::ALL {
            let profile = registry.get_target(variant.id()).unwrap();
            assert_eq!(profile.display_name, variant.display_name());
        }
    }

    #[test]
    fn test_get_target() {
        let registry = TargetRegistry::builtin();
        let esp32 = registry.get_target("esp32-s3").unwrap();
        assert_eq!(esp32.cpu_architecture, CpuArchitecture::Xtensa);
        assert!(esp32.has_accelerator(accelerator::VECTOR_INSTRUCTIONS));

        assert!(matches!(
            registry.get_target("nonexistent"),
            Err(EdgeFitError::UnsupportedTarget { .. })
        ));
    }

    #[test]
    fn test_capability_helpers() {
        let registry = TargetRegistry::builtin();

        let c3 = registry.get_target("esp32-c3").unwrap();
        assert!(!c3.has_float_unit());
        assert!(!c3.has_int8_kernel());

        let pi = registry.get_target("raspberry-pi-4b").unwrap();
        assert!(pi.has_float_unit());
        assert!(pi.has_int8_kernel());
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let mut profile = esp32::esp32_s3();
        profile.ram_bytes = 0;
        assert!(matches!(
            profile.validate(),
            Err(EdgeFitError::InvalidHardware { .. })
        ));

        let mut profile = esp32::esp32_s3();
        profile.rom_bytes = 0;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_register_duplicate() {
        let mut registry = TargetRegistry::new();
        registry.register_target(esp32::esp32_s3()).unwrap();
        assert!(matches!(
            registry.register_target(esp32::esp32_s3()),
            Err(EdgeFitError::DuplicateHardware { .. })
        ));
    }

    #[test]
    fn test_load_dir_skips_invalid_files() {
        let dir = TempDir::new().unwrap();
        let profile = stm32::stm32f746_discovery();
        std::fs::write(
            dir.path().join("stm32.json"),
            serde_json::to_string_pretty(&profile).unwrap(),
        )
        .unwrap();
        std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let mut registry = TargetRegistry::new();
        let loaded = registry.load_dir(dir.path()).unwrap();
        assert_eq!(loaded, 1);
        assert_eq!(registry.get_target(&profile.id).unwrap(), &profile);
    }

    #[test]
    fn test_load_dir_duplicate_leaves_registry_unchanged() {
        let dir = TempDir::new().unwrap();
        let write = |name: &str, profile: &HardwareProfile| {
            std::fs::write(
                dir.path().join(name),
                serde_json::to_string_pretty(profile).unwrap(),
            )
            .unwrap();
        };
        write("a.json", &stm32::stm32f746_discovery());
        write("b.json", &esp32::esp32_s3());
        write("c.json", &esp32::esp32_s3());

        let mut registry = TargetRegistry::new();
        registry.register_target(esp32::esp32_c3()).unwrap();
        assert!(matches!(
            registry.load_dir(dir.path()),
            Err(EdgeFitError::DuplicateHardware { ref id }) if id == "esp32-s3"
        ));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.list_targets(), vec!["esp32-c3"]);
    }

    #[test]
    fn test_load_dir_missing_directory() {
        let mut registry = TargetRegistry::new();
        assert_eq!(registry.load_dir("/definitely/not/here").unwrap(), 0);
    }

    #[test]
    fn test_profile_json_field_names() {
        let json = r#"{
            "id": "custom-m4",
            "vendor": "Acme",
            "display_name": "Acme M4 board",
            "ram_bytes": 131072,
            "rom_bytes": 524288,
            "cpu_architecture": "cortex_m",
            "accelerators": ["fpu", "dsp"],
            "power_class": "ultra_low",
            "supported_frameworks": ["tflite_micro"]
        }"#;
        let profile: HardwareProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.cpu_architecture, CpuArchitecture::CortexM);
        assert_eq!(profile.power_class, PowerClass::UltraLow);
        assert!(profile.supports_framework(Framework::TfliteMicro));
        assert!(profile.cpu_freq_mhz.is_empty());
    }
}
