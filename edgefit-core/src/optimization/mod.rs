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

//! Optimization strategy definitions and the strategy catalog

pub mod quantization;

use crate::priority::Priority;
use crate::targets::{CpuArchitecture, Framework, HardwareProfile};
use crate::{EdgeFitError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Numeric precision a strategy deploys weights at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Fp32,
    Fp16,
    Int8,
}

impl Precision {
    pub fn bits(&self) -> u32 {
        match self {
            Self::Fp32 => 32,
            Self::Fp16 => 16,
            Self::Int8 => 8,
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::Fp32 | Self::Fp16)
    }
}

/// Intrinsic suitability of a strategy for each priority, in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityWeights {
    pub latency: f64,
    pub energy: f64,
    pub size: f64,
}

impl PriorityWeights {
    pub fn get(&self, priority: Priority) -> f64 {
        match priority {
            Priority::Latency => self.latency,
            Priority::Energy => self.energy,
            Priority::Size => self.size,
        }
    }
}

/// Table-driven hardware compatibility predicate
///
/// A strategy applies to a device unless its architecture is denied, it lacks
/// a required accelerator, or it supports none of the required frameworks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Compatibility {
    #[serde(default)]
    pub denied_architectures: Vec<CpuArchitecture>,
    #[serde(default)]
    pub required_accelerators: Vec<String>,
    /// At least one of these must be supported; empty means any
    #[serde(default)]
    pub required_frameworks: Vec<Framework>,
}

impl Compatibility {
    pub fn is_compatible(&self, hardware: &HardwareProfile) -> bool {
        if self.denied_architectures.contains(&hardware.cpu_architecture) {
            return false;
        }

        if !self
            .required_accelerators
            .iter()
            .all(|tag| hardware.has_accelerator(tag))
        {
            return false;
        }

        self.required_frameworks.is_empty()
            || self
                .required_frameworks
                .iter()
                .any(|framework| hardware.supports_framework(*framework))
    }
}

/// A named optimization technique and its effect multipliers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    pub id: String,
    pub display_name: String,
    /// One-sentence description of what the strategy does
    pub description: String,
    pub precision: Precision,
    /// Stored size relative to FP32 weights
    pub rom_multiplier: f64,
    /// Peak runtime memory relative to stored size
    pub ram_overhead_multiplier: f64,
    #[serde(default)]
    pub compatibility: Compatibility,
    pub priority_weights: PriorityWeights,
}

impl Strategy {
    pub fn is_compatible(&self, hardware: &HardwareProfile) -> bool {
        self.compatibility.is_compatible(hardware)
    }

    /// Check multipliers and weights are inside their documented ranges
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| EdgeFitError::InvalidStrategy {
            id: self.id.clone(),
            reason,
        };

        if self.id.trim().is_empty() {
            return Err(invalid("identifier must not be empty".to_string()));
        }

        if !self.rom_multiplier.is_finite() || self.rom_multiplier <= 0.0 {
            return Err(invalid(format!(
                "rom_multiplier must be positive, got {}",
                self.rom_multiplier
            )));
        }

        // RAM holds the loaded weights plus working buffers
        if !self.ram_overhead_multiplier.is_finite() || self.ram_overhead_multiplier < 1.0 {
            return Err(invalid(format!(
                "ram_overhead_multiplier must be at least 1.0, got {}",
                self.ram_overhead_multiplier
            )));
        }

        for priority in Priority::ALL {
            let weight = self.priority_weights.get(priority);
            if !(0.0..=1.0).contains(&weight) {
                return Err(invalid(format!(
                    "{} weight must be within [0, 1], got {}",
                    priority, weight
                )));
            }
        }

        Ok(())
    }
}

/// Ordered collection of strategies; declaration order is the final tie-break
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyCatalog {
    strategies: Vec<Strategy>,
}

impl StrategyCatalog {
    /// Build a catalog, validating every strategy and rejecting duplicate ids
    pub fn new(strategies: Vec<Strategy>) -> Result<Self> {
        let mut seen = HashSet::new();
        for strategy in &strategies {
            strategy.validate()?;
            if !seen.insert(strategy.id.as_str()) {
                return Err(EdgeFitError::Catalog(format!(
                    "duplicate strategy identifier: {}",
                    strategy.id
                )));
            }
        }
        Ok(Self { strategies })
    }

    /// Baseline FP32, FP16 and INT8
    pub fn builtin() -> Self {
        Self {
            strategies: vec![
                quantization::baseline_fp32(),
                quantization::fp16(),
                quantization::int8(),
            ],
        }
    }

    /// Load a catalog from a TOML file with a `[[strategies]]` array
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml(&content)?;
        log::info!(
            "Loaded {} strategies from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let raw: StrategyCatalog =
            toml::from_str(content).map_err(|e| EdgeFitError::Catalog(e.to_string()))?;
        Self::new(raw.strategies)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| EdgeFitError::Catalog(e.to_string()))
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    pub fn get(&self, id: &str) -> Option<&Strategy> {
        self.strategies.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
