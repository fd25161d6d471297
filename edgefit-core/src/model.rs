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

//! Model metrics consumed by the recommendation engine
//!
//! The engine never sees a model graph. Whatever analyzes the model file hands
//! over a flat [`ModelMetrics`] aggregate; this module holds that record plus
//! the helpers for identifying and loading it.

use crate::{EdgeFitError, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Structural facts about one model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    /// Hex SHA-256 of the serialized model
    pub sha256: String,
    /// Number of computational nodes
    pub total_operations: u64,
    /// Multiply-accumulate operations, in millions
    pub total_macs: f64,
    /// Size of learned parameters at FP32 precision
    pub weight_bytes: u64,
    /// Optional per-layer breakdown, diagnostics only
    #[serde(default)]
    pub layers: Vec<LayerMetrics>,
}

/// One entry of the per-layer breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerMetrics {
    pub op_type: String,
    /// Multiply-accumulate operations, in millions
    pub macs: f64,
    pub parameter_bytes: u64,
}

impl ModelMetrics {
    pub fn new(
        sha256: impl Into<String>,
        total_operations: u64,
        total_macs: f64,
        weight_bytes: u64,
    ) -> Self {
        Self {
            sha256: sha256.into(),
            total_operations,
            total_macs,
            weight_bytes,
            layers: Vec::new(),
        }
    }

    /// Attach a per-layer breakdown
    pub fn with_layers(mut self, layers: Vec<LayerMetrics>) -> Self {
        self.layers = layers;
        self
    }

    /// Hex SHA-256 of raw model bytes
    pub fn fingerprint(bytes: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        format!("{:x}", hasher.finalize())
    }

    /// Hex SHA-256 of a model file, read in chunks
    pub fn fingerprint_file<P: AsRef<Path>>(path: P) -> Result<String> {
        let mut file = std::fs::File::open(path.as_ref())?;
        let mut hasher = Sha256::new();
        let mut buffer = [0u8; 8192];
        loop {
            let read = file.read(&mut buffer)?;
            if read == 0 {
                break;
            }
            hasher.update(&buffer[..read]);
        }
        Ok(format!("{:x}", hasher.finalize()))
    }

    /// Load a metrics record from a JSON file and validate it
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let metrics: ModelMetrics =
            serde_json::from_str(&content).map_err(|e| EdgeFitError::InvalidMetrics {
                reason: e.to_string(),
            })?;
        metrics.validate()?;
        log::info!(
            "Loaded model metrics {}: {} operations, {:.2}M MACs, {:.1} KB of weights",
            metrics.short_id(),
            metrics.total_operations,
            metrics.total_macs,
            metrics.weight_kb()
        );
        Ok(metrics)
    }

    /// Save the metrics record as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Check the record is inside the engine's input domain
    pub fn validate(&self) -> Result<()> {
        if !self.total_macs.is_finite() || self.total_macs < 0.0 {
            return Err(EdgeFitError::InvalidMetrics {
                reason: format!("total_macs must be a non-negative number, got {}", self.total_macs),
            });
        }

        for (index, layer) in self.layers.iter().enumerate() {
            if !layer.macs.is_finite() || layer.macs < 0.0 {
                return Err(EdgeFitError::InvalidMetrics {
                    reason: format!(
                        "layer {} ({}) has invalid MAC count {}",
                        index, layer.op_type, layer.macs
                    ),
                });
            }
        }

        Ok(())
    }

    /// Weight size in kilobytes
    pub fn weight_kb(&self) -> f64 {
        self.weight_bytes as f64 / 1024.0
    }

    /// First twelve characters of the hash, for log lines
    pub fn short_id(&self) -> &str {
        let end = self.sha256.len().min(12);
        self.sha256.get(..end).unwrap_or(&self.sha256)
    }

    /// Number of layers per operator type
    pub fn op_type_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for layer in &self.layers {
            *counts.entry(layer.op_type.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Layer with the most multiply-accumulates, if a breakdown is present
    pub fn heaviest_layer(&self) -> Option<&LayerMetrics> {
        self.layers.iter().max_by(|a, b| a.macs.total_cmp(&b.macs))
    }
}
