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

//! Recommendation engine: ranks strategies for one model on one device

use crate::estimation::{self, FootprintEstimate};
use crate::feasibility::{self, Feasibility};
use crate::model::ModelMetrics;
use crate::optimization::{Strategy, StrategyCatalog};
use crate::priority::Priority;
use crate::scoring::{self, ScoreBreakdown};
use crate::targets::HardwareProfile;
use crate::{EdgeFitError, Result};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Advice for one strategy on one device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub strategy_id: String,
    pub display_name: String,
    /// Priority-adjusted score in [0, 1]
    pub score: f64,
    pub estimated_rom_bytes: u64,
    pub estimated_ram_bytes: u64,
    pub is_viable: bool,
    /// Human-readable rationale
    pub summary: String,
}

impl Recommendation {
    pub fn estimated_rom_kb(&self) -> f64 {
        self.estimated_rom_bytes as f64 / 1024.0
    }

    pub fn estimated_ram_kb(&self) -> f64 {
        self.estimated_ram_bytes as f64 / 1024.0
    }
}

/// Rank every compatible strategy in `catalog` for `metrics` on `hardware`
///
/// Incompatible strategies are left out entirely; strategies that are
/// compatible but do not fit are kept with `is_viable == false`. The result
/// is sorted by score (descending), then estimated RAM (ascending), then
/// catalog order.
pub fn recommend(
    metrics: &ModelMetrics,
    hardware: &HardwareProfile,
    priority: &str,
    catalog: &[Strategy],
) -> Result<Vec<Recommendation>> {
    let priority = Priority::parse(priority)?;
    recommend_with_priority(metrics, hardware, priority, catalog)
}

/// Same as [`recommend`] with an already-parsed priority
pub fn recommend_with_priority(
    metrics: &ModelMetrics,
    hardware: &HardwareProfile,
    priority: Priority,
    catalog: &[Strategy],
) -> Result<Vec<Recommendation>> {
    metrics.validate()?;
    hardware.validate()?;
    for strategy in catalog {
        strategy.validate()?;
    }

    let compatible: Vec<&Strategy> = catalog
        .iter()
        .filter(|strategy| {
            let compatible = strategy.is_compatible(hardware);
            if !compatible {
                log::debug!("Strategy {} is not applicable to {}", strategy.id, hardware.id);
            }
            compatible
        })
        .collect();

    if compatible.is_empty() {
        return Err(EdgeFitError::EmptyCatalog {
            hardware: hardware.id.clone(),
        });
    }

    let mut recommendations: Vec<Recommendation> = compatible
        .into_iter()
        .map(|strategy| evaluate(metrics, hardware, priority, strategy))
        .collect();

    // Stable: equal score and RAM keep catalog order
    recommendations.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.estimated_ram_bytes.cmp(&b.estimated_ram_bytes))
    });

    log::info!(
        "Ranked {} strategies for model {} on {} ({} priority), {} viable",
        recommendations.len(),
        metrics.short_id(),
        hardware.id,
        priority,
        recommendations.iter().filter(|r| r.is_viable).count()
    );

    Ok(recommendations)
}

fn evaluate(
    metrics: &ModelMetrics,
    hardware: &HardwareProfile,
    priority: Priority,
    strategy: &Strategy,
) -> Recommendation {
    let estimate = estimation::estimate(metrics, strategy);
    let feasibility = feasibility::check(&estimate, hardware);
    let breakdown = scoring::score_breakdown(strategy, hardware, priority);

    log::debug!(
        "{} on {}: ROM {} B, RAM {} B, viable {}, score {:.2}",
        strategy.id,
        hardware.id,
        estimate.rom_bytes,
        estimate.ram_bytes,
        feasibility.is_viable(),
        breakdown.score
    );

    Recommendation {
        strategy_id: strategy.id.clone(),
        display_name: strategy.display_name.clone(),
        score: breakdown.score,
        estimated_rom_bytes: estimate.rom_bytes,
        estimated_ram_bytes: estimate.ram_bytes,
        is_viable: feasibility.is_viable(),
        summary: summarize(strategy, hardware, &estimate, &feasibility, &breakdown),
    }
}

fn summarize(
    strategy: &Strategy,
    hardware: &HardwareProfile,
    estimate: &FootprintEstimate,
    feasibility: &Feasibility,
    breakdown: &ScoreBreakdown,
) -> String {
    let mut summary = format!(
        "{} Estimated ROM {:.1} KB, RAM {:.1} KB.",
        strategy.description,
        estimate.rom_kb(),
        estimate.ram_kb()
    );

    if feasibility.is_viable() {
        summary.push_str(&format!(
            " Feasible: fits within the available RAM ({:.0} KB) and ROM ({:.0} KB).",
            hardware.ram_kb(),
            hardware.rom_kb()
        ));
    } else {
        let mut overruns = Vec::new();
        if let Some(excess) = feasibility.ram_excess {
            overruns.push(format!(
                "RAM exceeds the {:.0} KB limit by {:.1} KB",
                hardware.ram_kb(),
                excess as f64 / 1024.0
            ));
        }
        if let Some(excess) = feasibility.rom_excess {
            overruns.push(format!(
                "ROM exceeds the {:.0} KB limit by {:.1} KB",
                hardware.rom_kb(),
                excess as f64 / 1024.0
            ));
        }
        summary.push_str(&format!(
            " Unfeasible ({} exceeded): {}.",
            feasibility.exceeded_limits(),
            overruns.join("; ")
        ));
    }

    for note in breakdown.notes() {
        summary.push(' ');
        summary.push_str(note);
    }

    summary
}

/// Recommendations for one model on one device, ready for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorReport {
    pub model_sha256: String,
    pub target_hardware: String,
    pub priority: Priority,
    pub generated_at: DateTime<Utc>,
    pub recommendations: Vec<Recommendation>,
}

impl AdvisorReport {
    /// Highest ranked recommendation that fits the device
    pub fn best_viable(&self) -> Option<&Recommendation> {
        self.recommendations.iter().find(|r| r.is_viable)
    }

    pub fn viable_count(&self) -> usize {
        self.recommendations.iter().filter(|r| r.is_viable).count()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_json()?)?;
        log::info!("Advisor report written to {}", path.as_ref().display());
        Ok(())
    }
}

/// Recommendation engine bound to a strategy catalog
#[derive(Debug, Clone)]
pub struct Advisor {
    catalog: StrategyCatalog,
}

impl Advisor {
    pub fn new(catalog: StrategyCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &StrategyCatalog {
        &self.catalog
    }

    /// Ranked recommendations for one device
    pub fn recommend(
        &self,
        metrics: &ModelMetrics,
        hardware: &HardwareProfile,
        priority: &str,
    ) -> Result<Vec<Recommendation>> {
        recommend(metrics, hardware, priority, self.catalog.strategies())
    }

    /// Ranked recommendations wrapped in a timestamped report
    pub fn advise(
        &self,
        metrics: &ModelMetrics,
        hardware: &HardwareProfile,
        priority: &str,
    ) -> Result<AdvisorReport> {
        self.advise_with_priority(metrics, hardware, Priority::parse(priority)?)
    }

    /// Same as [`Advisor::advise`] with an already parsed priority
    pub fn advise_with_priority(
        &self,
        metrics: &ModelMetrics,
        hardware: &HardwareProfile,
        priority: Priority,
    ) -> Result<AdvisorReport> {
        let recommendations =
            recommend_with_priority(metrics, hardware, priority, self.catalog.strategies())?;

        Ok(AdvisorReport {
            model_sha256: metrics.sha256.clone(),
            target_hardware: hardware.id.clone(),
            priority,
            generated_at: Utc::now(),
            recommendations,
        })
    }

    /// Advise for several devices in parallel
    ///
    /// Each device gets its own result, in input order; one device failing
    /// does not affect the others.
    pub fn advise_many(
        &self,
        metrics: &ModelMetrics,
        hardware: &[HardwareProfile],
        priority: &str,
    ) -> Vec<(String, Result<AdvisorReport>)> {
        hardware
            .par_iter()
            .map(|hw| (hw.id.clone(), self.advise(metrics, hw, priority)))
            .collect()
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new(StrategyCatalog::builtin())
    }
}
