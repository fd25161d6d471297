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

//! EdgeFit Core - optimization advice for edge AI deployment
//!
//! Given a model's structural metrics and a target device profile, this crate
//! ranks optimization strategies (FP32 baseline, FP16, INT8, or any catalog
//! entry) by the user's priority and explains whether each one fits. It
//! includes:
//!
//! - Footprint estimation and memory feasibility checks
//! - Hardware-aware priority scoring with named, recalibratable rules
//! - Built-in and file-backed hardware and strategy catalogs
//! - Serializable advisor reports

pub mod advisor;
pub mod config;
pub mod error;
pub mod estimation;
pub mod feasibility;
pub mod model;
pub mod optimization;
pub mod priority;
pub mod scoring;
pub mod targets;

pub use advisor::{recommend, Advisor, AdvisorReport, Recommendation};
pub use config::Config;
pub use error::{EdgeFitError, Result};
pub use model::{LayerMetrics, ModelMetrics};
pub use optimization::{Strategy, StrategyCatalog};
pub use priority::Priority;
pub use targets::{HardwareProfile, TargetRegistry};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the EdgeFit core library with logging
pub fn init() -> Result<()> {
    // Try to initialize logger, but don't fail if already initialized
    let _ = env_logger::try_init();
    log::info!("EdgeFit Core v{} initialized", VERSION);
    Ok(())
}
