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

//! Memory footprint estimation for a model under a strategy

use crate::model::ModelMetrics;
use crate::optimization::Strategy;
use serde::{Deserialize, Serialize};

/// Projected storage and runtime memory footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FootprintEstimate {
    pub rom_bytes: u64,
    pub ram_bytes: u64,
}

impl FootprintEstimate {
    pub fn rom_kb(&self) -> f64 {
        self.rom_bytes as f64 / 1024.0
    }

    pub fn ram_kb(&self) -> f64 {
        self.ram_bytes as f64 / 1024.0
    }
}

/// Estimate ROM and RAM for `metrics` deployed with `strategy`
///
/// ROM is the FP32 weight size scaled by the strategy's storage multiplier.
/// RAM is that stored size scaled by the runtime overhead multiplier, which
/// stands in for activations, scratch buffers and framework overhead. Both
/// round up to whole bytes and saturate at `u64::MAX`.
pub fn estimate(metrics: &ModelMetrics, strategy: &Strategy) -> FootprintEstimate {
    let rom_bytes = scale(metrics.weight_bytes, strategy.rom_multiplier);
    let ram_bytes = scale(rom_bytes, strategy.ram_overhead_multiplier);
    FootprintEstimate {
        rom_bytes,
        ram_bytes,
    }
}

fn scale(bytes: u64, multiplier: f64) -> u64 {
    // `as` saturates and maps NaN to 0
    (bytes as f64 * multiplier.max(0.0)).ceil() as u64
}
