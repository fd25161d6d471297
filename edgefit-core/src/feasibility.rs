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

//! Memory fit checks against a hardware profile

use crate::estimation::FootprintEstimate;
use crate::targets::HardwareProfile;
use serde::{Deserialize, Serialize};

/// Outcome of comparing an estimate with a device's limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feasibility {
    /// Bytes over the ROM limit, if any
    pub rom_excess: Option<u64>,
    /// Bytes over the RAM limit, if any
    pub ram_excess: Option<u64>,
}

impl Feasibility {
    pub fn is_viable(&self) -> bool {
        self.rom_excess.is_none() && self.ram_excess.is_none()
    }

    /// Which limits are exceeded, for summaries
    pub fn exceeded_limits(&self) -> &'static str {
        match (self.rom_excess.is_some(), self.ram_excess.is_some()) {
            (true, true) => "RAM and ROM",
            (false, true) => "RAM",
            (true, false) => "ROM",
            (false, false) => "none",
        }
    }
}

/// Compare an estimate with the device limits; equality fits
pub fn check(estimate: &FootprintEstimate, hardware: &HardwareProfile) -> Feasibility {
    let excess = |used: u64, limit: u64| (used > limit).then(|| used - limit);
    Feasibility {
        rom_excess: excess(estimate.rom_bytes, hardware.rom_bytes),
        ram_excess: excess(estimate.ram_bytes, hardware.ram_bytes),
    }
}

/// True iff both footprints fit within the device limits
pub fn is_viable(rom_bytes: u64, ram_bytes: u64, hardware: &HardwareProfile) -> bool {
    rom_bytes <= hardware.rom_bytes && ram_bytes <= hardware.ram_bytes
}
