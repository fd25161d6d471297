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

//! Arduino hardware profiles

use super::{accelerator, tags, CpuArchitecture, Framework, HardwareProfile, PowerClass};

/// Arduino Nano 33 BLE Sense (nRF52840, Cortex-M4F)
pub fn nano_33_ble_sense() -> HardwareProfile {
    HardwareProfile {
        id: "arduino-nano-33-ble".to_string(),
        vendor: "Arduino".to_string(),
        display_name: "Arduino Nano 33 BLE Sense".to_string(),
        ram_bytes: 256 * 1024,  // 256KB RAM
        rom_bytes: 1024 * 1024, // 1MB Flash
        cpu_architecture: CpuArchitecture::CortexM,
        accelerators: tags(&[accelerator::FPU, accelerator::DSP]),
        power_class: PowerClass::UltraLow,
        supported_frameworks: [Framework::TfliteMicro].into_iter().collect(),
        cpu_freq_mhz: vec![64],
    }
}
