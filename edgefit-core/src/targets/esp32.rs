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

//! ESP32 family hardware profiles

use super::{accelerator, tags, CpuArchitecture, Framework, HardwareProfile, PowerClass};

/// ESP32-S3 (N8R0): dual-core Xtensa LX7 with vector extensions
pub fn esp32_s3() -> HardwareProfile {
    HardwareProfile {
        id: "esp32-s3".to_string(),
        vendor: "Espressif".to_string(),
        display_name: "ESP32-S3".to_string(),
        ram_bytes: 512 * 1024,      // 512KB SRAM
        rom_bytes: 8 * 1024 * 1024, // 8MB Flash
        cpu_architecture: CpuArchitecture::Xtensa,
        accelerators: tags(&[accelerator::VECTOR_INSTRUCTIONS, accelerator::FPU]),
        power_class: PowerClass::Battery,
        supported_frameworks: [Framework::TfliteMicro].into_iter().collect(),
        cpu_freq_mhz: vec![160, 240],
    }
}

/// ESP32-C3: single-core RISC-V without FPU
pub fn esp32_c3() -> HardwareProfile {
    HardwareProfile {
        id: "esp32-c3".to_string(),
        vendor: "Espressif".to_string(),
        display_name: "ESP32-C3".to_string(),
        ram_bytes: 400 * 1024,      // 400KB SRAM
        rom_bytes: 4 * 1024 * 1024, // 4MB Flash
        cpu_architecture: CpuArchitecture::RiscV,
        accelerators: tags(&[]),
        power_class: PowerClass::Battery,
        supported_frameworks: [Framework::TfliteMicro].into_iter().collect(),
        cpu_freq_mhz: vec![80, 160],
    }
}
