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

//! NVIDIA Jetson hardware profiles

use super::{accelerator, tags, CpuArchitecture, Framework, HardwareProfile, PowerClass};

/// Jetson Nano 4GB: quad Cortex-A57 with a 128-core Maxwell GPU
pub fn jetson_nano() -> HardwareProfile {
    HardwareProfile {
        id: "jetson-nano".to_string(),
        vendor: "NVIDIA".to_string(),
        display_name: "Jetson Nano".to_string(),
        ram_bytes: 3 * 1024 * 1024 * 1024,  // ~3GB left after L4T
        rom_bytes: 16 * 1024 * 1024 * 1024, // 16GB eMMC
        cpu_architecture: CpuArchitecture::CortexA,
        accelerators: tags(&[
            accelerator::FPU,
            accelerator::GPU,
            accelerator::VECTOR_INSTRUCTIONS,
        ]),
        power_class: PowerClass::Mains,
        supported_frameworks: [Framework::OnnxRuntime].into_iter().collect(),
        cpu_freq_mhz: vec![1430],
    }
}
