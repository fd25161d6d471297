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

//! Mobile SoC hardware profile

use super::{accelerator, tags, CpuArchitecture, Framework, HardwareProfile, PowerClass};

/// Generic mid-range phone SoC with GPU, DSP and neural engine
pub fn mobile() -> HardwareProfile {
    HardwareProfile {
        id: "mobile".to_string(),
        vendor: "Generic".to_string(),
        display_name: "Mobile SoC".to_string(),
        ram_bytes: 100 * 1024 * 1024, // 100MB available for ML
        rom_bytes: 500 * 1024 * 1024, // 500MB app storage
        cpu_architecture: CpuArchitecture::CortexA,
        accelerators: tags(&[
            accelerator::FPU,
            accelerator::GPU,
            accelerator::NPU,
            accelerator::DSP,
            accelerator::VECTOR_INSTRUCTIONS,
        ]),
        power_class: PowerClass::Battery,
        supported_frameworks: [Framework::OnnxRuntime].into_iter().collect(),
        cpu_freq_mhz: vec![2000],
    }
}
