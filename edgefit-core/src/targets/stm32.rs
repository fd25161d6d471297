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

//! STM32 hardware profiles

use super::{accelerator, tags, CpuArchitecture, Framework, HardwareProfile, PowerClass};

/// STM32F746G-DISCO: Cortex-M7 at 216MHz with single-precision FPU
pub fn stm32f746_discovery() -> HardwareProfile {
    HardwareProfile {
        id: "stm32f746-disco".to_string(),
        vendor: "STMicroelectronics".to_string(),
        display_name: "STM32F746 Discovery".to_string(),
        ram_bytes: 320 * 1024,  // 320KB SRAM
        rom_bytes: 1024 * 1024, // 1MB Flash
        cpu_architecture: CpuArchitecture::CortexM,
        accelerators: tags(&[accelerator::FPU, accelerator::DSP]),
        power_class: PowerClass::Battery,
        supported_frameworks: [Framework::TfliteMicro].into_iter().collect(),
        cpu_freq_mhz: vec![216],
    }
}
