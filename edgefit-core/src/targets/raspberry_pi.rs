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

//! Raspberry Pi hardware profiles

use super::{accelerator, tags, CpuArchitecture, Framework, HardwareProfile, PowerClass};
use serde::{Deserialize, Serialize};

/// Raspberry Pi variants with different capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RpiVariant {
    /// Raspberry Pi Zero 2 W - quad-core Cortex-A53, 512MB RAM
    PiZero2,
    /// Raspberry Pi 3B - quad-core ARM Cortex-A53, 1GB RAM
    Pi3B,
    /// Raspberry Pi 4B - ARM Cortex-A72, 4GB RAM model
    Pi4B,
    /// Raspberry Pi 5 - ARM Cortex-A76, 4GB RAM model
    Pi5,
}

impl RpiVariant {
    pub const ALL: [RpiVariant; 4] = [Self::PiZero2, Self::Pi3B, Self::Pi4B, Self::Pi5];

    pub fn id(&self) -> &'static str {
        match self {
            Self::PiZero2 => "raspberry-pi-zero-2w",
            Self::Pi3B => "raspberry-pi-3b",
            Self::Pi4B => "raspberry-pi-4b",
            Self::Pi5 => "raspberry-pi-5",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::PiZero2 => "Raspberry Pi Zero 2 W",
            Self::Pi3B => "Raspberry Pi 3 Model B",
            Self::Pi4B => "Raspberry Pi 4 Model B",
            Self::Pi5 => "Raspberry Pi 5",
        }
    }
}

/// Build the profile for a Raspberry Pi variant
///
/// RAM figures subtract what Raspberry Pi OS Lite and the GPU split keep
/// resident. ROM assumes a 16GB SD card with the OS already installed.
pub fn profile(variant: RpiVariant) -> HardwareProfile {
    let (ram_bytes, cpu_freq_mhz) = match variant {
        RpiVariant::PiZero2 => (384 * 1024 * 1024, vec![1000]),
        RpiVariant::Pi3B => (768 * 1024 * 1024, vec![1200]),
        RpiVariant::Pi4B => (3584 * 1024 * 1024, vec![1500]),
        RpiVariant::Pi5 => (3584 * 1024 * 1024, vec![2400]),
    };

    HardwareProfile {
        id: variant.id().to_string(),
        vendor: "Raspberry Pi Ltd".to_string(),
        display_name: variant.display_name().to_string(),
        ram_bytes,
        rom_bytes: 12 * 1024 * 1024 * 1024,
        cpu_architecture: CpuArchitecture::CortexA,
        accelerators: tags(&[accelerator::FPU, accelerator::VECTOR_INSTRUCTIONS]),
        power_class: match variant {
            RpiVariant::PiZero2 => PowerClass::Battery,
            _ => PowerClass::Mains,
        },
        supported_frameworks: [Framework::TfliteMicro, Framework::OnnxRuntime]
            .into_iter()
            .collect(),
        cpu_freq_mhz,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_profiles() {
        for variant in RpiVariant::ALL {
            let profile = profile(variant);
            assert_eq!(profile.id, variant.id());
            assert!(profile.validate().is_ok());
            assert!(profile.has_float_unit());
        }
    }

    #[test]
    fn test_pi4_has_more_ram_than_zero() {
        assert!(profile(RpiVariant::Pi4B).ram_bytes > profile(RpiVariant::PiZero2).ram_bytes);
        assert_eq!(profile(RpiVariant::PiZero2).power_class, PowerClass::Battery);
    }
}
