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

//! Built-in precision strategies
//!
//! The multipliers and weights are heuristic constants calibrated against the
//! first release of the advisor. Baseline weights fold in the penalty FP32
//! used to take whenever a reduced-precision option was available; hardware
//! specific bonuses live in [`crate::scoring`] instead.

use super::{Compatibility, Precision, PriorityWeights, Strategy};
use crate::targets::Framework;

/// Frameworks that ship reduced-precision kernels
fn quantized_runtimes() -> Compatibility {
    Compatibility {
        required_frameworks: vec![Framework::TfliteMicro, Framework::OnnxRuntime],
        ..Compatibility::default()
    }
}

/// Run the model unchanged in float32
pub fn baseline_fp32() -> Strategy {
    Strategy {
        id: "baseline_fp32".to_string(),
        display_name: "Baseline (FP32)".to_string(),
        description: "Run the model as is (float32).".to_string(),
        precision: Precision::Fp32,
        rom_multiplier: 1.0,
        ram_overhead_multiplier: 2.0,
        compatibility: Compatibility::default(),
        priority_weights: PriorityWeights {
            latency: 0.45,
            energy: 0.45,
            size: 0.4,
        },
    }
}

/// Half-precision weights and activations
pub fn fp16() -> Strategy {
    Strategy {
        id: "fp16".to_string(),
        display_name: "FP16 Quantization".to_string(),
        description: "Quantize the model to FP16 (half-precision). Halves the model size with less accuracy loss than INT8.".to_string(),
        precision: Precision::Fp16,
        rom_multiplier: 0.5,
        ram_overhead_multiplier: 1.8,
        compatibility: quantized_runtimes(),
        priority_weights: PriorityWeights {
            latency: 0.7,
            energy: 0.7,
            size: 0.75,
        },
    }
}

/// Full integer quantization of weights and activations
pub fn int8() -> Strategy {
    Strategy {
        id: "int8".to_string(),
        display_name: "Full INT8 Quantization".to_string(),
        description: "Quantize the model to INT8. Reduces size to a quarter and can speed up inference on compatible hardware.".to_string(),
        precision: Precision::Int8,
        rom_multiplier: 0.25,
        ram_overhead_multiplier: 2.5,
        compatibility: quantized_runtimes(),
        priority_weights: PriorityWeights {
            latency: 0.9,
            energy: 0.95,
            size: 0.95,
        },
    }
}
