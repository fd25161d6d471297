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

//! Priority scoring with hardware-conditioned adjustments
//!
//! A strategy's score starts from its intrinsic weight for the requested
//! priority. Each rule below looks at one hardware capability and may nudge
//! the score or cap it. Rules are independent functions so they can be
//! recalibrated one at a time.
//!
//! Bonuses and penalties are summed first, caps apply afterwards, and the
//! result is clamped to [0, 1] and rounded to two decimals.

use crate::optimization::{Precision, Strategy};
use crate::priority::Priority;
use crate::targets::{accelerator, Framework, HardwareProfile, PowerClass};
use serde::{Deserialize, Serialize};

/// How a rule changes the score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AdjustmentKind {
    /// Signed additive change
    Delta(f64),
    /// Upper bound on the final score
    Cap(f64),
}

/// One rule that fired for a (strategy, hardware, priority) combination
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adjustment {
    pub rule: &'static str,
    pub kind: AdjustmentKind,
    pub note: &'static str,
}

/// Base weight, fired rules and the final score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub base: f64,
    pub adjustments: Vec<Adjustment>,
    pub score: f64,
}

impl ScoreBreakdown {
    pub fn notes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.adjustments.iter().map(|a| a.note)
    }
}

/// Signature shared by all scoring rules
pub type ScoringRule = fn(&Strategy, &HardwareProfile, Priority) -> Option<Adjustment>;

/// Rules in evaluation order
pub const RULES: &[ScoringRule] = &[
    gpu_half_precision_bonus,
    vector_int8_bonus,
    missing_float_unit_penalty,
    low_power_precision_bonus,
    onnx_runtime_int8_bonus,
    int8_kernel_cap,
];

pub const GPU_FP16_BONUS: f64 = 0.15;
pub const VECTOR_INT8_BONUS: f64 = 0.15;
pub const ONNX_RUNTIME_INT8_BONUS: f64 = 0.1;
pub const SOFT_FLOAT_PENALTY: f64 = 0.2;
pub const INT8_REFERENCE_KERNEL_CAP: f64 = 0.5;

fn speed_sensitive(priority: Priority) -> bool {
    matches!(priority, Priority::Latency | Priority::Energy)
}

/// A GPU runs half-precision kernels natively
pub fn gpu_half_precision_bonus(
    strategy: &Strategy,
    hardware: &HardwareProfile,
    priority: Priority,
) -> Option<Adjustment> {
    (strategy.precision == Precision::Fp16
        && speed_sensitive(priority)
        && hardware.has_accelerator(accelerator::GPU))
    .then_some(Adjustment {
        rule: "gpu_half_precision_bonus",
        kind: AdjustmentKind::Delta(GPU_FP16_BONUS),
        note: "The present GPU should offer good performance with FP16.",
    })
}

/// SIMD, DSP or NPU units accelerate integer kernels
pub fn vector_int8_bonus(
    strategy: &Strategy,
    hardware: &HardwareProfile,
    priority: Priority,
) -> Option<Adjustment> {
    (strategy.precision == Precision::Int8
        && speed_sensitive(priority)
        && hardware.has_any_accelerator(&[
            accelerator::VECTOR_INSTRUCTIONS,
            accelerator::DSP,
            accelerator::NPU,
        ]))
    .then_some(Adjustment {
        rule: "vector_int8_bonus",
        kind: AdjustmentKind::Delta(VECTOR_INT8_BONUS),
        note: "The hardware has vector/DSP instructions, which should significantly accelerate INT8 performance.",
    })
}

/// Float math is emulated in software without an FPU
pub fn missing_float_unit_penalty(
    strategy: &Strategy,
    hardware: &HardwareProfile,
    priority: Priority,
) -> Option<Adjustment> {
    (strategy.precision.is_float() && speed_sensitive(priority) && !hardware.has_float_unit())
        .then_some(Adjustment {
            rule: "missing_float_unit_penalty",
            kind: AdjustmentKind::Delta(-SOFT_FLOAT_PENALTY),
            note: "No hardware floating point unit; float arithmetic would be emulated in software.",
        })
}

/// Narrower data paths draw less power on battery-constrained devices
pub fn low_power_precision_bonus(
    strategy: &Strategy,
    hardware: &HardwareProfile,
    priority: Priority,
) -> Option<Adjustment> {
    if priority != Priority::Energy {
        return None;
    }

    let scale = match hardware.power_class {
        PowerClass::UltraLow => 0.1,
        PowerClass::Battery => 0.05,
        PowerClass::Mains => return None,
    };

    let saved = 1.0 - strategy.precision.bits() as f64 / 32.0;
    if saved <= 0.0 {
        return None;
    }

    Some(Adjustment {
        rule: "low_power_precision_bonus",
        kind: AdjustmentKind::Delta(scale * saved),
        note: "Reduced precision lowers energy per inference on this low-power device.",
    })
}

/// ONNX Runtime ships tuned integer kernels where no SIMD bonus applied
pub fn onnx_runtime_int8_bonus(
    strategy: &Strategy,
    hardware: &HardwareProfile,
    priority: Priority,
) -> Option<Adjustment> {
    (strategy.precision == Precision::Int8
        && hardware.supports_framework(Framework::OnnxRuntime)
        && vector_int8_bonus(strategy, hardware, priority).is_none())
    .then_some(Adjustment {
        rule: "onnx_runtime_int8_bonus",
        kind: AdjustmentKind::Delta(ONNX_RUNTIME_INT8_BONUS),
        note: "ONNX Runtime is available and provides optimized INT8 operators.",
    })
}

/// Without an optimized integer path INT8 falls back to reference kernels
pub fn int8_kernel_cap(
    strategy: &Strategy,
    hardware: &HardwareProfile,
    _priority: Priority,
) -> Option<Adjustment> {
    (strategy.precision == Precision::Int8 && !hardware.has_int8_kernel()).then_some(Adjustment {
        rule: "int8_kernel_cap",
        kind: AdjustmentKind::Cap(INT8_REFERENCE_KERNEL_CAP),
        note: "No optimized INT8 kernel for this architecture; expect reference-kernel speed.",
    })
}

/// Score with the list of rules that fired
pub fn score_breakdown(
    strategy: &Strategy,
    hardware: &HardwareProfile,
    priority: Priority,
) -> ScoreBreakdown {
    let base = strategy.priority_weights.get(priority);
    let adjustments: Vec<Adjustment> = RULES
        .iter()
        .filter_map(|rule| rule(strategy, hardware, priority))
        .collect();

    let mut score = base;
    for adjustment in &adjustments {
        if let AdjustmentKind::Delta(delta) = adjustment.kind {
            score += delta;
        }
    }
    for adjustment in &adjustments {
        if let AdjustmentKind::Cap(cap) = adjustment.kind {
            score = score.min(cap);
        }
    }

    ScoreBreakdown {
        base,
        adjustments,
        score: round_score(score),
    }
}

/// Final score in [0, 1] for a strategy on a device under a priority
pub fn score(strategy: &Strategy, hardware: &HardwareProfile, priority: Priority) -> f64 {
    score_breakdown(strategy, hardware, priority).score
}

fn round_score(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    (score.clamp(0.0, 1.0) * 100.0).round() / 100.0
}
