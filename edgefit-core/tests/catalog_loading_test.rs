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

//! File-backed catalogs feeding the advisor

use edgefit_core::{
    optimization::quantization,
    targets::{esp32, raspberry_pi, stm32},
    Advisor, Config, EdgeFitError, HardwareProfile, ModelMetrics, StrategyCatalog, TargetRegistry,
};
use std::path::Path;
use tempfile::TempDir;

fn write_profile(dir: &Path, name: &str, profile: &HardwareProfile) {
    std::fs::write(
        dir.join(name),
        serde_json::to_string_pretty(profile).unwrap(),
    )
    .unwrap();
}

#[test]
fn test_knowledge_base_directory() {
    let temp_dir = TempDir::new().unwrap();
    let hardware_dir = temp_dir.path().join("hardware");
    std::fs::create_dir(&hardware_dir).unwrap();

    let mut custom = stm32::stm32f746_discovery();
    custom.id = "stm32h743".to_string();
    custom.display_name = "STM32H743".to_string();
    custom.ram_bytes = 1024 * 1024;
    custom.rom_bytes = 2 * 1024 * 1024;
    write_profile(&hardware_dir, "stm32h743.json", &custom);

    let mut zero_ram = esp32::esp32_s3();
    zero_ram.id = "broken-board".to_string();
    zero_ram.ram_bytes = 0;
    write_profile(&hardware_dir, "broken.json", &zero_ram);

    let mut registry = TargetRegistry::new();
    assert_eq!(registry.load_dir(&hardware_dir).unwrap(), 1);
    assert!(registry.get_target("stm32h743").is_ok());
    assert!(matches!(
        registry.get_target("broken-board"),
        Err(EdgeFitError::UnsupportedTarget { .. })
    ));
}

#[test]
fn test_duplicate_identifier_across_files() {
    let temp_dir = TempDir::new().unwrap();
    let profile = raspberry_pi::profile(raspberry_pi::RpiVariant::Pi5);
    write_profile(temp_dir.path(), "a.json", &stm32::stm32f746_discovery());
    write_profile(temp_dir.path(), "b.json", &profile);
    write_profile(temp_dir.path(), "c.json", &profile);

    let mut registry = TargetRegistry::new();
    assert!(matches!(
        registry.load_dir(temp_dir.path()),
        Err(EdgeFitError::DuplicateHardware { .. })
    ));
    assert_eq!(registry.len(), 0);
    assert!(registry.get_target("stm32f746-disco").is_err());

    // Clashing with a built-in profile is rejected the same way
    let mut registry = TargetRegistry::builtin();
    let before = registry.len();
    let clash = TempDir::new().unwrap();
    write_profile(clash.path(), "esp.json", &esp32::esp32_s3());
    assert!(registry.load_dir(clash.path()).is_err());
    assert_eq!(registry.len(), before);
}

#[test]
fn test_custom_strategy_catalog_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let catalog_path = temp_dir.path().join("strategies.toml");
    std::fs::write(
        &catalog_path,
        r#"
[[strategies]]
id = "int8"
display_name = "Full INT8 Quantization"
description = "Quantize the model to INT8."
precision = "int8"
rom_multiplier = 0.25
ram_overhead_multiplier = 2.5

[strategies.compatibility]
required_frameworks = ["tflite_micro", "onnx_runtime"]

[strategies.priority_weights]
latency = 0.9
energy = 0.95
size = 0.95

[[strategies]]
id = "int8_gpu_only"
display_name = "INT8 on GPU"
description = "Run INT8 kernels on the GPU."
precision = "int8"
rom_multiplier = 0.25
ram_overhead_multiplier = 3.0

[strategies.compatibility]
required_accelerators = ["gpu"]

[strategies.priority_weights]
latency = 1.0
energy = 0.9
size = 0.95
"#,
    )
    .unwrap();

    let catalog = StrategyCatalog::load(&catalog_path).unwrap();
    assert_eq!(catalog.len(), 2);
    let builtin_int8 = quantization::int8();
    assert_eq!(catalog.strategies()[0].compatibility, builtin_int8.compatibility);
    assert_eq!(catalog.strategies()[0].priority_weights, builtin_int8.priority_weights);

    let mut config = Config::default();
    config.catalog.strategy_file = Some(catalog_path.to_string_lossy().into_owned());
    let advisor = config.advisor().unwrap();

    let metrics = ModelMetrics::new("cafe", 12, 4.0, 256 * 1024);
    let registry = config.hardware_registry().unwrap();

    // No GPU on the ESP32-S3: the GPU-only entry is filtered out
    let esp = registry.get_target("esp32-s3").unwrap();
    let recs = advisor.recommend(&metrics, esp, "latency").unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].strategy_id, "int8");

    let jetson = registry.get_target("jetson-nano").unwrap();
    let recs = advisor.recommend(&metrics, jetson, "latency").unwrap();
    assert_eq!(recs.len(), 2);
}

#[test]
fn test_metrics_file_and_report_export() {
    let temp_dir = TempDir::new().unwrap();
    let model_path = temp_dir.path().join("model.onnx");
    std::fs::write(&model_path, b"not really a model, but hashable").unwrap();

    let sha256 = ModelMetrics::fingerprint_file(&model_path).unwrap();
    let metrics = ModelMetrics::new(sha256.clone(), 64, 12.5, 600 * 1024);
    let metrics_path = temp_dir.path().join("metrics.json");
    metrics.save(&metrics_path).unwrap();

    let loaded = ModelMetrics::load(&metrics_path).unwrap();
    let advisor = Advisor::default();
    let registry = TargetRegistry::builtin();
    let report = advisor
        .advise(&loaded, registry.get_target("arduino-nano-33-ble").unwrap(), "size")
        .unwrap();
    assert_eq!(report.model_sha256, sha256);

    // 600KB of weights: every strategy fits the flash, none fits 256KB of RAM
    assert_eq!(report.viable_count(), 0);

    let report_path = temp_dir.path().join("report.json");
    report.save(&report_path).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["target_hardware"], "arduino-nano-33-ble");
    assert_eq!(json["priority"], "size");
    assert_eq!(json["recommendations"].as_array().unwrap().len(), 3);
}
