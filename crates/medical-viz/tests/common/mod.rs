// File: crates/medical-viz/tests/common/mod.rs
// Purpose: Shared fixture loading for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use medical_viz::{MedicalRecord, MedicalVisualizer, VisualizerConfig};

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/medical_sample.csv")
}

pub fn fixture_config() -> VisualizerConfig {
    VisualizerConfig { dataset_path: fixture_path(), ..VisualizerConfig::default() }
}

pub fn fixture() -> MedicalVisualizer {
    MedicalVisualizer::load(fixture_config()).expect("fixture loads")
}

/// Record with every indicator at its "normal" value.
pub fn record(id: i64, cardio: i64) -> MedicalRecord {
    MedicalRecord {
        id,
        age: 18000 + id,
        sex: 1,
        height: 170.0,
        weight: 65.0,
        ap_hi: 120,
        ap_lo: 80,
        cholesterol: 1,
        gluc: 1,
        smoke: 0,
        alco: 0,
        active: 0,
        cardio,
    }
}

/// Reference dataset location: `MEDVIZ_DATASET` or `medical_examination.csv` at the workspace root.
pub fn reference_dataset() -> Option<PathBuf> {
    let candidate = std::env::var_os("MEDVIZ_DATASET")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../medical_examination.csv"));
    candidate.exists().then_some(candidate)
}
