// File: crates/medical-viz/src/dataset.rs
// Summary: Medical examination records: CSV loading and derived columns.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Result, VizError};
use crate::frame::Frame;

/// Derived indicator appended after the raw columns.
pub const OVERWEIGHT: &str = "overweight";
/// Binary outcome label (cardiovascular disease present).
pub const OUTCOME: &str = "cardio";

/// One examination row as stored in the CSV file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MedicalRecord {
    pub id: i64,
    /// Age in days
    pub age: i64,
    pub sex: i64,
    /// Height in centimetres
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Systolic blood pressure
    pub ap_hi: i64,
    /// Diastolic blood pressure
    pub ap_lo: i64,
    /// 1 normal, 2 above normal, 3 well above normal
    pub cholesterol: i64,
    /// 1 normal, 2 above normal, 3 well above normal
    pub gluc: i64,
    pub smoke: i64,
    pub alco: i64,
    pub active: i64,
    pub cardio: i64,
}

impl MedicalRecord {
    /// Column names in file order.
    pub const COLUMNS: [&'static str; 13] = [
        "id", "age", "sex", "height", "weight", "ap_hi", "ap_lo",
        "cholesterol", "gluc", "smoke", "alco", "active", "cardio",
    ];

    fn values(&self) -> [f64; 13] {
        [
            self.id as f64,
            self.age as f64,
            self.sex as f64,
            self.height,
            self.weight,
            self.ap_hi as f64,
            self.ap_lo as f64,
            self.cholesterol as f64,
            self.gluc as f64,
            self.smoke as f64,
            self.alco as f64,
            self.active as f64,
            self.cardio as f64,
        ]
    }

    /// Body mass index, kg/m².
    pub fn bmi(&self) -> f64 {
        let m = self.height / 100.0;
        self.weight / (m * m)
    }
}

/// Read every record from a comma-separated file with a header row.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<MedicalRecord>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let records = read_records(file)?;
    info!(path = %path.display(), rows = records.len(), "loaded dataset");
    Ok(records)
}

/// Parse records from any reader.
pub fn read_records<R: std::io::Read>(reader: R) -> Result<Vec<MedicalRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let records = rdr
        .deserialize::<MedicalRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(records)
}

/// Raw records as a frame, columns in file order.
pub fn to_frame(records: &[MedicalRecord]) -> Result<Frame> {
    let mut columns: Vec<Vec<f64>> = vec![Vec::with_capacity(records.len()); MedicalRecord::COLUMNS.len()];
    for r in records {
        for (col, v) in columns.iter_mut().zip(r.values()) {
            col.push(v);
        }
    }
    let mut frame = Frame::new();
    for (name, values) in MedicalRecord::COLUMNS.iter().zip(columns) {
        frame.push_column(*name, values)?;
    }
    Ok(frame)
}

/// `1.0` when BMI exceeds `threshold`, else `0.0`.
pub fn overweight_flags(records: &[MedicalRecord], threshold: f64) -> Vec<f64> {
    records.iter().map(|r| if r.bmi() > threshold { 1.0 } else { 0.0 }).collect()
}

/// Map a 1/2/3 grade onto good (0) / bad (1).
pub fn normalize_grade(v: f64) -> f64 {
    if v > 1.0 { 1.0 } else { 0.0 }
}

/// Frame used by both charts: raw columns with `cholesterol` and `gluc`
/// normalized to 0/1, followed by the `overweight` indicator.
pub fn prepare(records: &[MedicalRecord], bmi_threshold: f64) -> Result<Frame> {
    if records.is_empty() {
        return Err(VizError::EmptyDataset);
    }
    let mut frame = to_frame(records)?;
    frame.push_column(OVERWEIGHT, overweight_flags(records, bmi_threshold))?;
    frame.map_column("cholesterol", normalize_grade)?;
    frame.map_column("gluc", normalize_grade)?;
    debug!(rows = frame.row_count(), columns = frame.column_count(), "prepared frame");
    Ok(frame)
}
