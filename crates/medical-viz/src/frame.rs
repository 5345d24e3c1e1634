// File: crates/medical-viz/src/frame.rs
// Summary: Column-major numeric table.

use crate::error::{Result, VizError};

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

/// Named `f64` columns of equal length, kept in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    columns: Vec<Column>,
    rows: usize,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column; all columns must have the same length.
    /// A column with an existing name replaces it in place.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<()> {
        let name = name.into();
        if !self.columns.is_empty() && values.len() != self.rows {
            return Err(VizError::ColumnLength { name, got: values.len(), expected: self.rows });
        }
        self.rows = values.len();
        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.values = values,
            None => self.columns.push(Column { name, values }),
        }
        Ok(())
    }

    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        self.push_column(name, values)?;
        Ok(self)
    }

    pub fn row_count(&self) -> usize { self.rows }

    pub fn column_count(&self) -> usize { self.columns.len() }

    pub fn is_empty(&self) -> bool { self.rows == 0 }

    pub fn columns(&self) -> &[Column] { &self.columns }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Result<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
            .ok_or_else(|| VizError::MissingColumn(name.to_string()))
    }

    /// Rewrite every value of `name` through `f`.
    pub fn map_column(&mut self, name: &str, f: impl Fn(f64) -> f64) -> Result<()> {
        let col = self
            .columns
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| VizError::MissingColumn(name.to_string()))?;
        col.values.iter_mut().for_each(|v| *v = f(*v));
        Ok(())
    }

    /// Keep rows whose flag in `keep` is true. `keep` must have one flag per row.
    pub fn filter_rows(&self, keep: &[bool]) -> Result<Frame> {
        if keep.len() != self.rows {
            return Err(VizError::ColumnLength { name: "<row mask>".into(), got: keep.len(), expected: self.rows });
        }
        let columns = self
            .columns
            .iter()
            .map(|c| Column {
                name: c.name.clone(),
                values: c.values.iter().zip(keep).filter(|(_, k)| **k).map(|(v, _)| *v).collect(),
            })
            .collect();
        let rows = keep.iter().filter(|k| **k).count();
        Ok(Frame { columns, rows })
    }
}
