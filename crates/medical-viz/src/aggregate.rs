// File: crates/medical-viz/src/aggregate.rs
// Summary: Wide-to-long reshaping and group-by counting for the categorical chart.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::frame::Frame;

/// One (row, variable) pair of the long-form table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongRecord {
    pub outcome: i64,
    pub variable: String,
    pub value: i64,
}

/// Number of long-form rows sharing `(outcome, variable, value)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub outcome: i64,
    pub variable: String,
    pub value: i64,
    pub total: usize,
}

/// Unpivot `value_vars` into long form keyed by `id_var`.
/// Rows come out variable by variable, original row order within each variable.
pub fn melt<S: AsRef<str>>(frame: &Frame, id_var: &str, value_vars: &[S]) -> Result<Vec<LongRecord>> {
    let ids = frame.column(id_var)?;
    let mut out = Vec::with_capacity(ids.len() * value_vars.len());
    for var in value_vars {
        let name = var.as_ref();
        let values = frame.column(name)?;
        out.extend(ids.iter().zip(values).map(|(id, v)| LongRecord {
            outcome: *id as i64,
            variable: name.to_string(),
            value: *v as i64,
        }));
    }
    Ok(out)
}

/// Group by `(outcome, variable, value)` and count, sorted by the key.
/// Only combinations that occur are reported.
pub fn count_categories(rows: &[LongRecord]) -> Vec<CategoryCount> {
    let mut groups: BTreeMap<(i64, &str, i64), usize> = BTreeMap::new();
    for r in rows {
        *groups.entry((r.outcome, r.variable.as_str(), r.value)).or_default() += 1;
    }
    groups
        .into_iter()
        .map(|((outcome, variable, value), total)| CategoryCount {
            outcome,
            variable: variable.to_string(),
            value,
            total,
        })
        .collect()
}

/// Count for one key, zero when the combination never occurs.
pub fn total_for(counts: &[CategoryCount], outcome: i64, variable: &str, value: i64) -> usize {
    counts
        .iter()
        .find(|c| c.outcome == outcome && c.variable == variable && c.value == value)
        .map(|c| c.total)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Frame {
        Frame::new()
            .with_column("cardio", vec![0.0, 1.0, 1.0])
            .and_then(|f| f.with_column("smoke", vec![1.0, 0.0, 0.0]))
            .and_then(|f| f.with_column("alco", vec![0.0, 0.0, 1.0]))
            .unwrap()
    }

    #[test]
    fn melt_stacks_variables() {
        let long = melt(&frame(), "cardio", &["smoke", "alco"]).unwrap();
        assert_eq!(long.len(), 6);
        assert_eq!(long[0], LongRecord { outcome: 0, variable: "smoke".into(), value: 1 });
        assert_eq!(long[3], LongRecord { outcome: 0, variable: "alco".into(), value: 0 });
    }

    #[test]
    fn counts_are_sorted_by_key() {
        let long = melt(&frame(), "cardio", &["smoke", "alco"]).unwrap();
        let counts = count_categories(&long);
        let keys: Vec<(i64, &str, i64, usize)> =
            counts.iter().map(|c| (c.outcome, c.variable.as_str(), c.value, c.total)).collect();
        assert_eq!(
            keys,
            vec![
                (0, "alco", 0, 1),
                (0, "smoke", 1, 1),
                (1, "alco", 0, 1),
                (1, "alco", 1, 1),
                (1, "smoke", 0, 2),
            ]
        );
        assert_eq!(total_for(&counts, 0, "smoke", 0), 0);
    }

    #[test]
    fn melt_missing_column() {
        assert!(melt(&frame(), "cardio", &["gluc"]).is_err());
    }
}
