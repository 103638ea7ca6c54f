// src/stats.rs
//
// Descriptive statistics over one numeric column of a (possibly filtered)
// game log, plus the over/under split around a user threshold.
//
// Standard deviation uses the sample (n - 1) convention.
// Over/under percentages are taken over `over + under`; rows sitting exactly
// on the threshold count toward neither.

use crate::error::{Result, ScrapeError};
use crate::table::{Cell, Table};

#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub column: String,
    pub threshold: f64,
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// `None` with fewer than two values.
    pub std_dev: Option<f64>,
    pub over: usize,
    pub under: usize,
    pub pct_over: f64,
    pub pct_under: f64,
}

/// Summarize `column` after dropping `excluded` columns from `table`.
pub fn summarize(table: &Table, column: &str, excluded: &[String], threshold: f64) -> Result<Summary> {
    if excluded.iter().any(|c| c == column) {
        return Err(ScrapeError::conversion(format!("column '{column}' is excluded")));
    }
    let view = table.without_columns(excluded);
    let values = column_values(&view, column)?;
    if values.is_empty() {
        return Err(ScrapeError::conversion(format!("column '{column}' has no numeric values")));
    }

    let (over, under) = split_at(&values, threshold);
    let (pct_over, pct_under) = percentages(over, under);

    let summary = Summary {
        column: s!(column),
        threshold,
        count: values.len(),
        mean: mean(&values),
        min: values.iter().copied().fold(f64::INFINITY, f64::min),
        max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        std_dev: sample_std_dev(&values),
        over,
        under,
        pct_over,
        pct_under,
    };
    logd!(
        "Stats: {column} n={} mean={:.2} over={} under={}",
        summary.count, summary.mean, summary.over, summary.under
    );
    Ok(summary)
}

/// Numeric values of a column, refusing text columns.
pub fn column_values(table: &Table, column: &str) -> Result<Vec<f64>> {
    let ci = table
        .col_index(column)
        .ok_or_else(|| ScrapeError::conversion(format!("no column named '{column}'")))?;
    if let Some(bad) = table.column(ci).find_map(|c| match c {
        Cell::Text(s) => Some(s.clone()),
        _ => None,
    }) {
        return Err(ScrapeError::conversion(format!(
            "column '{column}' is not numeric (found '{bad}')"
        )));
    }
    Ok(table.numbers(ci))
}

/// Mean of the numeric cells, `None` when there are none.
pub fn column_mean(table: &Table, column: &str) -> Option<f64> {
    let values = column_values(table, column).ok()?;
    (!values.is_empty()).then(|| mean(&values))
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Some((ss / (values.len() - 1) as f64).sqrt())
}

/// (strictly over, strictly under)
pub fn split_at(values: &[f64], threshold: f64) -> (usize, usize) {
    let over = values.iter().filter(|&&v| v > threshold).count();
    let under = values.iter().filter(|&&v| v < threshold).count();
    (over, under)
}

pub fn percentages(over: usize, under: usize) -> (f64, f64) {
    let total = over + under;
    if total == 0 {
        return (0.0, 0.0);
    }
    let t = total as f64;
    (over as f64 / t * 100.0, under as f64 / t * 100.0)
}
