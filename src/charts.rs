// src/charts.rs
//
// Chart series derived from the analysis table. Drawing lives in the GUI;
// these are plain data so they can be tested without a window.

use crate::error::Result;
use crate::stats::{column_mean, column_values};
use crate::table::Table;

/// One point per row, in row order. Missing cells leave a gap.
#[derive(Clone, Debug, PartialEq)]
pub struct TrendSeries {
    pub column: String,
    pub points: Vec<(usize, Option<f64>)>,
}

impl TrendSeries {
    pub fn bounds(&self) -> Option<(f64, f64)> {
        let mut ys = self.points.iter().filter_map(|(_, y)| *y);
        let first = ys.next()?;
        Some(ys.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }
}

/// "`column` over time": the chosen stat against row position.
pub fn trend(table: &Table, column: &str) -> Result<TrendSeries> {
    // validates the column is numeric
    column_values(table, column)?;
    let ci = table.col_index(column).unwrap_or_default();
    let points = table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| (i, row.get(ci).and_then(|c| c.as_num())))
        .collect();
    Ok(TrendSeries { column: s!(column), points })
}

/// Average of each selected column; columns with no numbers are left out.
pub fn mean_comparison(table: &Table, columns: &[String]) -> Vec<(String, f64)> {
    columns
        .iter()
        .filter_map(|c| column_mean(table, c).map(|m| (c.clone(), m)))
        .collect()
}
