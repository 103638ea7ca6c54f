// src/table.rs
//
// In-memory tabular data shared by every page: headers plus rows of cells.
// Raw extraction yields only `Text` cells; the normalizer turns the columns it
// coerces into `Num`/`Missing`.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Num(f64),
    Missing,
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self { Cell::Text(s.into()) }

    pub fn as_num(&self) -> Option<f64> {
        match self { Cell::Num(v) => Some(*v), _ => None }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self { Cell::Text(s) => Some(s), _ => None }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Num(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{v:.0}"),
            Cell::Num(v) => write!(f, "{v}"),
            Cell::Missing => Ok(()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    /// All-text table, as it comes out of the HTML.
    pub fn from_text(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|r| r.into_iter().map(Cell::Text).collect())
            .collect();
        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize { self.headers.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn col_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool { self.col_index(name).is_some() }

    /// Cells of one column, top to bottom. Short rows yield nothing for it.
    pub fn column(&self, ci: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().filter_map(move |r| r.get(ci))
    }

    /// Numeric values of one column; `Missing` and text are skipped.
    pub fn numbers(&self, ci: usize) -> Vec<f64> {
        self.column(ci).filter_map(Cell::as_num).collect()
    }

    /// A column is numeric when no cell in it is text.
    pub fn is_numeric_column(&self, ci: usize) -> bool {
        ci < self.headers.len() && self.column(ci).all(|c| !matches!(c, Cell::Text(_)))
    }

    pub fn numeric_columns(&self) -> Vec<String> {
        (0..self.headers.len())
            .filter(|&ci| self.is_numeric_column(ci))
            .map(|ci| self.headers[ci].clone())
            .collect()
    }

    /// Remove the given column positions (any order, duplicates ignored).
    pub fn drop_columns(&mut self, drop: &[usize]) {
        if drop.is_empty() { return; }
        let keep: Vec<bool> = (0..self.headers.len()).map(|ci| !drop.contains(&ci)).collect();

        let mut ci = 0usize;
        self.headers.retain(|_| { let k = keep[ci]; ci += 1; k });
        for row in &mut self.rows {
            let mut ci = 0usize;
            row.retain(|_| { let k = keep.get(ci).copied().unwrap_or(true); ci += 1; k });
        }
    }

    /// Copy without the named columns. Unknown names are ignored.
    pub fn without_columns(&self, names: &[String]) -> Table {
        let drop: Vec<usize> = names.iter().filter_map(|n| self.col_index(n)).collect();
        let mut out = self.clone();
        out.drop_columns(&drop);
        out
    }

    /// Append a column; `cells` must have one entry per row.
    pub fn push_column(&mut self, name: &str, cells: Vec<Cell>) {
        debug_assert_eq!(cells.len(), self.rows.len());
        self.headers.push(s!(name));
        for (row, cell) in self.rows.iter_mut().zip(cells) {
            row.push(cell);
        }
    }

    /// Copy holding only the given rows, in the given order.
    pub fn select_rows(&self, row_ix: &[usize]) -> Table {
        Table {
            headers: self.headers.clone(),
            rows: row_ix.iter().filter_map(|&i| self.rows.get(i).cloned()).collect(),
        }
    }
}
