// src/normalize.rs
//! Table cleaning shared by the roster and game-log pages.
//!
//! Steps, in order:
//! 1. drop placeholder columns (`Unnamed: …`, emitted for blank headers)
//! 2. drop the page's exclusion list (absent names are fine)
//! 3. drop any column with a cell reading `none` (any case)
//! 4. coerce the page's numeric columns: strip `,` and `%`, parse, and
//!    turn anything unparseable into `Cell::Missing`
//!
//! Row count never changes and no column is ever added. Running it twice is
//! the same as running it once.

use crate::config::consts::{
    GAMELOG_EXCLUDED, GAMELOG_TEXT_COLUMNS, PLACEHOLDER_COLUMN, ROSTER_NUMERIC_COLUMNS,
};
use crate::core::sanitize::strip_numeric_noise;
use crate::table::{Cell, Table};

/// Which columns step 4 turns into numbers.
#[derive(Clone, Copy, Debug)]
pub enum Coerce {
    /// Everything except these text columns.
    AllExcept(&'static [&'static str]),
    /// Only these columns.
    Only(&'static [&'static str]),
}

#[derive(Clone, Copy, Debug)]
pub struct NormalizeRules {
    pub excluded: &'static [&'static str],
    pub coerce: Coerce,
}

impl NormalizeRules {
    pub const GAME_LOG: NormalizeRules = NormalizeRules {
        excluded: GAMELOG_EXCLUDED,
        coerce: Coerce::AllExcept(GAMELOG_TEXT_COLUMNS),
    };

    pub const ROSTER: NormalizeRules = NormalizeRules {
        excluded: &[],
        coerce: Coerce::Only(ROSTER_NUMERIC_COLUMNS),
    };

    fn coerces(&self, column: &str) -> bool {
        match self.coerce {
            Coerce::AllExcept(text) => !text.contains(&column),
            Coerce::Only(numeric) => numeric.contains(&column),
        }
    }
}

pub fn normalize(mut table: Table, rules: &NormalizeRules) -> Table {
    let before = table.header_count();

    // 1) placeholder columns
    let placeholder = PLACEHOLDER_COLUMN.to_ascii_lowercase();
    drop_where(&mut table, |t, ci| t.headers[ci].to_ascii_lowercase().contains(&placeholder));

    // 2) fixed exclusions
    drop_where(&mut table, |t, ci| rules.excluded.contains(&t.headers[ci].as_str()));

    // 3) columns the site rendered as unpopulated
    drop_where(&mut table, |t, ci| {
        t.column(ci).any(|c| c.as_text().is_some_and(|s| s.trim().eq_ignore_ascii_case("none")))
    });

    // 4) numeric coercion
    let targets: Vec<usize> = (0..table.header_count())
        .filter(|&ci| rules.coerces(&table.headers[ci]))
        .collect();
    for row in &mut table.rows {
        for &ci in &targets {
            if let Some(cell) = row.get_mut(ci) {
                *cell = coerce_cell(cell);
            }
        }
    }

    logd!(
        "Normalize: {} → {} columns, {} rows",
        before,
        table.header_count(),
        table.row_count()
    );
    table
}

/// One cell through step 4. Numbers and missing markers pass unchanged.
pub fn coerce_cell(cell: &Cell) -> Cell {
    match cell {
        Cell::Text(s) => parse_number(s).map(Cell::Num).unwrap_or(Cell::Missing),
        other => other.clone(),
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    strip_numeric_noise(raw)
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

fn drop_where<F>(table: &mut Table, pred: F)
where
    F: Fn(&Table, usize) -> bool,
{
    let drop: Vec<usize> = (0..table.header_count()).filter(|&ci| pred(table, ci)).collect();
    table.drop_columns(&drop);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table::from_text(
            headers.iter().map(|h| s!(*h)).collect(),
            rows.iter().map(|r| r.iter().map(|c| s!(*c)).collect()).collect(),
        )
    }

    fn game_log() -> Table {
        raw(
            &["Rk", "Date", "Age", "Tm", "Unnamed: 4", "Opp", "MP", "FG%", "PTS", "GmSc", "+/-", "Notes"],
            &[
                &["1", "2024-10-22", "39-296", "LAL", "", "MIN", "35:00", ".524", "1,234", "14.2", "+5", "x"],
                &["2", "2024-10-25", "39-299", "LAL", "@", "PHO", "31:12", "56%", "N/A", "9.9", "-3", "None"],
            ],
        )
    }

    #[test]
    fn drops_placeholders_exclusions_and_none_columns() {
        let t = normalize(game_log(), &NormalizeRules::GAME_LOG);
        assert_eq!(t.headers, vec!["Rk", "Opp", "MP", "FG%", "PTS"]);
        assert_eq!(t.row_count(), 2);
    }

    #[test]
    fn coerces_with_separators_and_percent() {
        let t = normalize(game_log(), &NormalizeRules::GAME_LOG);
        let pts = t.col_index("PTS").unwrap();
        let fg = t.col_index("FG%").unwrap();
        assert_eq!(t.rows[0][pts], Cell::Num(1234.0));
        assert_eq!(t.rows[1][pts], Cell::Missing);
        assert_eq!(t.rows[1][fg], Cell::Num(56.0));
        assert_eq!(t.rows[0][fg], Cell::Num(0.524));
    }

    #[test]
    fn text_columns_stay_text() {
        let t = normalize(game_log(), &NormalizeRules::GAME_LOG);
        let mp = t.col_index("MP").unwrap();
        let opp = t.col_index("Opp").unwrap();
        assert_eq!(t.rows[0][mp], Cell::text("35:00"));
        assert_eq!(t.rows[1][opp], Cell::text("PHO"));
    }

    #[test]
    fn idempotent() {
        let once = normalize(game_log(), &NormalizeRules::GAME_LOG);
        let twice = normalize(once.clone(), &NormalizeRules::GAME_LOG);
        assert_eq!(once, twice);

        let roster = raw(&["No.", "Player", "Wt", "Unnamed: 3", "Exp"], &[&["7", "A. Smith", "1,210", "us", "R"]]);
        let once = normalize(roster, &NormalizeRules::ROSTER);
        assert_eq!(normalize(once.clone(), &NormalizeRules::ROSTER), once);
    }

    #[test]
    fn columns_are_a_subset_of_the_input() {
        let input = game_log();
        let out = normalize(input.clone(), &NormalizeRules::GAME_LOG);
        assert!(out.headers.iter().all(|h| input.headers.contains(h)));
    }

    #[test]
    fn roster_rules_only_touch_numeric_columns() {
        let roster = raw(&["No.", "Player", "Wt", "Exp"], &[&["7", "A. Smith", "210", "R"]]);
        let t = normalize(roster, &NormalizeRules::ROSTER);
        assert_eq!(t.rows[0], vec![Cell::Num(7.0), Cell::text("A. Smith"), Cell::Num(210.0), Cell::text("R")]);
    }

    #[test]
    fn non_finite_text_is_missing() {
        assert_eq!(coerce_cell(&Cell::text("NaN")), Cell::Missing);
        assert_eq!(coerce_cell(&Cell::text("inf")), Cell::Missing);
        assert_eq!(coerce_cell(&Cell::text(" 3 ")), Cell::Num(3.0));
    }

    #[test]
    fn empty_table_passes_through() {
        let t = normalize(Table::default(), &NormalizeRules::GAME_LOG);
        assert!(t.headers.is_empty());
    }
}
