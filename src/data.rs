// src/data.rs
//
// Game-log data as loaded, plus the filtered view the analysis works on.
//
// - GameLogData: the loaded log. Never mutated after load.
// - FilteredView: row indices into GameLogData picked by the opponent filter.
//   Filtering is a projection; switching back to "All" needs no re-fetch.

use std::collections::BTreeSet;

use crate::config::consts::OPPONENT_COLUMN;
use crate::config::options::{OpponentFilter, SeasonChoice};
use crate::specs::gamelog::GameLog;
use crate::table::{Cell, Table};

#[derive(Clone, Debug)]
pub struct GameLogData {
    log: GameLog,
}

impl GameLogData {
    pub fn new(log: GameLog) -> Self { Self { log } }

    pub fn log(&self) -> &GameLog { &self.log }
    pub fn table(&self) -> &Table { &self.log.table }

    /// Filter choices: "All" first, then the sorted unique opponents.
    pub fn opponent_choices(&self) -> Vec<OpponentFilter> {
        let mut out = vec![OpponentFilter::All];
        out.extend(opponents(self.table()).into_iter().map(OpponentFilter::Only));
        out
    }

    /// Seasons the log view can switch to, counting back from the loaded one.
    pub fn season_choices(&self) -> Vec<u16> {
        SeasonChoice::available_from(self.log.season)
    }

    pub fn view(&self, filter: &OpponentFilter) -> FilteredView<'_> {
        FilteredView::new(self.table(), filter)
    }
}

/// Sorted unique opponent codes. Empty if the table has no opponent column.
pub fn opponents(table: &Table) -> Vec<String> {
    let Some(ci) = table.col_index(OPPONENT_COLUMN) else { return Vec::new() };
    table
        .column(ci)
        .filter_map(|c| c.as_text())
        .filter(|s| !s.is_empty())
        .map(|s| s!(s))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[derive(Clone, Debug)]
pub struct FilteredView<'a> {
    /// Positions of kept rows in the loaded table
    pub row_ix: Vec<usize>,
    raw: &'a Table,
}

impl<'a> FilteredView<'a> {
    pub fn new(raw: &'a Table, filter: &OpponentFilter) -> Self {
        let row_ix = match (filter, raw.col_index(OPPONENT_COLUMN)) {
            (OpponentFilter::Only(code), Some(ci)) => raw
                .rows
                .iter()
                .enumerate()
                .filter(|(_, r)| matches!(r.get(ci), Some(Cell::Text(s)) if s == code))
                .map(|(i, _)| i)
                .collect(),
            // No opponent column: nothing to filter on
            _ => (0..raw.row_count()).collect(),
        };
        Self { row_ix, raw }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Materialize for analysis/display boundaries.
    pub fn to_table(&self) -> Table {
        self.raw.select_rows(&self.row_ix)
    }
}
