// src/config/options.rs
use super::consts::*;

/// Which season to load. The site only keeps a rolling window we care about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeasonChoice(pub u16);

impl Default for SeasonChoice {
    fn default() -> Self { SeasonChoice(CURRENT_SEASON) }
}

impl SeasonChoice {
    /// Newest first: `anchor`, `anchor - 1`, … (SEASON_SPAN entries).
    pub fn available_from(anchor: u16) -> Vec<u16> {
        (0..SEASON_SPAN).filter_map(|i| anchor.checked_sub(i)).collect()
    }

    pub fn available() -> Vec<u16> {
        Self::available_from(CURRENT_SEASON)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum OpponentFilter {
    #[default]
    All,
    Only(String),
}

impl OpponentFilter {
    pub fn label(&self) -> &str {
        match self {
            OpponentFilter::All => "All",
            OpponentFilter::Only(code) => code,
        }
    }
}

/// User choices on the game-log view. Reset whenever a new log is loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisOptions {
    pub opponent: OpponentFilter,
    pub excluded_columns: Vec<String>,
    pub stat_column: Option<String>,
    pub threshold: f64,
    pub compare_columns: Vec<String>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            opponent: OpponentFilter::All,
            excluded_columns: Vec::new(),
            stat_column: None,
            threshold: DEFAULT_THRESHOLD,
            compare_columns: Vec::new(),
        }
    }
}

impl AnalysisOptions {
    /// Defaults that depend on which numeric columns the log actually has.
    pub fn for_columns(numeric: &[String]) -> Self {
        let compare_columns = if CARD_STATS.iter().all(|c| numeric.iter().any(|n| n == c)) {
            CARD_STATS.iter().map(|c| s!(*c)).collect()
        } else {
            Vec::new()
        };
        Self {
            stat_column: numeric.first().cloned(),
            compare_columns,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seasons_are_newest_first() {
        let seasons = SeasonChoice::available_from(2025);
        assert_eq!(seasons.len(), 10);
        assert_eq!(seasons[0], 2025);
        assert_eq!(seasons[9], 2016);
    }

    #[test]
    fn older_anchor_reaches_further_back() {
        let seasons = SeasonChoice::available_from(2016);
        assert_eq!(seasons.first(), Some(&2016));
        assert!(seasons.contains(&2015));
        assert_eq!(seasons.last(), Some(&2007));
    }

    #[test]
    fn compare_defaults_need_all_card_stats() {
        let cols: Vec<String> = ["FG", "PTS", "AST", "TRB"].iter().map(|s| s!(*s)).collect();
        let opts = AnalysisOptions::for_columns(&cols);
        assert_eq!(opts.compare_columns, vec!["PTS", "AST", "TRB"]);
        assert_eq!(opts.stat_column.as_deref(), Some("FG"));

        let partial: Vec<String> = ["PTS", "AST"].iter().map(|s| s!(*s)).collect();
        assert!(AnalysisOptions::for_columns(&partial).compare_columns.is_empty());
    }
}
