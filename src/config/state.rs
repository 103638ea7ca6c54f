// src/config/state.rs
use crate::nav::View;
use super::options::{AnalysisOptions, SeasonChoice};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LogTab {
    #[default]
    GameLog,
    Analysis,
    Visualization,
}

impl LogTab {
    pub const ALL: [LogTab; 3] = [LogTab::GameLog, LogTab::Analysis, LogTab::Visualization];

    pub fn title(self) -> &'static str {
        match self {
            LogTab::GameLog => "Game Log",
            LogTab::Analysis => "Analysis",
            LogTab::Visualization => "Visualization",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub hide_sidebar: bool,

    /// Index into the roster's player links
    pub player_choice: usize,

    /// Season picked on the roster view (game log target)
    /// and on the game-log view (season switch)
    pub season_choice: SeasonChoice,

    pub tab: LogTab,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            hide_sidebar: false,
            player_choice: 0,
            season_choice: SeasonChoice::default(),
            tab: LogTab::default(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub view: View,
    pub gui: GuiState,
    pub analysis: AnalysisOptions,
}
