// src/gui/pages/gamelog.rs
//
// Player game log: card, season switch, opponent filter and the three tabs.
// The filter only changes which rows are shown; the loaded log stays as is.

use eframe::egui;

use crate::config::{options::SeasonChoice, state::LogTab};
use crate::gui::{
    app::App,
    components::{analysis, charts, data_table, player_card, tabs},
};
use crate::nav::Transition;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let App { state, gamelog, headshot, .. } = &mut *app;
    let Some(data) = gamelog.as_ref() else {
        ui.label("No game log loaded.");
        return;
    };
    let mut request = None;

    ui.horizontal(|ui| {
        if ui.button("← Back to roster").clicked() {
            request = Some(Transition::BackToRoster);
        }

        ui.separator();
        ui.label("Season");
        let before = state.gui.season_choice;
        egui::ComboBox::from_id_salt("log_season")
            .selected_text(before.0.to_string())
            .show_ui(ui, |ui| {
                for season in data.season_choices() {
                    ui.selectable_value(&mut state.gui.season_choice, SeasonChoice(season), season.to_string());
                }
            });
        if state.gui.season_choice != before {
            request = Some(Transition::ChangeSeason(state.gui.season_choice.0));
            // shown season follows the loaded log until the switch succeeds
            state.gui.season_choice = before;
        }

        ui.separator();
        ui.label("Opponent");
        egui::ComboBox::from_id_salt("opponent")
            .selected_text(state.analysis.opponent.label())
            .show_ui(ui, |ui| {
                for choice in data.opponent_choices() {
                    let label = s!(choice.label());
                    ui.selectable_value(&mut state.analysis.opponent, choice, label);
                }
            });
    });

    ui.add_space(6.0);

    let view = data.view(&state.analysis.opponent);
    let filtered = view.to_table();
    player_card::draw(ui, data.log(), headshot.as_ref(), &state.analysis.opponent, &filtered);

    ui.add_space(6.0);
    tabs::draw(ui, &mut state.gui.tab);
    ui.separator();

    match state.gui.tab {
        LogTab::GameLog => data_table::draw(ui, "gamelog", data.table(), &view.row_ix),
        LogTab::Analysis => analysis::draw(ui, &filtered, &mut state.analysis),
        LogTab::Visualization => {
            egui::ScrollArea::vertical().id_salt("viz_scroll").show(ui, |ui| {
                charts::draw(ui, &filtered, &mut state.analysis);
            });
        }
    }

    if let Some(t) = request {
        app.go(t);
    }
}
