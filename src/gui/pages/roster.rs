// src/gui/pages/roster.rs
use eframe::egui;

use crate::config::options::SeasonChoice;
use crate::gui::{app::App, components::data_table};
use crate::nav::{PlayerRef, Transition};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(roster) = app.roster.as_ref() else {
        ui.label("No roster loaded.");
        return;
    };

    ui.heading(format!("{} roster, {}", roster.team_name, roster.season));
    ui.label(format!(
        "{} players, {} with a profile link",
        roster.rows.len(),
        roster.resolved_count()
    ));
    ui.separator();

    let gui = &mut app.state.gui;
    let mut request = None;

    ui.horizontal(|ui| {
        if roster.links.is_empty() {
            ui.label("No player profiles found on this page.");
            return;
        }
        if gui.player_choice >= roster.links.len() {
            gui.player_choice = 0;
        }

        ui.label("Player");
        let shown = roster.links.nth(gui.player_choice).map(|(n, _)| n).unwrap_or_default();
        egui::ComboBox::from_id_salt("player_choice")
            .selected_text(shown)
            .show_ui(ui, |ui| {
                for (i, name) in roster.links.names().enumerate() {
                    ui.selectable_value(&mut gui.player_choice, i, name);
                }
            });

        ui.label("Season");
        egui::ComboBox::from_id_salt("season_choice")
            .selected_text(gui.season_choice.0.to_string())
            .show_ui(ui, |ui| {
                for season in SeasonChoice::available() {
                    ui.selectable_value(&mut gui.season_choice, SeasonChoice(season), season.to_string());
                }
            });

        if ui.button("View game log").clicked() {
            if let Some((name, url)) = roster.links.nth(gui.player_choice) {
                request = Some(Transition::ViewGameLog {
                    player: PlayerRef::new(name, url),
                    season: gui.season_choice.0,
                });
            }
        }
    });

    ui.separator();

    let all: Vec<usize> = (0..app.roster_table.row_count()).collect();
    data_table::draw(ui, "roster", &app.roster_table, &all);

    if let Some(t) = request {
        app.go(t);
    }
}
