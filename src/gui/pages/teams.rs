// src/gui/pages/teams.rs
use eframe::egui;

use crate::config::consts::CURRENT_SEASON;
use crate::gui::app::App;
use crate::nav::Transition;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading(format!("NBA teams, {} season", CURRENT_SEASON));
    ui.label("Pick a team to see its roster.");
    ui.separator();

    let mut picked = None;
    egui::ScrollArea::vertical().id_salt("team_grid").show(ui, |ui| {
        egui::Grid::new("team_grid").num_columns(3).spacing([12.0, 8.0]).show(ui, |ui| {
            for (i, team) in app.teams.iter().enumerate() {
                if ui.button(format!("{} ({})", team.name, team.code)).clicked() {
                    picked = Some(team.clone());
                }
                if i % 3 == 2 {
                    ui.end_row();
                }
            }
        });
    });

    if let Some(team) = picked {
        app.go(Transition::ViewTeam(team));
    }
}
