// src/gui/components/nav_bar.rs
//
// Top strip: sidebar toggle, breadcrumb of the current view, and the
// back/home moves that are valid from here.

use eframe::egui;

use crate::gui::app::App;
use crate::nav::{Transition, View};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let label = if app.state.gui.hide_sidebar { "Show teams" } else { "Hide teams" };
        if ui.button(label).clicked() {
            app.state.gui.hide_sidebar = !app.state.gui.hide_sidebar;
        }

        ui.separator();

        if ui.link("Teams").clicked() {
            app.go(Transition::Home);
        }

        let view = app.state.view.clone();
        if let Some(team) = view.team() {
            ui.label("›");
            let on_roster = matches!(view, View::TeamRoster { .. });
            if on_roster {
                ui.strong(&team.name);
            } else if ui.link(&team.name).clicked() {
                app.go(Transition::BackToRoster);
            }
        }
        if let View::PlayerGameLog { player, season, .. } = &view {
            ui.label("›");
            ui.strong(format!("{} ({season})", player.name));
        }
    });
}
