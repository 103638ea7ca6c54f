// src/gui/components/team_panel.rs
//
// Left team list. A click asks for the team's roster; the switch itself
// happens after the frame, once the roster loaded.

use eframe::egui;

use crate::gui::{actions, app::App};
use crate::nav::Transition;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Teams");
    ui.separator();

    if app.teams.is_empty() {
        ui.label("No teams loaded.");
        if ui.button("Retry").clicked() {
            actions::reload_teams(app);
        }
        return;
    }

    // Match the scroll bar aesthetics used in the tables
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let current = app.state.view.team().map(|t| t.code.clone());

    egui::ScrollArea::vertical()
        .id_salt("teams_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            let mut clicked = None;
            for team in &app.teams {
                let is_current = current.as_deref() == Some(team.code.as_str());
                if ui.selectable_label(is_current, &team.name).clicked() {
                    clicked = Some(team.clone());
                }
            }

            if let Some(team) = clicked {
                logf!("UI: Team {} ({})", team.name, team.code);
                app.go(Transition::ViewTeam(team));
            }
        });
}
