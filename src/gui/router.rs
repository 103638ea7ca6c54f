// src/gui/router.rs
use eframe::egui;

use crate::nav::View;
use super::{app::App, pages};

/// Draw the page for the current view.
pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    match app.state.view {
        View::TeamSelection => pages::teams::draw(ui, app),
        View::TeamRoster { .. } => pages::roster::draw(ui, app),
        View::PlayerGameLog { .. } => pages::gamelog::draw(ui, app),
    }
}
