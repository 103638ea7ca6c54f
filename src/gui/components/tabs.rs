// src/gui/components/tabs.rs
//
// Game-log view tabs. Switching is a pure display change; nothing reloads.

use eframe::egui;

use crate::config::state::LogTab;

pub fn draw(ui: &mut egui::Ui, tab: &mut LogTab) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        for t in LogTab::ALL {
            let selected = *tab == t;
            if ui.selectable_label(selected, t.title()).clicked() && !selected {
                logd!("UI: Tab switch {:?} → {:?}", *tab, t);
                *tab = t;
            }
        }
    });
}
