// src/gui/components/player_card.rs
//
// Headshot, name, season and the active filter, plus quick averages of the
// card stats over the filtered rows.

use eframe::egui::{self, RichText};

use crate::config::{consts::CARD_STATS, options::OpponentFilter};
use crate::specs::gamelog::GameLog;
use crate::stats::column_mean;
use crate::table::Table;

const HEADSHOT_SIZE: egui::Vec2 = egui::vec2(90.0, 130.0);

pub fn draw(
    ui: &mut egui::Ui,
    log: &GameLog,
    headshot: Option<&egui::TextureHandle>,
    filter: &OpponentFilter,
    filtered: &Table,
) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            match headshot {
                Some(tex) => {
                    ui.add(egui::Image::new((tex.id(), HEADSHOT_SIZE)));
                }
                None => {
                    let (rect, _) = ui.allocate_exact_size(HEADSHOT_SIZE, egui::Sense::hover());
                    ui.painter().rect_filled(rect, 4.0, ui.visuals().faint_bg_color);
                }
            }

            ui.vertical(|ui| {
                ui.heading(&log.player_name);
                ui.label(format!("Season {}", log.season));
                ui.label(format!("Opponent: {}", filter.label()));
                ui.label(format!("Games: {}", filtered.row_count()));
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    for stat in CARD_STATS {
                        let value = column_mean(filtered, stat)
                            .map(|m| format!("{m:.1}"))
                            .unwrap_or_else(|| s!("–"));
                        ui.vertical(|ui| {
                            ui.label(RichText::new(*stat).small());
                            ui.label(RichText::new(value).strong().size(18.0));
                        });
                        ui.add_space(8.0);
                    }
                });
            });
        });
    });
}
