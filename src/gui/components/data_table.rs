// src/gui/components/data_table.rs
//
// Draws a `Table` through a row projection. Purely a view: it never owns or
// mutates the data. Numeric columns are centered, text columns left-aligned.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::table::Table;

pub fn draw(ui: &mut egui::Ui, id_salt: &str, table: &Table, row_ix: &[usize]) {
    let cols = table.header_count();
    if cols == 0 {
        ui.label("No data.");
        return;
    }

    let numeric: Vec<bool> = (0..cols)
        .map(|ci| table.is_numeric_column(ci))
        .collect();

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt((id_salt, "hscroll"))
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .id_salt((id_salt, "table"))
                .striped(true)
                .min_scrolled_height(0.0)
                .max_scroll_height(avail_h);
            for &is_num in &numeric {
                let w = if is_num { 48.0 } else { 120.0 };
                builder = builder.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            builder
                .header(24.0, |mut header| {
                    for (ci, name) in table.headers.iter().enumerate() {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            let label = egui::Label::new(RichText::new(name).strong()).selectable(false);
                            if numeric[ci] {
                                ui.centered_and_justified(|ui| { ui.add(label); });
                            } else {
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.add(label); });
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, row_ix.len(), |mut row| {
                        let Some(cells) = row_ix.get(row.index()).and_then(|&ix| table.rows.get(ix)) else {
                            return;
                        };
                        for ci in 0..cols {
                            let text = cells.get(ci).map(|c| c.to_string()).unwrap_or_default();
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if numeric[ci] {
                                    ui.centered_and_justified(|ui| { ui.label(text); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
                                }
                            });
                        }
                    });
                });
        });
}
