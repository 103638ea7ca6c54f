// src/gui/components/analysis.rs
//
// Analysis tab: columns to exclude, the stat to summarize, the threshold,
// and the resulting summary. Works on the opponent-filtered rows.

use eframe::egui::{self, RichText};

use crate::config::{consts::THRESHOLD_STEP, options::AnalysisOptions};
use crate::stats::{summarize, Summary};
use crate::table::Table;

pub fn draw(ui: &mut egui::Ui, filtered: &Table, opts: &mut AnalysisOptions) {
    ui.collapsing("Exclude columns", |ui| {
        ui.horizontal_wrapped(|ui| {
            for col in &filtered.headers {
                let mut excluded = opts.excluded_columns.contains(col);
                if ui.checkbox(&mut excluded, col).changed() {
                    if excluded {
                        opts.excluded_columns.push(col.clone());
                    } else {
                        opts.excluded_columns.retain(|c| c != col);
                    }
                }
            }
        });
    });

    let numeric = filtered.without_columns(&opts.excluded_columns).numeric_columns();
    if numeric.is_empty() {
        ui.label("No numeric columns left to analyze.");
        return;
    }
    if !opts.stat_column.as_ref().is_some_and(|c| numeric.contains(c)) {
        opts.stat_column = numeric.first().cloned();
    }

    ui.horizontal(|ui| {
        ui.label("Stat");
        let current = opts.stat_column.clone().unwrap_or_default();
        egui::ComboBox::from_id_salt("stat_column")
            .selected_text(&current)
            .show_ui(ui, |ui| {
                for col in &numeric {
                    ui.selectable_value(&mut opts.stat_column, Some(col.clone()), col);
                }
            });

        ui.separator();
        ui.label("Threshold");
        if ui.small_button("−").clicked() {
            opts.threshold -= THRESHOLD_STEP;
        }
        ui.add(egui::DragValue::new(&mut opts.threshold).speed(THRESHOLD_STEP).fixed_decimals(1));
        if ui.small_button("+").clicked() {
            opts.threshold += THRESHOLD_STEP;
        }
    });

    ui.separator();

    let Some(column) = opts.stat_column.as_deref() else { return };
    match summarize(filtered, column, &opts.excluded_columns, opts.threshold) {
        Ok(summary) => summary_lines(ui, &summary),
        Err(e) => {
            ui.colored_label(ui.visuals().error_fg_color, e.to_string());
        }
    }
}

fn summary_lines(ui: &mut egui::Ui, s: &Summary) {
    egui::Grid::new("summary_grid").num_columns(2).striped(true).show(ui, |ui| {
        let rows = [
            ("Count", s.count.to_string()),
            ("Mean", format!("{:.2}", s.mean)),
            ("Std dev", s.std_dev.map(|v| format!("{v:.2}")).unwrap_or_else(|| s!("n/a"))),
            ("Min", format!("{:.2}", s.min)),
            ("Max", format!("{:.2}", s.max)),
        ];
        for (k, v) in rows {
            ui.label(k);
            ui.label(v);
            ui.end_row();
        }
    });

    ui.add_space(6.0);
    ui.label(RichText::new(over_under_line("Over", s.threshold, s.over, s.pct_over)).strong());
    ui.label(RichText::new(over_under_line("Under", s.threshold, s.under, s.pct_under)).strong());
}

/// "Over 20.5: 2 games (66.7%)"
pub fn over_under_line(side: &str, threshold: f64, n: usize, pct: f64) -> String {
    let games = if n == 1 { "game" } else { "games" };
    format!("{side} {threshold}: {n} {games} ({pct:.1}%)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn over_under_text() {
        assert_eq!(over_under_line("Over", 20.5, 2, 66.666), "Over 20.5: 2 games (66.7%)");
        assert_eq!(over_under_line("Under", 20.5, 1, 33.333), "Under 20.5: 1 game (33.3%)");
    }
}
