// src/gui/components/charts.rs
//
// Visualization tab, drawn with the egui painter: a trend line of the chosen
// stat over the filtered games, and bars comparing column averages.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke};

use crate::charts::{mean_comparison, trend, TrendSeries};
use crate::config::options::AnalysisOptions;
use crate::table::Table;

const CHART_HEIGHT: f32 = 220.0;
const PAD: f32 = 28.0;

pub fn draw(ui: &mut egui::Ui, filtered: &Table, opts: &mut AnalysisOptions) {
    let view = filtered.without_columns(&opts.excluded_columns);

    match opts.stat_column.as_deref().map(|c| trend(&view, c)) {
        Some(Ok(series)) => {
            ui.strong(format!("{} over time", series.column));
            trend_chart(ui, &series, opts.threshold);
        }
        Some(Err(e)) => {
            ui.colored_label(ui.visuals().error_fg_color, e.to_string());
        }
        None => {
            ui.label("Pick a stat on the Analysis tab.");
        }
    }

    ui.add_space(12.0);
    ui.strong("Average comparison");
    ui.horizontal_wrapped(|ui| {
        for col in view.numeric_columns() {
            let mut on = opts.compare_columns.contains(&col);
            if ui.checkbox(&mut on, &col).changed() {
                if on {
                    opts.compare_columns.push(col);
                } else {
                    opts.compare_columns.retain(|c| *c != col);
                }
            }
        }
    });
    let bars = mean_comparison(&view, &opts.compare_columns);
    if bars.is_empty() {
        ui.label("Select columns to compare.");
    } else {
        bar_chart(ui, &bars);
    }
}

fn canvas(ui: &mut egui::Ui) -> (egui::Painter, Rect) {
    let size = egui::vec2(ui.available_width().max(200.0), CHART_HEIGHT);
    let (resp, painter) = ui.allocate_painter(size, Sense::hover());
    let frame = resp.rect;
    painter.rect_filled(frame, 4.0, ui.visuals().extreme_bg_color);
    (painter, frame.shrink(PAD))
}

fn trend_chart(ui: &mut egui::Ui, series: &TrendSeries, threshold: f64) {
    let Some((lo, hi)) = series.bounds() else {
        ui.label("No values to plot.");
        return;
    };
    let (lo, hi) = (lo.min(threshold), hi.max(threshold));
    let span = if hi > lo { hi - lo } else { 1.0 };
    let n = series.points.len().max(2) - 1;

    let (painter, area) = canvas(ui);
    let text = ui.visuals().text_color();
    let line = ui.visuals().selection.stroke.color;

    let to_screen = |i: usize, y: f64| {
        let x = area.left() + area.width() * i as f32 / n as f32;
        let y = area.bottom() - area.height() * ((y - lo) / span) as f32;
        Pos2::new(x, y)
    };

    painter.line_segment([area.left_bottom(), area.right_bottom()], Stroke::new(1.0, text));
    painter.line_segment([area.left_bottom(), area.left_top()], Stroke::new(1.0, text));
    let font = FontId::proportional(11.0);
    painter.text(area.left_top(), Align2::RIGHT_CENTER, format!("{hi:.0} "), font.clone(), text);
    painter.text(area.left_bottom(), Align2::RIGHT_CENTER, format!("{lo:.0} "), font.clone(), text);

    // threshold
    let ty = to_screen(0, threshold).y;
    painter.line_segment(
        [Pos2::new(area.left(), ty), Pos2::new(area.right(), ty)],
        Stroke::new(1.0, Color32::from_rgb(0xDC, 0x61, 0x49)),
    );

    // Missing values break the line
    let mut run: Vec<Pos2> = Vec::new();
    for &(i, y) in &series.points {
        match y {
            Some(y) => run.push(to_screen(i, y)),
            None => flush(&painter, &mut run, line),
        }
    }
    flush(&painter, &mut run, line);

    for &(i, y) in &series.points {
        if let Some(y) = y {
            painter.circle_filled(to_screen(i, y), 2.5, line);
        }
    }
}

fn flush(painter: &egui::Painter, run: &mut Vec<Pos2>, color: Color32) {
    if run.len() > 1 {
        painter.add(egui::Shape::line(std::mem::take(run), Stroke::new(2.0, color)));
    }
    run.clear();
}

fn bar_chart(ui: &mut egui::Ui, bars: &[(String, f64)]) {
    let top = bars.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let top = if top > 0.0 { top } else { 1.0 };

    let (painter, area) = canvas(ui);
    let text = ui.visuals().text_color();
    let fill = ui.visuals().selection.bg_fill;
    let font = FontId::proportional(11.0);

    let slot = area.width() / bars.len() as f32;
    for (k, (name, value)) in bars.iter().enumerate() {
        let h = area.height() * (value.max(0.0) / top) as f32;
        let x0 = area.left() + slot * k as f32 + slot * 0.2;
        let x1 = x0 + slot * 0.6;
        let bar = Rect::from_min_max(Pos2::new(x0, area.bottom() - h), Pos2::new(x1, area.bottom()));
        painter.rect_filled(bar, 2.0, fill);
        painter.text(Pos2::new(bar.center().x, bar.top() - 2.0), Align2::CENTER_BOTTOM, format!("{value:.1}"), font.clone(), text);
        painter.text(Pos2::new(bar.center().x, area.bottom() + 2.0), Align2::CENTER_TOP, name, font.clone(), text);
    }
}
