// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use hoops_scrape::{gui, log, loge};

/// Orange ball with dark seams, drawn at startup.
fn app_icon() -> IconData {
    const SIZE: u32 = 64;
    let c = (SIZE as f32 - 1.0) / 2.0;
    let r = c - 1.0;
    let rgba = image::RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let (dx, dy) = (x as f32 - c, y as f32 - c);
        let d = (dx * dx + dy * dy).sqrt();
        if d > r {
            return image::Rgba([0, 0, 0, 0]);
        }
        let seam = dx.abs() < 1.5 || dy.abs() < 1.5 || ((d - r * 0.7).abs() < 1.5 && dx.abs() > r * 0.4);
        if seam {
            image::Rgba([40, 24, 16, 255])
        } else {
            image::Rgba([232, 110, 36, 255])
        }
    });
    IconData { rgba: rgba.into_raw(), width: SIZE, height: SIZE }
}

fn main() {
    let level = if cfg!(debug_assertions) { ::log::LevelFilter::Debug } else { ::log::LevelFilter::Info };
    if let Err(e) = log::init(level) {
        eprintln!("Logger failed: {e}");
    }

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        loge!("GUI failed: {e}");
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
