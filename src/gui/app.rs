// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::state::AppState,
    core::net::{Fetch, HttpFetcher},
    data::GameLogData,
    nav::Transition,
    specs::{roster::Roster, teams::Team},
    table::Table,
};

use super::{actions, components, router};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let src = HttpFetcher::new()?;
    eframe::run_native(
        "Hoops Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(Box::new(src))))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth for navigation and user choices
    pub state: AppState,

    pub src: Box<dyn Fetch>,

    // session data, replaced on each successful navigation
    pub teams: Vec<Team>,
    pub roster: Option<Roster>,
    pub roster_table: Table,
    pub gamelog: Option<GameLogData>,
    pub headshot: Option<egui::TextureHandle>,

    pub status: String,

    // set by pages while drawing, applied at the end of the frame
    pub pending: Option<Transition>,
}

impl App {
    pub fn new(src: Box<dyn Fetch>) -> Self {
        let mut app = Self {
            state: AppState::default(),
            src,
            teams: Vec::new(),
            roster: None,
            roster_table: Table::default(),
            gamelog: None,
            headshot: None,
            status: s!("Idle"),
            pending: None,
        };
        actions::reload_teams(&mut app);
        logf!("Init: teams={}, view={}", app.teams.len(), app.state.view);
        app
    }

    #[inline]
    pub fn go(&mut self, t: Transition) {
        self.pending = Some(t);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            components::nav_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        if !self.state.gui.hide_sidebar {
            egui::SidePanel::left("teams")
                .resizable(false)
                .show(ctx, |ui| {
                    components::team_panel::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            router::draw(ui, self);
        });

        if let Some(t) = self.pending.take() {
            actions::navigate(self, ctx, t);
        }
    }
}
