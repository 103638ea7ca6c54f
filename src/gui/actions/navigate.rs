// src/gui/actions/navigate.rs
//
// Every view change goes through `navigate`, which is also the error
// boundary: the target view's data is loaded first and only committed on
// success. On failure the message goes to the status line and the app stays
// where it was, with the data it had.

use eframe::egui;

use crate::{
    config::{
        consts::CURRENT_SEASON,
        options::{AnalysisOptions, SeasonChoice},
    },
    core::net::Fetch,
    data::GameLogData,
    error::Result,
    nav::{Transition, View},
    progress::Progress,
    scrape,
    specs::{gamelog::GameLog, roster::Roster},
};
use crate::gui::{app::App, progress::GuiProgress};

enum Loaded {
    Nothing,
    Roster(Roster),
    GameLog(GameLog, Option<image::RgbaImage>),
}

pub fn navigate(app: &mut App, ctx: &egui::Context, t: Transition) {
    let Some(next) = app.state.view.apply(&t) else {
        logw!("Nav: {t:?} not allowed from {}", app.state.view);
        return;
    };
    logf!("Nav: {} → {next}", app.state.view);

    let loaded = {
        let mut prog = GuiProgress::new(&mut app.status);
        load(app.src.as_ref(), &next, &mut prog)
    };

    match loaded {
        Ok(data) => {
            commit(app, ctx, data);
            app.state.view = next;
        }
        Err(e) => {
            loge!("Nav: {e}");
            app.status = format!("Error: {e}");
        }
    }
}

fn load(src: &dyn Fetch, view: &View, progress: &mut dyn Progress) -> Result<Loaded> {
    match view {
        View::TeamSelection => Ok(Loaded::Nothing),
        View::TeamRoster { team } => {
            scrape::load_roster(src, team, CURRENT_SEASON, progress).map(Loaded::Roster)
        }
        View::PlayerGameLog { player, season, .. } => {
            let log = scrape::load_gamelog(src, &player.profile, *season, progress)?;
            let headshot = log
                .headshot_url
                .as_deref()
                .and_then(|url| scrape::load_headshot(src, url));
            Ok(Loaded::GameLog(log, headshot))
        }
    }
}

fn commit(app: &mut App, ctx: &egui::Context, data: Loaded) {
    match data {
        Loaded::Nothing => {
            app.roster = None;
            app.roster_table = Default::default();
            clear_gamelog(app);
            app.status = format!("{} teams", app.teams.len());
        }
        Loaded::Roster(roster) => {
            app.status = format!(
                "{}: {} players, {} with a profile",
                roster.team_name,
                roster.rows.len(),
                roster.resolved_count()
            );
            app.roster_table = roster.to_table();
            app.roster = Some(roster);
            app.state.gui.player_choice = 0;
            clear_gamelog(app);
        }
        Loaded::GameLog(log, headshot) => {
            app.status = format!(
                "{} {}: {} games",
                log.player_name,
                log.season,
                log.table.row_count()
            );
            app.state.analysis = AnalysisOptions::for_columns(&log.table.numeric_columns());
            app.state.gui.season_choice = SeasonChoice(log.season);
            app.headshot = headshot.map(|img| {
                let size = [img.width() as usize, img.height() as usize];
                let color = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
                ctx.load_texture("headshot", color, egui::TextureOptions::default())
            });
            app.gamelog = Some(GameLogData::new(log));
        }
    }
}

fn clear_gamelog(app: &mut App) {
    app.gamelog = None;
    app.headshot = None;
    app.state.analysis = AnalysisOptions::default();
}

/// Fetch the team directory. On failure the sidebar offers a retry.
pub fn reload_teams(app: &mut App) {
    let res = {
        let mut prog = GuiProgress::new(&mut app.status);
        scrape::load_teams(app.src.as_ref(), CURRENT_SEASON, &mut prog)
    };
    match res {
        Ok(teams) => {
            app.status = format!("{} teams", teams.len());
            app.teams = teams;
        }
        Err(e) => {
            loge!("Teams: {e}");
            app.status = format!("Error: {e}");
        }
    }
}
