// src/scrape.rs
//
// Load pipelines behind each view: fetch the page, extract, normalize and
// (for rosters) match names. Pure HTML work lives in `specs`; this layer
// composes it with `normalize` and `names` and reports progress.

use crate::{
    config::consts::PLAYER_COLUMN,
    core::net::{Agent, Fetch},
    error::{Result, ScrapeError},
    names::resolve,
    normalize::{normalize, NormalizeRules},
    progress::Progress,
    specs::{
        gamelog::{self, GameLog},
        roster::{self, Roster, RosterPage, RosterRow},
        teams::{self, Team},
    },
};

pub fn load_teams(src: &dyn Fetch, season: u16, progress: &mut dyn Progress) -> Result<Vec<Team>> {
    progress.begin(1);
    progress.log("Fetching teams…");
    let out = teams::fetch_teams(src, season);
    progress.step_done("teams");
    progress.finish();
    out
}

pub fn load_roster(src: &dyn Fetch, team: &Team, season: u16, progress: &mut dyn Progress) -> Result<Roster> {
    progress.begin(2);
    progress.log(&format!("Fetching {} roster…", team.name));
    let out = roster::fetch_roster_page(src, &team.code, season).and_then(|page| {
        progress.step_done("fetch");
        let roster = build_roster(page, season)?;
        progress.step_done("match");
        Ok(roster)
    });
    progress.finish();

    let roster = out?;
    logf!(
        "Roster: {} ({season}) players={} resolved={}",
        roster.team_name,
        roster.rows.len(),
        roster.resolved_count()
    );
    Ok(roster)
}

/// Normalize the roster table and attach a profile to every row.
pub fn build_roster(page: RosterPage, season: u16) -> Result<Roster> {
    let RosterPage { team_name, table, links } = page;
    let table = normalize(table, &NormalizeRules::ROSTER);

    let pi = table
        .col_index(PLAYER_COLUMN)
        .ok_or_else(|| ScrapeError::parse("roster lost its 'Player' column while cleaning"))?;

    let rows = table
        .rows
        .into_iter()
        .map(|cells| {
            let player = cells.get(pi).map(|c| c.to_string()).unwrap_or_default();
            let profile = resolve(&player, &links);
            RosterRow { player, profile, cells }
        })
        .collect();

    Ok(Roster { team_name, season, headers: table.headers, rows, links })
}

pub fn load_gamelog(src: &dyn Fetch, profile: &str, season: u16, progress: &mut dyn Progress) -> Result<GameLog> {
    progress.begin(2);
    progress.log(&format!("Fetching {season} game log…"));
    let out = gamelog::fetch_gamelog(src, profile, season).map(|mut log| {
        progress.step_done("fetch");
        log.table = normalize(log.table, &NormalizeRules::GAME_LOG);
        progress.step_done("normalize");
        log
    });
    progress.finish();

    let log = out?;
    logf!(
        "GameLog: {} ({season}) games={} cols={}",
        log.player_name,
        log.table.row_count(),
        log.table.header_count()
    );
    Ok(log)
}

/// Headshot image for the player card. Best effort: a failure is logged and
/// the card is drawn without a picture.
pub fn load_headshot(src: &dyn Fetch, url: &str) -> Option<image::RgbaImage> {
    let bytes = match src.get_bytes(url, Agent::Browser) {
        Ok(b) => b,
        Err(e) => {
            logw!("Headshot: {e}");
            return None;
        }
    };
    match image::load_from_memory(&bytes) {
        Ok(img) => Some(img.to_rgba8()),
        Err(e) => {
            logw!("Headshot: cannot decode {url}: {e}");
            None
        }
    }
}
