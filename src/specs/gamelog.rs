// src/specs/gamelog.rs
//! Scraping *spec* for a player's season game log
//! (`/players/{letter}/{id}/gamelog/{season}`).
//!
//! - The game-log table is picked by its header signature (`Opp` + `PTS`).
//!   Profile pages carry several stat tables, and their order differs
//!   between seasons and between regular season / playoffs.
//! - The player name goes through an ordered list of strategies, ending in
//!   a name decoded from the player id.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use crate::config::consts::{
    BASE_URL, DEFAULT_PLAYER_NAME, GAMELOG_SIGNATURE, HEADSHOT_PATH,
};
use crate::core::html::{self, first_text};
use crate::core::net::{Agent, Fetch};
use crate::core::sanitize::capitalize;
use crate::error::{Result, ScrapeError};
use crate::table::Table;
use super::{first_match, Strategy};

#[derive(Clone, Debug)]
pub struct GameLog {
    pub player_name: String,
    pub player_id: String,
    /// `None` when the page URL carries no player id
    pub headshot_url: Option<String>,
    pub season: u16,
    /// Page the log was read from
    pub url: String,
    pub table: Table,
}

/// `…/players/j/jamesle01.html` → `…/players/j/jamesle01/gamelog/2025`
pub fn gamelog_url(profile: &str, season: u16) -> String {
    profile.replace(".html", &format!("/gamelog/{season}"))
}

/// Segment after `/players/<letter>/`, without any `.html`.
pub fn player_id(url: &str) -> Option<String> {
    let (_, rest) = url.split_once("/players/")?;
    let id = rest.split('/').nth(1)?;
    let id = id.strip_suffix(".html").unwrap_or(id);
    (!id.is_empty()).then(|| s!(id))
}

pub fn headshot_url(player_id: &str) -> Option<String> {
    (!player_id.is_empty()).then(|| format!("{BASE_URL}{HEADSHOT_PATH}{player_id}.jpg"))
}

pub fn fetch_gamelog(src: &dyn Fetch, profile: &str, season: u16) -> Result<GameLog> {
    let url = gamelog_url(profile, season);
    logf!("GameLog: GET {url}");
    let doc = src.get(&url, Agent::Browser)?;
    parse_gamelog(&doc, &url, season)
}

/// Raw (un-normalized) game log read from `doc`.
pub fn parse_gamelog(doc: &str, url: &str, season: u16) -> Result<GameLog> {
    let player_id = player_id(url).unwrap_or_default();
    let page = PlayerPage { doc: html::parse(doc), player_id };

    let table = find_gamelog_table(html::extract_tables(&page.doc)?)
        .ok_or_else(|| ScrapeError::parse(format!("no game log table (needs {GAMELOG_SIGNATURE:?}) at {url}")))?;

    let player_name = player_name(&page);
    logd!("GameLog: '{player_name}' rows={} cols={}", table.row_count(), table.header_count());

    Ok(GameLog {
        headshot_url: headshot_url(&page.player_id),
        player_id: page.player_id,
        player_name,
        season,
        url: s!(url),
        table,
    })
}

/// First table whose headers contain the whole signature.
pub fn find_gamelog_table(tables: Vec<Table>) -> Option<Table> {
    tables
        .into_iter()
        .find(|t| GAMELOG_SIGNATURE.iter().all(|col| t.has_column(col)))
}

/* ---------- player name ---------- */

static GAME_LOG_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+Game Log.*$").expect("game log suffix pattern"));
static ID_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z]+)([0-9]+)").expect("player id pattern"));

pub struct PlayerPage {
    pub doc: Html,
    pub player_id: String,
}

const PLAYER_NAME_STRATEGIES: &[(&str, Strategy<PlayerPage>)] = &[
    ("h1[itemprop=name] span", |p| first_text(&p.doc, r#"h1[itemprop="name"] span"#)),
    ("h1", from_h1),
    ("breadcrumbs", from_breadcrumbs),
    ("player id", |p| name_from_id(&p.player_id)),
];

pub fn player_name(page: &PlayerPage) -> String {
    first_match("player name", page, PLAYER_NAME_STRATEGIES).unwrap_or_else(|| s!(DEFAULT_PLAYER_NAME))
}

/// "LeBron James 2024-25 Game Log" → "LeBron James 2024-25"
fn from_h1(page: &PlayerPage) -> Option<String> {
    let text = first_text(&page.doc, "h1")?;
    Some(GAME_LOG_SUFFIX.replace(&text, "").trim().to_string())
}

fn from_breadcrumbs(page: &PlayerPage) -> Option<String> {
    html::anchors(&page.doc, "div.breadcrumbs a")
        .ok()?
        .into_iter()
        .map(|(text, _)| text)
        .last()
}

/// `jamesle01` → `Jamesle`
pub fn name_from_id(id: &str) -> Option<String> {
    let letters = ID_LETTERS.captures(id)?.get(1)?.as_str();
    Some(capitalize(letters))
}
