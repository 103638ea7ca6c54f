// src/specs/roster.rs
//! Scraping *spec* for a team-season roster page (`/teams/{code}/{season}.html`).
//!
//! - Team name: ordered heading strategies, then the `<title>` pattern.
//! - Roster table: the first table with a `Player` column.
//! - Profile links: anchors to `/players/` **inside `table#roster` only**, so
//!   links from leaderboards and transaction notes elsewhere on the page
//!   never match a roster name.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use crate::config::consts::{
    BASE_URL, DEFAULT_TEAM_NAME, PLAYER_COLUMN, PROFILE_COLUMN,
};
use crate::core::html::{self, first_text};
use crate::core::net::{Agent, Fetch};
use crate::error::{Result, ScrapeError};
use crate::names::{PlayerLinks, ProfileRef};
use crate::table::{Cell, Table};
use super::{first_match, Strategy};

/// Roster page as read off the HTML, before cleaning and matching.
#[derive(Clone, Debug)]
pub struct RosterPage {
    pub team_name: String,
    pub table: Table,
    pub links: PlayerLinks,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RosterRow {
    pub player: String,
    pub profile: ProfileRef,
    /// Full row, `Player` column included
    pub cells: Vec<Cell>,
}

#[derive(Clone, Debug)]
pub struct Roster {
    pub team_name: String,
    pub season: u16,
    pub headers: Vec<String>,
    pub rows: Vec<RosterRow>,
    pub links: PlayerLinks,
}

impl Roster {
    /// Display table: the roster columns plus `Profile URL`.
    pub fn to_table(&self) -> Table {
        let mut t = Table::new(
            self.headers.clone(),
            self.rows.iter().map(|r| r.cells.clone()).collect(),
        );
        let profiles = self.rows.iter().map(|r| Cell::text(r.profile.to_string())).collect();
        t.push_column(PROFILE_COLUMN, profiles);
        t
    }

    pub fn resolved_count(&self) -> usize {
        self.rows.iter().filter(|r| r.profile.is_resolved()).count()
    }
}

pub fn roster_url(code: &str, season: u16) -> String {
    format!("{BASE_URL}/teams/{code}/{season}.html")
}

pub fn fetch_roster_page(src: &dyn Fetch, code: &str, season: u16) -> Result<RosterPage> {
    let url = roster_url(code, season);
    let doc = src.get(&url, Agent::Browser)?;
    parse_roster_page(&doc)
}

pub fn parse_roster_page(doc: &str) -> Result<RosterPage> {
    let doc = html::parse(doc);

    let team_name = team_name(&doc);

    let table = html::extract_tables(&doc)?
        .into_iter()
        .find(|t| t.has_column(PLAYER_COLUMN))
        .ok_or_else(|| ScrapeError::parse("no table with a 'Player' column on the team page"))?;

    let links = html::anchors(&doc, r#"table#roster a[href*="/players/"]"#)?
        .into_iter()
        .map(|(name, href)| (name, join!(BASE_URL, &href)))
        .collect::<PlayerLinks>();

    logd!(
        "Roster: '{team_name}' rows={} cols={} links={}",
        table.row_count(),
        table.header_count(),
        links.len()
    );
    Ok(RosterPage { team_name, table, links })
}

/* ---------- team name ---------- */

static SEASON_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\d{4}-\d{2,4}.*$").expect("season suffix pattern"));
static TITLE_TEAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s+Roster").expect("title pattern"));

const TEAM_NAME_STRATEGIES: &[(&str, Strategy<Html>)] = &[
    ("h1[itemprop=name] span", |d| heading(d, r#"h1[itemprop="name"] span"#)),
    ("h1[data-testid=entity-name]", |d| heading(d, r#"h1[data-testid="entity-name"]"#)),
    ("h1.teamname", |d| heading(d, "h1.teamname")),
    ("h1", |d| heading(d, "h1")),
    ("div#meta div h1", |d| heading(d, "div#meta div h1")),
    ("title", from_title),
];

pub fn team_name(doc: &Html) -> String {
    first_match("team name", doc, TEAM_NAME_STRATEGIES).unwrap_or_else(|| s!(DEFAULT_TEAM_NAME))
}

/// Heading text with a trailing season ("… 2024-25 …") removed.
fn heading(doc: &Html, css: &str) -> Option<String> {
    let text = first_text(doc, css)?;
    Some(SEASON_SUFFIX.replace(&text, "").trim().to_string())
}

/// "Boston Celtics Roster and Stats | …" → "Boston Celtics"
fn from_title(doc: &Html) -> Option<String> {
    let title = first_text(doc, "title")?;
    TITLE_TEAM
        .captures(&title)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(s: &str) -> Html { html::parse(s) }

    #[test]
    fn structured_heading_wins() {
        let d = doc(r#"
            <title>Other Roster</title>
            <h1>Generic</h1>
            <h1 itemprop="name"><span>Boston Celtics</span></h1>
        "#);
        assert_eq!(team_name(&d), "Boston Celtics");
    }

    #[test]
    fn generic_heading_drops_season_suffix() {
        let d = doc("<h1>Boston Celtics 2024-25 Roster and Stats</h1>");
        assert_eq!(team_name(&d), "Boston Celtics");
    }

    #[test]
    fn empty_heading_falls_through_to_title() {
        let d = doc("<head><title>Denver Nuggets Roster and Stats</title></head><body><h1> </h1></body>");
        assert_eq!(team_name(&d), "Denver Nuggets");
    }

    #[test]
    fn nothing_found_gives_default() {
        let d = doc("<head><title>Basketball</title></head><body><p>x</p></body>");
        assert_eq!(team_name(&d), "NBA Team");
    }

    #[test]
    fn missing_player_table_is_parse_error() {
        let err = parse_roster_page("<table><tr><th>Team</th></tr><tr><td>x</td></tr></table>").unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn links_are_scoped_to_roster_table() {
        let page = parse_roster_page(r#"
            <h1>Boston Celtics</h1>
            <table id="leaders"><tr><th>Player</th></tr>
              <tr><td><a href="/players/t/tatumja01.html">Jayson Tatum</a></td></tr></table>
            <table id="roster"><thead><tr><th>No.</th><th>Player</th></tr></thead>
              <tbody><tr><td>7</td><td><a href="/players/b/brownja02.html">Jaylen Brown</a></td></tr></tbody></table>
        "#).unwrap();
        assert_eq!(page.links.len(), 1);
        assert_eq!(
            page.links.get("Jaylen Brown"),
            Some("https://www.basketball-reference.com/players/b/brownja02.html")
        );
    }

    #[test]
    fn roster_table_appends_profile_column() {
        let roster = Roster {
            team_name: s!("X"),
            season: 2025,
            headers: vec![s!("Player")],
            rows: vec![
                RosterRow { player: s!("A"), profile: ProfileRef::Url(s!("u")), cells: vec![Cell::text("A")] },
                RosterRow { player: s!("B"), profile: ProfileRef::Unresolved, cells: vec![Cell::text("B")] },
            ],
            links: PlayerLinks::new(),
        };
        let t = roster.to_table();
        assert_eq!(t.headers, vec!["Player", "Profile URL"]);
        assert_eq!(t.rows[1][1], Cell::text("N/A"));
        assert_eq!(roster.resolved_count(), 1);
    }
}
