// src/specs/teams.rs
//! Scraping *spec* for the team directory.
//!
//! Purpose:
//! - Read the season standings page and extract canonical `(name, code)` pairs
//!   from the team links inside its tables (`table a[href*="/teams/"]`).
//! - Keep the page's order; drop exact duplicates (each team is linked from
//!   both the conference and the division standings).
//!
//! This request goes out without a browser User-Agent.

use crate::config::consts::BASE_URL;
use crate::core::html;
use crate::core::net::{Agent, Fetch};
use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Team {
    pub name: String,
    /// Short code used in URL paths, e.g. `BOS`
    pub code: String,
}

impl Team {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self { name: name.into(), code: code.into() }
    }
}

pub fn standings_url(season: u16) -> String {
    format!("{BASE_URL}/leagues/NBA_{season}.html")
}

pub fn fetch_teams(src: &dyn Fetch, season: u16) -> Result<Vec<Team>> {
    let url = standings_url(season);
    let doc = src.get(&url, Agent::Plain)?;
    let teams = parse_teams(&doc)?;
    if teams.is_empty() {
        return Err(ScrapeError::fetch(&url, "no team links on standings page"));
    }
    logf!("Teams: {} from {url}", teams.len());
    Ok(teams)
}

pub fn parse_teams(doc: &str) -> Result<Vec<Team>> {
    let doc = html::parse(doc);
    let mut out: Vec<Team> = Vec::new();
    for (name, href) in html::anchors(&doc, r#"table a[href*="/teams/"]"#)? {
        let Some(code) = code_from_href(&href) else {
            logd!("Teams: skipping link without code: {href}");
            continue;
        };
        let team = Team { name, code };
        if !out.contains(&team) {
            out.push(team);
        }
    }
    Ok(out)
}

/// `/teams/BOS/2025.html` → `BOS`
pub fn code_from_href(href: &str) -> Option<String> {
    let mut parts = href.split('/');
    parts.by_ref().find(|p| *p == "teams")?;
    parts.next().filter(|c| !c.is_empty()).map(|c| s!(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    const STANDINGS: &str = r#"
        <html><body>
        <div id="standings">
          <table id="confs_standings_E">
            <tr><th>Eastern Conference</th></tr>
            <tr><th><a href="/teams/BOS/2025.html">Boston Celtics</a></th></tr>
            <tr><th><a href="/teams/NYK/2025.html">New York Knicks</a></th></tr>
          </table>
          <table id="divs_standings_E">
            <tr><th><a href="/teams/BOS/2025.html">Boston Celtics</a></th></tr>
            <tr><th><a href="/teams/MIL/2025.html">Milwaukee Bucks</a></th></tr>
          </table>
        </div>
        <p><a href="/teams/LAL/2025.html">Outside any table</a></p>
        </body></html>
    "#;

    #[test]
    fn unique_pairs_in_page_order() {
        let teams = parse_teams(STANDINGS).unwrap();
        assert_eq!(
            teams,
            vec![
                Team::new("Boston Celtics", "BOS"),
                Team::new("New York Knicks", "NYK"),
                Team::new("Milwaukee Bucks", "MIL"),
            ]
        );
    }

    #[test]
    fn same_code_different_name_is_kept() {
        let doc = r#"<table>
            <tr><td><a href="/teams/BOS/2025.html">Boston Celtics</a></td></tr>
            <tr><td><a href="/teams/BOS/2025.html">Boston</a></td></tr>
        </table>"#;
        assert_eq!(parse_teams(doc).unwrap().len(), 2);
    }

    #[test]
    fn code_from_relative_and_absolute() {
        assert_eq!(code_from_href("/teams/BOS/2025.html").as_deref(), Some("BOS"));
        assert_eq!(
            code_from_href("https://www.basketball-reference.com/teams/GSW/2025.html").as_deref(),
            Some("GSW")
        );
        assert_eq!(code_from_href("/players/a/x.html"), None);
    }

    #[test]
    fn standings_url_shape() {
        assert_eq!(standings_url(2025), "https://www.basketball-reference.com/leagues/NBA_2025.html");
    }
}
