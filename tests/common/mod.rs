// tests/common/mod.rs
//
// Canned pages behind the `Fetch` seam, plus a record of what was asked for.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use hoops_scrape::core::net::{Agent, Fetch};
use hoops_scrape::{Result, ScrapeError};

#[derive(Default)]
pub struct StubFetch {
    pages: HashMap<String, String>,
    pub calls: RefCell<Vec<(String, Agent)>>,
}

impl StubFetch {
    pub fn new() -> Self { Self::default() }

    pub fn with(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    pub fn agent_for(&self, url: &str) -> Option<Agent> {
        self.calls.borrow().iter().find(|(u, _)| u == url).map(|(_, a)| *a)
    }
}

impl Fetch for StubFetch {
    fn get(&self, url: &str, agent: Agent) -> Result<String> {
        self.calls.borrow_mut().push((url.to_string(), agent));
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::fetch(url, "HTTP status 404"))
    }
}

pub const BASE: &str = "https://www.basketball-reference.com";

pub const STANDINGS: &str = r#"
<html><body>
<table id="confs_standings_E">
  <tr><th>Eastern Conference</th><th>W</th></tr>
  <tr><td><a href="/teams/BOS/2025.html">Boston Celtics</a></td><td>61</td></tr>
  <tr><td><a href="/teams/NYK/2025.html">New York Knicks</a></td><td>51</td></tr>
</table>
<table id="divs_standings_E">
  <tr><th>Atlantic</th><th>W</th></tr>
  <tr><td><a href="/teams/BOS/2025.html">Boston Celtics</a></td><td>61</td></tr>
</table>
</body></html>
"#;

pub const ROSTER: &str = r#"
<html><head><title>2024-25 Boston Celtics Roster and Stats | Basketball-Reference.com</title></head>
<body>
<div id="meta"><div><h1>Boston Celtics 2024-25 Roster and Stats</h1></div></div>
<table id="roster">
  <thead><tr><th>No.</th><th>Player</th><th>Pos</th><th>Ht</th><th>Wt</th><th></th></tr></thead>
  <tbody>
    <tr><td>0</td><td><a href="/players/s/smithaa01.html">A. Smith</a></td><td>SF</td><td>6-8</td><td>210</td><td>us</td></tr>
    <tr><td>7</td><td>B. Jones</td><td>SG</td><td>6-6</td><td>1,223</td><td>us</td></tr>
  </tbody>
</table>
<table id="leaders"><tr><th>Leader</th></tr>
  <tr><td><a href="/players/j/jonesbb01.html">B. Jones</a></td></tr>
</table>
</body></html>
"#;

pub const GAMELOG: &str = r#"
<html><body>
<h1>Aaron Smith 2024-25 Game Log</h1>
<table id="last5"><tr><th>Date</th><th>PTS</th></tr><tr><td>2025-04-01</td><td>40</td></tr></table>
<table id="player_game_log_reg">
  <thead><tr>
    <th>Rk</th><th>Gcar</th><th>Date</th><th>Team</th><th></th><th>Opp</th><th>Result</th>
    <th>MP</th><th>FG%</th><th>TRB</th><th>AST</th><th>PTS</th><th>GmSc</th><th>+/-</th>
  </tr></thead>
  <tbody>
    <tr><td>1</td><td>1</td><td>2024-10-22</td><td>BOS</td><td></td><td>NYK</td><td>W 132-109</td>
        <td>30:12</td><td>.524</td><td>8</td><td>5</td><td>20</td><td>14.1</td><td>+9</td></tr>
    <tr><td>2</td><td>2</td><td>2024-10-24</td><td>BOS</td><td>@</td><td>WAS</td><td>W 122-102</td>
        <td>28:40</td><td>.600</td><td>4</td><td>7</td><td>30</td><td>20.3</td><td>+12</td></tr>
    <tr class="thead"><th>Rk</th><th>Gcar</th><th>Date</th><th>Team</th><th></th><th>Opp</th><th>Result</th>
        <th>MP</th><th>FG%</th><th>TRB</th><th>AST</th><th>PTS</th><th>GmSc</th><th>+/-</th></tr>
    <tr><td>3</td><td></td><td>2024-10-26</td><td>BOS</td><td>@</td><td>NYK</td><td>L 99-101</td>
        <td colspan="7">Inactive</td></tr>
    <tr><td>4</td><td>3</td><td>2024-10-28</td><td>BOS</td><td></td><td>MIL</td><td>W 119-108</td>
        <td>33:05</td><td>45%</td><td>10</td><td>3</td><td>25</td><td>18.0</td><td>+4</td></tr>
  </tbody>
  <tfoot><tr><td>Totals</td><td></td><td></td><td></td><td></td><td></td><td></td>
        <td>91:57</td><td>.530</td><td>22</td><td>15</td><td>75</td><td></td><td></td></tr></tfoot>
</table>
</body></html>
"#;

pub fn roster_url() -> String { format!("{BASE}/teams/BOS/2025.html") }
pub fn profile_url() -> String { format!("{BASE}/players/s/smithaa01.html") }
pub fn gamelog_url(season: u16) -> String { format!("{BASE}/players/s/smithaa01/gamelog/{season}") }
pub fn standings_url() -> String { format!("{BASE}/leagues/NBA_2025.html") }
