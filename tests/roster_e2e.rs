// tests/roster_e2e.rs
//
// Team directory → roster → name matching, end to end against canned pages.

mod common;

use common::*;
use hoops_scrape::core::net::Agent;
use hoops_scrape::names::ProfileRef;
use hoops_scrape::progress::NullProgress;
use hoops_scrape::scrape;
use hoops_scrape::specs::teams::Team;
use hoops_scrape::table::Cell;

#[test]
fn teams_are_unique_and_fetched_plain() {
    let src = StubFetch::new().with(&standings_url(), STANDINGS);
    let teams = scrape::load_teams(&src, 2025, &mut NullProgress).unwrap();

    assert_eq!(
        teams,
        vec![Team::new("Boston Celtics", "BOS"), Team::new("New York Knicks", "NYK")]
    );
    assert_eq!(src.agent_for(&standings_url()), Some(Agent::Plain));
}

#[test]
fn standings_without_team_links_is_fetch_error() {
    let src = StubFetch::new().with(&standings_url(), "<table><tr><td>nothing</td></tr></table>");
    let err = scrape::load_teams(&src, 2025, &mut NullProgress).unwrap_err();
    assert!(err.is_fetch());
}

#[test]
fn roster_rows_all_carry_a_profile() {
    let src = StubFetch::new().with(&roster_url(), ROSTER);
    let team = Team::new("Boston Celtics", "BOS");
    let roster = scrape::load_roster(&src, &team, 2025, &mut NullProgress).unwrap();

    assert_eq!(roster.team_name, "Boston Celtics");
    assert_eq!(src.agent_for(&roster_url()), Some(Agent::Browser));

    let players: Vec<&str> = roster.rows.iter().map(|r| r.player.as_str()).collect();
    assert_eq!(players, vec!["A. Smith", "B. Jones"]);

    // B. Jones is only linked from the leaders table, which doesn't count
    assert_eq!(roster.rows[0].profile, ProfileRef::Url(profile_url()));
    assert_eq!(roster.rows[1].profile, ProfileRef::Unresolved);
    assert_eq!(roster.resolved_count(), 1);

    // placeholder column dropped; No./Wt numeric, the rest left as text
    assert_eq!(roster.headers, vec!["No.", "Player", "Pos", "Ht", "Wt"]);
    assert_eq!(roster.rows[1].cells[4], Cell::Num(1223.0));
    assert_eq!(roster.rows[0].cells[3], Cell::text("6-8"));

    let table = roster.to_table();
    assert_eq!(table.headers.last().map(String::as_str), Some("Profile URL"));
    assert_eq!(table.rows[0][5], Cell::text(profile_url()));
    assert_eq!(table.rows[1][5], Cell::text("N/A"));
}

#[test]
fn missing_roster_page_is_fetch_error() {
    let src = StubFetch::new();
    let team = Team::new("Nowhere", "XXX");
    let err = scrape::load_roster(&src, &team, 2025, &mut NullProgress).unwrap_err();
    assert!(err.is_fetch());
    assert!(err.to_string().contains("/teams/XXX/2025.html"));
}
