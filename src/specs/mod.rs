// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications. Each spec covers one page of the
//! site and encodes *where the data lives in the HTML* and *how to get it out*.
//!
//! ## What lives here
//! - URL shapes for each page (`standings_url`, `roster_url`, `gamelog_url`).
//! - **Pure HTML parsing** (`parse_*`) over `core::html`: table extraction,
//!   scoped anchor collection, and ordered fallback strategies for headings.
//! - `fetch_*` wrappers: one GET through a `core::net::Fetch`, then parse.
//!
//! ## What does **not** live here
//! - Cleaning and name matching (`normalize`, `names`); the `scrape` layer
//!   composes those with the raw pages returned here.
//! - GUI state, filtering, statistics.
//!
//! ## Typical call chain
//! ```text
//! GUI action → scrape::load_* → specs::<page>::fetch_*()
//!                             ↘ normalize / names → Roster / GameLog
//! ```
//!
//! ## Conventions
//! - Tables are picked by what they contain (a `Player` column, a stats header
//!   signature), never by their position on the page.
//! - Headings are read through an ordered list of strategies; the first one
//!   returning non-empty text wins, and the winner is logged.
//! - Specs are testable offline against inline HTML fixtures.

pub mod teams;
pub mod roster;
pub mod gamelog;

/// A named way of pulling one piece of text out of a page.
pub type Strategy<T> = fn(&T) -> Option<String>;

/// Try `strategies` in order; first non-empty result wins.
pub fn first_match<T>(what: &str, input: &T, strategies: &[(&str, Strategy<T>)]) -> Option<String> {
    for (label, strategy) in strategies {
        if let Some(found) = strategy(input).filter(|s| !s.trim().is_empty()) {
            logd!("Specs: {what} from {label}: '{found}'");
            return Some(found);
        }
    }
    logw!("Specs: {what} not found by any strategy");
    None
}
