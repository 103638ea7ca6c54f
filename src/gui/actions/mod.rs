// src/gui/actions/mod.rs
//
// Operations triggered by the UI. Layout lives in pages/components; the
// fetching, state changes and status text live here.

mod navigate;

pub use navigate::{navigate, reload_teams};
