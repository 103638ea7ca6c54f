// src/gui/pages/mod.rs
//
// One page per `nav::View`. Pages draw from `App` and request moves through
// `App::go`; they never fetch.

pub mod teams;
pub mod roster;
pub mod gamelog;
