// src/lib.rs

#[macro_use]
pub mod macros;

pub mod log;
pub mod error;
pub mod config;
pub mod core;
pub mod specs;

pub mod table;
pub mod normalize;
pub mod names;
pub mod stats;
pub mod charts;
pub mod data;
pub mod nav;
pub mod progress;
pub mod scrape;
pub mod gui;

pub use error::{Result, ScrapeError};
