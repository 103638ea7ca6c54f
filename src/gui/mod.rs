// src/gui/mod.rs
pub mod app;
pub mod actions;
pub mod router;
pub mod pages;
pub mod components;
pub mod progress;

pub use app::run;
