// src/gui/components/mod.rs
pub mod nav_bar;
pub mod team_panel;
pub mod data_table;
pub mod tabs;
pub mod player_card;
pub mod analysis;
pub mod charts;
