//! Launch records dashboard: filter a launch table by site and payload mass
//! and chart the outcome.
//!
//! The data and chart layers (`data`, `chart`, `bindings`, `layout`) carry
//! no UI dependency; `app` and `ui` render them with egui.

pub mod app;
pub mod bindings;
pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod export;
pub mod layout;
pub mod state;
pub mod ui;
