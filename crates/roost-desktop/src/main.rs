//! Roost Desktop Application
//!
//! A chat workspace with a drag-sortable note board.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod seed;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

fn main() {
    // Load ROOST_* settings from a .env file when present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("roost=debug")),
        )
        .init();

    tracing::info!("Starting Roost...");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Roost")
            .with_inner_size(LogicalSize::new(1180.0, 760.0)),
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
