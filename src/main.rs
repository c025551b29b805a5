#![allow(warnings)]
//! Split Frontend Entry Point

mod models;
mod config;
mod logger;
mod error;
mod api;
mod search;
mod actions;
mod format;
mod auth;
mod store;
mod context;
mod toast;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::load();
    logger::init(config.level_filter());
    log::info!("starting Split client against {}", config.api_base_url);
    mount_to_body(App);
}
