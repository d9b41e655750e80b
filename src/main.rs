//! CleanSpace Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod dashboard;
mod error;
mod logging;
mod models;
mod notify;
mod pages;
mod route;
mod session;
mod store;
mod wizard;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(AppConfig::from_build_env().log_level);
    mount_to_body(App);
}
