mod app;
mod config;
mod effects;
mod logging;
mod terminal;
mod ui;

pub use app::run_app;
pub use config::Cli;
