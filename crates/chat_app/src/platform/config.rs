use std::time::Duration;

use chat_engine::{ExchangeSettings, DEFAULT_SERVER_URL};
use clap::Parser;
use log::LevelFilter;

use super::logging::LogDestination;

/// Terminal chat client for a question/answer server.
#[derive(Debug, Parser)]
#[command(name = "chat_app", version, about)]
pub struct Cli {
    /// Base URL of the server; questions are posted to `<server>/ask`.
    #[arg(long, default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Connect timeout in milliseconds. Unset leaves the transport default.
    #[arg(long, value_name = "MS")]
    pub connect_timeout_ms: Option<u64>,

    /// Whole-request timeout in milliseconds. Unset leaves the transport default.
    #[arg(long, value_name = "MS")]
    pub request_timeout_ms: Option<u64>,

    /// Where diagnostic logs go.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log_to: LogDestination,

    /// Log level: off, error, warn, info, debug or trace.
    #[arg(long, default_value = "info", value_parser = parse_level_arg)]
    pub log_level: LevelFilter,
}

impl Cli {
    pub fn exchange_settings(&self) -> ExchangeSettings {
        ExchangeSettings {
            server_url: self.server.clone(),
            connect_timeout: self.connect_timeout_ms.map(Duration::from_millis),
            request_timeout: self.request_timeout_ms.map(Duration::from_millis),
        }
    }
}

fn parse_level_arg(raw: &str) -> Result<LevelFilter, String> {
    chat_logging::parse_level(raw).ok_or_else(|| format!("unknown log level `{raw}`"))
}
