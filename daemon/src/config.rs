use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use landchain_common::parcel::Locale;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

// bind addresses
// Loopback by default: the state endpoints can overwrite or reset the record.
// Set --rpc-bind-address 0.0.0.0:8080 explicitly to expose the service.
pub const DEFAULT_RPC_BIND_ADDRESS: &str = "127.0.0.1:8080";

// Default number of HTTP workers
pub const DEFAULT_RPC_THREADS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "landchain_daemon", version, about = "LandChain parcel registry daemon")]
pub struct Config {
    /// Address the HTTP service binds to
    #[clap(long, default_value_t = String::from(DEFAULT_RPC_BIND_ADDRESS))]
    #[serde(default = "default_rpc_bind_address")]
    pub rpc_bind_address: String,

    /// Number of HTTP workers
    #[clap(long, default_value_t = DEFAULT_RPC_THREADS)]
    #[serde(default = "default_rpc_threads")]
    pub rpc_threads: usize,

    /// Set log level
    #[clap(long, value_enum, default_value_t = LogLevel::Info)]
    #[serde(default)]
    pub log_level: LogLevel,

    /// Language of confirmations and reports
    #[clap(long, value_enum, default_value_t = Locale::Indonesian)]
    #[serde(default)]
    pub locale: Locale,

    /// JSON file holding the parcel, loaded at startup and rewritten after each change
    #[clap(long)]
    #[serde(default)]
    pub state_file: Option<PathBuf>,
}

fn default_rpc_bind_address() -> String {
    DEFAULT_RPC_BIND_ADDRESS.to_owned()
}

fn default_rpc_threads() -> usize {
    DEFAULT_RPC_THREADS
}

impl Config {
    /// Whether the bind address is reachable only from this host
    pub fn is_loopback_bind(&self) -> bool {
        let host = self
            .rpc_bind_address
            .rsplit_once(':')
            .map_or(self.rpc_bind_address.as_str(), |(host, _)| host);
        matches!(host, "127.0.0.1" | "localhost" | "[::1]" | "::1")
    }
}
