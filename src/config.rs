// src/config.rs

use clap::{Parser, ValueEnum};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "rentals-api")]
#[command(about = "Read-only HTTP API over a catalogue of rental listings")]
pub struct Config {
    #[arg(long, env = "HTTP_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    #[arg(short = 't', long, env = "HTTP_PORT", default_value_t = 59191)]
    pub port: u16,

    #[arg(short = 'n', long, env = "DB_PATH", default_value = "rentals.sqlite3")]
    pub db_path: PathBuf,

    /// SQL file applied at startup, e.g. sql/schema.sql
    #[arg(long, env = "DB_SCHEMA")]
    pub schema: Option<PathBuf>,

    #[arg(long, env = "MAX_WORKERS", default_value_t = 8)]
    pub max_workers: usize,

    /// Abort any single query after this many milliseconds
    #[arg(long, env = "QUERY_TIMEOUT_MS")]
    pub query_timeout_ms: Option<u64>,

    #[arg(short = 'd', long, env = "DEBUG", help = "Enable debug logging")]
    pub debug: bool,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn query_timeout(&self) -> Option<Duration> {
        self.query_timeout_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }
}
