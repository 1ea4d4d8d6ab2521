//! Command-line and environment configuration.

use clap::Parser;
use std::path::PathBuf;

/// Runtime settings. Every flag can also be given through its `SCHOOL_*`
/// environment variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "school-backend", version, about = "Campus-scoped school administration API")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "SCHOOL_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "SCHOOL_PORT", default_value_t = 8080)]
    pub port: u16,

    /// SQLite database file, created on first start.
    #[arg(long, env = "SCHOOL_DATABASE", default_value = "school.sqlite")]
    pub database: PathBuf,

    /// Largest accepted JSON body, in bytes.
    #[arg(long, env = "SCHOOL_JSON_LIMIT", default_value_t = 1024 * 1024)]
    pub json_limit: usize,
}
