//! Command-line and environment configuration.
//!
//! Every flag can also be set through an environment variable:
//!
//! - `TAMBOLA_SEED`: seed for reproducible output (default: random)
//! - `TAMBOLA_BOOKS`: number of books to print (default: 1)
//! - `TAMBOLA_FORMAT`: `plain`, `color` or `json` (default: plain)
//! - `TAMBOLA_LOG`: tracing filter, e.g. `debug` (falls back to `RUST_LOG`)

use std::num::NonZeroU32;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::core::entropy_seed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Three lines per ticket, cells separated by `|`
    Plain,
    /// Plain layout with terminal colors
    Color,
    /// One JSON document per line
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "tambola")]
#[command(version, about = "Generate Tambola books: six tickets covering 1-90 exactly once")]
pub struct Config {
    /// Seed for reproducible books
    #[arg(long, short, env = "TAMBOLA_SEED")]
    pub seed: Option<u64>,

    /// Number of books to generate
    #[arg(long, short, env = "TAMBOLA_BOOKS", default_value = "1")]
    pub books: NonZeroU32,

    /// Output format
    #[arg(long, short, env = "TAMBOLA_FORMAT", value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Log filter (stderr), e.g. `info` or `tambola_core=trace`
    #[arg(long, env = "TAMBOLA_LOG")]
    pub log: Option<String>,
}

impl Config {
    /// The configured seed, or a fresh one when none was given
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(entropy_seed)
    }

    /// Tracing filter from `--log`, else `RUST_LOG`, else `warn`
    ///
    /// An explicit `--log`/`TAMBOLA_LOG` value that does not parse is an error.
    pub fn log_filter(&self) -> Result<EnvFilter> {
        match self.log.as_deref() {
            Some(directives) => EnvFilter::try_new(directives)
                .with_context(|| format!("invalid log filter {directives:?}")),
            None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))),
        }
    }
}
