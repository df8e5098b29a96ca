//! Tambola book printer (default binary).
//!
//! Generates one or more books from a single seeded generator, validates each
//! and writes them to stdout. Logs go to stderr.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use tambola::config::{Config, OutputFormat};
use tambola::core::{validate_book, BookGenerator};
use tambola::term::{encode_book_into, encode_heading_into, to_json_line, write_book};

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(&config)?;

    let seed = config.resolve_seed();
    info!(seed, books = config.books.get(), format = ?config.format, "starting");

    let mut generator = BookGenerator::new(seed);
    let mut out = Vec::with_capacity(8 * 1024);

    for index in 0..config.books.get() {
        let book = generator.generate();
        validate_book(&book).with_context(|| format!("book {index} failed validation"))?;

        match config.format {
            OutputFormat::Plain => {
                if index > 0 {
                    out.push(b'\n');
                }
                let mut text = String::new();
                write_book(&mut text, &book)?;
                out.extend_from_slice(text.as_bytes());
            }
            OutputFormat::Color => {
                if index > 0 {
                    out.push(b'\n');
                }
                if config.books.get() > 1 {
                    encode_heading_into(&format!("Book {} (seed {seed})", index + 1), &mut out)?;
                }
                encode_book_into(&book, &mut out)?;
            }
            OutputFormat::Json => {
                let line = to_json_line(&book, Some(seed), u64::from(index))?;
                out.extend_from_slice(line.as_bytes());
                out.push(b'\n');
            }
        }
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(&out)?;
    stdout.flush()?;
    Ok(())
}

fn init_tracing(config: &Config) -> Result<()> {
    tracing_subscriber::registry()
        .with(config.log_filter()?)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
    Ok(())
}
