use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};

use normkit::{Slugifier, ToolkitConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Reads lines from stdin and prints one result per line.
///
/// Usage: `normkit [slug|file|wrap] [config.yaml]`
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let mode = args.next().unwrap_or_else(|| "slug".to_string());
    let config = match args.next() {
        Some(path) => ToolkitConfig::from_file(path)?,
        None => ToolkitConfig::default(),
    };
    info!(mode = %mode, "normkit_started");

    let table = config.transliteration_table();
    let slugifier = Slugifier::new(&table);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut count = 0usize;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let rendered = match mode.as_str() {
            "slug" => slugifier.slugify(&line),
            "file" => slugifier.clean_file_name(&line),
            "wrap" => config.word_wrap(&line),
            other => return Err(format!("unknown mode: {other}").into()),
        };
        writeln!(out, "{rendered}")?;
        count += 1;
    }

    info!(lines = count, "normkit_finished");
    Ok(())
}
