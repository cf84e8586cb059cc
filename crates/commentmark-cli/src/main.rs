use anyhow::{Context, Result};
use commentmark_config::Config;
use commentmark_engine::{convert, io};
use std::{
    env,
    io::{Read, Write},
    path::Path,
    process,
};

/// Converts one file, or stdin for `-`, and prints the fragment.
fn convert_one(source: &str, context_id: Option<&str>) -> Result<()> {
    let (raw, default_id) = if source == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read stdin")?;
        (raw, String::new())
    } else {
        let path = Path::new(source);
        let raw = io::read_source(path)?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        (raw, stem)
    };

    let html = convert(&raw, context_id.unwrap_or(&default_id));
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(html.as_bytes())
        .context("Failed to write to stdout")?;
    stdout.flush()?;
    Ok(())
}

/// Converts every configured source file into the output directory, using
/// each file stem as its context id.
fn convert_batch(config: &Config) -> Result<()> {
    let sources = config.source_files()?;
    if sources.is_empty() {
        log::warn!("No source files match {}", config.sources);
    }

    for source in &sources {
        let context_id = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dest = config.output_path(source);
        io::convert_file(source, &dest, &context_id)
            .with_context(|| format!("Failed to convert {}", source.display()))?;
        log::info!("{} -> {}", source.display(), dest.display());
    }

    log::info!(
        "Converted {} file(s) into {}",
        sources.len(),
        config.output_dir.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    match args.len() {
        2 | 3 => convert_one(&args[1], args.get(2).map(String::as_str)),
        1 => match Config::load() {
            Ok(Some(config)) => {
                log::info!("Using config {}", config_path.display());
                convert_batch(&config)
            }
            Ok(None) => {
                eprintln!("Error: No input file provided and no config file found");
                eprintln!("Usage: {} <FILE|-> [CONTEXT_ID]", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <FILE|-> [CONTEXT_ID]", args[0]);
                process::exit(1);
            }
        },
        _ => {
            eprintln!("Usage: {} [<FILE|-> [CONTEXT_ID]]", args[0]);
            process::exit(1);
        }
    }
}
