use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use view_core::{OptionSource, TableStyle, ViewEngine};

mod commands;
mod config;
mod render;

use commands::{parse_command, Command, HELP};

#[derive(Parser, Debug)]
#[command(about = "Browse a vehicle catalog: filter, sort, page and expand rows")]
struct Args {
    /// Settings file; missing files are ignored.
    #[arg(long, default_value = "browser.toml")]
    config: PathBuf,
    /// Catalog path or http(s) URL.
    #[arg(long)]
    source: Option<String>,
    #[arg(long)]
    page_size: Option<usize>,
    #[arg(long)]
    option_source: Option<OptionSource>,
    #[arg(long)]
    style: Option<TableStyle>,
    /// Semicolon separated commands to run instead of reading stdin.
    #[arg(long)]
    script: Option<String>,
    /// Print view snapshots as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = config::load_settings(&args.config);
    if let Some(source) = args.source {
        settings.data_source = source;
    }
    if let Some(page_size) = args.page_size.filter(|size| *size > 0) {
        settings.page_size = page_size;
    }
    if let Some(option_source) = args.option_source {
        settings.option_source = option_source;
    }
    if let Some(style) = args.style {
        settings.style = style;
    }
    debug!(?settings, "resolved settings");

    let source = catalog_source::source_for_location(&settings.data_source)
        .with_context(|| format!("cannot open catalog '{}'", settings.data_source))?;

    let mut engine = ViewEngine::new(settings.engine_settings());
    if let Err(failure) = engine.load(source.as_ref()).await {
        error!(%failure, source = %settings.data_source, "catalog unavailable");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    show(&engine, args.json, &mut out)?;

    match args.script {
        Some(script) => {
            for line in script.split(';') {
                if !run_line(&mut engine, line, args.json, &mut out)? {
                    break;
                }
            }
        }
        None => {
            for line in io::stdin().lock().lines() {
                let line = line.context("failed to read command")?;
                if !run_line(&mut engine, &line, args.json, &mut out)? {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Runs one command line; returns false when the session should end.
fn run_line(engine: &mut ViewEngine, line: &str, json: bool, out: &mut impl Write) -> Result<bool> {
    match parse_command(line) {
        Ok(None) => {}
        Ok(Some(Command::Quit)) => return Ok(false),
        Ok(Some(Command::Help)) => writeln!(out, "{HELP}")?,
        Ok(Some(Command::Show)) => show(engine, json, out)?,
        Ok(Some(Command::Action(action))) => {
            debug!(action = action.name(), "applying command");
            engine.apply(action);
            show(engine, json, out)?;
        }
        Err(err) => writeln!(out, "error: {err}")?,
    }
    Ok(true)
}

fn show(engine: &ViewEngine, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        render::render_json(engine, out).context("failed to write snapshot")?;
    } else {
        render::render_view(engine, out).context("failed to write view")?;
    }
    out.flush()?;
    Ok(())
}
