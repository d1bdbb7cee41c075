use anyhow::{Context, Result};
use clap::Parser;
use deskcalc::calculator::Calculator;
use deskcalc::config::Config;
use deskcalc::{script, ui};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "deskcalc")]
#[command(version, about = "A four-function keypad calculator")]
struct Cli {
    /// Evaluate a key script such as "12+3=" and print the display
    #[arg(long, short = 'k', value_name = "SCRIPT")]
    keys: Option<String>,

    /// With --keys, print the display after every key
    #[arg(long, requires = "keys")]
    steps: bool,

    /// Read configuration from this file instead of ~/.config/deskcalc/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.keys {
        Some(keys) => {
            init_stderr_logging();
            run_script(&keys, cli.steps)
        }
        None => {
            let config = match &cli.config {
                Some(path) => Config::load_from(path)?,
                None => Config::load()?,
            };
            match config.log_file() {
                Some(path) => {
                    if let Err(e) = init_file_logging(&path) {
                        eprintln!("deskcalc: logging disabled: {e:#}");
                    }
                }
                None => eprintln!("deskcalc: no log location found, logging disabled"),
            }

            tracing::info!("Starting keypad");
            ui::run(config)
        }
    }
}

fn run_script(keys: &str, steps: bool) -> Result<()> {
    let events = script::parse(keys).context("Invalid key script")?;
    tracing::info!(count = events.len(), "Running key script");

    let mut calc = Calculator::new();
    let trace = script::run(&mut calc, &events);

    if steps {
        for step in &trace {
            println!(
                "{}\t{}\t{}",
                step.event.label(),
                step.display,
                step.error_message
            );
        }
    } else {
        println!("{}", calc.display());
        let error = calc.error_message();
        if !error.is_empty() {
            println!("error: {error}");
        }
    }

    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| "deskcalc=warn".into())
}

fn init_stderr_logging() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// The keypad owns the terminal, so logs go to a file instead.
fn init_file_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .init();

    Ok(())
}
