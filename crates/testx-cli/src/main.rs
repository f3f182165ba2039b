//! testx CLI — an interactive terminal quiz runner.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use testx_core::SettingsStore;

mod commands;
mod config;
mod console;

use config::ModeSetting;
use console::Console;

#[derive(Parser)]
#[command(name = "testx", version, about = "Interactive terminal quiz runner")]
struct Cli {
    /// Directory containing `*.txt` question files
    #[arg(long)]
    texts_dir: Option<PathBuf>,

    /// Settings file holding the shuffle preferences
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Quit and retry behaviour during a quiz
    #[arg(long, value_enum)]
    mode: Option<ModeSetting>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("testx=warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load_config_from(cli.config.as_deref())?.with_overrides(
        cli.texts_dir,
        cli.settings,
        cli.mode,
    );

    let mut store = SettingsStore::open(&config.settings_path);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    writeln!(console.out(), "Welcome to TestX. Repository: https://github.com/Lyups/TestX")?;

    commands::menu::execute(&mut console, &config, &mut store, rand::thread_rng())
}
