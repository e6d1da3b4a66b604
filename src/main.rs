//! termfolio - single-page personal portfolio in the terminal
//!
//! Renders portfolio content from a TOML file (or the built-in sample) as a
//! scrollable page with section navigation, a theme toggle and animated
//! titles.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::path::{Path, PathBuf};

use termfolio::config::{Config, ThemePreference};
use termfolio::constants::APP_NAME;
use termfolio::logging;
use termfolio::models::Portfolio;
use termfolio::tui::{self, AppState};

/// termfolio - single-page personal portfolio in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Portfolio TOML file (defaults to the configured file, then the built-in sample)
    #[arg(value_name = "FILE")]
    content: Option<PathBuf>,

    /// Start theme, overriding the config file
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Validate the content, print a summary and exit
    #[arg(long)]
    check: bool,

    /// Save the effective settings (FILE and --theme included) to the config file and exit
    #[arg(long)]
    init_config: bool,

    /// Write logs to PATH instead of the config directory
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

/// Start theme accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    /// Follow the OS setting
    Auto,
    /// Dark palette
    Dark,
    /// Light palette
    Light,
}

impl From<ThemeArg> for ThemePreference {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Auto => Self::Auto,
            ThemeArg::Dark => Self::Dark,
            ThemeArg::Light => Self::Light,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(theme) = cli.theme {
        config.ui.theme = theme.into();
    }

    if let Some(path) = &cli.content {
        config.paths.content = Some(path.clone());
    }

    let source = config.paths.content.clone();
    let portfolio = match &source {
        Some(path) => Portfolio::load(path)?,
        None => Portfolio::embedded()?,
    };

    if cli.init_config {
        if let Some(path) = &mut config.paths.content {
            *path = path
                .canonicalize()
                .with_context(|| format!("Failed to resolve {}", path.display()))?;
        }
        config.save()?;
        println!("Wrote {}", Config::config_file_path()?.display());
        return Ok(());
    }

    if cli.check {
        print_summary(&portfolio, source.as_deref());
        return Ok(());
    }

    let log_path = match cli.log_file {
        Some(path) => path,
        None => config.log_file_path()?,
    };
    logging::init(&log_path, cli.verbose)?;
    let content = source
        .as_ref()
        .map_or_else(|| "built-in".to_string(), |p| p.display().to_string());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), %content, "starting {APP_NAME}");

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = run(&mut terminal, portfolio, config);

    // Restore terminal even if the loop failed
    tui::restore_terminal(terminal)?;

    if let Err(err) = &result {
        tracing::error!("{err:#}");
    }
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    portfolio: Portfolio,
    config: Config,
) -> Result<()> {
    let size = terminal.size().context("Failed to read terminal size")?;
    let mut state = AppState::new(portfolio, config, Rect::new(0, 0, size.width, size.height))?;
    tui::run_tui(&mut state, terminal)
}

fn print_summary(portfolio: &Portfolio, source: Option<&Path>) {
    println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
    match source {
        Some(path) => println!("{}: ok", path.display()),
        None => println!("built-in portfolio: ok"),
    }
    println!();
    println!("  {:<14}{}", "Name", portfolio.profile.name);
    println!("  {:<14}{}", "Titles", portfolio.titles.join(", "));
    for (section, count) in portfolio.section_counts() {
        println!("  {:<14}{count}", section.label());
    }
}
