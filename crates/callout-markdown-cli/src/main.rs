use anyhow::{Context, Result};
use callout_markdown_config::{Config, OutputFormat};
use callout_markdown_engine::{Document, parse_with_report, parsing::snapshot};
use clap::Parser;
use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[command(name = "callout-markdown")]
#[command(about = "Parse callout-flavoured Markdown into a block tree")]
#[command(version)]
struct Cli {
    /// Markdown file to parse (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Output format: outline, json or text
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Configuration file path (defaults to ~/.config/callout-markdown/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print parse degradations to stderr
    #[arg(short, long)]
    report: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Command-line flags win over values from the config file.
    fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.report {
            config.report_degradations = true;
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config_path();
    log::debug!("Config path: {}", config_path.display());

    if cli.init_config {
        let config = cli.apply_overrides(Config::default());
        config
            .save_to_path(&config_path)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
        eprintln!("Wrote default config to {}", config_path.display());
        return Ok(());
    }

    let config = match Config::load_from_path(&config_path)? {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        None => {
            log::debug!("No config file found, using defaults");
            Config::default()
        }
    };
    let config = cli.apply_overrides(config);

    let input = read_input(cli.file.as_deref())?;
    let report = parse_with_report(&input);
    log::info!(
        "Parsed {} top-level blocks with {} degradations",
        report.document.blocks.len(),
        report.degradations.len()
    );

    if config.report_degradations {
        for degradation in &report.degradations {
            eprintln!("warning: {degradation}");
        }
    }

    println!("{}", render(&report.document, &config)?);
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::from_default_env();
    // RUST_LOG is only overridden by an explicit -v
    if verbose > 0 || std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(level);
    }
    builder.init();
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn render(doc: &Document, config: &Config) -> Result<String> {
    Ok(match config.format {
        OutputFormat::Outline => snapshot::outline(doc),
        OutputFormat::Json if config.pretty => serde_json::to_string_pretty(doc)?,
        OutputFormat::Json => serde_json::to_string(doc)?,
        OutputFormat::Text => doc.visible_text(),
    })
}
