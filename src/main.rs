//! Main application entry point (CLI binary).
//!
//! Thin wrapper around the `exchange_archive` library: parses arguments,
//! initializes the logger, assembles an already-completed exchange from the
//! command line and either prints or saves its rendering.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;

use exchange_archive::config::{DEFAULT_METHOD, DEFAULT_OUTPUT_DIR, DEFAULT_STATUS};
use exchange_archive::initialization::init_logger_with;
use exchange_archive::{Archive, ArchiveConfig, Exchange, LogFormat, LogLevel, RenderMode, Request};

#[derive(Debug, Parser)]
#[command(name = "exchange_archive", version, about)]
struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Save an exchange under OUTPUT_DIR/<hostname>/ and print the path
    Save(SaveCommand),
    /// Print the rendered exchange to stdout
    Render(ExchangeArgs),
}

#[derive(Debug, Args)]
struct SaveCommand {
    /// Storage root
    #[arg(default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Name the file after the hostname so each save overwrites the last
    #[arg(long, short = 's')]
    static_output: bool,

    #[command(flatten)]
    exchange: ExchangeArgs,
}

#[derive(Debug, Args)]
struct ExchangeArgs {
    /// Request URL
    #[arg(long, short = 'u')]
    url: String,

    /// Request method
    #[arg(long, short = 'X', default_value = DEFAULT_METHOD)]
    method: String,

    /// Request header line, e.g. "Accept: */*" (repeatable)
    #[arg(long = "header", short = 'H')]
    headers: Vec<String>,

    /// Response status line text
    #[arg(long, default_value = DEFAULT_STATUS)]
    status: String,

    /// Response header line (repeatable)
    #[arg(long = "response-header", short = 'R')]
    response_headers: Vec<String>,

    /// File holding the response body, or "-" for stdin
    #[arg(long, short = 'b')]
    body: Option<PathBuf>,

    /// Render only the response body
    #[arg(long)]
    no_headers: bool,
}

impl ExchangeArgs {
    fn to_exchange(&self) -> Result<Exchange> {
        let request = Request::new(&self.method, &self.url)
            .with_context(|| format!("Invalid request target '{}'", self.url))?
            .with_headers(self.headers.iter().cloned());

        let body = match &self.body {
            Some(path) => read_body(path)?,
            None => Vec::new(),
        };

        Ok(Exchange::new(request)
            .with_status(self.status.clone(), status_code(&self.status))
            .with_headers(self.response_headers.iter().cloned())
            .with_body(body))
    }
}

fn read_body(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read body from stdin")?;
        Ok(buf)
    } else {
        std::fs::read(path)
            .with_context(|| format!("Failed to read body from {}", path.display()))
    }
}

/// Leading number of a status line such as "404 Not Found", or 0.
fn status_code(status: &str) -> u16 {
    status
        .split_whitespace()
        .next()
        .and_then(|code| code.parse().ok())
        .unwrap_or(0)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render(args) => {
            let exchange = args.to_exchange()?;
            let bytes = exchange.render(RenderMode::from_no_headers(args.no_headers));
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes).context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
        Command::Save(cmd) => {
            let config = ArchiveConfig {
                output_dir: cmd.output_dir,
                static_output: cmd.static_output,
                no_headers: cmd.exchange.no_headers,
                log_level: cli.log_level,
                log_format: cli.log_format,
            };
            config.validate()?;

            let exchange = cmd.exchange.to_exchange()?;
            let archive = Archive::from_config(&config);
            let path = archive
                .save(&exchange)
                .with_context(|| format!("Failed to save {}", exchange.request().url()))?;
            info!("Saved {} to {}", exchange.request().url(), path.display());
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(cli) {
        eprintln!("exchange_archive error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
