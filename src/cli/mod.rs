//! Command-line interface for cloudinary-config
//!
//! Provides `show`, `get`, `parse` and `origin` subcommands over the resolver.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cloudinary_config::config::{ConfigResolver, FileFallback, DEFAULT_URL_PROPERTY};

mod parse;
mod show;
mod utils;

/// Resolve Cloudinary SDK configuration from CLOUDINARY_URL or a fallback file
#[derive(Parser)]
#[command(name = "cloudinary-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    sources: SourceArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Where the resolver looks for settings
#[derive(Args)]
pub struct SourceArgs {
    /// Environment variable holding the connection-string
    #[arg(
        long,
        global = true,
        value_name = "NAME",
        env = "CLOUDINARY_CONFIG_URL_VAR",
        default_value = DEFAULT_URL_PROPERTY
    )]
    pub url_var: String,

    /// Directory searched for cloudinary_config.{toml,yaml,yml,json}
    #[arg(long, global = true, value_name = "DIR", env = "CLOUDINARY_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Explicit fallback configuration file (overrides --config-dir)
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
}

impl SourceArgs {
    /// Build a resolver over the process environment and the selected fallback file.
    pub fn resolver(&self) -> ConfigResolver {
        let fallback = match (&self.config_file, &self.config_dir) {
            (Some(file), _) => FileFallback::file(file),
            (None, Some(dir)) => FileFallback::new(dir),
            (None, None) => FileFallback::default(),
        };
        ConfigResolver::new().fallback(fallback).url_property(self.url_var.as_str())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved configuration
    Show(show::ShowArgs),

    /// Print a single configuration value
    Get(show::GetArgs),

    /// Parse a connection-string without consulting the environment
    Parse(parse::ParseArgs),

    /// Print where the configuration was resolved from
    Origin,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Show(args) => show::run_show(&cli.sources, args),
        Commands::Get(args) => show::run_get(&cli.sources, args),
        Commands::Parse(args) => parse::run(args),
        Commands::Origin => show::run_origin(&cli.sources),
    }
}
