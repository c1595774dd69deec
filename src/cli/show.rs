//! Show, get and origin command implementations

use anyhow::Result;
use clap::Args;

use super::utils::{parse_assignment, redact, render, OutputFormat};
use super::SourceArgs;
use cloudinary_config::config::ConfigOrigin;

#[derive(Args)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Override a key after resolution (repeatable, KEY=VALUE)
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,

    /// Print api_secret instead of masking it
    #[arg(long)]
    pub reveal: bool,
}

#[derive(Args)]
pub struct GetArgs {
    /// Configuration key to print
    #[arg(value_name = "KEY")]
    pub key: String,
}

pub fn run_show(sources: &SourceArgs, args: ShowArgs) -> Result<()> {
    let mut resolver = sources.resolver();
    for raw in &args.overrides {
        let (key, value) = parse_assignment(raw)?;
        resolver.set(key, value);
    }

    let shown = redact(resolver.config(), args.reveal);
    println!("{}", render(&shown, args.format)?.trim_end());
    Ok(())
}

pub fn run_get(sources: &SourceArgs, args: GetArgs) -> Result<()> {
    let mut resolver = sources.resolver();
    match resolver.get(&args.key) {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => anyhow::bail!("Key '{}' is not set", args.key),
    }
}

pub fn run_origin(sources: &SourceArgs) -> Result<()> {
    let mut resolver = sources.resolver();
    match resolver.origin() {
        ConfigOrigin::ConnectionString { property } => println!("connection-string: {property}"),
        ConfigOrigin::FallbackFile(path) => println!("file: {}", path.display()),
        ConfigOrigin::Empty { reason } => println!("empty: {reason}"),
        ConfigOrigin::Replaced => println!("replaced"),
    }
    Ok(())
}
