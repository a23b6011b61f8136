//! admin-guesser: guess admin panel views from sample records

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use admin_guesser::ViewContext;
use admin_guesser::cli::commands::{GuessArgs, handle_guess};
use admin_guesser::cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "admin-guesser")]
#[command(version, about = "Guess list, show and edit views from sample records", long_about = None)]
struct Cli {
    /// Resource the records belong to, e.g. posts
    #[arg(long)]
    resource: String,

    /// View to guess (list, show, edit)
    #[arg(long, default_value = "list")]
    view: ViewContext,

    /// Records file (JSON array, {"data": [...]} envelope or single object), '-' for stdin
    #[arg(long, default_value = "-")]
    input: String,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum number of records to inspect (0 = all)
    #[arg(long)]
    sample_size: Option<usize>,

    /// Maximum depth for nested objects
    #[arg(long)]
    max_depth: Option<usize>,

    /// Output format (code, json, yaml, fields)
    #[arg(long, default_value = "code")]
    format: OutputFormat,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let args = GuessArgs {
        resource: cli.resource,
        view: cli.view,
        input: cli.input,
        config: cli.config,
        sample_size: cli.sample_size,
        max_depth: cli.max_depth,
        format: cli.format,
    };

    handle_guess(&args)?;
    Ok(())
}
