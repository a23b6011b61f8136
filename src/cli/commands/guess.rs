//! Guess command implementation

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::error::CliError;
use crate::cli::output::{OutputFormat, format_code, format_fields_table};
use crate::guesser::{Guesser, GuesserConfig, GuesserError, ViewContext, records_from_json};

/// Arguments for the `guess` command
pub struct GuessArgs {
    /// Resource the records belong to, e.g. `posts`
    pub resource: String,
    /// View to guess
    pub view: ViewContext,
    /// Records file, or `-` for stdin
    pub input: String,
    /// Optional TOML configuration file
    pub config: Option<PathBuf>,
    /// Override the configured sample size
    pub sample_size: Option<usize>,
    /// Override the configured nesting depth
    pub max_depth: Option<usize>,
    /// Output format
    pub format: OutputFormat,
}

/// Load input content from file or stdin
fn load_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(content)
    } else {
        let path = PathBuf::from(input);
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
    }
}

/// Load a guesser configuration from a TOML file
pub fn load_config(path: &Path) -> Result<GuesserConfig, CliError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::FileReadError(path.to_path_buf(), e.to_string()))?;
    parse_config(&content)
        .map_err(|e| CliError::ConfigError(path.to_path_buf(), e.to_string()))
}

fn parse_config(content: &str) -> Result<GuesserConfig, GuesserError> {
    toml::from_str(content).map_err(|e| GuesserError::Config(e.to_string()))
}

/// Handle the guess command
pub fn handle_guess(args: &GuessArgs) -> Result<(), CliError> {
    if args.resource.trim().is_empty() {
        return Err(CliError::InvalidArgument(
            "Resource name must not be empty".to_string(),
        ));
    }

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => GuesserConfig::default(),
    };
    if let Some(sample_size) = args.sample_size {
        config.sample_size = sample_size;
    }
    if let Some(max_depth) = args.max_depth {
        config.max_depth = max_depth;
    }
    // The suggestion is printed to stdout instead
    config.emit_suggestions = false;
    debug!("Using configuration {:?}", config);

    let content = load_input(&args.input)?;
    let records = records_from_json(&content)?;

    eprintln!("Guessing {} view for '{}'...", args.view, args.resource);
    eprintln!("  Records loaded: {}", records.len());

    let package = config.component_package.clone();
    let mut guesser = Guesser::with_config(config);
    let tree = guesser.guess(&args.resource, args.view, &records);
    let fields = tree.field_summary();

    eprintln!("  Fields guessed: {}", fields.len());

    let output = match args.format {
        OutputFormat::Code => format_code(&args.resource, args.view, &tree, &package),
        OutputFormat::Json => serde_json::to_string_pretty(&tree.materialize())
            .map_err(|e| CliError::OutputError(e.to_string()))?,
        OutputFormat::Yaml => serde_yaml::to_string(&tree.materialize())
            .map_err(|e| CliError::OutputError(e.to_string()))?,
        OutputFormat::Fields => format_fields_table(&fields),
    };

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
