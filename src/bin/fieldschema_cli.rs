use clap::{Parser, Subcommand};
use field_schema::{
    DirectoryDefinition, FieldDefinition, FieldInterpreter, InterpreterConfig, LogConfig,
    LoggingSystem, MissingConfigPolicy, StudioError,
};
use log::{info, warn};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to the interpreter configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the logging configuration file (TOML)
    #[arg(long)]
    log_config: Option<PathBuf>,

    /// Fail on fields whose stored configuration is missing or malformed
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a value against a field definition
    Validate {
        /// Path to the field definition JSON file
        #[arg(short, long, required = true)]
        field: PathBuf,

        /// Candidate value in JSON format
        #[arg(short, long, required = true)]
        value: String,
    },
    /// Print the render descriptor of a field definition
    Render {
        /// Path to the field definition JSON file
        #[arg(short, long, required = true)]
        field: PathBuf,
    },
    /// List configuration problems in a directory definition
    Diagnose {
        /// Path to the directory definition JSON file
        #[arg(short, long, required = true)]
        directory: PathBuf,
    },
    /// Validate a whole record against a directory definition
    CheckRecord {
        /// Path to the directory definition JSON file
        #[arg(short, long, required = true)]
        directory: PathBuf,

        /// Record in JSON format
        #[arg(short, long, required = true)]
        record: String,
    },
}

fn load_log_config(path: Option<&Path>) -> Result<LogConfig, StudioError> {
    let config = match path {
        Some(path) => LogConfig::from_file(path)?,
        None => LogConfig::from_env(),
    };
    Ok(config)
}

fn load_interpreter_config(cli: &Cli) -> Result<InterpreterConfig, StudioError> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading config from: {}", path.display());
            InterpreterConfig::from_file(path)?
        }
        None => InterpreterConfig::from_env()?,
    };
    if cli.strict {
        config.missing_config = MissingConfigPolicy::Strict;
    }
    Ok(config)
}

fn load_directory(path: &Path) -> Result<DirectoryDefinition, StudioError> {
    info!("Loading directory from: {}", path.display());
    let json = fs::read_to_string(path)?;
    Ok(DirectoryDefinition::from_json(&json)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_config = load_log_config(cli.log_config.as_deref())?;
    if let Err(e) = LoggingSystem::init(&log_config) {
        eprintln!("Logging disabled: {e}");
    }

    let interpreter = FieldInterpreter::with_config(load_interpreter_config(&cli)?);

    match cli.command {
        Commands::Validate { field, value } => {
            let field = interpreter.interpret_file(&field)?;
            let value: Value = serde_json::from_str(&value)?;
            info!("Validating value for field: {}", field.key);
            field.validate(&value, interpreter.config())?;
            println!("ok");
        }
        Commands::Render { field } => {
            let definition = fs::read_to_string(&field)?;
            let definition: FieldDefinition = serde_json::from_str(&definition)?;
            let spec = interpreter.describe_for_render(&definition);
            println!("{}", serde_json::to_string_pretty(&spec)?);
        }
        Commands::Diagnose { directory } => {
            let directory = load_directory(&directory)?;
            let diagnostics = interpreter.diagnose(&directory);
            if diagnostics.is_empty() {
                info!("No problems found in '{}'", directory.slug);
            }
            for diagnostic in &diagnostics {
                println!("{diagnostic}");
            }
        }
        Commands::CheckRecord { directory, record } => {
            let directory = load_directory(&directory)?;
            let record: Value = serde_json::from_str(&record)?;
            let report = interpreter.validate_record(&directory, &record)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            if !report.is_valid() {
                warn!(
                    "Record rejected: {} errors, {} unknown keys",
                    report.errors.len(),
                    report.unknown_keys.len()
                );
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
