//! keypath - Main entrypoint.
//!
//! Loads a route table from configuration and answers exact and
//! longest-prefix lookups against it.

use clap::{Parser, Subcommand};
use keypath_trie::config::{self, ConfigLoader, KeypathConfig, LogConfig};
use keypath_trie::error::{ErrorContext, ErrorReporter, KeypathError, KeypathResult, TracingErrorReporter};
use keypath_trie::RouteTable;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for keypath.
#[derive(Parser, Debug)]
#[clap(name = "keypath", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the value stored at exactly this path
    Get {
        /// Route path, segments joined by the configured separator
        path: String,
    },

    /// Print the value of the longest configured prefix of this path
    Find {
        /// Route path, segments joined by the configured separator
        path: String,
    },

    /// Print the longest configured prefix of this path
    Match {
        /// Route path, segments joined by the configured separator
        path: String,
    },

    /// Print every route value, parents before their sub-routes
    Values,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> KeypathResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| KeypathError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn run(command: Command, config: KeypathConfig) -> KeypathResult<()> {
    match command {
        Command::Get { path } => {
            let table = RouteTable::from_config(&config.routes);
            println!("{}", table.get(&path)?);
        }
        Command::Find { path } => {
            let table = RouteTable::from_config(&config.routes);
            println!("{}", table.find(&path)?);
        }
        Command::Match { path } => {
            let table = RouteTable::from_config(&config.routes);
            println!("{}", table.deepest_match(&path));
        }
        Command::Values => {
            let table = RouteTable::from_config(&config.routes);
            for value in table.values() {
                println!("{value}");
            }
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            println!("Configuration is valid");
        }
        Command::GenConfig { output } => {
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&KeypathConfig::default())?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            println!("Default configuration written to {}", output.display());
        }
    }
    Ok(())
}

/// Subscriber active while the configuration is loading, driven by `RUST_LOG` only.
fn bootstrap_subscriber() -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish()
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();
    let reporter = TracingErrorReporter;

    // The configured subscriber needs the configuration, so loading logs
    // through a scoped default until then
    let loaded = {
        let _bootstrap = tracing::subscriber::set_default(bootstrap_subscriber());

        // gen-config must work without a readable configuration file
        match &args.command {
            Command::GenConfig { .. } => Ok(KeypathConfig::default()),
            _ => ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX).load(),
        }
    };

    let log_config = loaded.as_ref().map(|c| c.log.clone()).unwrap_or_default();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
    }

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            reporter.report(ErrorContext::new(e.into(), "config"));
            process::exit(2);
        }
    };

    if let Err(e) = run(args.command, config) {
        reporter.report(ErrorContext::new(e, "keypath"));
        process::exit(1);
    }
}
