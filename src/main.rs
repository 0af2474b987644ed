mod config;
mod gui;
mod network;
mod routing;

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use tracing::{debug, error, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

use config::GraphConfig;
use gui::app;
use network::city::City;
use routing::{SearchMode, SearchRequest, search};

#[derive(Parser)]
#[command(version, about = "Tariff-bounded route search between cities", long_about = None)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Graph configuration file; the demo dataset is used when omitted
    #[arg(short, long, value_name = "GRAPH")]
    graph: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the desktop window (default)
    Gui,
    /// Run one search and print the result
    Search {
        #[arg(long)]
        start: City,

        #[arg(long)]
        end: City,

        /// "greedy" or "exhaustive"
        #[arg(long, default_value = "greedy")]
        mode: SearchMode,

        #[arg(long = "max-tariff", value_name = "MAX_TARIFF")]
        max_tariff: u64,

        /// Print the outcome as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// `-v` picks the level used when `RUST_LOG` sets no directives of its own.
fn log_filter(verbose: u8, rust_log: Option<&str>) -> EnvFilter {
    let default_level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .parse_lossy(rust_log.unwrap_or_default())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, rust_log.as_deref()))
        .init();
    debug!("Verbose level: {}", cli.verbose);

    let loaded =
        GraphConfig::load_or_default(cli.graph.as_deref()).and_then(|config| config.build());
    let (graph, layout) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command.unwrap_or(Command::Gui) {
        Command::Gui => {
            if let Err(e) = app::main(graph, layout) {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        }
        Command::Search {
            start,
            end,
            mode,
            max_tariff,
            json,
        } => {
            let request = SearchRequest {
                start,
                end,
                mode,
                max_tariff,
            };
            let outcome = match search(&graph, &request) {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!("{}", e);
                    return ExitCode::FAILURE;
                }
            };
            if json {
                match serde_json::to_string_pretty(&outcome) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Error serializing results: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                for line in outcome.summary_lines() {
                    println!("{}", line);
                }
            }
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_sets_default_level() {
        assert_eq!(log_filter(0, None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter(1, None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(2, Some("")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(7, None).max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_rust_log_overrides_verbosity() {
        assert_eq!(log_filter(0, Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(3, Some("error")).max_level_hint(), Some(LevelFilter::ERROR));
    }
}
