mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::scenario::{DumpArgs, ExportArgs, ScenarioArgs};
use pv_variants_core::Locale;

/// Compare rooftop PV contract models for housing cooperatives
#[derive(Parser)]
#[command(
    name = "pvv",
    version,
    about = "Compare rooftop PV contract models for housing cooperatives",
    long_about = "Computes the annual result of a housing cooperative under a roof-lease, \
                  a plant-lease and a supply-chain compensation model for a rooftop PV \
                  installation, with decimal precision. Scenarios come from a JSON/YAML \
                  file (--input), piped stdin or individual flags over the defaults."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Language of report labels
    #[arg(long, default_value = "de", global = true)]
    lang: Lang,

    /// Log pipeline stages to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a scenario: allocation, revenue, model results and report
    Compare(ScenarioArgs),
    /// Print only the 13-row model comparison table
    Report(ScenarioArgs),
    /// Dump inputs and derived values for documentation
    Dump(DumpArgs),
    /// Write the comparison table to a CSV file
    Export(ExportArgs),
    /// List input fields with bounds, defaults and steps
    Fields,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
    Csv,
    Minimal,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Lang {
    De,
    En,
}

impl From<Lang> for Locale {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::De => Locale::De,
            Lang::En => Locale::En,
        }
    }
}

/// Level used when neither `--verbose` nor `RUST_LOG` is given; scenario
/// warnings are logged at this level.
const DEFAULT_LOG_LEVEL: &str = "warn";

fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    }
}

fn init_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let locale = Locale::from(cli.lang);
    let mut output_format = cli.output;

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Compare(args) => commands::scenario::run_compare(args, locale),
        Commands::Report(args) => commands::scenario::run_report(args, locale),
        Commands::Dump(args) => {
            if let Some(format) = args.format {
                output_format = format.into();
            }
            commands::scenario::run_dump(args, locale)
        }
        Commands::Export(args) => commands::scenario::run_export(args, locale),
        Commands::Fields => commands::fields::run_fields(),
        Commands::Version => {
            println!("pvv {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&output_format, &value, locale);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
