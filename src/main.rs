use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tagver::cli::{self, ParseMode};
use tagver::config;
use tagver::ui;

#[derive(Parser)]
#[command(
    name = "tagver",
    version,
    about = "Validate and sort semantic version tags"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        long,
        global = true,
        default_value = "warn",
        help = "Log filter, e.g. debug or tagver=trace"
    )]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether each argument is a valid version
    Check {
        #[arg(required = true)]
        versions: Vec<String>,

        #[arg(short, long = "prefix", help = "Accepted prefix besides 'v' (repeatable)")]
        prefixes: Vec<String>,
    },
    /// Print the arguments sorted by precedence
    Sort {
        #[arg(required = true)]
        versions: Vec<String>,

        #[arg(short, long = "prefix", help = "Accepted prefix besides 'v' (repeatable)")]
        prefixes: Vec<String>,

        #[arg(long, help = "Fill in missing minor and patch numbers")]
        lax: bool,

        #[arg(short, long, help = "Highest version first")]
        reverse: bool,
    },
    /// Compare two versions by precedence
    Compare {
        a: String,
        b: String,

        #[arg(short, long = "prefix", help = "Accepted prefix besides 'v' (repeatable)")]
        prefixes: Vec<String>,

        #[arg(long, help = "Fill in missing minor and patch numbers")]
        lax: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(std::io::stderr)
        .init();

    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;

    match args.command {
        Command::Check { versions, prefixes } => {
            let config = config.with_prefixes(prefixes);
            let outcomes = cli::check(&versions, &config.prefixes);
            ui::display_check_outcomes(&outcomes);

            if outcomes.iter().any(|o| !o.valid) {
                std::process::exit(1);
            }
        }
        Command::Sort {
            versions,
            prefixes,
            lax,
            reverse,
        } => {
            let config = config.with_prefixes(prefixes);
            let mode = ParseMode::from_lax(lax || config.behavior.lax);
            let report = cli::sort(&versions, &config.prefixes, mode, reverse);
            ui::display_sort_report(&report);
        }
        Command::Compare {
            a,
            b,
            prefixes,
            lax,
        } => {
            let config = config.with_prefixes(prefixes);
            let mode = ParseMode::from_lax(lax || config.behavior.lax);
            match cli::compare(&a, &b, &config.prefixes, mode) {
                Ok(ordering) => ui::display_comparison(&a, &b, ordering),
                Err(e) => {
                    ui::display_error(&e.to_string());
                    std::process::exit(2);
                }
            }
        }
    }

    Ok(())
}
