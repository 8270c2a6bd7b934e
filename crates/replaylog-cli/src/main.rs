use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use commands::{config, process};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "replaylog")]
#[command(about = "Replaylog - reconcile streaming watch-history exports into one clean table")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile raw export shards into the clean CSV
    #[command(
        long_about = "Discover the content and watch-history export shards in the input \
directory, join them on their content identifier, derive the Eastern-time watch intervals, \
and write the 15-column clean CSV. Missing source families and unparseable shards are \
reported and skipped; they never abort the run."
    )]
    Process {
        /// Directory containing the raw export shards
        #[arg(long, default_value = ".", value_name = "DIR")]
        input_dir: PathBuf,

        /// Path of the CSV to write (overrides the config file)
        #[arg(long, value_name = "FILE")]
        output_file: Option<PathBuf>,

        /// TOML config file with shard patterns, key paths and output path
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Show the effective configuration
    #[command(
        long_about = "Print the configuration the process command would run with: the built-in \
defaults, or the given config file merged over them."
    )]
    Config {
        /// TOML config file to load before printing
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Process {
            input_dir,
            output_file,
            config,
        } => process::run_process(input_dir, output_file, config, &output),
        Commands::Config { config } => config::run_config(config, &output),
    }
}
