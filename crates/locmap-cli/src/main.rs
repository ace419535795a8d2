use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use locmap_cli::commands::{extract, init, play, visualize};
use locmap_cli::config::{Config, DEFAULT_CONFIG_FILE};
use locmap_core::LogFormat;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "locmap", version, about = "Map location tooling: extract, plot, replay")]
struct Cli {
    /// Path to the config file (defaults to ./locmap.toml when present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log level or filter directive (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also write logs to this file (overrides LOCMAP_LOG_FILE)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log line layout: text or json
    #[arg(long, global = true, default_value = "text")]
    log_format: LogFormat,

    /// Shortcut for --log-level debug (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a commented config file with the default settings
    Init {
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        path: String,
    },
    /// Convert a locations text file to JSON
    Extract {
        /// Locations text file
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// JSON output file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Do not print the JSON document to stdout
        #[arg(short, long)]
        quiet: bool,
    },
    /// Render the extracted locations as an SVG scatter plot
    Visualize {
        /// JSON file written by `extract`
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// SVG output file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Open the plot with the system viewer
        #[arg(long)]
        open: bool,
    },
    /// Replay the hello/prepare/start requests against a running bot server
    Play {
        #[arg(long)]
        base_url: Option<String>,
        /// Directory holding <step>.json request bodies
        #[arg(long)]
        requests_dir: Option<PathBuf>,
        /// Pause between requests in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Print the requests without sending them
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = locmap_core::init_from_args(
        cli.log_level.clone(),
        cli.log_file.clone(),
        cli.verbose,
        cli.log_format,
    ) {
        eprintln!("{} failed to initialize logging: {:#}", "warning:".yellow().bold(), err);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            for cause in err.chain().skip(1) {
                eprintln!("  {} {}", "caused by:".red(), cause);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        command,
        ..
    } = cli;
    let load_config = || Config::discover(config_path.as_deref());

    match command {
        Commands::Init { path } => init::execute_init(&path),
        Commands::Extract {
            input,
            output,
            quiet,
        } => {
            let mut config = load_config()?;
            config.apply_extract_overrides(input, output);
            if quiet {
                extract::execute_extract(&config.extract, io::sink())
            } else {
                extract::execute_extract(&config.extract, io::stdout().lock())
            }
        }
        Commands::Visualize {
            input,
            output,
            open,
        } => {
            let mut config = load_config()?;
            config.apply_visualize_overrides(input, output);
            visualize::execute_visualize(&config.visualize, open)
        }
        Commands::Play {
            base_url,
            requests_dir,
            delay_ms,
            dry_run,
        } => {
            let mut config = load_config()?;
            config.apply_play_overrides(base_url, requests_dir, delay_ms);
            config.validate()?;
            play::execute_play(&config.player, dry_run)
        }
    }
}
