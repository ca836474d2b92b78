use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use human_panic::setup_panic;
use itertools::Itertools;
use textlens::prelude::*;
use tracing::{debug, error, warn};

/// textlens
///
/// Pick one of the available text analyzers by name and run it
/// against a line of text. Analyzers are either built in or declared
/// as `TextAnalyzer` resources in `.textlens` config directories.
#[derive(Parser)]
#[clap(author, version = env!("TEXTLENS_VERSION"), about)]
struct Cli {
    #[clap(flatten)]
    logging: LoggingOpts,

    #[clap(flatten)]
    config: ConfigOptions,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Parser, Debug)]
struct VersionArgs {
    #[arg(long, action)]
    pub short: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Choose an analyzer and analyze a line of text. Runs when no command is given.
    #[clap(alias("s"))]
    Select,
    /// Run a single analyzer by label, without the listing.
    #[clap(alias("a"))]
    Analyze(AnalyzeArgs),
    /// List the available analyzers and where they were found
    #[clap(alias("l"))]
    List,
    /// Print version info and exit
    #[clap(alias("v"))]
    Version(VersionArgs),
}

fn main() {
    setup_panic!();
    dotenvy::dotenv().ok();
    let mut opts = Cli::parse();
    opts.config.resolve_run_id();

    let configured_logger = match opts
        .logging
        .configure_logging(&opts.config.get_run_id(), "root")
    {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Unable to configure logging. {}", e);
            std::process::exit(2);
        }
    };

    let error_code = run_subcommand(opts);

    if error_code != 0 {
        warn!(target: "user", "More detailed logs at {}", configured_logger.log_location);
    } else {
        debug!(target: "user", "More detailed logs at {}", configured_logger.log_location);
    }

    drop(configured_logger);
    std::process::exit(error_code);
}

fn run_subcommand(opts: Cli) -> i32 {
    let loaded_config = match opts.config.load_config() {
        Err(e) => {
            error!(target: "user", "Failed to load configuration: {}", e);
            return 2;
        }
        Ok(c) => c,
    };

    let command = opts.command.unwrap_or(Command::Select);
    handle_commands(&loaded_config, &command).unwrap_or_else(|e| {
        error!(target: "user", "Critical Error. {}", e);
        1
    })
}

fn handle_commands(found_config: &FoundConfig, command: &Command) -> Result<i32> {
    let interaction = ConsoleInteraction;
    match command {
        Command::Select => select_root(found_config, &interaction),
        Command::Analyze(args) => analyze_root(found_config, args, &interaction),
        Command::List => show_analyzers(found_config, &interaction).map(|_| 0),
        Command::Version(args) => print_version(args),
    }
}

fn show_analyzers(found_config: &FoundConfig, interaction: &ConsoleInteraction) -> Result<()> {
    let discovered = found_config.discover_analyzers();
    let unlabeled = discovered
        .iter()
        .filter(|d| d.label.is_none())
        .map(|d| d.origin.to_string())
        .join(", ");
    if !unlabeled.is_empty() {
        debug!(target: "user", "Skipping analyzers without a label from {}", unlabeled);
    }

    let registry = AnalyzerRegistry::from_discovered(discovered);
    if registry.is_empty() {
        interaction.notify("No analyzers found");
        return Ok(());
    }

    interaction.notify(&"Text Analyzers".bold().to_string());
    print_details(&found_config.working_dir, &registry, interaction);
    Ok(())
}

fn print_version(args: &VersionArgs) -> Result<i32> {
    if args.short {
        println!("textlens {}", env!("TEXTLENS_VERSION"));
    } else {
        println!("{}: {:60}", "Version".white().bold(), env!("TEXTLENS_VERSION"));
        println!("{}: {:60}", "Build Timestamp".white().bold(), env!("VERGEN_BUILD_TIMESTAMP"));
        println!("{}: {:60}", "Describe".white().bold(), env!("VERGEN_GIT_DESCRIBE"));
        println!("{}: {:60}", "Commit SHA".white().bold(), env!("VERGEN_GIT_SHA"));
        println!("{}: {:60}", "Commit Date".white().bold(), env!("VERGEN_GIT_COMMIT_DATE"));
    }

    Ok(0)
}
