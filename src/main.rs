use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evolve an antenna placement for a scenario
    Search(cmd::search::SearchArgs),
    /// Score an existing solution file
    Validate(cmd::validate::ValidateArgs),
}

fn main() {
    // Raw matches tell explicit flags apart from defaults
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🚀 Initializing CoverForge...");

    let result = match &cli.command {
        Commands::Search(args) => cmd::search::run(args, matches.subcommand_matches("search")),
        Commands::Validate(args) => cmd::validate::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
