use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use lexilevel::config::Config;
use lexilevel::ReferenceSet;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with reference paths and analysis options
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Segment a text and report its vocabulary levels
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Show what the reference tables contain
    References(cmd::references::ReferencesArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli_config = match &cli.command {
        Commands::Analyze(args) => &args.config,
        Commands::References(args) => &args.config,
    };
    let sub_matches = matches.subcommand().map_or(&matches, |(_, m)| m);

    let config = match &cli.config {
        Some(path) => {
            info!("⚙️  Loading config from: {}", path.display());
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            });
            file_config.merge_from_cli(cli_config, sub_matches);
            file_config
        }
        None => cli_config.clone(),
    };

    let references = match ReferenceSet::load(&config.references) {
        Ok(r) => Arc::new(r),
        Err(e) => {
            error!("❌ FATAL ERROR LOADING REFERENCES:");
            error!("   {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args, &config, references),
        Commands::References(_) => {
            cmd::references::run(&references);
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
