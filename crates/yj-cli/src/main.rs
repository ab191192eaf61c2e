//! CLI frontend for the I Ching divination engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "yj",
    about = "Yijing: cast and interpret I Ching readings",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a reading for a question
    Cast(commands::cast::CastArgs),

    /// Show one hexagram with its trigrams and texts
    Show {
        /// King Wen number (1-64)
        number: u8,
    },

    /// List all 64 hexagrams
    Table,

    /// Show the line probabilities of each casting method
    Methods,

    /// List saved readings, newest first
    History {
        /// User whose readings to list
        #[arg(short, long, env = "YJ_USER")]
        user: Option<String>,

        /// Directory holding saved readings
        #[arg(short, long, env = "YJ_DATA_DIR", default_value = ".yijing")]
        data_dir: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Delete a saved reading
    Delete {
        /// Reading id
        id: String,

        /// Owner of the reading
        #[arg(short, long, env = "YJ_USER")]
        user: Option<String>,

        /// Directory holding saved readings
        #[arg(short, long, env = "YJ_DATA_DIR", default_value = ".yijing")]
        data_dir: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = if verbose == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    } else {
        EnvFilter::new(default)
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Cast(args) => commands::cast::run(args).await,
        Commands::Show { number } => commands::show::run(number),
        Commands::Table => commands::table::run(),
        Commands::Methods => commands::methods::run(),
        Commands::History {
            user,
            data_dir,
            json,
        } => commands::history::run(&data_dir, user.as_deref(), json).await,
        Commands::Delete { id, user, data_dir } => {
            commands::delete::run(&data_dir, &id, user.as_deref()).await
        }
    };

    if let Err(e) = result {
        let report = miette::miette!("{e}");
        eprintln!("{report:?}");
        process::exit(1);
    }
}
