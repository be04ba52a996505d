//! CLI frontend for the Mmorpdnd campaign tools.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(
    name = "mm",
    about = "Mmorpdnd: name generator and character sheet builder",
    version,
    propagate_version = true
)]
struct Cli {
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and sample name transition matrices
    Names {
        #[command(subcommand)]
        command: NamesCommand,
    },

    /// Render a character record into an HTML sheet
    Sheet {
        /// Character record (.char file)
        record: PathBuf,

        /// HTML template to fill in
        #[arg(short, long, default_value = "characterTemplate.html")]
        template: PathBuf,

        /// Characters directory of the wiki
        #[arg(short = 'o', long, default_value = "characters")]
        characters_dir: PathBuf,

        /// Write to the player folder instead of non-player
        #[arg(long)]
        player: bool,

        /// RNG seed for generated stats and hit points
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the sheet instead of writing it
        #[arg(long)]
        stdout: bool,
    },
}

#[derive(Subcommand)]
enum NamesCommand {
    /// Print the transition matrix as JSON
    Matrix {
        /// Word list, one name per line
        list: PathBuf,
    },

    /// Print the transition matrix as a table
    Table {
        /// Word list, one name per line
        list: PathBuf,
    },

    /// Generate names resembling the word list
    Generate {
        /// Word list, one name per line
        list: PathBuf,

        /// Number of names to generate
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        #[command(flatten)]
        lengths: LengthArgs,

        /// RNG seed for deterministic output
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Review generated names one at a time, appending accepted ones to the list
    Review {
        /// Word list, one name per line
        list: PathBuf,

        #[command(flatten)]
        lengths: LengthArgs,

        /// RNG seed for deterministic output
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

#[derive(clap::Args)]
struct LengthArgs {
    /// Shortest name to generate
    #[arg(long)]
    min: Option<usize>,

    /// Longest name to generate
    #[arg(long)]
    max: Option<usize>,

    /// Use the shortest and longest lengths found in the list
    #[arg(long, conflicts_with_all = ["min", "max"])]
    fit: bool,
}

impl LengthArgs {
    fn to_request(&self) -> commands::LengthRequest {
        if self.fit {
            commands::LengthRequest::Fit
        } else {
            commands::LengthRequest::Explicit {
                min: self.min,
                max: self.max,
            }
        }
    }
}

fn init_tracing(quiet: bool) {
    let default = if quiet {
        "warn"
    } else {
        "mm=info,mm_names=info,mm_sheet=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    let result = match cli.command {
        Commands::Names { command } => match command {
            NamesCommand::Matrix { list } => commands::matrix::run(&list),
            NamesCommand::Table { list } => commands::table::run(&list),
            NamesCommand::Generate {
                list,
                count,
                lengths,
                seed,
            } => commands::generate::run(&list, count, lengths.to_request(), seed),
            NamesCommand::Review {
                list,
                lengths,
                seed,
            } => commands::review::run(&list, lengths.to_request(), seed),
        },
        Commands::Sheet {
            record,
            template,
            characters_dir,
            player,
            seed,
            stdout,
        } => commands::sheet::run(&commands::sheet::SheetArgs {
            record,
            template,
            characters_dir,
            player,
            seed,
            stdout,
        }),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
