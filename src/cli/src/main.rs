use std::{
    fs, io,
    path::{Path, PathBuf},
};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::{OptionExt, eyre};
use fmc_core::{FaceletCube, invert, normalize};
use log::{LevelFilter, debug};

use crate::config::Config;

mod config;
mod document;
mod draw;

/// Notation tools for fewest-moves attempts on the 3x3 cube
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format. Defaults to
    /// `fmc/config.toml` in the user's configuration directory.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reduce a move sequence to canonical face turns
    Normalize {
        /// The sequence, e.g. "R U NISS Rw' F". Read from stdin if omitted.
        sequence: Option<String>,
    },
    /// Print the inverse of a move sequence
    Invert {
        /// The sequence to invert. Read from stdin if omitted.
        sequence: Option<String>,
    },
    /// Draw the cube state a scramble produces
    Draw {
        /// A scramble of plain face turns
        scramble: String,
        /// Print face letters instead of colors
        #[arg(long)]
        plain: bool,
    },
    /// Annotate every line of an attempt with its move count
    Count {
        /// The attempt to count
        file: PathBuf,
    },
    /// Print the scramble and the normalized skeleton of an attempt, as read
    /// by an insertion finder
    InsertionInput {
        /// The attempt; its first line is the scramble
        file: PathBuf,
        /// Which blank-line separated block holds the skeleton, counting from
        /// zero. Defaults to the last block.
        #[arg(long, short)]
        block: Option<usize>,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    match cli.command {
        Commands::Normalize { sequence } => {
            println!("{}", normalize(&sequence_or_stdin(sequence)?));
        }
        Commands::Invert { sequence } => {
            println!("{}", invert(&sequence_or_stdin(sequence)?));
        }
        Commands::Draw { scramble, plain } => {
            let cube = FaceletCube::from_scramble(&scramble)?;

            if plain {
                print!("{cube}");
            } else {
                let config = Config::load(cli.config.as_deref())?;
                print!("{}", draw::draw(&cube, &config.colors));
            }
        }
        Commands::Count { file } => {
            print!("{}", document::annotate(&read_attempt(&file)?));
        }
        Commands::InsertionInput { file, block } => {
            let text = read_attempt(&file)?;

            let scramble = document::scramble(&text)
                .ok_or_eyre("The attempt does not start with a scramble")?;
            let skeleton = document::skeleton(&text, block).ok_or_else(|| match block {
                Some(block) => eyre!("The attempt has no block {block}"),
                None => eyre!("The attempt has no skeleton"),
            })?;

            debug!("Scramble {scramble:?}, skeleton {skeleton:?}");

            // Scrambles must be plain face turns
            FaceletCube::from_scramble(scramble)?;

            println!("{scramble}");
            println!("{skeleton}");
        }
    }

    Ok(())
}

fn sequence_or_stdin(sequence: Option<String>) -> color_eyre::Result<String> {
    match sequence {
        Some(sequence) => Ok(sequence),
        None => Ok(io::read_to_string(io::stdin())?),
    }
}

fn read_attempt(file: &Path) -> color_eyre::Result<String> {
    fs::read_to_string(file).map_err(|e| eyre!("Could not read {}: {e}", file.display()))
}
