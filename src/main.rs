use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;

use crossword::parse::{parse_structure, parse_words};
use crossword::render::render_text;
use crossword::{ConfigError, FillConfig, Filler, ParseError};

/// Fill a crossword grid with words from a word list.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Grid file: `_` for fillable cells, anything else for blocks.
    structure: PathBuf,

    /// Word list, one word per line.
    words: PathBuf,

    /// Also write the filled grid to this file.
    output: Option<PathBuf>,

    /// TOML solver configuration.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Parse { path: PathBuf, source: ParseError },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = match &args.config {
        Some(path) => FillConfig::from_toml_file(path)?,
        None => FillConfig::default(),
    };

    let structure = parse_structure(&read(&args.structure)?).map_err(|source| CliError::Parse {
        path: args.structure.clone(),
        source,
    })?;
    let vocabulary = parse_words(&read(&args.words)?).map_err(|source| CliError::Parse {
        path: args.words.clone(),
        source,
    })?;

    let mut filler = Filler::with_config(&structure, &vocabulary, config);
    let result = match filler.solve() {
        Ok(result) => result,
        Err(failure) => {
            log::info!("{failure}");
            println!("No solution.");
            return Ok(());
        }
    };

    let display_grid = render_text(&structure, &vocabulary, &result.assignment);
    log::debug!("{:?}", result.statistics);
    println!("{display_grid}");

    if let Some(path) = &args.output {
        fs::write(path, format!("{display_grid}\n")).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?;
        log::info!("written grid to {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
