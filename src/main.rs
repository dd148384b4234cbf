use std::io;
use std::path::PathBuf;

use apksweep::commands::clean::CleanOptions;
use apksweep::commands::execute_clean;
use apksweep::error::AppError;
use clap::{ArgAction, Parser};

fn main() {
    if let Err(err) = run() {
        println!("{} {}", err.prefix(), err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let options = CleanOptions { root: cli.path, assume_yes: cli.yes, pause: !cli.no_pause };

    let stdin = io::stdin();
    let stdout = io::stdout();
    execute_clean(options, &mut stdin.lock(), &mut stdout.lock())
}

#[derive(Parser)]
#[command(
    name = "apksweep",
    version,
    about = "Find APK and AAB files under a directory and optionally delete them."
)]
struct Cli {
    /// Directory to scan (prompted for when omitted).
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Delete the files without asking for confirmation.
    #[arg(short = 'y', long = "yes", action = ArgAction::SetTrue)]
    yes: bool,

    /// Exit right away instead of waiting for a final keypress.
    #[arg(long = "no-pause", action = ArgAction::SetTrue)]
    no_pause: bool,
}
