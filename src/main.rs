//! Command-line front end for in-place TS continuity repair.

use clap::Parser;
use log::{debug, error};
use std::path::PathBuf;
use std::process;
use tsccfix::report::{FileReport, RunReport};
use tsccfix::{ContinuityCorrector, MappedTsFile, Result};

/// Corrects MPEG-TS continuity counter errors, across multiple files.
///
/// Ensures that concatenating the listed TS files in argument order does
/// not produce continuity counter errors, which is useful for segmented
/// delivery such as HLS. TS files are modified in place.
#[derive(Debug, Parser)]
#[clap(name = "tsccfix")]
#[clap(version)]
struct Cli {
    /// TS files to repair, in playback (concatenation) order.
    #[clap(value_name = "TSFILE", required = true)]
    files: Vec<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("{e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut corrector = ContinuityCorrector::new();

    for path in &cli.files {
        let mut file = MappedTsFile::open(path)?;
        let label = file.label().to_string();
        debug!("processing '{}'", label);

        let corrections = corrector.process(file.as_mut_slice(), &label)?;
        file.flush()?;

        eprintln!("{}", FileReport { label, corrections });
    }

    eprint!("{}", RunReport::from_corrector(&corrector));
    Ok(())
}
