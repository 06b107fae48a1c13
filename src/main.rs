use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

mod app;
mod logging;
mod reference;

use crate::app::App;

/// Prints perft lines from CANDIDATE that do not appear verbatim in
/// REFERENCE.  With no arguments, compares the built-in captured run.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Output of the engine under test
    #[arg(requires = "reference")]
    candidate: Option<PathBuf>,

    /// Output of the trusted engine
    reference: Option<PathBuf>,
}

////////////////////////////////////////////////////////////////////////////////

fn main() -> Result<()> {
    logging::init_tracing()?;
    let args = Args::parse();

    let app = match (args.candidate, args.reference) {
        (Some(candidate), Some(reference)) =>
            App::new(candidate.into(), reference.into()),
        _ => App::builtin(),
    };

    let stdout = std::io::stdout();
    app.run(&mut stdout.lock())
}
