use clap::Parser;
use std::process::ExitCode;

use corpus_tools::app;
use corpus_tools::cli::EnfolderArgs;

fn main() -> ExitCode {
    app::exit(app::run_enfolder(EnfolderArgs::parse()))
}
