use clap::Parser;
use std::process::ExitCode;

use corpus_tools::app;
use corpus_tools::cli::MvRandomArgs;

fn main() -> ExitCode {
    app::exit(app::run_mv_random(MvRandomArgs::parse()))
}
