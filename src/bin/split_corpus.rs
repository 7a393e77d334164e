use clap::Parser;
use std::process::ExitCode;

use corpus_tools::app;
use corpus_tools::cli::SplitCorpusArgs;

fn main() -> ExitCode {
    app::exit(app::run_split_corpus(SplitCorpusArgs::parse()))
}
