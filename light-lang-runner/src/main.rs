mod repl;
mod runner;

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Intermediate form printed in place of evaluating the input.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Dump {
    Tokens,
    Ast,
}

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Program to run. Without it an interactive session is started.
    path: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    dump: Option<Dump>,
    /// Log more, repeat for more detail (`RUST_LOG` also applies)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.path {
        None => repl::start(cli.dump),
        Some(path) => runner::execute(&path, cli.dump),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
