use clap::Parser;
use pivotcalc::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
