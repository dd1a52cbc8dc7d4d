//! CLI entry point for the sorting animation

use clap::Parser;
use sortanim::io::cli::{Cli, RunProcessor};
use sortanim::io::logging;

// Allow print for the sorted result, the program's only stdout output
#[allow(clippy::print_stdout)]
fn main() -> sortanim::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let outcome = RunProcessor::new(cli).process()?;

    let sorted: Vec<String> = outcome.values.iter().map(ToString::to_string).collect();
    println!("{}", sorted.join(","));
    Ok(())
}
