use clap::Parser;

/// The job takes no inputs; only `--help` and `--version` are recognised.
#[derive(Parser, Debug)]
#[command(
    name = "hellonear",
    version,
    about = "Write the hello-from-NEAR sample result to results/output.txt"
)]
pub struct Cli {}

pub fn parse() -> Cli {
    Cli::parse()
}
