use anyhow::Result;

use crate::cli::Cli;
use crate::job::{self, JobLayout};

/// Run the job against the current working directory.
pub fn run(cli: Cli) -> Result<()> {
    let Cli {} = cli;
    let layout = JobLayout::relative();
    job::run(&layout)?;
    Ok(())
}
