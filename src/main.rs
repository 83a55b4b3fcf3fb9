mod cli;
mod job;
mod logging;
mod runner;
mod util;

fn main() -> anyhow::Result<()> {
    logging::init();
    let app = cli::parse();
    runner::run(app)
}
