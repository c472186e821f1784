//! demo0 - break, run, and step into a single call

use anyhow::Result;
use debug_demos_core::application::hello;

fn main() -> Result<()> {
    debug_demos_cli::logging::init_logging()?;

    let stdout = std::io::stdout();
    let outcome = hello::run(&mut stdout.lock())?;
    debug_demos_cli::conclude(outcome)
}
