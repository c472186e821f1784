//! demo1 - nested calls for step, next, backtrace and finish

use anyhow::Result;
use debug_demos_core::application::basic;

fn main() -> Result<()> {
    debug_demos_cli::logging::init_logging()?;

    let stdout = std::io::stdout();
    let outcome = basic::run(&mut stdout.lock())?;
    debug_demos_cli::conclude(outcome)
}
