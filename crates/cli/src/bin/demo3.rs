//! demo3 - crash diagnosis
//!
//! This program crashes on purpose: the second processing call is handed an
//! absent data handle without a presence check.

use anyhow::Result;
use debug_demos_core::application::fault::{self, FaultKind, FaultStrategy};

fn main() -> Result<()> {
    debug_demos_cli::logging::init_logging()?;

    let stdout = std::io::stdout();
    let outcome = fault::run(
        &mut stdout.lock(),
        FaultStrategy::Unchecked,
        FaultKind::NullRead,
    )?;

    // Never reached with the unchecked strategy
    debug_demos_cli::conclude(outcome)
}
