//! demo2 - arrays, endianness and strings for memory examination

use anyhow::Result;
use debug_demos_core::application::memory::{self, MemoryOptions};
use debug_demos_core::port::TargetEndianProbe;

fn main() -> Result<()> {
    debug_demos_cli::logging::init_logging()?;

    let stdout = std::io::stdout();
    let outcome = memory::run(
        &mut stdout.lock(),
        &TargetEndianProbe,
        &MemoryOptions::default(),
    )?;
    debug_demos_cli::conclude(outcome)
}
