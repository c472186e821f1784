//! Debug Demos CLI - shared setup for the demonstration executables

pub mod logging;

use anyhow::Result;
use debug_demos_core::application::Outcome;

/// Turn a program outcome into the process exit status
///
/// `Completed` returns normally (status 0); `Aborted` exits immediately with its code.
pub fn conclude(outcome: Outcome) -> Result<()> {
    match outcome {
        Outcome::Completed => Ok(()),
        Outcome::Aborted { exit_code } => {
            tracing::debug!(exit_code, "Program aborted");
            std::process::exit(exit_code)
        }
    }
}
