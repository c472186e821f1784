// Program 0: a single call to step into

use super::Outcome;
use crate::domain::add;
use crate::Result;
use std::io::Write;
use tracing::debug;

pub fn run(out: &mut dyn Write) -> Result<Outcome> {
    let x = 5;
    let y = 10;
    let sum = add(x, y);
    debug!(x, y, sum, "Computed sum");

    writeln!(out, "Sum: {}", sum)?;
    Ok(Outcome::Completed)
}
