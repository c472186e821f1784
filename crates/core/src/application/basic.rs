// Program 1: nested calls for step/next/backtrace/finish

use super::Outcome;
use crate::domain::compute_sum;
use crate::Result;
use std::io::Write;
use tracing::debug;

pub fn run(out: &mut dyn Write) -> Result<Outcome> {
    // Plain locals for `info locals`
    let first = 10;
    let second = 20;
    let third = 15;

    // `step` enters compute_sum, `next` steps over it
    let result = compute_sum(first, second, third);
    debug!(first, second, third, result, "Computed nested sum");

    writeln!(
        out,
        "The sum of {}, {}, and {} is: {}",
        first, second, third, result
    )?;
    Ok(Outcome::Completed)
}
