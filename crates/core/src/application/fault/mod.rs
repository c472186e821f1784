// Program 3: crash diagnosis
//
// The first acquisition succeeds and is processed. The second acquisition yields
// nothing, and what happens next depends on the strategy: the unchecked path uses
// the absent handle anyway and takes the process down, the two checked paths show
// the callee-side and caller-side fixes.

use super::Outcome;
use crate::domain::{acquire, DataHandle, DomainError, DATA_LEN};
use crate::Result;
use std::io::Write;
use std::ptr;
use std::str::FromStr;
use tracing::{error, info, warn};


/// Which variant of the second processing call to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaultStrategy {
    /// Pass the absent handle straight to processing (crashes)
    #[default]
    Unchecked,
    /// Processing checks for absence and returns early
    Guarded,
    /// The caller checks the acquisition result and stops with status 1
    CallerChecked,
}

impl FromStr for FaultStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unchecked" => Ok(FaultStrategy::Unchecked),
            "guarded" => Ok(FaultStrategy::Guarded),
            "caller-checked" | "caller_checked" => Ok(FaultStrategy::CallerChecked),
            _ => Err(DomainError::InvalidChoice {
                field: "fault strategy",
                value: s.to_string(),
            }),
        }
    }
}

/// How the unchecked path fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaultKind {
    /// Volatile read through a null pointer: an invalid memory access
    #[default]
    NullRead,
    /// Unwrap the absent handle: a panic, no unsafe code involved
    Panic,
}

impl FromStr for FaultKind {
    type Err = DomainError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "null-read" | "null_read" | "segv" => Ok(FaultKind::NullRead),
            "panic" => Ok(FaultKind::Panic),
            _ => Err(DomainError::InvalidChoice {
                field: "fault kind",
                value: s.to_string(),
            }),
        }
    }
}

/// Sum `count` elements of a present handle and report the sum
#[inline(never)]
pub fn process_data(out: &mut dyn Write, data: &DataHandle, count: usize) -> Result<i32> {
    let sum = data.sum(count)?;
    writeln!(out, "Sum: {}", sum)?;
    Ok(sum)
}

/// Callee-side fix: check for absence before touching memory
///
/// Returns `Ok(None)` after reporting the error when the handle is absent.
#[inline(never)]
pub fn process_data_guarded(
    out: &mut dyn Write,
    data: Option<&DataHandle>,
    count: usize,
) -> Result<Option<i32>> {
    let Some(data) = data else {
        error!(count, "process_data called with an absent handle");
        writeln!(out, "Error: NULL data pointer")?;
        return Ok(None);
    };

    process_data(out, data, count).map(Some)
}

/// The buggy variant: no presence check
///
/// With an absent handle this never returns.
#[inline(never)]
pub fn process_data_unchecked(
    out: &mut dyn Write,
    data: Option<&DataHandle>,
    count: usize,
    kind: FaultKind,
) -> Result<i32> {
    if let Some(handle) = data {
        if count > handle.len() {
            return Err(DomainError::CountOutOfRange {
                count,
                len: handle.len(),
            }
            .into());
        }
    }

    warn!(present = data.is_some(), ?kind, "Processing without a presence check");
    // Everything printed so far must be visible before the process dies
    out.flush()?;

    let sum = match kind {
        FaultKind::Panic => {
            let data = data.expect("process_data called with an absent data handle");
            data.sum(count)?
        }
        FaultKind::NullRead => {
            let raw = data.map_or(ptr::null(), DataHandle::as_ptr);
            // SAFETY: `count` fits a present handle (checked above). An absent
            // handle leaves `raw` null and the first read faults; that fault is
            // the behaviour this program exists to show.
            unsafe { sum_raw(raw, count) }
        }
    };

    writeln!(out, "Sum: {}", sum)?;
    Ok(sum)
}

/// # Safety
/// `data` must point to at least `count` readable `i32`s.
#[inline(never)]
unsafe fn sum_raw(data: *const i32, count: usize) -> i32 {
    let mut sum: i32 = 0;
    for i in 0..count {
        sum = sum.wrapping_add(ptr::read_volatile(data.wrapping_add(i)));
    }
    sum
}

/// Run the crash program with the given strategy
pub fn run(out: &mut dyn Write, strategy: FaultStrategy, kind: FaultKind) -> Result<Outcome> {
    info!(?strategy, ?kind, "Crash walkthrough");
    writeln!(out, "Attempting to process data...")?;

    // First call works fine; the handle is released at the end of the block
    if let Some(good_data) = acquire(false) {
        process_data(out, &good_data, DATA_LEN)?;
    }

    writeln!(out, "First processing complete.")?;
    writeln!(out)?;

    writeln!(out, "Attempting second processing...")?;
    let bad_data = acquire(true);

    match strategy {
        FaultStrategy::Unchecked => {
            process_data_unchecked(out, bad_data.as_ref(), DATA_LEN, kind)?;
        }
        FaultStrategy::Guarded => {
            process_data_guarded(out, bad_data.as_ref(), DATA_LEN)?;
        }
        FaultStrategy::CallerChecked => {
            let Some(bad_data) = bad_data else {
                writeln!(out, "Error: Failed to get data")?;
                return Ok(Outcome::Aborted { exit_code: 1 });
            };
            process_data(out, &bad_data, DATA_LEN)?;
        }
    }

    writeln!(out, "All done!")?;
    Ok(Outcome::Completed)
}
