// Owned Data Handle
//
// The heap buffer of the crash walkthrough. Acquisition may legitimately produce
// nothing; the buffer is released when the handle goes out of scope.

use super::arith::checked_add;
use super::error::{DomainError, Result};
use tracing::debug;

/// Number of integers held by a [`DataHandle`]
pub const DATA_LEN: usize = 5;

/// Exclusive owner of a heap-allocated run of `DATA_LEN` integers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataHandle {
    values: Box<[i32; DATA_LEN]>,
}

impl DataHandle {
    fn allocate() -> Self {
        let mut values = Box::new([0; DATA_LEN]);
        for (i, value) in values.iter_mut().enumerate() {
            *value = (i as i32 + 1) * 10;
        }
        Self { values }
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values[..]
    }

    /// Raw address of the first element, for printing and for the unchecked path
    pub fn as_ptr(&self) -> *const i32 {
        self.values.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum the first `count` elements
    ///
    /// # Errors
    /// - `CountOutOfRange` if `count` exceeds the handle length
    /// - `Overflow` if the running sum leaves `i32`
    pub fn sum(&self, count: usize) -> Result<i32> {
        let values = self
            .values
            .get(..count)
            .ok_or(DomainError::CountOutOfRange {
                count,
                len: self.len(),
            })?;

        values.iter().try_fold(0, |acc, &value| checked_add(acc, value))
    }
}

impl Drop for DataHandle {
    fn drop(&mut self) {
        debug!(addr = ?self.as_ptr(), "Data handle released");
    }
}

/// Acquire a data handle
///
/// Returns `None` when `fail` is set, modelling an operation that can
/// legitimately produce nothing. Otherwise the handle holds `10, 20, 30, 40, 50`
/// and ownership moves to the caller.
#[inline(never)]
pub fn acquire(fail: bool) -> Option<DataHandle> {
    if fail {
        debug!("Simulated acquisition failure");
        return None;
    }

    let handle = DataHandle::allocate();
    debug!(addr = ?handle.as_ptr(), len = handle.len(), "Data handle acquired");
    Some(handle)
}
