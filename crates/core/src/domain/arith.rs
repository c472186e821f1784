// Arithmetic for the stepping walkthroughs
//
// Every function keeps its intermediate in a named local and is never inlined,
// so `info locals`, `step` and `finish` have something to show.

use super::error::{DomainError, Result};

/// Add two integers.
///
/// Panics on overflow; use [`checked_add`] to get an error instead.
#[inline(never)]
#[allow(clippy::let_and_return)]
pub fn add(a: i32, b: i32) -> i32 {
    let result = a + b;
    result
}

/// Add two integers; the callee of `compute_sum`.
#[inline(never)]
#[allow(clippy::let_and_return)]
pub fn add_numbers(a: i32, b: i32) -> i32 {
    let result = a + b;
    result
}

/// Sum three integers through two nested calls to [`add_numbers`].
///
/// Stepping into this function from `main` and then into `add_numbers`
/// yields a three-frame backtrace.
#[inline(never)]
#[allow(clippy::let_and_return)]
pub fn compute_sum(x: i32, y: i32, z: i32) -> i32 {
    let partial = add_numbers(x, y);
    let total = add_numbers(partial, z);
    total
}

/// Overflow-reporting variant of [`add`]
pub fn checked_add(a: i32, b: i32) -> Result<i32> {
    a.checked_add(b).ok_or(DomainError::Overflow { a, b })
}

/// Overflow-reporting variant of [`compute_sum`]
pub fn checked_compute_sum(x: i32, y: i32, z: i32) -> Result<i32> {
    let partial = checked_add(x, y)?;
    checked_add(partial, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(5, 10), 15);
        assert_eq!(add(-3, 3), 0);
    }

    #[test]
    fn test_compute_sum_matches_nested_add() {
        assert_eq!(compute_sum(10, 20, 15), 45);
        assert_eq!(compute_sum(10, 20, 15), add(add(10, 20), 15));
        assert_eq!(compute_sum(10, 20, 15), add(10, add(20, 15)));
    }

    #[test]
    #[should_panic(expected = "overflow")]
    fn test_add_overflow_panics() {
        let _ = add(std::hint::black_box(i32::MAX), 1);
    }

    #[test]
    #[should_panic(expected = "overflow")]
    fn test_compute_sum_overflow_panics() {
        let _ = compute_sum(std::hint::black_box(i32::MAX), 1, 0);
    }

    #[test]
    fn test_checked_add_overflow() {
        assert_eq!(checked_add(1, 2), Ok(3));
        assert_eq!(
            checked_add(i32::MAX, 1),
            Err(DomainError::Overflow { a: i32::MAX, b: 1 })
        );
    }

    #[test]
    fn test_checked_compute_sum() {
        assert_eq!(checked_compute_sum(10, 20, 15), Ok(45));

        // Overflow in the second call is reported with the partial sum
        let err = checked_compute_sum(i32::MAX - 1, 1, 1).unwrap_err();
        assert_eq!(
            err,
            DomainError::Overflow {
                a: i32::MAX,
                b: 1
            }
        );
    }
}
