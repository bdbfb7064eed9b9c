//! Increment an integer by one.
//!
//! [`incr`] is the plain operation on `i32`. The [`Increment`] trait extends it
//! to every primitive integer type and makes the behavior at `MAX` an explicit
//! choice through an [`Overflow`] policy.

mod increment;
mod overflow;

pub use increment::Increment;
pub use overflow::{IncrError, Overflow, ParseOverflowError};

/// Returns `a + 1`.
///
/// `a` must be less than `i32::MAX`. Debug builds check this and panic with
/// `Precondition failed: a < i32::MAX`; release builds inherit the wrapping
/// arithmetic of `i32`. Use [`Increment::incr_with`] when the caller needs a
/// defined result at the boundary.
pub fn incr(a: i32) -> i32 {
    debug_assert!(a < i32::MAX, "Precondition failed: a < i32::MAX");
    let output = a + 1;
    debug_assert!(output - 1 == a, "Postcondition failed: output - 1 == a");
    output
}
