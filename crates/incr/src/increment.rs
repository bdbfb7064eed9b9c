use crate::overflow::{IncrError, Overflow};

/// Increment by one, for every primitive integer type.
///
/// The methods differ only in what happens at `Self::MAX`.
pub trait Increment: Sized + Copy {
    /// `self + 1` with the host overflow semantics: panic in debug builds,
    /// wrap in release builds.
    fn incr(self) -> Self;

    /// `None` at `MAX`.
    fn checked_incr(self) -> Option<Self>;

    /// `MAX` becomes `MIN`.
    fn wrapping_incr(self) -> Self;

    /// `MAX` stays `MAX`.
    fn saturating_incr(self) -> Self;

    /// Increment under the given policy. Only [`Overflow::Checked`] can fail.
    fn incr_with(self, overflow: Overflow) -> Result<Self, IncrError>;

    /// Same result as applying [`Increment::incr_with`] `n` times, stopping at
    /// the first error, but in constant time.
    fn incr_n(self, n: u32, overflow: Overflow) -> Result<Self, IncrError>;
}

macro_rules! impl_increment {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Increment for $ty {
                #[inline]
                fn incr(self) -> Self {
                    self + 1
                }

                #[inline]
                fn checked_incr(self) -> Option<Self> {
                    self.checked_add(1)
                }

                #[inline]
                fn wrapping_incr(self) -> Self {
                    self.wrapping_add(1)
                }

                #[inline]
                fn saturating_incr(self) -> Self {
                    self.saturating_add(1)
                }

                fn incr_with(self, overflow: Overflow) -> Result<Self, IncrError> {
                    match overflow {
                        Overflow::Checked => self.checked_incr().ok_or(IncrError::Overflow {
                            ty: stringify!($ty),
                        }),
                        Overflow::Wrapping => Ok(self.wrapping_incr()),
                        Overflow::Saturating => Ok(self.saturating_incr()),
                    }
                }

                fn incr_n(self, n: u32, overflow: Overflow) -> Result<Self, IncrError> {
                    if overflow == Overflow::Wrapping {
                        // Truncating `n` keeps it congruent modulo 2^bits.
                        return Ok(self.wrapping_add(n as $ty));
                    }

                    // `n` may not fit in `Self`, so add it in steps of at most `MAX`.
                    // Each step either overflows or moves `value` past zero, so
                    // this runs at most three times.
                    let mut value = self;
                    let mut remaining = n;
                    loop {
                        let step = <$ty>::try_from(remaining).unwrap_or(<$ty>::MAX);
                        match value.checked_add(step) {
                            Some(next) => {
                                value = next;
                                remaining -= step as u32;
                            }
                            None if overflow == Overflow::Saturating => return Ok(<$ty>::MAX),
                            None => {
                                return Err(IncrError::Overflow {
                                    ty: stringify!($ty),
                                });
                            }
                        }
                        if remaining == 0 {
                            return Ok(value);
                        }
                    }
                }
            }
        )*
    };
}

impl_increment!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
