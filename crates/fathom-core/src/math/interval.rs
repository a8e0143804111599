// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::num::width::{max_of, min_of};
use std::cmp::{max, min};

/// A closed interval `[min, max]` of integers, both ends inclusive.
///
/// `ClosedInterval` describes the set of values a width-tagged integer can
/// hold and supports the exact interval arithmetic needed to bound the result
/// of an operation on two such sets. Bounds are `i128`, so every 64-bit range
/// and every sum, difference or negation of two 64-bit ranges is represented
/// exactly. Products and shifts that leave `i128` are reported as `None`.
///
/// # Invariants
///
/// `min` must always be less than or equal to `max`; an interval is never
/// empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClosedInterval {
    min: i128,
    max: i128,
}

impl ClosedInterval {
    /// Creates a new `ClosedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fathom_core::math::interval::ClosedInterval;
    /// let iv = ClosedInterval::new(-3, 7);
    /// assert_eq!((iv.min(), iv.max()), (-3, 7));
    /// ```
    #[inline]
    pub const fn new(min: i128, max: i128) -> Self {
        assert!(
            min <= max,
            "Invalid interval: min must be less than or equal to max"
        );
        Self { min, max }
    }

    /// Creates a new `ClosedInterval` if the bounds are ordered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fathom_core::math::interval::ClosedInterval;
    /// assert!(ClosedInterval::try_new(0, 0).is_some());
    /// assert!(ClosedInterval::try_new(1, 0).is_none());
    /// ```
    #[inline]
    pub const fn try_new(min: i128, max: i128) -> Option<Self> {
        if min <= max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// The interval of every value representable in `width` bits.
    ///
    /// # Panics
    ///
    /// Panics if `width` is not in `1..=127`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fathom_core::math::interval::ClosedInterval;
    /// assert_eq!(ClosedInterval::of_width(8, true), ClosedInterval::new(-128, 127));
    /// assert_eq!(ClosedInterval::of_width(9, false), ClosedInterval::new(0, 511));
    /// ```
    #[inline]
    pub const fn of_width(width: u32, signed: bool) -> Self {
        Self {
            min: min_of(width, signed),
            max: max_of(width, signed),
        }
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub const fn min(&self) -> i128 {
        self.min
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub const fn max(&self) -> i128 {
        self.max
    }

    /// Returns `true` if `value` lies in `[min, max]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fathom_core::math::interval::ClosedInterval;
    /// let iv = ClosedInterval::new(0, 10);
    /// assert!(iv.contains_point(0));
    /// assert!(iv.contains_point(10));
    /// assert!(!iv.contains_point(11));
    /// ```
    #[inline]
    pub const fn contains_point(&self, value: i128) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns `true` if `other` lies entirely within `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fathom_core::math::interval::ClosedInterval;
    /// let wide = ClosedInterval::of_width(9, true);
    /// assert!(wide.contains_interval(ClosedInterval::of_width(8, false)));
    /// assert!(!ClosedInterval::of_width(8, true).contains_interval(ClosedInterval::of_width(8, false)));
    /// ```
    #[inline]
    pub const fn contains_interval(&self, other: Self) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    /// Clamps `value` into the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fathom_core::math::interval::ClosedInterval;
    /// let iv = ClosedInterval::of_width(16, false);
    /// assert_eq!(iv.clamp(100_000), 65_535);
    /// assert_eq!(iv.clamp(-4), 0);
    /// assert_eq!(iv.clamp(42), 42);
    /// ```
    #[inline]
    pub fn clamp(&self, value: i128) -> i128 {
        value.clamp(self.min, self.max)
    }

    /// Returns `true` if every value of the interval is representable in
    /// `width` bits with the given signedness.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fathom_core::math::interval::ClosedInterval;
    /// let iv = ClosedInterval::new(0, 300);
    /// assert!(iv.fits(9, false));
    /// assert!(!iv.fits(8, false));
    /// assert!(iv.fits(10, true));
    /// assert!(!iv.fits(9, true));
    /// ```
    #[inline]
    pub const fn fits(&self, width: u32, signed: bool) -> bool {
        if width == 0 {
            return false;
        }
        if width > 127 {
            return true;
        }
        Self::of_width(width, signed).contains_interval(*self)
    }

    /// The smallest width whose range under the given signedness contains the
    /// whole interval, or `None` if no width does (a negative value can never
    /// be unsigned).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fathom_core::math::interval::ClosedInterval;
    /// assert_eq!(ClosedInterval::new(0, 300).minimal_width(false), Some(9));
    /// assert_eq!(ClosedInterval::new(-129, 0).minimal_width(true), Some(9));
    /// assert_eq!(ClosedInterval::new(-1, 0).minimal_width(true), Some(1));
    /// assert_eq!(ClosedInterval::new(-1, 0).minimal_width(false), None);
    /// ```
    pub fn minimal_width(&self, signed: bool) -> Option<u32> {
        (1..=127).find(|&width| self.fits(width, signed))
    }

    /// Exact interval of `a + b` for `a` in `self` and `b` in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fathom_core::math::interval::ClosedInterval;
    /// let u8r = ClosedInterval::of_width(8, false);
    /// assert_eq!(u8r.checked_add(u8r), Some(ClosedInterval::new(0, 510)));
    /// ```
    #[inline]
    pub fn checked_add(&self, other: Self) -> Option<Self> {
        Some(Self {
            min: self.min.checked_add(other.min)?,
            max: self.max.checked_add(other.max)?,
        })
    }

    /// Exact interval of `a - b` for `a` in `self` and `b` in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fathom_core::math::interval::ClosedInterval;
    /// let u8r = ClosedInterval::of_width(8, false);
    /// assert_eq!(u8r.checked_sub(u8r), Some(ClosedInterval::new(-255, 255)));
    /// ```
    #[inline]
    pub fn checked_sub(&self, other: Self) -> Option<Self> {
        Some(Self {
            min: self.min.checked_sub(other.max)?,
            max: self.max.checked_sub(other.min)?,
        })
    }

    /// Exact interval of `a * b` for `a` in `self` and `b` in `other`.
    ///
    /// The extremes of a product of two intervals are always attained at a
    /// pair of endpoints.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fathom_core::math::interval::ClosedInterval;
    /// let i8r = ClosedInterval::of_width(8, true);
    /// assert_eq!(i8r.checked_mul(i8r), Some(ClosedInterval::new(-16_256, 16_384)));
    /// ```
    pub fn checked_mul(&self, other: Self) -> Option<Self> {
        let corners = [
            self.min.checked_mul(other.min)?,
            self.min.checked_mul(other.max)?,
            self.max.checked_mul(other.min)?,
            self.max.checked_mul(other.max)?,
        ];
        let lo = corners.iter().copied().fold(i128::MAX, min);
        let hi = corners.iter().copied().fold(i128::MIN, max);
        Some(Self::new(lo, hi))
    }

    /// Exact interval of `-a` for `a` in `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fathom_core::math::interval::ClosedInterval;
    /// let i8r = ClosedInterval::of_width(8, true);
    /// assert_eq!(i8r.checked_neg(), Some(ClosedInterval::new(-127, 128)));
    /// ```
    #[inline]
    pub fn checked_neg(&self) -> Option<Self> {
        Some(Self {
            min: self.max.checked_neg()?,
            max: self.min.checked_neg()?,
        })
    }

    /// Exact interval of `a * 2^s` for `a` in `self` and `s` in `[0, max_shift]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fathom_core::math::interval::ClosedInterval;
    /// let i8r = ClosedInterval::of_width(8, true);
    /// assert_eq!(i8r.checked_shl(3), Some(ClosedInterval::new(-1024, 1016)));
    /// assert_eq!(ClosedInterval::new(1, 1).checked_shl(127), None);
    /// ```
    pub fn checked_shl(&self, max_shift: u32) -> Option<Self> {
        let factor = 1i128.checked_shl(max_shift).filter(|f| *f > 0)?;
        // A negative minimum grows downwards with the shift, a positive one
        // is smallest unshifted; symmetrically for the maximum.
        let lo = if self.min < 0 {
            self.min.checked_mul(factor)?
        } else {
            self.min
        };
        let hi = if self.max > 0 {
            self.max.checked_mul(factor)?
        } else {
            self.max
        };
        Some(Self::new(lo, hi))
    }
}

impl std::fmt::Display for ClosedInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic]
    fn test_new_panic() {
        ClosedInterval::new(10, 5);
    }

    #[test]
    fn test_try_new() {
        assert_eq!(ClosedInterval::try_new(-1, 1), Some(ClosedInterval::new(-1, 1)));
        assert_eq!(ClosedInterval::try_new(2, 1), None);
    }

    #[test]
    fn test_of_width_extremes() {
        let i1 = ClosedInterval::of_width(1, true);
        assert_eq!((i1.min(), i1.max()), (-1, 0));

        let u1 = ClosedInterval::of_width(1, false);
        assert_eq!((u1.min(), u1.max()), (0, 1));

        let u64r = ClosedInterval::of_width(64, false);
        assert_eq!(u64r.max(), u64::MAX as i128);

        let i64r = ClosedInterval::of_width(64, true);
        assert_eq!(i64r.min(), i64::MIN as i128);
    }

    #[test]
    fn test_contains() {
        let a = ClosedInterval::new(0, 10);
        assert!(a.contains_point(0));
        assert!(a.contains_point(10));
        assert!(!a.contains_point(-1));
        assert!(a.contains_interval(ClosedInterval::new(2, 8)));
        assert!(a.contains_interval(a));
        assert!(!a.contains_interval(ClosedInterval::new(-1, 5)));
        assert!(!a.contains_interval(ClosedInterval::new(5, 11)));
    }

    #[test]
    fn test_fits_and_minimal_width() {
        let sum = ClosedInterval::new(0, 510);
        assert!(sum.fits(9, false));
        assert!(!sum.fits(8, false));
        assert_eq!(sum.minimal_width(false), Some(9));
        assert_eq!(sum.minimal_width(true), Some(10));

        let neg = ClosedInterval::new(-128, 127);
        assert_eq!(neg.minimal_width(true), Some(8));
        assert_eq!(neg.minimal_width(false), None);

        let zero = ClosedInterval::new(0, 0);
        assert_eq!(zero.minimal_width(false), Some(1));
        assert_eq!(zero.minimal_width(true), Some(1));
        assert!(!zero.fits(0, false));
    }

    #[test]
    fn test_add_sub() {
        let u8r = ClosedInterval::of_width(8, false);
        let i8r = ClosedInterval::of_width(8, true);
        assert_eq!(u8r.checked_add(i8r), Some(ClosedInterval::new(-128, 382)));
        assert_eq!(i8r.checked_sub(u8r), Some(ClosedInterval::new(-383, 127)));
        assert_eq!(
            ClosedInterval::new(i128::MAX, i128::MAX).checked_add(ClosedInterval::new(1, 1)),
            None
        );
    }

    #[test]
    fn test_mul() {
        let u8r = ClosedInterval::of_width(8, false);
        let i8r = ClosedInterval::of_width(8, true);
        assert_eq!(u8r.checked_mul(i8r), Some(ClosedInterval::new(-32_640, 32_385)));
        assert_eq!(u8r.checked_mul(u8r), Some(ClosedInterval::new(0, 65_025)));

        let u64r = ClosedInterval::of_width(64, false);
        assert_eq!(u64r.checked_mul(u64r), None);
    }

    #[test]
    fn test_neg() {
        let u8r = ClosedInterval::of_width(8, false);
        assert_eq!(u8r.checked_neg(), Some(ClosedInterval::new(-255, 0)));
        assert_eq!(ClosedInterval::new(i128::MIN, 0).checked_neg(), None);
    }

    #[test]
    fn test_shl() {
        let u5 = ClosedInterval::of_width(5, false);
        assert_eq!(u5.checked_shl(3), Some(ClosedInterval::new(0, 248)));
        assert_eq!(u5.checked_shl(0), Some(u5));

        let neg = ClosedInterval::new(-4, -2);
        assert_eq!(neg.checked_shl(2), Some(ClosedInterval::new(-16, -2)));
    }

    #[test]
    fn test_clamp() {
        let b = ClosedInterval::new(3, 9);
        assert_eq!(b.clamp(0), 3);
        assert_eq!(b.clamp(100), 9);
    }

    #[test]
    fn test_display() {
        let iv = ClosedInterval::new(-1, 4);
        assert_eq!(format!("{}", iv), "[-1, 4]");
    }
}
