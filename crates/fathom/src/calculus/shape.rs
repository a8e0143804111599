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

use fathom_core::math::interval::ClosedInterval;
use fathom_core::num::width::{BitWidth, MAX_WIDTH, Signedness, max_shift_of};

/// Runtime description of a width-tagged type: its bit width and signedness.
///
/// Every result-type rule applied by the operators at the type level has a
/// `const fn` counterpart here, which makes the rules inspectable and lets
/// them be checked against interval arithmetic for every width pair.
///
/// # Examples
///
/// ```rust
/// use fathom::Shape;
///
/// let u8s = Shape::new(8, false);
/// assert_eq!(u8s.sum(u8s), Shape::new(9, false));
/// assert_eq!(u8s.difference(u8s), Shape::new(9, true));
/// assert_eq!(Shape::new(32, true).product(Shape::new(32, true)).to_string(), "i64");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u32,
    signed: bool,
}

#[inline]
const fn max_u32(a: u32, b: u32) -> u32 {
    if a > b { a } else { b }
}

impl Shape {
    /// Creates a new shape.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero.
    #[inline]
    pub const fn new(width: u32, signed: bool) -> Self {
        assert!(width >= 1, "width must be at least 1");
        Self { width, signed }
    }

    /// The shape of `WidthInt<W, S>`.
    #[inline]
    pub const fn of<W: BitWidth, S: Signedness>() -> Self {
        Self {
            width: W::U32,
            signed: S::BOOL,
        }
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub const fn is_signed(&self) -> bool {
        self.signed
    }

    /// Whether a width-tagged type of this shape exists, i.e. the width is at
    /// most 64 bits.
    #[inline]
    pub const fn is_representable(&self) -> bool {
        self.width <= MAX_WIDTH
    }

    /// The shape an operator actually returns for a result of this shape:
    /// itself when representable, otherwise the 64-bit type of the same
    /// signedness wrapped in an `OverflowOptional`.
    #[inline]
    pub const fn realized(&self) -> Self {
        if self.is_representable() {
            *self
        } else {
            Self {
                width: MAX_WIDTH,
                signed: self.signed,
            }
        }
    }

    /// The range of values of this shape, or `None` if it does not fit `i128`.
    #[inline]
    pub const fn range(&self) -> Option<ClosedInterval> {
        if self.width <= 127 {
            Some(ClosedInterval::of_width(self.width, self.signed))
        } else {
            None
        }
    }

    // Width needed to hold every value of this shape as a signed number.
    #[inline]
    const fn signed_width(&self) -> u32 {
        if self.signed {
            self.width
        } else {
            self.width.saturating_add(1)
        }
    }

    #[inline]
    const fn additive_width(&self, rhs: Self) -> u32 {
        if !self.signed && !rhs.signed {
            max_u32(self.width, rhs.width).saturating_add(1)
        } else {
            max_u32(self.signed_width(), rhs.signed_width()).saturating_add(1)
        }
    }

    /// Shape of `self + rhs`. Unsigned only when both operands are.
    #[inline]
    pub const fn sum(&self, rhs: Self) -> Self {
        Self {
            width: self.additive_width(rhs),
            signed: self.signed || rhs.signed,
        }
    }

    /// Shape of `self - rhs`. Always signed.
    #[inline]
    pub const fn difference(&self, rhs: Self) -> Self {
        Self {
            width: self.additive_width(rhs),
            signed: true,
        }
    }

    /// Shape of `self * rhs`.
    #[inline]
    pub const fn product(&self, rhs: Self) -> Self {
        Self {
            width: self.width.saturating_add(rhs.width),
            signed: self.signed || rhs.signed,
        }
    }

    /// Shape of `self / rhs`. An unsigned dividend over a signed divisor can
    /// be negated by the division and needs one more bit.
    #[inline]
    pub const fn quotient(&self, rhs: Self) -> Self {
        if !self.signed && rhs.signed {
            Self {
                width: self.width.saturating_add(1),
                signed: true,
            }
        } else {
            Self {
                width: self.width,
                signed: self.signed || rhs.signed,
            }
        }
    }

    /// Shape of `self % rhs`. The remainder takes the dividend's sign and
    /// never exceeds it in magnitude.
    #[inline]
    pub const fn remainder(&self, _rhs: Self) -> Self {
        *self
    }

    /// Shape of `-self`.
    #[inline]
    pub const fn negation(&self) -> Self {
        Self {
            width: self.width.saturating_add(1),
            signed: true,
        }
    }

    /// Shape of `self << amount` where `amount` is unsigned; the largest
    /// shift is `2^amount.width - 1`, capped at 127.
    ///
    /// # Panics
    ///
    /// Panics if `amount` is signed.
    #[inline]
    pub const fn shifted_left(&self, amount: Self) -> Self {
        assert!(!amount.signed, "shift amounts are unsigned");
        Self {
            width: self.width.saturating_add(max_shift_of(amount.width)),
            signed: self.signed,
        }
    }

    /// Shape of `self >> amount`.
    #[inline]
    pub const fn shifted_right(&self) -> Self {
        *self
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", if self.signed { 'i' } else { 'u' }, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typenum::consts::{U9, U64};
    use typenum::{B0, B1};

    #[test]
    fn test_of() {
        assert_eq!(Shape::of::<U9, B0>(), Shape::new(9, false));
        assert_eq!(Shape::of::<U64, B1>(), Shape::new(64, true));
    }

    #[test]
    #[should_panic(expected = "width must be at least 1")]
    fn test_zero_width_panics() {
        let _ = Shape::new(0, true);
    }

    #[test]
    fn test_display() {
        assert_eq!(Shape::new(9, false).to_string(), "u9");
        assert_eq!(Shape::new(64, true).to_string(), "i64");
    }

    #[test]
    fn test_mixed_sign_sum_and_difference() {
        let u8s = Shape::new(8, false);
        let i8s = Shape::new(8, true);
        assert_eq!(u8s.sum(i8s), Shape::new(10, true));
        assert_eq!(i8s.sum(i8s), Shape::new(9, true));
        assert_eq!(i8s.difference(u8s), Shape::new(10, true));
        assert_eq!(Shape::new(3, false).sum(Shape::new(8, true)), Shape::new(9, true));
    }

    #[test]
    fn test_product() {
        assert_eq!(Shape::new(8, false).product(Shape::new(8, true)), Shape::new(16, true));
        assert_eq!(Shape::new(32, true).product(Shape::new(33, true)), Shape::new(65, true));
    }

    #[test]
    fn test_quotient_and_remainder() {
        let u8s = Shape::new(8, false);
        let i8s = Shape::new(8, true);
        assert_eq!(u8s.quotient(u8s), u8s);
        assert_eq!(u8s.quotient(i8s), Shape::new(9, true));
        assert_eq!(i8s.quotient(u8s), i8s);
        assert_eq!(i8s.remainder(u8s), i8s);
    }

    #[test]
    fn test_shifts() {
        let i4s = Shape::new(4, true);
        assert_eq!(i4s.shifted_left(Shape::new(3, false)), Shape::new(11, true));
        assert_eq!(i4s.shifted_left(Shape::new(7, false)), Shape::new(131, true));
        assert_eq!(i4s.shifted_left(Shape::new(64, false)), Shape::new(131, true));
        assert_eq!(i4s.shifted_right(), i4s);
    }

    #[test]
    #[should_panic(expected = "shift amounts are unsigned")]
    fn test_signed_shift_amount_panics() {
        let _ = Shape::new(4, true).shifted_left(Shape::new(2, true));
    }

    #[test]
    fn test_realized() {
        assert_eq!(Shape::new(64, false).realized(), Shape::new(64, false));
        assert_eq!(Shape::new(65, true).realized(), Shape::new(64, true));
        assert!(!Shape::new(65, true).is_representable());
    }

    #[test]
    fn test_range() {
        assert_eq!(Shape::new(9, false).range(), Some(ClosedInterval::new(0, 511)));
        assert_eq!(Shape::new(127, true).range().map(|r| r.min()), Some(i128::MIN >> 1));
        assert_eq!(Shape::new(128, true).range(), None);
    }
}
