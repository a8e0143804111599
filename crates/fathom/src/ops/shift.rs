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

use crate::calculus::{Realize, ShiftRule, ShiftWidth, shl_saturating};
use crate::int::WidthInt;
use crate::optional::OverflowOptional;
use fathom_core::num::width::{BitWidth, Signedness};
use std::ops::{Shl, Shr, ShrAssign};
use typenum::B0;

#[inline(always)]
fn shr_wide(v: i128, amount: i128) -> i128 {
    v >> amount.min(127)
}

impl<WA, SA, WS> Shl<WidthInt<WS, B0>> for WidthInt<WA, SA>
where
    WA: BitWidth,
    SA: Signedness,
    WS: BitWidth,
    Self: ShiftRule<WidthInt<WS, B0>>,
    ShiftWidth<Self, WidthInt<WS, B0>>: Realize<SA>,
{
    type Output = <ShiftWidth<Self, WidthInt<WS, B0>> as Realize<SA>>::Output;

    /// Multiplies by `2^amount`. The result is wide enough for the largest
    /// amount the shift operand can hold.
    #[inline(always)]
    fn shl(self, amount: WidthInt<WS, B0>) -> Self::Output {
        <ShiftWidth<Self, WidthInt<WS, B0>> as Realize<SA>>::from_shifted(
            self.to_wide(),
            amount.to_wide(),
        )
    }
}

impl<WA, SA, WS> Shr<WidthInt<WS, B0>> for WidthInt<WA, SA>
where
    WA: BitWidth,
    SA: Signedness,
    WS: BitWidth,
{
    type Output = Self;

    /// Arithmetic right shift; rounds toward negative infinity.
    #[inline(always)]
    fn shr(self, amount: WidthInt<WS, B0>) -> Self {
        Self::from_wide(shr_wide(self.to_wide(), amount.to_wide()))
    }
}

impl<W: BitWidth, S: Signedness> Shr<u32> for WidthInt<W, S> {
    type Output = Self;

    #[inline(always)]
    fn shr(self, amount: u32) -> Self {
        Self::from_wide(shr_wide(self.to_wide(), amount as i128))
    }
}

impl<W: BitWidth, S: Signedness> ShrAssign<u32> for WidthInt<W, S> {
    #[inline(always)]
    fn shr_assign(&mut self, amount: u32) {
        *self = *self >> amount;
    }
}

impl<W: BitWidth, S: Signedness> WidthInt<W, S> {
    /// Left shift by a runtime amount, keeping the type.
    ///
    /// Empty when the shifted value does not fit this type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fathom::consts::U8;
    /// use fathom::UnsignedInt;
    ///
    /// let x = UnsignedInt::<U8>::new(3);
    /// assert_eq!(x.checked_shl(6).value(), Ok(UnsignedInt::<U8>::new(192)));
    /// assert!(!x.checked_shl(7).has_value());
    /// ```
    #[inline]
    pub fn checked_shl(self, amount: u32) -> OverflowOptional<Self> {
        Self::try_from_wide(shl_saturating(self.to_wide(), amount as i128))
    }

    /// Right shift by a runtime amount. Never empty; provided for symmetry
    /// with `checked_shl`.
    #[inline]
    pub fn checked_shr(self, amount: u32) -> OverflowOptional<Self> {
        OverflowOptional::with_value(self >> amount)
    }
}
