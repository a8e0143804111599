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

use crate::calculus::{QuotientOf, QuotientRule, QuotientSign, QuotientWidth, RealizeChecked};
use crate::int::WidthInt;
use crate::optional::OverflowOptional;
use fathom_core::num::width::{BitWidth, Signedness};
use std::ops::{Div, Rem};

/// Applies `op` to the exact operands, or returns `None` for a zero divisor.
///
/// Operands narrower than 64 bits are never `i64::MIN`, so the `i64` path
/// cannot overflow and avoids a 128-bit division.
#[inline(always)]
fn divide<WA: BitWidth, WB: BitWidth>(
    a: i128,
    b: i128,
    narrow: fn(i64, i64) -> i64,
    wide: fn(i128, i128) -> i128,
) -> Option<i128> {
    if b == 0 {
        None
    } else if WA::U32 < 64 && WB::U32 < 64 {
        Some(narrow(a as i64, b as i64) as i128)
    } else {
        Some(wide(a, b))
    }
}

impl<WA, SA, WB, SB> Div<WidthInt<WB, SB>> for WidthInt<WA, SA>
where
    WA: BitWidth,
    SA: Signedness,
    WB: BitWidth,
    SB: Signedness,
    Self: QuotientRule<WidthInt<WB, SB>>,
    QuotientWidth<Self, WidthInt<WB, SB>>: RealizeChecked<QuotientSign<Self, WidthInt<WB, SB>>>,
{
    type Output = QuotientOf<Self, WidthInt<WB, SB>>;

    /// Truncating division. Empty for a zero divisor and for a quotient
    /// outside the result range (`MIN / -1` of a signed dividend).
    #[inline]
    fn div(self, rhs: WidthInt<WB, SB>) -> Self::Output {
        let quotient = divide::<WA, WB>(self.to_wide(), rhs.to_wide(), |a, b| a / b, |a, b| a / b);
        <QuotientWidth<Self, WidthInt<WB, SB>> as RealizeChecked<QuotientSign<Self, WidthInt<WB, SB>>>>::from_checked(
            quotient,
        )
    }
}

impl<WA, SA, WB, SB> Rem<WidthInt<WB, SB>> for WidthInt<WA, SA>
where
    WA: BitWidth,
    SA: Signedness,
    WB: BitWidth,
    SB: Signedness,
{
    type Output = OverflowOptional<Self>;

    /// Remainder of truncating division; takes the sign of the dividend.
    /// Empty only for a zero divisor.
    #[inline]
    fn rem(self, rhs: WidthInt<WB, SB>) -> Self::Output {
        divide::<WA, WB>(self.to_wide(), rhs.to_wide(), |a, b| a % b, |a, b| a % b)
            .map(Self::from_wide)
            .into()
    }
}
