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

//! # Narrowing
//!
//! Converting to a strictly narrower width is never implicit. `saturate`
//! clamps into the target range, `truncate` keeps the low bits. Both compile
//! only when the target width is smaller than the source width; conversions
//! that may keep the width go through `cast` instead.

use crate::int::WidthInt;
use fathom_core::num::width::{BitWidth, Signedness};
use typenum::{B1, IsLess};

impl<W: BitWidth, S: Signedness> WidthInt<W, S> {
    /// Clamps the value into the range of the narrower target type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fathom::consts::{U16, U32};
    /// use fathom::{B0, UnsignedInt};
    ///
    /// let x = UnsignedInt::<U32>::new(100_000);
    /// assert_eq!(x.saturate::<U16, B0>().get(), 65_535);
    /// ```
    ///
    /// The target must be narrower:
    ///
    /// ```rust,compile_fail
    /// use fathom::consts::U16;
    /// use fathom::{B0, UnsignedInt};
    ///
    /// let _ = UnsignedInt::<U16>::new(1).saturate::<U16, B0>();
    /// ```
    #[inline]
    pub fn saturate<W2, S2>(self) -> WidthInt<W2, S2>
    where
        W2: BitWidth + IsLess<W, Output = B1>,
        S2: Signedness,
    {
        WidthInt::from_wide(WidthInt::<W2, S2>::range().clamp(self.to_wide()))
    }

    /// Keeps the low `N2` bits and reads them with the target signedness.
    ///
    /// For widths 8, 16 and 32 this equals the native `as` conversion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fathom::consts::{U4, U8, U16};
    /// use fathom::{B0, B1, SignedInt, UnsignedInt};
    ///
    /// let x = UnsignedInt::<U16>::new(0x1ff);
    /// assert_eq!(x.truncate::<U8, B0>().get(), 0xff);
    /// assert_eq!(x.truncate::<U8, B1>().get(), -1);
    /// assert_eq!(SignedInt::<U8>::new(-3).truncate::<U4, B1>().get(), -3);
    /// ```
    ///
    /// Truncating to the same or a wider width does not compile:
    ///
    /// ```rust,compile_fail
    /// use fathom::consts::U16;
    /// use fathom::{B0, UnsignedInt};
    ///
    /// let _ = UnsignedInt::<U16>::new(1).truncate::<U16, B0>();
    /// ```
    #[inline]
    pub fn truncate<W2, S2>(self) -> WidthInt<W2, S2>
    where
        W2: BitWidth + IsLess<W, Output = B1>,
        S2: Signedness,
    {
        let modulus = 1i128 << W2::U32;
        let low = self.to_wide() & (modulus - 1);
        if S2::BOOL && low > WidthInt::<W2, S2>::MAX_VALUE {
            WidthInt::from_wide(low - modulus)
        } else {
            WidthInt::from_wide(low)
        }
    }
}

/// Free-function form of [`WidthInt::saturate`].
#[inline]
pub fn saturate<W2, S2, W, S>(x: WidthInt<W, S>) -> WidthInt<W2, S2>
where
    W: BitWidth,
    S: Signedness,
    W2: BitWidth + IsLess<W, Output = B1>,
    S2: Signedness,
{
    x.saturate()
}

/// Free-function form of [`WidthInt::truncate`].
#[inline]
pub fn truncate<W2, S2, W, S>(x: WidthInt<W, S>) -> WidthInt<W2, S2>
where
    W: BitWidth,
    S: Signedness,
    W2: BitWidth + IsLess<W, Output = B1>,
    S2: Signedness,
{
    x.truncate()
}
