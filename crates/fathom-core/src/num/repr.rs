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

use num_traits::PrimInt;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A native machine integer that can store a width-tagged value.
///
/// `Repr` mirrors the by-value conversions that the primitive `as` casts
/// provide, but exposes them through a trait so that code generic over the
/// storage word can move values in and out of a common exact domain (`i128`).
///
/// # Examples
///
/// ```rust
/// # use fathom_core::num::repr::Repr;
/// assert_eq!((-5i8).to_wide(), -5i128);
/// assert_eq!(u8::from_wide_wrapping(300), 44); // 300 mod 256
/// assert!(i16::SIGNED);
/// assert_eq!(u32::BITS, 32);
/// ```
pub trait Repr: PrimInt + Hash + Debug + Display + Default + Send + Sync + 'static {
    /// Whether the native type is a signed two's-complement integer.
    const SIGNED: bool;

    /// The number of bits of the native type.
    const BITS: u32;

    /// Widens the value into `i128` without loss.
    fn to_wide(self) -> i128;

    /// Narrows an `i128` into the native type, keeping the low `BITS` bits.
    fn from_wide_wrapping(v: i128) -> Self;
}

macro_rules! repr_impl {
    ($t:ty, $signed:expr) => {
        impl Repr for $t {
            const SIGNED: bool = $signed;
            const BITS: u32 = <$t>::BITS;

            #[inline(always)]
            fn to_wide(self) -> i128 {
                self as i128
            }

            #[inline(always)]
            fn from_wide_wrapping(v: i128) -> Self {
                v as $t
            }
        }
    };
}

repr_impl!(u8, false);
repr_impl!(u16, false);
repr_impl!(u32, false);
repr_impl!(u64, false);

repr_impl!(i8, true);
repr_impl!(i16, true);
repr_impl!(i32, true);
repr_impl!(i64, true);
