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

//! Type-level bit widths and signedness.
//!
//! A width is one of the `typenum` naturals `U1..=U64`; a signedness is the
//! `typenum` bit `B1` (signed) or `B0` (unsigned). Keeping both at the type
//! level lets the result width of an operation be computed by the trait
//! solver, and lets each width pick the smallest native storage word.

use crate::num::repr::Repr;
use std::fmt::Debug;
use std::hash::Hash;
use typenum::consts::*;
use typenum::{B0, B1, Bit, Unsigned};

/// The widest width a value can be tagged with.
pub const MAX_WIDTH: u32 = 64;

/// Largest shift amount the width calculus tracks exactly. Any larger amount
/// moves every nonzero value past `MAX_WIDTH` bits anyway.
pub const MAX_TRACKED_SHIFT: u32 = 127;

/// A type-level bit width in `1..=64`.
///
/// Implemented for exactly the `typenum` naturals `U1` through `U64`. Any
/// other natural (in particular `U0` and everything above `U64`) does not
/// implement `BitWidth`, which is what turns an out-of-range width into a
/// compile error.
///
/// # Examples
///
/// ```rust
/// # use fathom_core::num::width::BitWidth;
/// use typenum::{U3, U9, Unsigned};
///
/// let _: <U9 as BitWidth>::UnsignedRepr = 511u16;
/// let _: <U9 as BitWidth>::SignedRepr = -256i16;
/// assert_eq!(U9::U32, 9);
/// assert_eq!(<U3 as BitWidth>::MaxShift::U32, 7);
/// ```
pub trait BitWidth: Unsigned + Copy + Default + Eq + Hash + Debug + Send + Sync + 'static {
    /// Smallest native unsigned integer holding `[0, 2^N - 1]`.
    type UnsignedRepr: Repr;

    /// Smallest native signed integer holding `[-2^(N-1), 2^(N-1) - 1]`.
    type SignedRepr: Repr;

    /// Largest shift an unsigned amount of this width can hold, `2^N - 1`,
    /// capped at [`MAX_TRACKED_SHIFT`]. Mirrors [`max_shift_of`].
    type MaxShift: Unsigned;
}

macro_rules! bit_width_impl {
    ($u:ty, $i:ty; $($w:ident => $shift:ty),+ $(,)?) => {
        $(
            impl BitWidth for $w {
                type UnsignedRepr = $u;
                type SignedRepr = $i;
                type MaxShift = $shift;
            }
        )+
    };
}

bit_width_impl!(
    u8, i8;
    U1 => U1, U2 => U3, U3 => U7, U4 => U15,
    U5 => U31, U6 => U63, U7 => U127, U8 => U127,
);
bit_width_impl!(
    u16, i16;
    U9 => U127, U10 => U127, U11 => U127, U12 => U127,
    U13 => U127, U14 => U127, U15 => U127, U16 => U127,
);
bit_width_impl!(
    u32, i32;
    U17 => U127, U18 => U127, U19 => U127, U20 => U127,
    U21 => U127, U22 => U127, U23 => U127, U24 => U127,
    U25 => U127, U26 => U127, U27 => U127, U28 => U127,
    U29 => U127, U30 => U127, U31 => U127, U32 => U127,
);
bit_width_impl!(
    u64, i64;
    U33 => U127, U34 => U127, U35 => U127, U36 => U127,
    U37 => U127, U38 => U127, U39 => U127, U40 => U127,
    U41 => U127, U42 => U127, U43 => U127, U44 => U127,
    U45 => U127, U46 => U127, U47 => U127, U48 => U127,
    U49 => U127, U50 => U127, U51 => U127, U52 => U127,
    U53 => U127, U54 => U127, U55 => U127, U56 => U127,
    U57 => U127, U58 => U127, U59 => U127, U60 => U127,
    U61 => U127, U62 => U127, U63 => U127, U64 => U127,
);

/// A type-level signedness: `B1` is signed, `B0` is unsigned.
///
/// `Storage<W>` selects the native word a width-tagged value of width `W`
/// lives in.
///
/// # Examples
///
/// ```rust
/// # use fathom_core::num::width::Signedness;
/// use typenum::{B0, B1, Bit, U12};
///
/// let _: <B0 as Signedness>::Storage<U12> = 4095u16;
/// let _: <B1 as Signedness>::Storage<U12> = -2048i16;
/// assert!(B1::BOOL);
/// assert!(!B0::BOOL);
/// ```
pub trait Signedness: Bit + Copy + Default + Eq + Hash + Debug + Send + Sync + 'static {
    /// The native storage of a value of width `W` with this signedness.
    type Storage<W: BitWidth>: Repr;
}

impl Signedness for B0 {
    type Storage<W: BitWidth> = W::UnsignedRepr;
}

impl Signedness for B1 {
    type Storage<W: BitWidth> = W::SignedRepr;
}

/// Returns the smallest value representable in `width` bits.
///
/// # Panics
///
/// Panics (at compile time when evaluated in a constant) if `width` is `0` or
/// larger than `127`.
///
/// # Examples
///
/// ```rust
/// # use fathom_core::num::width::min_of;
/// assert_eq!(min_of(8, true), -128);
/// assert_eq!(min_of(8, false), 0);
/// assert_eq!(min_of(1, true), -1);
/// ```
#[inline]
pub const fn min_of(width: u32, signed: bool) -> i128 {
    assert!(width >= 1 && width <= 127, "width must be in 1..=127");
    if signed { -(1i128 << (width - 1)) } else { 0 }
}

/// Returns the largest value representable in `width` bits.
///
/// # Panics
///
/// Panics (at compile time when evaluated in a constant) if `width` is `0` or
/// larger than `127`.
///
/// # Examples
///
/// ```rust
/// # use fathom_core::num::width::max_of;
/// assert_eq!(max_of(8, true), 127);
/// assert_eq!(max_of(9, false), 511);
/// assert_eq!(max_of(64, false), u64::MAX as i128);
/// assert_eq!(max_of(1, true), 0);
/// ```
#[inline]
pub const fn max_of(width: u32, signed: bool) -> i128 {
    assert!(width >= 1 && width <= 127, "width must be in 1..=127");
    if signed {
        i128::MAX >> (128 - width)
    } else {
        i128::MAX >> (127 - width)
    }
}

/// Returns the largest shift an unsigned amount of `width` bits can hold,
/// capped at [`MAX_TRACKED_SHIFT`].
///
/// # Examples
///
/// ```rust
/// # use fathom_core::num::width::max_shift_of;
/// assert_eq!(max_shift_of(3), 7);
/// assert_eq!(max_shift_of(6), 63);
/// assert_eq!(max_shift_of(16), 127);
/// ```
#[inline]
pub const fn max_shift_of(width: u32) -> u32 {
    if width >= 7 {
        MAX_TRACKED_SHIFT
    } else {
        (1 << width) - 1
    }
}
