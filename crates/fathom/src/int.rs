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

//! # Width-Tagged Integers
//!
//! `WidthInt<W, S>` is an integer whose type records its exact bit width `W`
//! (a `typenum` natural in `U1..=U64`) and its signedness `S` (`B1` signed,
//! `B0` unsigned). The stored value always lies in the range of that width;
//! every constructor validates it, and arithmetic (see `ops`) only produces
//! types wide enough for the exact result.

use crate::calculus::{Shape, WidensTo};
use crate::error::{Error, Result};
use crate::optional::OverflowOptional;
use fathom_core::math::interval::ClosedInterval;
use fathom_core::num::repr::Repr;
use fathom_core::num::width::{BitWidth, Signedness, max_of, min_of};
use num_traits::{ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;
use typenum::consts::{U8, U9, U16, U17, U32, U33, U64};
use typenum::{B0, B1, IsGreaterOrEqual};

/// An integer of exactly `W` bits with signedness `S`.
///
/// A signed value lies in `[-2^(N-1), 2^(N-1) - 1]`, an unsigned one in
/// `[0, 2^N - 1]`, where `N = W::U32`. The value is stored in the smallest
/// native word that fits `N` bits, so `WidthInt<U9, B0>` is two bytes wide.
///
/// No public API can produce an instance holding an out-of-range value:
/// - `try_new`/`cast` return an `OverflowOptional` that is empty when the
///   source does not fit,
/// - `new` panics when a literal does not fit,
/// - `From` exists only for native types whose whole range fits,
/// - `widen` only compiles when the target range contains the source range,
/// - operators pick their result type with the result-type calculus.
///
/// # Examples
///
/// ```rust
/// use fathom::consts::{U8, U9};
/// use fathom::UnsignedInt;
///
/// let a = UnsignedInt::<U8>::new(100);
/// let b = UnsignedInt::<U8>::new(200);
/// let sum: UnsignedInt<U9> = a + b;
/// assert_eq!(sum.get(), 300u16);
///
/// assert!(!UnsignedInt::<U8>::try_new(300).has_value());
/// ```
#[repr(transparent)]
pub struct WidthInt<W: BitWidth, S: Signedness = B1> {
    raw: S::Storage<W>,
    _shape: PhantomData<(W, S)>,
}

/// A signed integer of exactly `W` bits.
pub type SignedInt<W> = WidthInt<W, B1>;

/// An unsigned integer of exactly `W` bits.
pub type UnsignedInt<W> = WidthInt<W, B0>;

impl<W: BitWidth, S: Signedness> WidthInt<W, S> {
    /// The number of value bits.
    pub const WIDTH: u32 = W::U32;

    /// Whether the value is signed.
    pub const SIGNED: bool = S::BOOL;

    /// The smallest representable value.
    pub const MIN_VALUE: i128 = min_of(W::U32, S::BOOL);

    /// The largest representable value.
    pub const MAX_VALUE: i128 = max_of(W::U32, S::BOOL);

    /// Wraps a value the caller has already range-checked.
    #[inline(always)]
    pub(crate) fn from_wide(v: i128) -> Self {
        debug_assert!(
            Self::MIN_VALUE <= v && v <= Self::MAX_VALUE,
            "{} is out of range for {}",
            v,
            Self::shape()
        );
        Self {
            raw: <S::Storage<W> as Repr>::from_wide_wrapping(v),
            _shape: PhantomData,
        }
    }

    /// Validates `v` against the range of this type.
    #[inline]
    pub(crate) fn try_from_wide(v: i128) -> OverflowOptional<Self> {
        if Self::MIN_VALUE <= v && v <= Self::MAX_VALUE {
            OverflowOptional::with_value(Self::from_wide(v))
        } else {
            OverflowOptional::empty()
        }
    }

    /// Creates a value from a literal that is known to fit.
    ///
    /// # Panics
    ///
    /// Panics if `source` is outside `[MIN_VALUE, MAX_VALUE]`. Use `try_new`
    /// for values that are not known to fit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fathom::consts::U12;
    /// use fathom::SignedInt;
    ///
    /// let x = SignedInt::<U12>::new(-2048);
    /// assert_eq!(x.get(), -2048i16);
    /// ```
    ///
    /// ```rust,should_panic
    /// use fathom::consts::U12;
    /// use fathom::SignedInt;
    ///
    /// let _ = SignedInt::<U12>::new(2048);
    /// ```
    #[inline]
    pub fn new<T: IntSource>(source: T) -> Self {
        match source.to_exact() {
            Some(v) if Self::MIN_VALUE <= v && v <= Self::MAX_VALUE => Self::from_wide(v),
            _ => panic!("literal does not fit {}", Self::shape()),
        }
    }

    /// Checked construction from a native integer or another `WidthInt`.
    ///
    /// The result is empty if `source` lies outside the range of this type and
    /// holds the unchanged value otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fathom::consts::U8;
    /// use fathom::UnsignedInt;
    ///
    /// let ok = UnsignedInt::<U8>::try_new(200);
    /// assert!(ok.has_value());
    /// assert_eq!(ok.get(), 200u8);
    ///
    /// assert!(!UnsignedInt::<U8>::try_new(300).has_value());
    /// assert!(!UnsignedInt::<U8>::try_new(-1).has_value());
    /// ```
    #[inline]
    pub fn try_new<T: IntSource>(source: T) -> OverflowOptional<Self> {
        match source.to_exact() {
            Some(v) => Self::try_from_wide(v),
            None => OverflowOptional::empty(),
        }
    }

    /// Checked conversion into another width-tagged type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fathom::consts::{U4, U16};
    /// use fathom::{SignedInt, UnsignedInt};
    ///
    /// let x = SignedInt::<U16>::new(9);
    /// assert_eq!(x.cast::<U4, fathom::B0>().value().unwrap(), UnsignedInt::<U4>::new(9));
    /// assert!(!SignedInt::<U16>::new(-1).cast::<U4, fathom::B0>().has_value());
    /// ```
    #[inline]
    pub fn cast<W2: BitWidth, S2: Signedness>(self) -> OverflowOptional<WidthInt<W2, S2>> {
        WidthInt::try_new(self)
    }

    /// Lossless conversion into a type whose range contains this one.
    ///
    /// Compiles only when every value of `Self` is representable in the
    /// target: same signedness with `N <= N2`, or unsigned into signed with
    /// `N < N2`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fathom::consts::{U8, U9};
    /// use fathom::{B1, SignedInt, UnsignedInt};
    ///
    /// let x = UnsignedInt::<U8>::new(255);
    /// let y: SignedInt<U9> = x.widen::<U9, B1>();
    /// assert_eq!(y.get(), 255i16);
    /// ```
    ///
    /// An unsigned value does not fit a signed one of the same width:
    ///
    /// ```rust,compile_fail
    /// use fathom::consts::U8;
    /// use fathom::{B1, UnsignedInt};
    ///
    /// let _ = UnsignedInt::<U8>::new(255).widen::<U8, B1>();
    /// ```
    #[inline]
    pub fn widen<W2: BitWidth, S2: Signedness>(self) -> WidthInt<W2, S2>
    where
        Self: WidensTo<WidthInt<W2, S2>>,
    {
        WidthInt::from_wide(self.to_wide())
    }

    /// The smallest value of this type.
    #[inline]
    pub fn min() -> Self {
        Self::from_wide(Self::MIN_VALUE)
    }

    /// The largest value of this type.
    #[inline]
    pub fn max() -> Self {
        Self::from_wide(Self::MAX_VALUE)
    }

    /// Zero, which every width and signedness can hold.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns the value in its native storage word.
    #[inline(always)]
    pub fn get(self) -> S::Storage<W> {
        self.raw
    }

    /// Returns the value widened to `i128`.
    #[inline(always)]
    pub fn to_i128(self) -> i128 {
        self.raw.to_wide()
    }

    #[inline(always)]
    pub(crate) fn to_wide(self) -> i128 {
        self.raw.to_wide()
    }

    /// The interval of values this type can hold.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fathom::consts::U3;
    /// use fathom::SignedInt;
    ///
    /// let range = SignedInt::<U3>::range();
    /// assert_eq!((range.min(), range.max()), (-4, 3));
    /// ```
    #[inline]
    pub const fn range() -> ClosedInterval {
        ClosedInterval::of_width(W::U32, S::BOOL)
    }

    /// The runtime description of this type's width and signedness.
    #[inline]
    pub const fn shape() -> Shape {
        Shape::of::<W, S>()
    }
}

/// Checked construction of `WidthInt<W, S>` from a native integer or another
/// width-tagged value.
///
/// Equivalent to `WidthInt::<W, S>::try_new(source)`.
///
/// # Examples
///
/// ```rust
/// use fathom::consts::U8;
/// use fathom::{B0, construct};
///
/// assert!(!construct::<U8, B0, _>(300).has_value());
/// assert_eq!(construct::<U8, B0, _>(200).value().unwrap().get(), 200);
/// ```
#[inline]
pub fn construct<W: BitWidth, S: Signedness, T: IntSource>(
    source: T,
) -> OverflowOptional<WidthInt<W, S>> {
    WidthInt::try_new(source)
}

/// A value that can seed a checked `WidthInt` construction.
///
/// Implemented for every native integer and for every `WidthInt`.
pub trait IntSource: Copy {
    /// The exact value, or `None` if it does not fit `i128` (only possible
    /// for large `u128` values, which fit no width-tagged type anyway).
    fn to_exact(self) -> Option<i128>;
}

macro_rules! int_source_impl {
    ($t:ty) => {
        impl IntSource for $t {
            #[inline(always)]
            fn to_exact(self) -> Option<i128> {
                ToPrimitive::to_i128(&self)
            }
        }
    };
}

int_source_impl!(u8);
int_source_impl!(u16);
int_source_impl!(u32);
int_source_impl!(u64);
int_source_impl!(u128);
int_source_impl!(usize);

int_source_impl!(i8);
int_source_impl!(i16);
int_source_impl!(i32);
int_source_impl!(i64);
int_source_impl!(i128);
int_source_impl!(isize);

impl<W: BitWidth, S: Signedness> IntSource for WidthInt<W, S> {
    #[inline(always)]
    fn to_exact(self) -> Option<i128> {
        Some(self.to_wide())
    }
}

// Infallible conversions from native types whose whole range fits.
macro_rules! from_native_impl {
    ($t:ty, $sign:ty, $min_width:ty) => {
        impl<W> From<$t> for WidthInt<W, $sign>
        where
            W: BitWidth + IsGreaterOrEqual<$min_width, Output = B1>,
        {
            #[inline(always)]
            fn from(v: $t) -> Self {
                Self::from_wide(v as i128)
            }
        }
    };
}

from_native_impl!(u8, B0, U8);
from_native_impl!(u16, B0, U16);
from_native_impl!(u32, B0, U32);
from_native_impl!(u64, B0, U64);

from_native_impl!(u8, B1, U9);
from_native_impl!(u16, B1, U17);
from_native_impl!(u32, B1, U33);

from_native_impl!(i8, B1, U8);
from_native_impl!(i16, B1, U16);
from_native_impl!(i32, B1, U32);
from_native_impl!(i64, B1, U64);

impl<W: BitWidth, S: Signedness> From<WidthInt<W, S>> for i128 {
    #[inline(always)]
    fn from(v: WidthInt<W, S>) -> i128 {
        v.to_wide()
    }
}

impl<W: BitWidth, S: Signedness> Clone for WidthInt<W, S> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<W: BitWidth, S: Signedness> Copy for WidthInt<W, S> {}

impl<W: BitWidth, S: Signedness> Default for WidthInt<W, S> {
    #[inline]
    fn default() -> Self {
        Self {
            raw: <S::Storage<W> as Zero>::zero(),
            _shape: PhantomData,
        }
    }
}

impl<WA, SA, WB, SB> PartialEq<WidthInt<WB, SB>> for WidthInt<WA, SA>
where
    WA: BitWidth,
    SA: Signedness,
    WB: BitWidth,
    SB: Signedness,
{
    #[inline]
    fn eq(&self, other: &WidthInt<WB, SB>) -> bool {
        self.to_wide() == other.to_wide()
    }
}

impl<W: BitWidth, S: Signedness> Eq for WidthInt<W, S> {}

impl<WA, SA, WB, SB> PartialOrd<WidthInt<WB, SB>> for WidthInt<WA, SA>
where
    WA: BitWidth,
    SA: Signedness,
    WB: BitWidth,
    SB: Signedness,
{
    #[inline]
    fn partial_cmp(&self, other: &WidthInt<WB, SB>) -> Option<Ordering> {
        Some(self.to_wide().cmp(&other.to_wide()))
    }
}

impl<W: BitWidth, S: Signedness> Ord for WidthInt<W, S> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<W: BitWidth, S: Signedness> Hash for WidthInt<W, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<W: BitWidth, S: Signedness> Display for WidthInt<W, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.raw, f)
    }
}

impl<W: BitWidth, S: Signedness> Debug for WidthInt<W, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", Self::shape(), self.raw)
    }
}

impl<W: BitWidth, S: Signedness> FromStr for WidthInt<W, S> {
    type Err = Error;

    /// Parses a decimal integer and checks it against the range of the type.
    fn from_str(s: &str) -> Result<Self> {
        let value: i128 = s.trim().parse()?;
        if Self::range().contains_point(value) {
            Ok(Self::from_wide(value))
        } else {
            Err(Error::OutOfRange {
                value,
                shape: Self::shape(),
            })
        }
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::WidthInt;
    use crate::error::Error;
    use fathom_core::num::width::{BitWidth, Signedness};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<W: BitWidth, S: Signedness> Serialize for WidthInt<W, S> {
        fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
            if S::BOOL {
                serializer.serialize_i64(self.to_wide() as i64)
            } else {
                serializer.serialize_u64(self.to_wide() as u64)
            }
        }
    }

    impl<'de, W: BitWidth, S: Signedness> Deserialize<'de> for WidthInt<W, S> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let value = if S::BOOL {
                i64::deserialize(deserializer)? as i128
            } else {
                u64::deserialize(deserializer)? as i128
            };
            if Self::range().contains_point(value) {
                Ok(Self::from_wide(value))
            } else {
                Err(D::Error::custom(Error::OutOfRange {
                    value,
                    shape: Self::shape(),
                }))
            }
        }
    }
}
