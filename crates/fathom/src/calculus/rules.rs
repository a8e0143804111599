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

//! Type-level result rules.
//!
//! Each rule trait is implemented on the operand types and names the width and
//! signedness of the exact result as `typenum` types. `Realize` then maps that
//! logical width to the type an operator returns: the width-tagged type itself
//! when the width is at most 64 bits, otherwise an `OverflowOptional` of the
//! 64-bit type with the same signedness.

use crate::int::WidthInt;
use crate::optional::OverflowOptional;
use fathom_core::num::width::{BitWidth, Signedness};
use std::ops::{Add, BitOr};
use typenum::consts::U64;
use typenum::{Add1, B0, B1, IsLess, IsLessOrEqual, LeEq, Max, Maximum, Or, Sum, Unsigned};

/// Result width of `+` and `-`, and the result signedness of each.
pub trait AdditiveRule<Rhs> {
    type Width: Unsigned;
    type SumSign: Signedness;
    type DiffSign: Signedness;
}

impl<WA, WB> AdditiveRule<WidthInt<WB, B0>> for WidthInt<WA, B0>
where
    WA: BitWidth + Max<WB>,
    WB: BitWidth,
    Maximum<WA, WB>: Add<B1>,
    Add1<Maximum<WA, WB>>: Unsigned,
{
    type Width = Add1<Maximum<WA, WB>>;
    type SumSign = B0;
    type DiffSign = B1;
}

impl<WA, WB> AdditiveRule<WidthInt<WB, B1>> for WidthInt<WA, B1>
where
    WA: BitWidth + Max<WB>,
    WB: BitWidth,
    Maximum<WA, WB>: Add<B1>,
    Add1<Maximum<WA, WB>>: Unsigned,
{
    type Width = Add1<Maximum<WA, WB>>;
    type SumSign = B1;
    type DiffSign = B1;
}

// The unsigned operand needs one more bit under a signed interpretation.
impl<WA, WB> AdditiveRule<WidthInt<WB, B1>> for WidthInt<WA, B0>
where
    WA: BitWidth + Add<B1>,
    WB: BitWidth,
    Add1<WA>: Max<WB>,
    Maximum<Add1<WA>, WB>: Add<B1>,
    Add1<Maximum<Add1<WA>, WB>>: Unsigned,
{
    type Width = Add1<Maximum<Add1<WA>, WB>>;
    type SumSign = B1;
    type DiffSign = B1;
}

impl<WA, WB> AdditiveRule<WidthInt<WB, B0>> for WidthInt<WA, B1>
where
    WA: BitWidth + Max<Add1<WB>>,
    WB: BitWidth + Add<B1>,
    Maximum<WA, Add1<WB>>: Add<B1>,
    Add1<Maximum<WA, Add1<WB>>>: Unsigned,
{
    type Width = Add1<Maximum<WA, Add1<WB>>>;
    type SumSign = B1;
    type DiffSign = B1;
}

/// Result width and signedness of `*`: the widths add up, and the product is
/// signed if either factor is.
pub trait ProductRule<Rhs> {
    type Width: Unsigned;
    type Sign: Signedness;
}

impl<WA, SA, WB, SB> ProductRule<WidthInt<WB, SB>> for WidthInt<WA, SA>
where
    WA: BitWidth + Add<WB>,
    SA: Signedness + BitOr<SB>,
    WB: BitWidth,
    SB: Signedness,
    Sum<WA, WB>: Unsigned,
    Or<SA, SB>: Signedness,
{
    type Width = Sum<WA, WB>;
    type Sign = Or<SA, SB>;
}

/// Result width and signedness of `/`.
pub trait QuotientRule<Rhs> {
    type Width: Unsigned;
    type Sign: Signedness;
}

impl<WA: BitWidth, WB: BitWidth> QuotientRule<WidthInt<WB, B0>> for WidthInt<WA, B0> {
    type Width = WA;
    type Sign = B0;
}

impl<WA: BitWidth, WB: BitWidth> QuotientRule<WidthInt<WB, B0>> for WidthInt<WA, B1> {
    type Width = WA;
    type Sign = B1;
}

impl<WA: BitWidth, WB: BitWidth> QuotientRule<WidthInt<WB, B1>> for WidthInt<WA, B1> {
    type Width = WA;
    type Sign = B1;
}

// A negative divisor can turn the largest unsigned dividend negative.
impl<WA, WB> QuotientRule<WidthInt<WB, B1>> for WidthInt<WA, B0>
where
    WA: BitWidth + Add<B1>,
    WB: BitWidth,
    Add1<WA>: Unsigned,
{
    type Width = Add1<WA>;
    type Sign = B1;
}

/// Result width of `<<` by an unsigned width-tagged amount: the shifted value
/// grows by the largest amount, `BitWidth::MaxShift` of the amount width.
pub trait ShiftRule<Amount> {
    type Width: Unsigned;
}

impl<WA, SA, WS> ShiftRule<WidthInt<WS, B0>> for WidthInt<WA, SA>
where
    WA: BitWidth + Add<WS::MaxShift>,
    SA: Signedness,
    WS: BitWidth,
    Sum<WA, WS::MaxShift>: Unsigned,
{
    type Width = Sum<WA, WS::MaxShift>;
}

/// Result width of unary `-`. The result is always signed.
pub trait NegationRule {
    type Width: Unsigned;
}

impl<W, S> NegationRule for WidthInt<W, S>
where
    W: BitWidth + Add<B1>,
    S: Signedness,
    Add1<W>: Unsigned,
{
    type Width = Add1<W>;
}

/// Lossless conversion: every value of `Self` is a value of `Target`.
///
/// Same signedness needs `N <= N2`; unsigned into signed needs `N < N2`;
/// signed into unsigned is never lossless.
pub trait WidensTo<Target> {}

impl<W, W2> WidensTo<WidthInt<W2, B0>> for WidthInt<W, B0>
where
    W: BitWidth + IsLessOrEqual<W2, Output = B1>,
    W2: BitWidth,
{
}

impl<W, W2> WidensTo<WidthInt<W2, B1>> for WidthInt<W, B1>
where
    W: BitWidth + IsLessOrEqual<W2, Output = B1>,
    W2: BitWidth,
{
}

impl<W, W2> WidensTo<WidthInt<W2, B1>> for WidthInt<W, B0>
where
    W: BitWidth + IsLess<W2, Output = B1>,
    W2: BitWidth,
{
}

/// Chooses the result type for a logical width `W`, keyed on whether
/// `W <= 64` (`B1`) or not (`B0`).
pub trait Select<W, S> {
    /// `true` when the exact result is returned directly.
    const DIRECT: bool;
    type Output;
    fn from_exact(v: i128) -> Self::Output;
}

impl<W: BitWidth, S: Signedness> Select<W, S> for B1 {
    const DIRECT: bool = true;
    type Output = WidthInt<W, S>;

    #[inline(always)]
    fn from_exact(v: i128) -> Self::Output {
        WidthInt::from_wide(v)
    }
}

impl<W: Unsigned, S: Signedness> Select<W, S> for B0 {
    const DIRECT: bool = false;
    type Output = OverflowOptional<WidthInt<U64, S>>;

    #[inline]
    fn from_exact(v: i128) -> Self::Output {
        WidthInt::try_from_wide(v)
    }
}

/// The type an infallible operator returns for a result of logical width
/// `Self` and signedness `S`.
///
/// `from_exact` receives the exact mathematical result. When `DIRECT` is
/// `true` it is guaranteed to lie in the range of `WidthInt<Self, S>`;
/// otherwise it may be any `i128`, and values outside the 64-bit range
/// produce an empty optional.
pub trait Realize<S: Signedness>: Unsigned {
    const DIRECT: bool;
    type Output;
    fn from_exact(v: i128) -> Self::Output;

    /// Realizes `a * b` for two values of at most 64 bits each.
    ///
    /// Two 64-bit factors can overflow `i128`; such a product lies outside
    /// the 64-bit range anyway, and saturation keeps it there.
    #[inline(always)]
    fn from_product(a: i128, b: i128) -> Self::Output {
        Self::from_exact(if Self::DIRECT {
            a.wrapping_mul(b)
        } else {
            a.saturating_mul(b)
        })
    }

    /// Realizes `v << amount` for a value of at most 64 bits and a
    /// non-negative amount.
    #[inline(always)]
    fn from_shifted(v: i128, amount: i128) -> Self::Output {
        Self::from_exact(if Self::DIRECT {
            v << amount
        } else {
            shl_saturating(v, amount)
        })
    }
}

/// `v * 2^amount` for `|v| < 2^64`, saturated to `i128` once the result is
/// certainly outside the 64-bit range.
#[inline]
pub(crate) fn shl_saturating(v: i128, amount: i128) -> i128 {
    if v == 0 {
        0
    } else if amount >= 64 {
        if v > 0 { i128::MAX } else { i128::MIN }
    } else {
        v << amount
    }
}

impl<W, S> Realize<S> for W
where
    W: Unsigned + IsLessOrEqual<U64>,
    S: Signedness,
    LeEq<W, U64>: Select<W, S>,
{
    const DIRECT: bool = <LeEq<W, U64> as Select<W, S>>::DIRECT;
    type Output = <LeEq<W, U64> as Select<W, S>>::Output;

    #[inline(always)]
    fn from_exact(v: i128) -> Self::Output {
        <LeEq<W, U64> as Select<W, S>>::from_exact(v)
    }
}

/// Fallible counterpart of `Select`: both branches return an
/// `OverflowOptional`.
pub trait SelectChecked<W, S> {
    type Output;
    fn from_checked(v: Option<i128>) -> Self::Output;
}

impl<W: BitWidth, S: Signedness> SelectChecked<W, S> for B1 {
    type Output = OverflowOptional<WidthInt<W, S>>;

    #[inline]
    fn from_checked(v: Option<i128>) -> Self::Output {
        match v {
            Some(v) => WidthInt::try_from_wide(v),
            None => OverflowOptional::empty(),
        }
    }
}

impl<W: Unsigned, S: Signedness> SelectChecked<W, S> for B0 {
    type Output = OverflowOptional<WidthInt<U64, S>>;

    #[inline]
    fn from_checked(v: Option<i128>) -> Self::Output {
        match v {
            Some(v) => WidthInt::try_from_wide(v),
            None => OverflowOptional::empty(),
        }
    }
}

/// The type a fallible operator (`/`) returns for a result of logical width
/// `Self` and signedness `S`.
pub trait RealizeChecked<S: Signedness>: Unsigned {
    type Output;
    fn from_checked(v: Option<i128>) -> Self::Output;
}

impl<W, S> RealizeChecked<S> for W
where
    W: Unsigned + IsLessOrEqual<U64>,
    S: Signedness,
    LeEq<W, U64>: SelectChecked<W, S>,
{
    type Output = <LeEq<W, U64> as SelectChecked<W, S>>::Output;

    #[inline(always)]
    fn from_checked(v: Option<i128>) -> Self::Output {
        <LeEq<W, U64> as SelectChecked<W, S>>::from_checked(v)
    }
}

pub type SumWidth<L, R> = <L as AdditiveRule<R>>::Width;
pub type SumSign<L, R> = <L as AdditiveRule<R>>::SumSign;
pub type DiffSign<L, R> = <L as AdditiveRule<R>>::DiffSign;
pub type ProductWidth<L, R> = <L as ProductRule<R>>::Width;
pub type ProductSign<L, R> = <L as ProductRule<R>>::Sign;
pub type QuotientWidth<L, R> = <L as QuotientRule<R>>::Width;
pub type QuotientSign<L, R> = <L as QuotientRule<R>>::Sign;
pub type ShiftWidth<L, R> = <L as ShiftRule<R>>::Width;
pub type NegationWidth<T> = <T as NegationRule>::Width;

/// Return type of `L + R`.
pub type SumOf<L, R> = <SumWidth<L, R> as Realize<SumSign<L, R>>>::Output;
/// Return type of `L - R`.
pub type DifferenceOf<L, R> = <SumWidth<L, R> as Realize<DiffSign<L, R>>>::Output;
/// Return type of `L * R`.
pub type ProductOf<L, R> = <ProductWidth<L, R> as Realize<ProductSign<L, R>>>::Output;
/// Return type of `L / R`.
pub type QuotientOf<L, R> = <QuotientWidth<L, R> as RealizeChecked<QuotientSign<L, R>>>::Output;
/// Return type of `-T`.
pub type NegationOf<T> = <NegationWidth<T> as Realize<B1>>::Output;
