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

//! Exhaustive boundary checks of every operator over a grid of widths, and
//! randomized checks against native checked arithmetic.

use fathom::consts::*;
use fathom::{
    B0, B1, BitWidth, OverflowOptional, Shape, SignedInt, Signedness, UnsignedInt, WidthInt,
};
use proptest::prelude::*;
use std::ops::{Add, Div, Mul, Neg, Rem, Shl, Sub};

/// The realized shape of an operator result and the value it holds.
trait Outcome {
    fn observe(self) -> (Shape, Option<i128>);
}

impl<W: BitWidth, S: Signedness> Outcome for WidthInt<W, S> {
    fn observe(self) -> (Shape, Option<i128>) {
        (WidthInt::<W, S>::shape(), Some(self.to_i128()))
    }
}

impl<W: BitWidth, S: Signedness> Outcome for OverflowOptional<WidthInt<W, S>> {
    fn observe(self) -> (Shape, Option<i128>) {
        (WidthInt::<W, S>::shape(), self.into_option().map(WidthInt::to_i128))
    }
}

/// The extremes of the range and the values around zero that it contains.
fn samples<W: BitWidth, S: Signedness>() -> Vec<WidthInt<W, S>> {
    let (min, max) = (WidthInt::<W, S>::MIN_VALUE, WidthInt::<W, S>::MAX_VALUE);
    let mut values: Vec<i128> = [min, min + 1, -2, -1, 0, 1, 2, max - 1, max]
        .into_iter()
        .filter(|v| (min..=max).contains(v))
        .collect();
    values.sort_unstable();
    values.dedup();
    values.into_iter().map(WidthInt::new).collect()
}

fn expect<T: Outcome>(result: T, shape: Shape, exact: Option<i128>, what: &str) {
    let (actual_shape, value) = result.observe();
    assert_eq!(actual_shape, shape.realized(), "result type of {what}");
    assert_eq!(value, exact, "value of {what}");
    if let Some(v) = value {
        assert!(actual_shape.range().unwrap().contains_point(v), "{what} out of range");
    }
}

fn check_pair<WA, SA, WB, SB>()
where
    WA: BitWidth,
    SA: Signedness,
    WB: BitWidth,
    SB: Signedness,
    WidthInt<WA, SA>: Add<WidthInt<WB, SB>, Output: Outcome>
        + Sub<WidthInt<WB, SB>, Output: Outcome>
        + Mul<WidthInt<WB, SB>, Output: Outcome>
        + Div<WidthInt<WB, SB>, Output: Outcome>
        + Rem<WidthInt<WB, SB>, Output: Outcome>,
{
    let (sa, sb) = (Shape::of::<WA, SA>(), Shape::of::<WB, SB>());
    let quotient = sa.quotient(sb);
    for a in samples::<WA, SA>() {
        for b in samples::<WB, SB>() {
            let (x, y) = (a.to_i128(), b.to_i128());
            let case = |op: &str| format!("{x} {op} {y} ({sa} {op} {sb})");
            expect(a + b, sa.sum(sb), Some(x + y), &case("+"));
            expect(a - b, sa.difference(sb), Some(x - y), &case("-"));
            expect(a * b, sa.product(sb), Some(x * y), &case("*"));

            let q = (y != 0)
                .then(|| x / y)
                .filter(|q| quotient.range().unwrap().contains_point(*q));
            expect(a / b, quotient, q, &case("/"));
            expect(a % b, sa.remainder(sb), (y != 0).then(|| x % y), &case("%"));
        }
    }
}

fn check_neg<W, S>()
where
    W: BitWidth,
    S: Signedness,
    WidthInt<W, S>: Neg<Output: Outcome>,
{
    let shape = Shape::of::<W, S>();
    for a in samples::<W, S>() {
        let x = a.to_i128();
        expect(-a, shape.negation(), Some(-x), &format!("-({x}) ({shape})"));
    }
}

fn check_shift_by<W, S, WS>()
where
    W: BitWidth,
    S: Signedness,
    WS: BitWidth,
    WidthInt<W, S>: Shl<UnsignedInt<WS>, Output: Outcome>,
{
    let (shape, amount_shape) = (Shape::of::<W, S>(), Shape::of::<WS, B0>());
    for a in samples::<W, S>() {
        for s in samples::<WS, B0>() {
            let (x, n) = (a.to_i128(), s.to_i128());
            let case = format!("{x} << {n} ({shape} << {amount_shape})");
            expect(a << s, shape.shifted_left(amount_shape), Some(x << n), &case);
            assert_eq!((a >> s).to_i128(), x >> n, "{x} >> {n}");
        }
    }
}

fn check_shifts<W, S>()
where
    W: BitWidth,
    S: Signedness,
    WidthInt<W, S>: Shl<UnsignedInt<U1>, Output: Outcome>
        + Shl<UnsignedInt<U2>, Output: Outcome>
        + Shl<UnsignedInt<U3>, Output: Outcome>,
{
    check_shift_by::<W, S, U1>();
    check_shift_by::<W, S, U2>();
    check_shift_by::<W, S, U3>();
}

macro_rules! with_grid {
    ($callback:ident!($($args:tt)*)) => {
        $callback!($($args)* [
            (U1, B0), (U1, B1), (U2, B0), (U2, B1), (U3, B0), (U3, B1),
            (U7, B0), (U7, B1), (U8, B0), (U8, B1), (U9, B0), (U9, B1),
            (U15, B0), (U15, B1), (U16, B0), (U16, B1)
        ])
    };
}

macro_rules! each {
    ($f:ident; [$(($w:ty, $s:ty)),*]) => {
        $( $f::<$w, $s>(); )*
    };
}

macro_rules! pairs {
    ($f:ident; $list:tt) => {
        pairs!(@outer $f; $list; $list)
    };
    (@outer $f:ident; [$(($wa:ty, $sa:ty)),*]; $list:tt) => {
        $( pairs!(@inner $f; $wa, $sa; $list); )*
    };
    (@inner $f:ident; $wa:ty, $sa:ty; [$(($wb:ty, $sb:ty)),*]) => {
        $( $f::<$wa, $sa, $wb, $sb>(); )*
    };
}

#[test]
fn test_binary_operators_on_width_grid() {
    with_grid!(pairs!(check_pair;));
}

#[test]
fn test_negation_on_width_grid() {
    with_grid!(each!(check_neg;));
}

#[test]
fn test_shifts_on_width_grid() {
    with_grid!(each!(check_shifts;));
}

#[test]
fn test_multiplication_ceiling() {
    let direct: SignedInt<U64> = SignedInt::<U32>::min() * SignedInt::<U32>::min();
    assert_eq!(direct.get(), 1i64 << 62);

    let mixed: SignedInt<U64> = UnsignedInt::<U32>::max() * SignedInt::<U32>::min();
    assert_eq!(mixed.to_i128(), -(u32::MAX as i128) * (1 << 31));

    let wide: OverflowOptional<SignedInt<U64>> = SignedInt::<U33>::min() * SignedInt::<U32>::min();
    assert!(!wide.has_value());

    let fits: OverflowOptional<SignedInt<U64>> = SignedInt::<U33>::min() * SignedInt::<U32>::max();
    assert_eq!(fits.value(), Ok(SignedInt::<U64>::new(-(1i128 << 32) * ((1 << 31) - 1))));
}

#[test]
fn test_checked_access_discipline() {
    let sum = UnsignedInt::<U64>::max() + UnsignedInt::<U64>::max();
    assert!(sum.require_value().is_err());
    assert!(!bool::from(&sum));

    let small = UnsignedInt::<U8>::new(7) * UnsignedInt::<U57>::new(3);
    let copy = small.clone();
    assert!(small.has_value());
    assert_eq!(small.get(), 21);
    assert_eq!(copy.value(), Ok(UnsignedInt::<U64>::new(21)));
}

#[cfg(any(debug_assertions, feature = "strict-access"))]
#[test]
#[should_panic(expected = "accessed before its validity was checked")]
fn test_unchecked_access_is_caught() {
    let quotient = SignedInt::<U8>::new(-100) / SignedInt::<U8>::new(3);
    let _raw: i8 = quotient.get();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn prop_construct_round_trips(v in any::<i64>()) {
        let x = SignedInt::<U20>::try_new(v);
        let in_range = (-(1i64 << 19)..(1i64 << 19)).contains(&v);
        prop_assert_eq!(x.has_value(), in_range);
        if in_range {
            prop_assert_eq!(x.to_i128(), v as i128);
        }
    }

    #[test]
    fn prop_unsigned_construct_rejects_negative(v in any::<i32>()) {
        let x = UnsignedInt::<U31>::try_new(v);
        prop_assert_eq!(x.has_value(), v >= 0);
    }

    #[test]
    fn prop_truncate_matches_native_wraparound(v in any::<i64>()) {
        let x = SignedInt::<U64>::from(v);
        prop_assert_eq!(x.truncate::<U8, B1>().get(), v as i8);
        prop_assert_eq!(x.truncate::<U8, B0>().get(), v as u8);
        prop_assert_eq!(x.truncate::<U16, B1>().get(), v as i16);
        prop_assert_eq!(x.truncate::<U16, B0>().get(), v as u16);
        prop_assert_eq!(x.truncate::<U32, B1>().get(), v as i32);
        prop_assert_eq!(x.truncate::<U32, B0>().get(), v as u32);
    }

    #[test]
    fn prop_saturate_clamps(v in any::<i64>()) {
        let x = SignedInt::<U64>::from(v);
        prop_assert_eq!(x.saturate::<U16, B1>().get() as i64, v.clamp(i16::MIN as i64, i16::MAX as i64));
        prop_assert_eq!(x.saturate::<U16, B0>().get() as i64, v.clamp(0, u16::MAX as i64));
        prop_assert_eq!(x.saturate::<U12, B1>().to_i128(), (v as i128).clamp(-2048, 2047));
    }

    #[test]
    fn prop_multiply_32_by_32(a in any::<i32>(), b in any::<u32>()) {
        let product: SignedInt<U64> = SignedInt::<U32>::from(a) * UnsignedInt::<U32>::from(b);
        prop_assert_eq!(product.get(), a as i64 * b as i64);
    }

    #[test]
    fn prop_wide_unsigned_matches_checked(a in any::<u64>(), b in any::<u64>()) {
        let (x, y) = (UnsignedInt::<U64>::from(a), UnsignedInt::<U64>::from(b));
        prop_assert_eq!((x + y).into_option().map(|v| v.get()), a.checked_add(b));
        prop_assert_eq!((x * y).into_option().map(|v| v.get()), a.checked_mul(b));
        let diff = i64::try_from(a as i128 - b as i128).ok();
        prop_assert_eq!((x - y).into_option().map(|v| v.get()), diff);
    }

    #[test]
    fn prop_wide_signed_matches_checked(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (SignedInt::<U64>::from(a), SignedInt::<U64>::from(b));
        prop_assert_eq!((x + y).into_option().map(|v| v.get()), a.checked_add(b));
        prop_assert_eq!((x - y).into_option().map(|v| v.get()), a.checked_sub(b));
        prop_assert_eq!((x * y).into_option().map(|v| v.get()), a.checked_mul(b));
        prop_assert_eq!((x / y).into_option().map(|v| v.get()), a.checked_div(b));
        let rem = (b != 0).then(|| a.wrapping_rem(b));
        prop_assert_eq!((x % y).into_option().map(|v| v.get()), rem);
        prop_assert_eq!((-x).into_option().map(|v| v.get()), a.checked_neg());
    }

    #[test]
    fn prop_checked_shl(a in any::<u64>(), s in 0u32..80) {
        let expected = if a == 0 {
            Some(0)
        } else if s >= 64 {
            None
        } else {
            let v = (a as u128) << s;
            (v <= u64::MAX as u128).then_some(v as u64)
        };
        let shifted = UnsignedInt::<U64>::from(a).checked_shl(s);
        prop_assert_eq!(shifted.into_option().map(|v| v.get()), expected);
    }

    #[test]
    fn prop_parse_matches_construct(v in any::<i32>()) {
        let parsed = v.to_string().parse::<SignedInt<U24>>().ok();
        let built = SignedInt::<U24>::try_new(v).into_option();
        prop_assert_eq!(parsed, built);
    }
}
