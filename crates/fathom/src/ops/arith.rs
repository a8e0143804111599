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

use crate::calculus::{
    AdditiveRule, DiffSign, DifferenceOf, NegationOf, NegationRule, NegationWidth, ProductOf,
    ProductRule, ProductSign, ProductWidth, Realize, SumOf, SumSign, SumWidth,
};
use crate::int::WidthInt;
use fathom_core::num::width::{BitWidth, Signedness};
use std::ops::{Add, Mul, Neg, Sub};
use typenum::B1;

impl<WA, SA, WB, SB> Add<WidthInt<WB, SB>> for WidthInt<WA, SA>
where
    WA: BitWidth,
    SA: Signedness,
    WB: BitWidth,
    SB: Signedness,
    Self: AdditiveRule<WidthInt<WB, SB>>,
    SumWidth<Self, WidthInt<WB, SB>>: Realize<SumSign<Self, WidthInt<WB, SB>>>,
{
    type Output = SumOf<Self, WidthInt<WB, SB>>;

    #[inline(always)]
    fn add(self, rhs: WidthInt<WB, SB>) -> Self::Output {
        <SumWidth<Self, WidthInt<WB, SB>> as Realize<SumSign<Self, WidthInt<WB, SB>>>>::from_exact(
            self.to_wide() + rhs.to_wide(),
        )
    }
}

impl<WA, SA, WB, SB> Sub<WidthInt<WB, SB>> for WidthInt<WA, SA>
where
    WA: BitWidth,
    SA: Signedness,
    WB: BitWidth,
    SB: Signedness,
    Self: AdditiveRule<WidthInt<WB, SB>>,
    SumWidth<Self, WidthInt<WB, SB>>: Realize<DiffSign<Self, WidthInt<WB, SB>>>,
{
    type Output = DifferenceOf<Self, WidthInt<WB, SB>>;

    #[inline(always)]
    fn sub(self, rhs: WidthInt<WB, SB>) -> Self::Output {
        <SumWidth<Self, WidthInt<WB, SB>> as Realize<DiffSign<Self, WidthInt<WB, SB>>>>::from_exact(
            self.to_wide() - rhs.to_wide(),
        )
    }
}

impl<WA, SA, WB, SB> Mul<WidthInt<WB, SB>> for WidthInt<WA, SA>
where
    WA: BitWidth,
    SA: Signedness,
    WB: BitWidth,
    SB: Signedness,
    Self: ProductRule<WidthInt<WB, SB>>,
    ProductWidth<Self, WidthInt<WB, SB>>: Realize<ProductSign<Self, WidthInt<WB, SB>>>,
{
    type Output = ProductOf<Self, WidthInt<WB, SB>>;

    #[inline(always)]
    fn mul(self, rhs: WidthInt<WB, SB>) -> Self::Output {
        <ProductWidth<Self, WidthInt<WB, SB>> as Realize<ProductSign<Self, WidthInt<WB, SB>>>>::from_product(
            self.to_wide(),
            rhs.to_wide(),
        )
    }
}

impl<W, S> Neg for WidthInt<W, S>
where
    W: BitWidth,
    S: Signedness,
    Self: NegationRule,
    NegationWidth<Self>: Realize<B1>,
{
    type Output = NegationOf<Self>;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        <NegationWidth<Self> as Realize<B1>>::from_exact(-self.to_wide())
    }
}
