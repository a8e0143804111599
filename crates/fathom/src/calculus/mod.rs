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

//! # Result-Type Calculus
//!
//! For every operator between width-tagged operands the calculus selects, from
//! the operand widths and signs alone, the smallest result type guaranteed to
//! hold every exact result. Writing `sw(N, S)` for the width an operand needs
//! under a signed interpretation (`N` if signed, `N + 1` if unsigned):
//!
//! | operator | result sign | result width |
//! |----------|-------------|--------------|
//! | `a + b`  | unsigned iff both unsigned | both unsigned: `max(Na, Nb) + 1`, else `max(sw(a), sw(b)) + 1` |
//! | `a - b`  | signed | as for `+` |
//! | `a * b`  | signed iff either is | `Na + Nb` |
//! | `a << s` | sign of `a` | `Na + 2^Ws - 1`, the shift capped at 127 |
//! | `a >> s` | sign of `a` | `Na` |
//! | `-a`     | signed | `Na + 1` |
//! | `a / b`  | signed iff either is | `Na`, or `Na + 1` for unsigned `a` and signed `b` |
//! | `a % b`  | sign of `a` | `Na` |
//!
//! Results of at most 64 bits are returned as `WidthInt` directly. Wider
//! results are returned as `OverflowOptional<WidthInt<U64, _>>`, empty when
//! the exact value does not fit 64 bits. `/` and `%` always return an
//! `OverflowOptional`, which is empty for a zero divisor.
//!
//! The rules exist twice: as `typenum` type operators in the rule traits, which
//! the operators use, and as `const fn`s on [`Shape`], which can be evaluated
//! and checked at runtime.

mod rules;
mod shape;

pub use rules::*;
pub use shape::Shape;
