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

//! # Fathom Core
//!
//! Foundational building blocks for the fathom width-tagged integers. This
//! crate holds everything that does not depend on the integer type itself:
//! the native storage words, the type-level description of a bit width and a
//! signedness, and inclusive integer ranges used to reason about the values a
//! width can hold.
//!
//! ## Modules
//!
//! - `num`: Native storage (`Repr`) implemented for `u8..u64` and `i8..i64`,
//!   type-level widths (`BitWidth` for `typenum::U1..=U64`) with the smallest
//!   native storage that fits, and the signedness markers (`Signedness` for
//!   `typenum::B0`/`B1`).
//! - `math`: Closed integer intervals `[min, max]` over `i128` with exact
//!   interval arithmetic, used as the range oracle of the result-type calculus.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
pub mod num;
