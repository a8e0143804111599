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

//! # Numeric Foundations
//!
//! Traits that connect type-level bit widths to native machine integers.
//!
//! ## Submodules
//!
//! - `repr`: The `Repr` trait implemented for every native integer that can
//!   back a width-tagged value (`u8`, `u16`, `u32`, `u64`, `i8`, `i16`, `i32`,
//!   `i64`). It exposes lossless widening into `i128` and wrapping narrowing
//!   back out of it.
//! - `width`: `BitWidth` for the `typenum` naturals `U1..=U64`, `Signedness`
//!   for the `typenum` bits `B0` (unsigned) and `B1` (signed), and the `const`
//!   range bounds of a width.
//!
//! ## Motivation
//!
//! A width-tagged integer is only as cheap as its storage. Selecting the
//! smallest native word at the type level keeps `WidthInt<U9, B0>` two bytes
//! wide and lets every operation compile down to a plain machine operation.

pub mod repr;
pub mod width;
