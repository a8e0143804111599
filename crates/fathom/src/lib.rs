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

//! # Fathom
//!
//! Integers tagged with an exact bit width and a signedness, whose arithmetic
//! cannot overflow. `WidthInt<W, S>` holds a value of exactly `W` bits; every
//! operator returns a type wide enough for every possible exact result,
//! chosen at compile time by the result-type calculus. Results that would need
//! more than 64 bits, division, and every narrowing conversion surface as an
//! `OverflowOptional`, which has to be checked before its value is read.
//!
//! ```rust
//! use fathom::consts::{U8, U9, U16, U32, U64};
//! use fathom::{B0, SignedInt, UnsignedInt};
//!
//! let a = UnsignedInt::<U8>::new(100);
//! let b = UnsignedInt::<U8>::new(200);
//! let sum: UnsignedInt<U9> = a + b;
//! assert_eq!(sum.get(), 300);
//!
//! let x = SignedInt::<U32>::new(50_000);
//! let square: SignedInt<U64> = x * x;
//! assert_eq!(square.get(), 2_500_000_000);
//!
//! let narrow = square.cast::<U16, B0>();
//! if !narrow.has_value() {
//!     // Handle the overflow explicitly.
//! }
//! ```
//!
//! ## Modules
//!
//! - `int`: `WidthInt`, its aliases, construction and conversion.
//! - `optional`: `OverflowOptional` and its checked-access protocol.
//! - `calculus`: The result-type rules, at the type level and as `Shape`.
//! - `narrow`: `saturate` and `truncate`.
//! - `error`: The crate error type.
//!
//! ## Features
//!
//! - `strict-access`: keep the checked-before-access assertion of
//!   `OverflowOptional` in release builds.
//! - `serde`: `Serialize`/`Deserialize` for `WidthInt`.

pub mod calculus;
pub mod error;
pub mod int;
pub mod narrow;
mod ops;
pub mod optional;

pub use calculus::Shape;
pub use error::{Error, Result};
pub use fathom_core::num::width::{BitWidth, Signedness};
pub use int::{IntSource, SignedInt, UnsignedInt, WidthInt, construct};
pub use narrow::{saturate, truncate};
pub use optional::OverflowOptional;
pub use typenum::consts;
pub use typenum::{B0, B1};
