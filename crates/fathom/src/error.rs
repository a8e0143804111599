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

use crate::calculus::Shape;
use std::num::ParseIntError;

/// Errors reported by the checked parts of the API.
///
/// Range violations during arithmetic are not errors: they surface as empty
/// `OverflowOptional`s. An `Error` appears only when the caller asks to
/// extract a value (`OverflowOptional::value`, `OverflowOptional::require_value`)
/// or when text is parsed into a width-tagged type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Forced access of an `OverflowOptional` that holds no value.
    #[error("`OverflowOptional<{type_name}>` holds no value")]
    Empty { type_name: &'static str },

    /// A parsed value lies outside the range of the target type.
    #[error("{value} is out of range for {shape}")]
    OutOfRange { value: i128, shape: Shape },

    /// The text is not a decimal integer.
    #[error("invalid integer literal: {0}")]
    Parse(#[from] ParseIntError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let empty = Error::Empty { type_name: "u8" };
        assert_eq!(empty.to_string(), "`OverflowOptional<u8>` holds no value");

        let out_of_range = Error::OutOfRange {
            value: 300,
            shape: Shape::new(8, false),
        };
        assert_eq!(out_of_range.to_string(), "300 is out of range for u8");
    }

    #[test]
    fn test_parse_error_converts() {
        let err: Error = "x".parse::<i128>().unwrap_err().into();
        assert!(matches!(err, Error::Parse(_)));
    }
}
