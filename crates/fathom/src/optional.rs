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

//! # Overflow Optional
//!
//! `OverflowOptional<T>` carries a value that may be absent because a
//! conversion or an operation overflowed. It behaves like `Option<T>` with one
//! addition: in debug builds (or with the `strict-access` feature) every
//! instance remembers whether its validity has been queried, and raw access
//! through `Deref` asserts that it was. Reading a result without looking at
//! whether it exists is a programming error, and the assertion catches it at
//! the point of access rather than at the point of use.
//!
//! The flag lives in a `Cell`, so queries take `&self` and the type is not
//! `Sync`.

use crate::error::{Error, Result};
use std::fmt::Debug;
use std::ops::{Deref, DerefMut};

#[cfg(any(debug_assertions, feature = "strict-access"))]
use std::cell::Cell;

/// A possibly-absent result of a checked conversion or operation.
///
/// # Examples
///
/// ```rust
/// use fathom::consts::U8;
/// use fathom::UnsignedInt;
///
/// let x = UnsignedInt::<U8>::try_new(42);
/// if x.has_value() {
///     assert_eq!(x.get(), 42);
/// }
///
/// let y = UnsignedInt::<U8>::try_new(256);
/// assert!(y.value().is_err());
/// ```
///
/// In debug builds, or with the `strict-access` feature, accessing the value
/// before checking it panics:
///
/// ```rust,no_run
/// use fathom::consts::U8;
/// use fathom::UnsignedInt;
///
/// let x = UnsignedInt::<U8>::try_new(42);
/// let _ = x.get();
/// ```
pub struct OverflowOptional<T> {
    value: Option<T>,
    #[cfg(any(debug_assertions, feature = "strict-access"))]
    checked: Cell<bool>,
}

impl<T> OverflowOptional<T> {
    /// Creates an instance holding `value`.
    #[inline(always)]
    pub const fn with_value(value: T) -> Self {
        Self {
            value: Some(value),
            #[cfg(any(debug_assertions, feature = "strict-access"))]
            checked: Cell::new(false),
        }
    }

    /// Creates an empty instance.
    #[inline(always)]
    pub const fn empty() -> Self {
        Self {
            value: None,
            #[cfg(any(debug_assertions, feature = "strict-access"))]
            checked: Cell::new(false),
        }
    }

    #[inline(always)]
    fn mark_checked(&self) {
        #[cfg(any(debug_assertions, feature = "strict-access"))]
        self.checked.set(true);
    }

    #[inline(always)]
    fn assert_checked(&self) {
        #[cfg(any(debug_assertions, feature = "strict-access"))]
        assert!(
            self.checked.get(),
            "`OverflowOptional<{}>` accessed before its validity was checked",
            std::any::type_name::<T>()
        );
    }

    /// Returns `true` if a value is present. Marks the instance checked.
    #[inline]
    pub fn has_value(&self) -> bool {
        self.mark_checked();
        self.value.is_some()
    }

    /// Extracts the value, or reports `Error::Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fathom::consts::U4;
    /// use fathom::{Error, SignedInt};
    ///
    /// assert_eq!(SignedInt::<U4>::try_new(7).value(), Ok(SignedInt::<U4>::new(7)));
    /// assert!(matches!(SignedInt::<U4>::try_new(8).value(), Err(Error::Empty { .. })));
    /// ```
    #[inline]
    pub fn value(self) -> Result<T> {
        match self.value {
            Some(value) => Ok(value),
            None => Err(empty_error::<T>()),
        }
    }

    /// Reports `Error::Empty` if no value is present. Marks the instance
    /// checked, so raw access is allowed afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fathom::consts::U8;
    /// use fathom::UnsignedInt;
    ///
    /// fn double(x: UnsignedInt<U8>) -> fathom::Result<u16> {
    ///     let y = (x + x).cast::<U8, fathom::B0>();
    ///     y.require_value()?;
    ///     Ok(u16::from(y.get()) * 2)
    /// }
    ///
    /// assert_eq!(double(UnsignedInt::<U8>::new(10)), Ok(40));
    /// assert!(double(UnsignedInt::<U8>::new(200)).is_err());
    /// ```
    #[inline]
    pub fn require_value(&self) -> Result<()> {
        if self.has_value() {
            Ok(())
        } else {
            Err(empty_error::<T>())
        }
    }

    /// Terminates the process if no value is present.
    ///
    /// Logs at error level before aborting. Marks the instance checked.
    pub fn abort_if_no_value(&self) {
        if !self.has_value() {
            tracing::error!(
                type_name = std::any::type_name::<T>(),
                "aborting: overflow optional holds no value"
            );
            std::process::abort();
        }
    }

    /// Converts into a plain `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.value
    }

    /// Borrows the value as an `Option`. Marks the instance checked.
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        self.mark_checked();
        self.value.as_ref()
    }

    /// Maps the value if present. The result starts out unchecked.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> OverflowOptional<U> {
        self.value.map(f).into()
    }

    /// Chains a fallible computation on the value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fathom::consts::{U8, U16};
    /// use fathom::UnsignedInt;
    ///
    /// let x = UnsignedInt::<U16>::new(300);
    /// let y = x.cast::<U8, fathom::B0>().and_then(|v| (v * v).cast::<U16, fathom::B0>());
    /// assert!(!y.has_value());
    /// ```
    #[inline]
    pub fn and_then<U, F: FnOnce(T) -> OverflowOptional<U>>(self, f: F) -> OverflowOptional<U> {
        match self.value {
            Some(value) => f(value),
            None => OverflowOptional::empty(),
        }
    }

    /// Returns the value or `default` when empty.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        self.value.unwrap_or(default)
    }
}

#[cold]
fn empty_error<T>() -> Error {
    let type_name = std::any::type_name::<T>();
    tracing::debug!(type_name, "overflow optional holds no value");
    Error::Empty { type_name }
}

impl<T> Deref for OverflowOptional<T> {
    type Target = T;

    /// Raw access. Asserts in debug builds that validity was checked first.
    ///
    /// # Panics
    ///
    /// Panics if no value is present.
    #[inline]
    fn deref(&self) -> &T {
        self.assert_checked();
        match &self.value {
            Some(value) => value,
            None => panic!(
                "dereferenced an empty `OverflowOptional<{}>`",
                std::any::type_name::<T>()
            ),
        }
    }
}

impl<T> DerefMut for OverflowOptional<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        self.assert_checked();
        match &mut self.value {
            Some(value) => value,
            None => panic!(
                "dereferenced an empty `OverflowOptional<{}>`",
                std::any::type_name::<T>()
            ),
        }
    }
}

impl<T> From<Option<T>> for OverflowOptional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::with_value(value),
            None => Self::empty(),
        }
    }
}

impl<T> From<&OverflowOptional<T>> for bool {
    /// Same as `has_value`.
    #[inline]
    fn from(opt: &OverflowOptional<T>) -> bool {
        opt.has_value()
    }
}

impl<T: Clone> Clone for OverflowOptional<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            #[cfg(any(debug_assertions, feature = "strict-access"))]
            checked: self.checked.clone(),
        }
    }
}

impl<T: Debug> Debug for OverflowOptional<T> {
    /// Does not count as a validity check.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => f.debug_tuple("OverflowOptional").field(value).finish(),
            None => f.write_str("OverflowOptional(<empty>)"),
        }
    }
}
