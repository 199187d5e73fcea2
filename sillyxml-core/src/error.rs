// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::borrow::Cow;

use thiserror::Error;

/// Global flag to check if SILLYXML_PANIC_ON_ERROR environment variable is set at compile time.
/// Set SILLYXML_PANIC_ON_ERROR=1 at compile time to enable panic on error.
pub const PANIC_ON_ERROR: bool = option_env!("SILLYXML_PANIC_ON_ERROR").is_some();

/// Check if SILLYXML_PANIC_ON_ERROR environment variable is set.
#[inline(always)]
pub const fn should_panic_on_error() -> bool {
    PANIC_ON_ERROR
}

/// Error type for encoding and decoding operations.
///
/// # IMPORTANT: Always Use Static Constructor Functions
///
/// **DO NOT** construct error variants directly using the enum syntax.
/// **ALWAYS** use the provided static constructor functions instead, they
/// accept anything convertible into `Cow<'static, str>`.
///
/// ```rust
/// use sillyxml_core::error::Error;
///
/// let err = Error::format_error("expected <Person>, found <Animal>");
/// let err = Error::value_error(format!("cannot parse {:?} as I32", "4x2"));
/// ```
///
/// ## Available Constructor Functions
///
/// - [`Error::format_error`] - Root tag does not match the target type's canonical name
/// - [`Error::unsupported_shape`] - No constructor is fully satisfiable from the child names
/// - [`Error::value_error`] - Leaf text cannot be parsed into the requested representation
/// - [`Error::parse_error`] - Raw text is not a well-formed document
/// - [`Error::render_error`] - The tree could not be written out as text
/// - [`Error::depth_exceed`] - Encode/decode recursion went deeper than configured
/// - [`Error::unsupported`] - The type cannot be handled in the requested direction
///
/// ## Debug Mode: SILLYXML_PANIC_ON_ERROR
///
/// Building with `SILLYXML_PANIC_ON_ERROR` set makes every constructor panic at
/// the exact location the error is created:
///
/// ```bash
/// RUST_BACKTRACE=1 SILLYXML_PANIC_ON_ERROR=1 cargo test
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The top-level node name does not equal the canonical name of the target type.
    ///
    /// Do not construct this variant directly; use [`Error::format_error`] instead.
    #[error("{0}")]
    Format(Cow<'static, str>),

    /// No constructor has all of its parameters satisfied by the node's children.
    ///
    /// Do not construct this variant directly; use [`Error::unsupported_shape`] instead.
    #[error("{0}")]
    UnsupportedShape(Cow<'static, str>),

    /// Leaf text could not be parsed into a primitive, enum or date-time value.
    ///
    /// Do not construct this variant directly; use [`Error::value_error`] instead.
    #[error("{0}")]
    Value(Cow<'static, str>),

    /// Raw text is not a well-formed document.
    ///
    /// Do not construct this variant directly; use [`Error::parse_error`] instead.
    #[error("{0}")]
    Parse(Cow<'static, str>),

    /// Writing the document tree as text failed.
    ///
    /// Do not construct this variant directly; use [`Error::render_error`] instead.
    #[error("{0}")]
    Render(Cow<'static, str>),

    /// Maximum nesting depth exceeded.
    ///
    /// Do not construct this variant directly; use [`Error::depth_exceed`] instead.
    #[error("{0}")]
    DepthExceed(Cow<'static, str>),

    /// Unsupported operation for the type at hand.
    ///
    /// Do not construct this variant directly; use [`Error::unsupported`] instead.
    #[error("{0}")]
    Unsupported(Cow<'static, str>),
}

impl Error {
    /// Creates a new [`Error::Format`] from a string or static message.
    ///
    /// If `SILLYXML_PANIC_ON_ERROR` is set, this will panic with the error message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn format_error<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Format(s.into());
        if PANIC_ON_ERROR {
            panic!("SILLYXML_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::UnsupportedShape`] from a string or static message.
    ///
    /// If `SILLYXML_PANIC_ON_ERROR` is set, this will panic with the error message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unsupported_shape<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::UnsupportedShape(s.into());
        if PANIC_ON_ERROR {
            panic!("SILLYXML_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Value`] from a string or static message.
    ///
    /// If `SILLYXML_PANIC_ON_ERROR` is set, this will panic with the error message.
    ///
    /// # Example
    /// ```
    /// use sillyxml_core::error::Error;
    ///
    /// let err = Error::value_error("not a number");
    /// let err = Error::value_error(format!("{:?} is not a Bool", "yes"));
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn value_error<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Value(s.into());
        if PANIC_ON_ERROR {
            panic!("SILLYXML_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Parse`] from a string or static message.
    ///
    /// If `SILLYXML_PANIC_ON_ERROR` is set, this will panic with the error message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn parse_error<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Parse(s.into());
        if PANIC_ON_ERROR {
            panic!("SILLYXML_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Render`] from a string or static message.
    ///
    /// If `SILLYXML_PANIC_ON_ERROR` is set, this will panic with the error message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn render_error<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Render(s.into());
        if PANIC_ON_ERROR {
            panic!("SILLYXML_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::DepthExceed`] from a string or static message.
    ///
    /// If `SILLYXML_PANIC_ON_ERROR` is set, this will panic with the error message.
    ///
    /// # Example
    /// ```
    /// use sillyxml_core::error::Error;
    ///
    /// let err = Error::depth_exceed(format!("Depth {} exceeds max {}", 65, 64));
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn depth_exceed<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::DepthExceed(s.into());
        if PANIC_ON_ERROR {
            panic!("SILLYXML_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Unsupported`] from a string or static message.
    ///
    /// If `SILLYXML_PANIC_ON_ERROR` is set, this will panic with the error message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unsupported<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Unsupported(s.into());
        if PANIC_ON_ERROR {
            panic!("SILLYXML_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Appends the Rust type name to a [`Error::Value`] or [`Error::Unsupported`] message.
    ///
    /// Other variants are returned unchanged.
    ///
    /// # Example
    /// ```
    /// use sillyxml_core::error::Error;
    ///
    /// let err = Error::value_error("invalid digit");
    /// let enhanced = Error::enhance_value_error::<i32>(err);
    /// assert_eq!(enhanced.to_string(), "invalid digit (type: i32)");
    /// ```
    #[inline(never)]
    pub fn enhance_value_error<T: ?Sized + 'static>(err: Error) -> Error {
        match err {
            Error::Value(s) => Error::value_error(format!(
                "{} (type: {})",
                s,
                std::any::type_name::<T>()
            )),
            Error::Unsupported(s) => Error::unsupported(format!(
                "{} (type: {})",
                s,
                std::any::type_name::<T>()
            )),
            other => other,
        }
    }
}

/// Ensures a condition is true; otherwise returns an [`enum@Error`].
///
/// # Examples
/// ```
/// use sillyxml_core::ensure;
/// use sillyxml_core::error::Error;
///
/// fn check_arity(n: usize) -> Result<(), Error> {
///     ensure!(n > 0, Error::unsupported_shape("no parameters"));
///     ensure!(n < 10, "arity {} too large", n);
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !$cond {
            return Err($crate::error::Error::unsupported($msg));
        }
    };
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::error::Error::unsupported(format!($fmt, $($arg)*)));
        }
    };
}

/// Returns early with an [`Error::Value`].
///
/// # Examples
/// ```
/// use sillyxml_core::bail;
/// use sillyxml_core::error::Error;
///
/// fn parse_flag(text: &str) -> Result<bool, Error> {
///     match text {
///         "true" => Ok(true),
///         "false" => Ok(false),
///         _ => bail!("{:?} is not a Bool", text),
///     }
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($err:expr) => {
        return Err($crate::error::Error::value_error($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::value_error(format!($fmt, $($arg)*)))
    };
}
