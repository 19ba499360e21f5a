//! The [`Outcome`] value, its constructors and introspection.
//!
//! An [`Outcome`] is a closed sum of exactly two variants. The payload is
//! never mutated after construction: every combinator consumes its receiver
//! and builds a new value.
//!
//! # Examples
//!
//! ```rust
//! use outcome::{Outcome, Tag, err, is_err, is_ok, ok};
//!
//! let parsed: Outcome<i32, &str> = ok(42);
//! assert!(is_ok(&parsed));
//! assert_eq!(parsed.tag(), Tag::Ok);
//!
//! let rejected: Outcome<i32, &str> = err("ODD");
//! assert!(is_err(&rejected));
//! assert_eq!(rejected.failure(), Some("ODD"));
//! ```

use std::fmt;

/// A value that is either a success payload or a failure payload.
///
/// The two variants carry unrelated types; no relationship between `T` and
/// `E` is assumed.
///
/// Two capability sets operate on an outcome and they deliberately differ:
///
/// - the methods [`fmap`](Outcome::fmap), [`apply`](Outcome::apply) and
///   [`chain`](Outcome::chain) transform *whichever payload is held*, so a
///   failure is mapped just like a success;
/// - the free functions [`bind`](crate::bind),
///   [`default_value`](crate::default_value),
///   [`default_with`](crate::default_with) and [`satisfy`](crate::satisfy)
///   short-circuit on failure.
///
/// Pick the set whose semantics you want; they are not interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    /// A computed value.
    Success(T),
    /// A failure value.
    Failure(E),
}

/// The discriminant of an [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// The success variant.
    Ok,
    /// The failure variant.
    Err,
}

impl Tag {
    /// Returns the tag name as rendered in display strings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "Ok",
            Self::Err => "Err",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wraps `value` in a success-tagged [`Outcome`].
///
/// # Examples
///
/// ```rust
/// use outcome::{Outcome, ok};
///
/// let value: Outcome<u8, String> = ok(7);
/// assert_eq!(value, Outcome::Success(7));
/// ```
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Wraps `value` in a failure-tagged [`Outcome`].
///
/// # Examples
///
/// ```rust
/// use outcome::{Outcome, err};
///
/// let value: Outcome<u8, &str> = err("boom");
/// assert_eq!(value, Outcome::Failure("boom"));
/// ```
pub fn err<T, E>(value: E) -> Outcome<T, E> {
    Outcome::Failure(value)
}

/// Returns `true` if `outcome` holds a success payload.
pub fn is_ok<T, E>(outcome: &Outcome<T, E>) -> bool {
    outcome.is_ok()
}

/// Returns `true` if `outcome` holds a failure payload.
pub fn is_err<T, E>(outcome: &Outcome<T, E>) -> bool {
    outcome.is_err()
}

impl<T, E> Outcome<T, E> {
    /// Creates a success-tagged outcome. Same as [`ok`].
    pub fn ok(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failure-tagged outcome. Same as [`err`].
    pub fn err(value: E) -> Self {
        Self::Failure(value)
    }

    /// Returns `true` for the success variant.
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for the failure variant.
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns the active variant's [`Tag`].
    pub const fn tag(&self) -> Tag {
        match self {
            Self::Success(_) => Tag::Ok,
            Self::Failure(_) => Tag::Err,
        }
    }

    /// Borrows both payloads, producing an `Outcome<&T, &E>`.
    ///
    /// Lets the consuming combinators inspect a value that must stay alive.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Extracts the success payload, discarding a failure.
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the failure payload, discarding a success.
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts into a standard [`Result`], for use with `?` at API
    /// boundaries.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
