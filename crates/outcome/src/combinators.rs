//! Short-circuiting free-function combinators.
//!
//! These take the outcome as a parameter and follow the conventional
//! discipline: a failure is propagated or replaced without invoking the
//! continuation. Compare with the payload-symmetric methods
//! [`Outcome::fmap`], [`Outcome::apply`] and [`Outcome::chain`], which run
//! their function on a failure payload as well.
//!
//! # Examples
//!
//! ```rust
//! use outcome::{Arms, Outcome, bind, default_value, err, match_with, ok};
//!
//! let checked = bind(ok::<i32, &str>(42), |x| if x % 2 == 0 { ok(x) } else { err("ODD") });
//! assert_eq!(default_value(checked, 0), 42);
//!
//! let message = match_with(err::<i32, _>("ODD"), Arms {
//!     ok: |x: i32| format!("value {x}"),
//!     err: |e: &str| format!("code: {e}"),
//! });
//! assert_eq!(message, "code: ODD");
//! ```

use crate::macros::trace_event;
use crate::outcome::Outcome;

/// Chains `binder` onto a success; returns a failure unchanged.
///
/// `binder` is never invoked for a failure, and the failure payload is
/// propagated as-is.
pub fn bind<T, U, E, F>(outcome: Outcome<T, E>, binder: F) -> Outcome<U, E>
where
    F: FnOnce(T) -> Outcome<U, E>,
{
    match outcome {
        Outcome::Success(value) => binder(value),
        Outcome::Failure(error) => {
            trace_event!(tag = %crate::Tag::Err, "bind short-circuited");
            Outcome::Failure(error)
        }
    }
}

/// Returns the success payload, or `fallback` for a failure.
pub fn default_value<T, E>(outcome: Outcome<T, E>, fallback: T) -> T {
    match outcome {
        Outcome::Success(value) => value,
        Outcome::Failure(_) => {
            trace_event!(tag = %crate::Tag::Err, "falling back to default value");
            fallback
        }
    }
}

/// Returns the success payload, or computes one from the failure payload.
///
/// # Examples
///
/// ```rust
/// use outcome::{default_with, err};
///
/// assert_eq!(default_with(err::<usize, _>("boom"), |e: &str| e.len()), 4);
/// ```
pub fn default_with<T, E, F>(outcome: Outcome<T, E>, fallback: F) -> T
where
    F: FnOnce(E) -> T,
{
    match outcome {
        Outcome::Success(value) => value,
        Outcome::Failure(error) => {
            trace_event!(tag = %crate::Tag::Err, "computing default from failure");
            fallback(error)
        }
    }
}

/// Tests the success payload against `predicate`.
///
/// A failure never satisfies any predicate; `predicate` is not called.
pub fn satisfy<T, E, P>(outcome: Outcome<T, E>, predicate: P) -> bool
where
    P: FnOnce(T) -> bool,
{
    match outcome {
        Outcome::Success(value) => predicate(value),
        Outcome::Failure(_) => {
            trace_event!(tag = %crate::Tag::Err, "failure never satisfies a predicate");
            false
        }
    }
}

/// The two branches handed to [`match_with`].
///
/// Both arms return the same type `R`.
#[derive(Debug, Clone, Copy)]
pub struct Arms<F, G> {
    /// Called with the success payload.
    pub ok: F,
    /// Called with the failure payload.
    pub err: G,
}

/// Dispatches on the variant, calling exactly one arm.
pub fn match_with<T, E, R, F, G>(outcome: Outcome<T, E>, arms: Arms<F, G>) -> R
where
    F: FnOnce(T) -> R,
    G: FnOnce(E) -> R,
{
    outcome.match_with(arms.ok, arms.err)
}

impl<T, E> Outcome<T, E> {
    /// Dispatches on the variant: `on_ok(v)` for a success, `on_err(e)` for a
    /// failure.
    pub fn match_with<R>(self, on_ok: impl FnOnce(T) -> R, on_err: impl FnOnce(E) -> R) -> R {
        match self {
            Self::Success(value) => on_ok(value),
            Self::Failure(error) => on_err(error),
        }
    }
}
