//! Payload-symmetric instance combinators.
//!
//! [`fmap`](Outcome::fmap), [`apply`](Outcome::apply) and
//! [`chain`](Outcome::chain) act on *whichever payload is held*. A failure is
//! not skipped: it is mapped, applied to, or chained from exactly like a
//! success. This lets a caller normalize or format an error payload with the
//! same function used on the success path.
//!
//! For conventional short-circuiting composition use the free functions in
//! [`combinators`](crate::combinators) instead.
//!
//! # Examples
//!
//! ```rust
//! use outcome::{Outcome, ok};
//!
//! let start: Outcome<i32, i32> = ok(42);
//! let result = start
//!     .fmap(|x: i32| x * 2)
//!     .apply(ok(|x: i32| x / 2))
//!     .chain(|x: i32| if x % 2 == 0 { Outcome::ok(x) } else { Outcome::err("ODD") });
//!
//! assert_eq!(result, ok(42));
//! ```

use std::convert::Infallible;

use crate::outcome::Outcome;
use crate::payload::PayloadFn;

impl<T, E> Outcome<T, E> {
    /// Maps the held payload, keeping the tag.
    ///
    /// `Success(v)` becomes `Success(f(v))` and `Failure(e)` becomes
    /// `Failure(f(e))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{Outcome, err};
    ///
    /// let failed: Outcome<String, String> = err("timeout".into());
    /// let formatted = failed.fmap(|s: String| format!("code: {s}"));
    /// assert_eq!(formatted, err("code: timeout".to_string()));
    /// ```
    pub fn fmap<F>(
        self,
        f: F,
    ) -> Outcome<<F as PayloadFn<T>>::Output, <F as PayloadFn<E>>::Output>
    where
        F: PayloadFn<T> + PayloadFn<E>,
    {
        match self {
            Self::Success(value) => Outcome::Success(<F as PayloadFn<T>>::invoke(f, value)),
            Self::Failure(error) => Outcome::Failure(<F as PayloadFn<E>>::invoke(f, error)),
        }
    }

    /// Applies a function carried inside a success-tagged outcome to the held
    /// payload, keeping the receiver's tag.
    ///
    /// The wrapper is typed `Outcome<G, Infallible>`, so it can only be a
    /// success and its tag never leaks into the result. On a failure
    /// receiver the function is still applied, to the failure payload.
    pub fn apply<G>(
        self,
        wrapped: Outcome<G, Infallible>,
    ) -> Outcome<<G as PayloadFn<T>>::Output, <G as PayloadFn<E>>::Output>
    where
        G: PayloadFn<T> + PayloadFn<E>,
    {
        let Outcome::Success(function) = wrapped;
        self.fmap(function)
    }

    /// Feeds the held payload to `f` and returns whatever outcome it builds.
    ///
    /// Does not short-circuit: a failure payload is passed to `f` too, and
    /// the returned tag is entirely `f`'s choice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{Outcome, err, ok};
    ///
    /// let failed: Outcome<u32, u32> = err(7);
    /// let recovered = failed.chain(|n: u32| Outcome::<u32, String>::ok(n + 1));
    /// assert_eq!(recovered, ok(8));
    /// ```
    pub fn chain<F, U, X>(self, f: F) -> Outcome<U, X>
    where
        F: PayloadFn<T, Output = Outcome<U, X>> + PayloadFn<E, Output = Outcome<U, X>>,
    {
        match self {
            Self::Success(value) => <F as PayloadFn<T>>::invoke(f, value),
            Self::Failure(error) => <F as PayloadFn<E>>::invoke(f, error),
        }
    }

    /// Alias for [`apply`](Outcome::apply).
    #[inline]
    pub fn lift_a<G>(
        self,
        wrapped: Outcome<G, Infallible>,
    ) -> Outcome<<G as PayloadFn<T>>::Output, <G as PayloadFn<E>>::Output>
    where
        G: PayloadFn<T> + PayloadFn<E>,
    {
        self.apply(wrapped)
    }

    /// Alias for [`chain`](Outcome::chain).
    #[inline]
    pub fn lift_m<F, U, X>(self, f: F) -> Outcome<U, X>
    where
        F: PayloadFn<T, Output = Outcome<U, X>> + PayloadFn<E, Output = Outcome<U, X>>,
    {
        self.chain(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{err, ok};
    use pretty_assertions::assert_eq;

    fn even_or_odd(x: i32) -> Outcome<i32, &'static str> {
        if x % 2 == 0 { ok(x) } else { err("ODD") }
    }

    struct Render;

    impl PayloadFn<i32> for Render {
        type Output = String;
        fn invoke(self, payload: i32) -> String {
            format!("#{payload}")
        }
    }

    impl PayloadFn<&'static str> for Render {
        type Output = String;
        fn invoke(self, payload: &'static str) -> String {
            format!("!{payload}")
        }
    }

    // ── fmap ────────────────────────────────────────────────────────────

    #[test]
    fn fmap_maps_success_payload() {
        let r: Outcome<i32, i32> = ok(21);
        assert_eq!(r.fmap(|x: i32| x * 2), ok(42));
    }

    #[test]
    fn fmap_maps_failure_payload_and_keeps_tag() {
        let r: Outcome<i32, i32> = err(21);
        assert_eq!(r.fmap(|x: i32| x * 2), err(42));
    }

    #[test]
    fn fmap_with_distinct_payload_types() {
        let good: Outcome<i32, &'static str> = ok(1);
        let bad: Outcome<i32, &'static str> = err("no");
        assert_eq!(good.fmap(Render), ok("#1".to_string()));
        assert_eq!(bad.fmap(Render), err("!no".to_string()));
    }

    // ── apply ───────────────────────────────────────────────────────────

    #[test]
    fn apply_on_success() {
        let r: Outcome<i32, i32> = ok(84);
        assert_eq!(r.apply(ok(|x: i32| x / 2)), ok(42));
    }

    #[test]
    fn apply_on_failure_applies_to_failure_payload() {
        let r: Outcome<i32, i32> = err(84);
        assert_eq!(r.apply(ok(|x: i32| x / 2)), err(42));
    }

    #[test]
    fn lift_a_matches_apply() {
        let r: Outcome<i32, i32> = ok(3);
        assert_eq!(r.lift_a(ok(|x: i32| x + 1)), r.apply(ok(|x: i32| x + 1)));
    }

    // ── chain ───────────────────────────────────────────────────────────

    #[test]
    fn chain_on_success_returns_function_result() {
        let r: Outcome<i32, i32> = ok(4);
        assert_eq!(r.chain(even_or_odd), ok(4));
        let r: Outcome<i32, i32> = ok(5);
        assert_eq!(r.chain(even_or_odd), err("ODD"));
    }

    #[test]
    fn chain_on_failure_does_not_short_circuit() {
        let r: Outcome<i32, i32> = err(8);
        assert_eq!(r.chain(even_or_odd), ok(8));
    }

    #[test]
    fn lift_m_matches_chain() {
        let r: Outcome<i32, i32> = err(3);
        assert_eq!(r.lift_m(even_or_odd), r.chain(even_or_odd));
    }

    #[test]
    fn end_to_end_pipeline() {
        let start: Outcome<i32, i32> = ok(42);
        let result = start
            .fmap(|x: i32| x * 2)
            .apply(ok(|x: i32| x / 2))
            .chain(even_or_odd);
        assert_eq!(result, ok(42));
    }

    #[test]
    fn chain_can_turn_success_into_failure_then_fmap_formats_it() {
        let start: Outcome<i32, i32> = ok(42);
        let result = start
            .chain(|_: i32| Outcome::<String, String>::err("HOGE".into()))
            .fmap(|s: String| format!("code: {s}"));
        assert_eq!(result, err("code: HOGE".to_string()));
    }
}
