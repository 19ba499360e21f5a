//! Call-once functions accepted by the payload-symmetric combinators.
//!
//! [`Outcome::fmap`](crate::Outcome::fmap) and friends hand the *same*
//! function value to whichever payload is held. Rust closures have a single
//! argument type, so the combinators take anything implementing
//! [`PayloadFn`] for both payload types instead of a bare `FnOnce`.
//!
//! Every `FnOnce(A) -> B` implements `PayloadFn<A>`, which covers the common
//! case where the success and failure payloads share a type. For distinct
//! payload types, implement `PayloadFn` twice on one type:
//!
//! ```rust
//! use outcome::{Outcome, PayloadFn, err, ok};
//!
//! struct Describe;
//!
//! impl PayloadFn<u32> for Describe {
//!     type Output = String;
//!     fn invoke(self, payload: u32) -> String {
//!         format!("count={payload}")
//!     }
//! }
//!
//! impl PayloadFn<&'static str> for Describe {
//!     type Output = String;
//!     fn invoke(self, payload: &'static str) -> String {
//!         format!("reason={payload}")
//!     }
//! }
//!
//! let good: Outcome<u32, &'static str> = ok(3);
//! let bad: Outcome<u32, &'static str> = err("empty");
//! assert_eq!(good.fmap(Describe), ok("count=3".to_string()));
//! assert_eq!(bad.fmap(Describe), err("reason=empty".to_string()));
//! ```
//!
//! Closures passed through this trait need their argument type written out
//! (`|x: i32| x * 2`), since the compiler only infers closure signatures
//! from `Fn*` bounds.

/// A function that can be called once with a payload of type `A`.
pub trait PayloadFn<A> {
    /// The value produced from the payload.
    type Output;

    /// Consumes the function and applies it to `payload`.
    fn invoke(self, payload: A) -> Self::Output;
}

impl<A, B, F> PayloadFn<A> for F
where
    F: FnOnce(A) -> B,
{
    type Output = B;

    fn invoke(self, payload: A) -> B {
        self(payload)
    }
}
