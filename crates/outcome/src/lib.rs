//! # outcome
//!
//! A tagged success/failure value with an explicit set of combinators for
//! mapping, chaining, defaulting, predicate-testing and matching, so fallible
//! steps compose without panics and keep their failure type visible.
//!
//! ## Quick Start
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! let start: Outcome<i32, i32> = ok(42);
//! let checked = start
//!     .fmap(|x: i32| x * 2)
//!     .apply(ok(|x: i32| x / 2))
//!     .chain(|x: i32| if x % 2 == 0 { Outcome::ok(x) } else { Outcome::err("ODD") });
//!
//! assert_eq!(checked.to_display_string(), "42");
//! assert_eq!(default_value(checked, 0), 42);
//! ```
//!
//! ## Two combinator sets
//!
//! - **Payload-symmetric methods**: [`Outcome::fmap`], [`Outcome::apply`] and
//!   [`Outcome::chain`] act on whichever payload is held. A failure is mapped
//!   or chained from just like a success.
//! - **Short-circuiting functions**: [`bind`], [`default_value`],
//!   [`default_with`] and [`satisfy`] leave a failure alone and never call
//!   their continuation for it.
//!
//! The two sets look alike but behave differently on failures; choose
//! deliberately.
//!
//! ## Coercion
//!
//! [`Outcome::to_display_string`] (also the `Display` impl) and
//! [`Outcome::to_truthy_int`] turn an outcome into text or a `1`/`0` proxy.
//! See [`coerce`] for the exact rules.
//!
//! ## Features
//!
//! - `tracing` (default): emit `TRACE` events, target `outcome`, when a
//!   short-circuiting combinator takes its failure path.

mod macros;

pub mod coerce;
pub mod combinators;
pub mod outcome;
pub mod payload;
pub mod prelude;
pub mod status;
mod symmetric;

pub use coerce::Primitive;
pub use combinators::{Arms, bind, default_value, default_with, match_with, satisfy};
pub use outcome::{Outcome, Tag, err, is_err, is_ok, ok};
pub use payload::PayloadFn;
pub use status::ErrStatus;
