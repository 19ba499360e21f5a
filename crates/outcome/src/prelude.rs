//! Prelude module for convenient imports.
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! let r: Outcome<u8, ErrStatus> = err(ErrStatus::new("E1", "bad input"));
//! assert!(!satisfy(r, |n| n > 0));
//! ```

pub use crate::coerce::Primitive;
pub use crate::combinators::{Arms, bind, default_value, default_with, match_with, satisfy};
pub use crate::outcome::{Outcome, Tag, err, is_err, is_ok, ok};
pub use crate::payload::PayloadFn;
pub use crate::status::ErrStatus;
