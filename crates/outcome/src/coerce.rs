//! Conversion of an [`Outcome`] to display strings and numeric proxies.
//!
//! The protocol is explicit: callers invoke a named conversion at the format
//! or arithmetic site instead of relying on an implicit coercion hook.
//!
//! | Value | [`to_display_string`](Outcome::to_display_string) | [`to_truthy_int`](Outcome::to_truthy_int) |
//! |---|---|---|
//! | `ok(42)` | `"42"` | `1` |
//! | `ok(true)` | `"true"` | `1` |
//! | `ok("hi")` | `"Ok hi"` | `1` |
//! | `err("ODD")` | `"Err ODD"` | `0` |
//! | `err(999)` | `"Err 999"` | `0` |
//!
//! A success renders its bare payload only when the payload is a number or a
//! boolean. That property is declared by the payload type through
//! [`Primitive::SCALAR`].

use std::borrow::Cow;
use std::fmt;

use crate::outcome::{Outcome, Tag};

/// A payload that knows how it participates in string coercion.
///
/// Scalars (numbers and `bool`) render bare inside a success. Everything else
/// renders behind the variant tag. Implement this for your own `Display`
/// payloads; the default is non-scalar.
///
/// # Examples
///
/// ```rust
/// use std::fmt;
/// use outcome::{Outcome, Primitive, ok};
///
/// struct UserId(u64);
///
/// impl fmt::Display for UserId {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "user#{}", self.0)
///     }
/// }
///
/// impl Primitive for UserId {}
///
/// let found: Outcome<UserId, String> = ok(UserId(7));
/// assert_eq!(found.to_display_string(), "Ok user#7");
/// ```
pub trait Primitive: fmt::Display {
    /// `true` when a success holding this payload renders as the bare value.
    const SCALAR: bool = false;
}

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Primitive for $ty {
                const SCALAR: bool = true;
            }
        )*
    };
}

impl_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool,
);

impl Primitive for str {}
impl Primitive for String {}
impl Primitive for char {}
impl Primitive for Cow<'_, str> {}

impl<P: Primitive + ?Sized> Primitive for &P {
    const SCALAR: bool = P::SCALAR;
}

impl<P: Primitive + ?Sized> Primitive for Box<P> {
    const SCALAR: bool = P::SCALAR;
}

impl<T, E> fmt::Display for Outcome<T, E>
where
    T: Primitive,
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) if T::SCALAR => write!(f, "{value}"),
            Self::Success(value) => write!(f, "{} {value}", Tag::Ok),
            Self::Failure(error) => write!(f, "{} {error}", Tag::Err),
        }
    }
}

impl<T, E> Outcome<T, E> {
    /// Renders the outcome for embedding in text.
    ///
    /// Same output as the [`Display`](fmt::Display) impl.
    pub fn to_display_string(&self) -> String
    where
        T: Primitive,
        E: fmt::Display,
    {
        self.to_string()
    }

    /// Renders `"<tag> <payload>"` regardless of the payload type.
    pub fn to_tagged_string(&self) -> String
    where
        T: fmt::Display,
        E: fmt::Display,
    {
        match self {
            Self::Success(value) => format!("{} {value}", Tag::Ok),
            Self::Failure(error) => format!("{} {error}", Tag::Err),
        }
    }

    /// Numeric proxy of the variant: `1` for a success, `0` for a failure.
    ///
    /// The payload's own value never matters.
    pub const fn to_truthy_int(&self) -> i32 {
        match self {
            Self::Success(_) => 1,
            Self::Failure(_) => 0,
        }
    }
}

impl<T, E> From<&Outcome<T, E>> for bool {
    fn from(outcome: &Outcome<T, E>) -> Self {
        outcome.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{err, ok};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(ok(42), "42")]
    #[case(ok(-7), "-7")]
    #[case(err(42), "Err 42")]
    fn integer_payloads(#[case] input: Outcome<i32, i32>, #[case] expected: &str) {
        assert_eq!(input.to_display_string(), expected);
    }

    #[test]
    fn scalar_success_renders_bare() {
        assert_eq!(ok::<_, &str>(1.5_f64).to_display_string(), "1.5");
        assert_eq!(ok::<_, &str>(true).to_display_string(), "true");
        assert_eq!(ok::<_, &str>(&42_u8).to_display_string(), "42");
    }

    #[test]
    fn textual_success_renders_tagged() {
        assert_eq!(ok::<_, &str>("hi").to_display_string(), "Ok hi");
        assert_eq!(ok::<_, &str>(String::from("hi")).to_display_string(), "Ok hi");
        assert_eq!(ok::<_, &str>('c').to_display_string(), "Ok c");
    }

    #[test]
    fn failure_always_renders_tagged() {
        assert_eq!(err::<i32, _>("ODD").to_display_string(), "Err ODD");
        assert_eq!(err::<i32, _>(false).to_display_string(), "Err false");
    }

    #[test]
    fn display_is_usable_in_format() {
        let r: Outcome<&str, &str> = err("ODD");
        assert_eq!(format!("result: {r}"), "result: Err ODD");
    }

    #[test]
    fn tagged_string_ignores_scalar_hint() {
        assert_eq!(ok::<_, &str>(42).to_tagged_string(), "Ok 42");
        assert_eq!(err::<i32, _>("ODD").to_tagged_string(), "Err ODD");
    }

    #[rstest]
    #[case(ok(999), 1)]
    #[case(ok(0), 1)]
    #[case(err(999), 0)]
    #[case(err(1), 0)]
    fn truthy_int_reflects_variant(#[case] input: Outcome<i32, i32>, #[case] expected: i32) {
        assert_eq!(input.to_truthy_int(), expected);
    }

    #[test]
    fn bool_proxy() {
        assert!(bool::from(&ok::<(), ()>(())));
        assert!(!bool::from(&err::<(), ()>(())));
    }
}
