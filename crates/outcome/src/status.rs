//! A ready-made failure payload.

/// A failure described by a short status code and a human-readable message.
///
/// Use it as the `E` of an [`Outcome`](crate::Outcome) when callers have no
/// richer error type of their own.
///
/// # Examples
///
/// ```rust
/// use outcome::{ErrStatus, Outcome, err};
///
/// let denied: Outcome<u32, ErrStatus> = err(ErrStatus::new("403", "forbidden"));
/// assert_eq!(denied.to_display_string(), "Err 403: forbidden");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{status}: {message}")]
pub struct ErrStatus {
    status: String,
    message: String,
}

impl ErrStatus {
    /// Creates a status from its code and message.
    pub fn new(status: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            message: message.into(),
        }
    }

    /// The status code.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl crate::coerce::Primitive for ErrStatus {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::default_with;
    use crate::outcome::{Outcome, err};
    use pretty_assertions::assert_eq;

    #[test]
    fn display_joins_status_and_message() {
        let status = ErrStatus::new("E_PARSE", "not a number");
        assert_eq!(status.to_string(), "E_PARSE: not a number");
        assert_eq!(status.status(), "E_PARSE");
        assert_eq!(status.message(), "not a number");
    }

    #[test]
    fn is_a_std_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(ErrStatus::new("500", "internal"));
        assert_eq!(boxed.to_string(), "500: internal");
    }

    #[test]
    fn works_as_failure_payload() {
        let r: Outcome<usize, ErrStatus> = err(ErrStatus::new("404", "missing"));
        assert_eq!(r.to_display_string(), "Err 404: missing");
        assert_eq!(default_with(r, |e| e.message().len()), 7);
    }
}
