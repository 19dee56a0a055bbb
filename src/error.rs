//! Error types for forwarding-table mutations.

use thiserror::Error;

/// Errors reported when registering a forwarding rule.
///
/// Query operations never return these; an ill-formed query yields a
/// degenerate single-empty-string result instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ForwardError {
    /// The prefix or replacement is empty or contains a byte outside the
    /// telephone alphabet (`0`-`9`, `*`, `#`).
    #[error("number is empty or contains symbols outside the telephone alphabet")]
    InvalidNumber,

    /// The rule would forward a prefix to itself.
    #[error("a prefix may not forward to itself")]
    SelfForward,
}

/// A specialized `Result` type for forwarding-table operations.
pub type Result<T> = std::result::Result<T, ForwardError>;
