//! # phone-forward
//!
//! Prefix-based telephone-number forwarding.
//!
//! A [`PhoneForward`] table maps number prefixes to replacement prefixes.
//! Resolving a number applies the longest registered prefix rule and
//! splices the replacement onto the unmatched tail; reverse lookup
//! enumerates the numbers that could resolve to a given target.
//!
//! Numbers are non-empty strings over the twelve-symbol telephone
//! alphabet: the digits `0`-`9` plus `*` and `#`.
//!
//! ## Example
//!
//! ```rust
//! use phone_forward::prelude::*;
//!
//! let mut table = PhoneForward::new();
//! table.add("1", "2")?;
//! table.add("21", "3456")?;
//!
//! // Longest matching prefix governs: "1" -> "2", suffix kept.
//! assert_eq!(table.get("1234").get(0), Some("2234"));
//! // Exact-length rules apply too.
//! assert_eq!(table.get("21").get(0), Some("3456"));
//!
//! // Which numbers resolve to "2234"?
//! let sources = table.get_reverse("2234");
//! assert!(sources.iter().any(|n| n == "1234"));
//! # Ok::<(), ForwardError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alphabet;
pub mod error;
pub mod numbers;
pub mod trie;

pub use error::{ForwardError, Result};
pub use numbers::PhoneNumbers;
pub use trie::PhoneForward;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::error::{ForwardError, Result};
    pub use crate::numbers::PhoneNumbers;
    pub use crate::trie::PhoneForward;
}
