//! Prefix trie storing phone-number forwarding rules.
//!
//! Each node stands for one symbol position along some prefix and owns up
//! to twelve children, one per alphabet symbol; a node optionally holds
//! the replacement registered for exactly the prefix it spells. Forward
//! resolution walks the query's path and applies the deepest target seen,
//! which is the longest registered prefix of the query.

mod reverse;

use crate::alphabet::{decode_number, is_valid_number, ALPHABET_LEN};
use crate::error::{ForwardError, Result};
use crate::numbers::PhoneNumbers;

/// A node in the forwarding trie.
///
/// The chain of child indices from the root encodes the prefix a node
/// represents; the root is the empty prefix and in practice never carries
/// a target, since rules require non-empty prefixes.
#[derive(Debug, Default)]
pub(crate) struct Node {
    /// Replacement registered for the prefix this node spells, if any.
    pub(crate) forward: Option<String>,
    /// One owning slot per alphabet symbol. A strict rooted tree: every
    /// node is reachable only through its parent.
    pub(crate) children: [Option<Box<Node>>; ALPHABET_LEN],
}

/// A forwarding table mapping number prefixes to replacement prefixes.
///
/// # Resolution
///
/// [`get`](PhoneForward::get) applies the longest-prefix-match rule:
/// among every registered prefix of the query, the longest one governs,
/// and its replacement is joined with the query's unmatched tail.
///
/// # Thread safety
///
/// Plain `&mut self` mutation with no interior mutability; wrap the table
/// in external synchronization to share it across threads.
///
/// # Example
///
/// ```rust
/// use phone_forward::PhoneForward;
///
/// let mut table = PhoneForward::new();
/// table.add("1", "2").unwrap();
/// assert_eq!(table.get("1234").get(0), Some("2234"));
/// ```
#[derive(Debug, Default)]
pub struct PhoneForward {
    root: Node,
}

impl PhoneForward {
    /// Create an empty forwarding table.
    pub fn new() -> Self {
        PhoneForward::default()
    }

    /// Register a forwarding rule from `prefix` to `replacement`.
    ///
    /// Any rule previously registered for exactly `prefix` is replaced;
    /// rules for longer or shorter prefixes are unaffected.
    ///
    /// # Errors
    ///
    /// - [`ForwardError::InvalidNumber`] when either argument is empty or
    ///   contains a byte outside the telephone alphabet.
    /// - [`ForwardError::SelfForward`] when `prefix == replacement`.
    ///
    /// Errors leave the table unmodified: validation runs before the walk
    /// touches any node, so a failed call never leaves a partially-built
    /// rule behind.
    pub fn add(&mut self, prefix: &str, replacement: &str) -> Result<()> {
        let path = decode_number(prefix).ok_or(ForwardError::InvalidNumber)?;
        if !is_valid_number(replacement) {
            return Err(ForwardError::InvalidNumber);
        }
        if prefix == replacement {
            return Err(ForwardError::SelfForward);
        }

        let mut node = &mut self.root;
        for &idx in &path {
            node = &mut **node.children[idx as usize].get_or_insert_with(Box::default);
        }
        node.forward = Some(replacement.to_string());
        Ok(())
    }

    /// Drop the rule registered for `prefix` along with every rule whose
    /// prefix extends it.
    ///
    /// Silently does nothing when `prefix` is ill-formed or no such path
    /// exists in the table.
    pub fn remove(&mut self, prefix: &str) {
        let Some(path) = decode_number(prefix) else {
            return;
        };
        let Some((&last, ancestors)) = path.split_last() else {
            return;
        };

        let mut node = &mut self.root;
        for &idx in ancestors {
            match node.children[idx as usize].as_deref_mut() {
                Some(child) => node = child,
                None => return,
            }
        }
        // Dropping the box releases the terminal node's target and every
        // nested subtree with it.
        node.children[last as usize] = None;
    }

    /// Resolve `number` through the longest matching forwarding rule.
    ///
    /// Returns a one-element list. The entry is the matched rule's
    /// replacement joined with the unmatched tail of `number`, or `number`
    /// unchanged when no registered prefix matches. An ill-formed `number`
    /// yields a single empty string, the "no answer" sentinel.
    pub fn get(&self, number: &str) -> PhoneNumbers {
        match decode_number(number) {
            Some(path) => PhoneNumbers::single(self.resolve(number, &path)),
            None => PhoneNumbers::single(String::new()),
        }
    }

    /// Longest-prefix forward resolution over a pre-decoded number.
    ///
    /// Walks the trie along `path`, remembering the deepest target seen
    /// and the depth it was found at; deeper matches overwrite shallower
    /// ones, so the final match is the longest registered prefix.
    pub(crate) fn resolve(&self, number: &str, path: &[u8]) -> String {
        let mut node = &self.root;
        let mut matched: Option<(&str, usize)> = None;

        if let Some(target) = node.forward.as_deref() {
            matched = Some((target, 0));
        }
        for (depth, &idx) in path.iter().enumerate() {
            match node.children[idx as usize].as_deref() {
                Some(child) => {
                    node = child;
                    if let Some(target) = node.forward.as_deref() {
                        matched = Some((target, depth + 1));
                    }
                }
                None => break,
            }
        }

        match matched {
            Some((target, depth)) => format!("{target}{}", &number[depth..]),
            None => number.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_resolves_identity() {
        let table = PhoneForward::new();
        assert_eq!(table.get("123").get(0), Some("123"));
    }

    #[test]
    fn test_add_and_get() {
        let mut table = PhoneForward::new();
        table.add("123", "9").expect("valid rule");
        assert_eq!(table.get("123456").get(0), Some("9456"));
        assert_eq!(table.get("123").get(0), Some("9"));
        // "12" does not reach the rule at depth 3.
        assert_eq!(table.get("12").get(0), Some("12"));
    }

    #[test]
    fn test_longest_prefix_wins() {
        let mut table = PhoneForward::new();
        table.add("1", "5").unwrap();
        table.add("12", "6").unwrap();
        table.add("123", "7").unwrap();
        assert_eq!(table.get("1234").get(0), Some("74"));
        assert_eq!(table.get("124").get(0), Some("64"));
        assert_eq!(table.get("14").get(0), Some("54"));
    }

    #[test]
    fn test_add_overwrites_existing_target() {
        let mut table = PhoneForward::new();
        table.add("12", "34").unwrap();
        table.add("12", "56").unwrap();
        assert_eq!(table.get("129").get(0), Some("569"));
    }

    #[test]
    fn test_add_rejects_invalid_arguments() {
        let mut table = PhoneForward::new();
        assert_eq!(table.add("", "1"), Err(ForwardError::InvalidNumber));
        assert_eq!(table.add("1", ""), Err(ForwardError::InvalidNumber));
        assert_eq!(table.add("1a", "2"), Err(ForwardError::InvalidNumber));
        assert_eq!(table.add("1", "2b"), Err(ForwardError::InvalidNumber));
        assert_eq!(table.add("123", "123"), Err(ForwardError::SelfForward));
        // None of the failed calls may have registered anything.
        assert_eq!(table.get("123").get(0), Some("123"));
    }

    #[test]
    fn test_remove_cascades_to_nested_rules() {
        let mut table = PhoneForward::new();
        table.add("11", "1").unwrap();
        table.add("111", "2").unwrap();
        table.remove("11");
        assert_eq!(table.get("11").get(0), Some("11"));
        assert_eq!(table.get("1111").get(0), Some("1111"));
    }

    #[test]
    fn test_remove_absent_or_invalid_is_noop() {
        let mut table = PhoneForward::new();
        table.add("12", "3").unwrap();
        table.remove("9");
        table.remove("");
        table.remove("1a");
        assert_eq!(table.get("12").get(0), Some("3"));
    }

    #[test]
    fn test_remove_keeps_shorter_rule() {
        let mut table = PhoneForward::new();
        table.add("1", "8").unwrap();
        table.add("12", "9").unwrap();
        table.remove("12");
        assert_eq!(table.get("123").get(0), Some("823"));
    }

    #[test]
    fn test_get_invalid_number_sentinel() {
        let table = PhoneForward::new();
        for query in ["", "abc", "12 3", "+481"] {
            let result = table.get(query);
            assert_eq!(result.len(), 1);
            assert_eq!(result.get(0), Some(""));
        }
    }

    #[test]
    fn test_star_and_hash_paths() {
        let mut table = PhoneForward::new();
        table.add("*#", "00").unwrap();
        assert_eq!(table.get("*#9").get(0), Some("009"));
        assert_eq!(table.get("*9").get(0), Some("*9"));
    }
}
