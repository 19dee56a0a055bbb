//! Reverse lookup: enumerating numbers that could forward to a query.
//!
//! The candidate pass visits every node in the trie, not just the query's
//! own path: any rule anywhere whose target is a literal prefix of the
//! query can synthesize a candidate. The consistency pass then re-runs
//! forward resolution on each candidate, discarding those a longer nested
//! rule would redirect elsewhere.

use smallvec::SmallVec;

use crate::alphabet::{compare_numbers, decode_number, index_symbol, is_valid_number};
use crate::numbers::PhoneNumbers;
use crate::trie::{Node, PhoneForward};

/// Scratch buffer for the DFS path; deep enough that realistic rule sets
/// never spill to the heap.
type SymbolPath = SmallVec<[u8; 32]>;

impl PhoneForward {
    /// List every number that some registered rule could map to `number`,
    /// plus `number` itself (the no-rule-applied case).
    ///
    /// The result is sorted in alphabet order (digits before `*` before
    /// `#`, shorter before longer on prefix ties) with duplicates
    /// collapsed. It is a superset of the true preimage: a candidate may
    /// carry a longer nested rule that actually redirects it elsewhere.
    /// Use [`get_reverse`](PhoneForward::get_reverse) for the filtered
    /// set. An ill-formed `number` yields a single empty string.
    pub fn reverse(&self, number: &str) -> PhoneNumbers {
        match self.reverse_candidates(number) {
            Some(candidates) => PhoneNumbers::from_vec(candidates),
            None => PhoneNumbers::single(String::new()),
        }
    }

    /// List exactly the numbers whose forward resolution is `number`.
    ///
    /// Filters the [`reverse`](PhoneForward::reverse) candidates, keeping
    /// a candidate only when [`get`](PhoneForward::get) maps it back to
    /// `number`. The result may be empty: when some rule rewrites
    /// `number` itself, even the identity candidate is discarded. An
    /// ill-formed `number` yields a single empty string.
    pub fn get_reverse(&self, number: &str) -> PhoneNumbers {
        let Some(candidates) = self.reverse_candidates(number) else {
            return PhoneNumbers::single(String::new());
        };

        let confirmed = candidates
            .into_iter()
            .filter(|candidate| {
                decode_number(candidate)
                    .is_some_and(|path| self.resolve(candidate, &path) == number)
            })
            .collect();
        PhoneNumbers::from_vec(confirmed)
    }

    /// Sorted, deduplicated reverse candidates, or `None` when `number`
    /// is ill-formed.
    fn reverse_candidates(&self, number: &str) -> Option<Vec<String>> {
        if !is_valid_number(number) {
            return None;
        }

        let mut candidates = Vec::new();
        let mut path = SymbolPath::new();
        collect_candidates(&self.root, number, &mut path, &mut candidates);
        candidates.push(number.to_string());

        candidates.sort_by(|a, b| compare_numbers(a, b));
        candidates.dedup();
        Some(candidates)
    }
}

/// Depth-first sweep over the whole trie.
///
/// `path` holds the symbol indices spelling the current node's prefix.
/// Each child index is pushed before descent and popped right after, so
/// no byte of a sibling's path ever leaks into another subtree's
/// candidates.
fn collect_candidates(node: &Node, number: &str, path: &mut SymbolPath, out: &mut Vec<String>) {
    if let Some(target) = node.forward.as_deref() {
        if let Some(suffix) = number.strip_prefix(target) {
            // Forwarding the current prefix through this rule produces
            // the start of `number`; the rest of `number` is carried over
            // verbatim.
            let mut candidate = String::with_capacity(path.len() + suffix.len());
            candidate.extend(path.iter().map(|&idx| index_symbol(idx) as char));
            candidate.push_str(suffix);
            out.push(candidate);
        }
    }

    for (idx, child) in node.children.iter().enumerate() {
        if let Some(child) = child.as_deref() {
            path.push(idx as u8);
            collect_candidates(child, number, path, out);
            path.pop();
        }
    }
}
