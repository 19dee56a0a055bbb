//! Symbol codec and validation for the telephone alphabet.
//!
//! Numbers are non-empty strings over twelve symbols: the digits `0`-`9`
//! plus `*` and `#`. Each symbol maps to an index in `[0, 12)`; every
//! comparison between numbers uses this index order, so `*` sorts after
//! `9` and `#` sorts last. This differs from byte order, where `*` and
//! `#` would sort before the digits.

use std::cmp::Ordering;

/// Number of distinct symbols in the telephone alphabet.
pub const ALPHABET_LEN: usize = 12;

/// Map a symbol to its alphabet index.
///
/// Digits map to their value, `*` to 10 and `#` to 11. Returns `None`
/// for any byte outside the alphabet.
#[inline]
pub fn symbol_index(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'*' => Some(10),
        b'#' => Some(11),
        _ => None,
    }
}

/// Map an alphabet index back to its symbol.
///
/// Inverse of [`symbol_index`].
///
/// # Panics
///
/// Panics if `index >= ALPHABET_LEN`.
#[inline]
pub fn index_symbol(index: u8) -> u8 {
    match index {
        0..=9 => b'0' + index,
        10 => b'*',
        11 => b'#',
        _ => panic!("alphabet index out of range: {index}"),
    }
}

/// Check that a string is a well-formed number: non-empty and composed
/// solely of alphabet symbols.
pub fn is_valid_number(number: &str) -> bool {
    !number.is_empty() && number.bytes().all(|b| symbol_index(b).is_some())
}

/// Decode a number into its sequence of alphabet indices.
///
/// Returns `None` when the string is empty or contains a byte outside
/// the alphabet, so this doubles as the number validator.
pub fn decode_number(number: &str) -> Option<Vec<u8>> {
    if number.is_empty() {
        return None;
    }
    number.bytes().map(symbol_index).collect()
}

/// Compare two numbers in alphabet order.
///
/// Symbols compare by alphabet index rather than byte value, and when one
/// number is a prefix of the other the shorter one sorts first. Intended
/// for well-formed numbers; bytes outside the alphabet compare greater
/// than every symbol.
pub fn compare_numbers(a: &str, b: &str) -> Ordering {
    let key = |byte: u8| symbol_index(byte).unwrap_or(ALPHABET_LEN as u8);
    a.bytes().map(key).cmp(b.bytes().map(key))
}
