//! Owned, ordered sequences of phone numbers returned by queries.

/// An ordered list of phone numbers produced by a query.
///
/// The list owns its strings and shares no memory with the table that
/// produced it, so it remains valid across later mutations of the table.
/// Callers read it through [`len`](PhoneNumbers::len) and
/// [`get`](PhoneNumbers::get); dropping the list releases every entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhoneNumbers {
    numbers: Vec<String>,
}

impl PhoneNumbers {
    /// Wrap an already-ordered list of numbers.
    pub(crate) fn from_vec(numbers: Vec<String>) -> Self {
        PhoneNumbers { numbers }
    }

    /// Build a one-element list.
    pub(crate) fn single(number: String) -> Self {
        PhoneNumbers {
            numbers: vec![number],
        }
    }

    /// Number of entries in the list.
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Check whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Get the number at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.numbers.get(index).map(String::as_str)
    }

    /// Iterate over the numbers in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.numbers.iter().map(String::as_str)
    }
}
