//! Prefix sums of squares.

use tracing::debug;

/// `table[i] = 0² + 1² + ... + i²`, rebuilt for every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    values: Vec<i64>,
}

impl Table {
    /// Build a table with `len` entries.
    ///
    /// Entry 0 is 0 and each later entry adds `i * i` to its predecessor.
    pub fn build(len: usize) -> Self {
        let mut values = Vec::with_capacity(len);
        let mut total: i64 = 0;
        for i in 0..len as i64 {
            total += i * i;
            values.push(total);
        }
        debug!(len, "built prefix-square table");
        Table { values }
    }

    /// Bounds-checked lookup.
    pub fn get(&self, idx: usize) -> Option<i64> {
        self.values.get(idx).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All entries in index order.
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    /// Iterate over entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.iter().copied()
    }
}
