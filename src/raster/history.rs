//! History buffer implementation
//!
//! The history stores the generations currently shown on the surface, oldest
//! first. It's implemented as a ring buffer: once full, each push overwrites
//! the oldest generation and hands it back to the caller.

use crate::core::Generation;

/// Ring buffer of past generations
#[derive(Debug, Clone)]
pub struct History {
    /// Storage slots, at most `capacity` long
    rows: Vec<Generation>,
    /// Index of the oldest row (head of ring buffer)
    head: usize,
    /// Maximum number of rows to store
    capacity: usize,
}

impl History {
    /// Create a new history with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity.min(1024)),
            head: 0,
            capacity,
        }
    }

    /// Get the number of stored rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.rows.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a generation, returning the evicted oldest one if the buffer
    /// was already full
    ///
    /// A zero-capacity history stores nothing and evicts nothing.
    pub fn push(&mut self, row: Generation) -> Option<Generation> {
        if self.capacity == 0 {
            return None;
        }

        if self.rows.len() < self.capacity {
            self.rows.push(row);
            None
        } else {
            let evicted = std::mem::replace(&mut self.rows[self.head], row);
            self.head = (self.head + 1) % self.capacity;
            Some(evicted)
        }
    }

    /// Get a row by index (0 = oldest)
    pub fn get(&self, index: usize) -> Option<&Generation> {
        if index >= self.rows.len() {
            return None;
        }
        self.rows.get((self.head + index) % self.rows.len())
    }

    /// Most recently pushed row
    pub fn newest(&self) -> Option<&Generation> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Remove every row
    pub fn clear(&mut self) {
        self.rows.clear();
        self.head = 0;
    }

    /// Iterate over rows from oldest to newest
    pub fn iter(&self) -> HistoryIter<'_> {
        HistoryIter {
            history: self,
            index: 0,
        }
    }

    /// Set a new capacity, dropping the oldest rows if shrinking
    pub fn set_capacity(&mut self, new_capacity: usize) {
        if new_capacity == self.capacity {
            return;
        }

        // Unroll the ring so slot order matches age order again
        let keep = self.len().min(new_capacity);
        let skip = self.len() - keep;
        let rows: Vec<Generation> = self.iter().skip(skip).cloned().collect();
        self.rows = rows;
        self.head = 0;
        self.capacity = new_capacity;
    }
}

/// Iterator over history rows
pub struct HistoryIter<'a> {
    history: &'a History,
    index: usize,
}

impl<'a> Iterator for HistoryIter<'a> {
    type Item = &'a Generation;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.history.get(self.index)?;
        self.index += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.history.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for HistoryIter<'a> {}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Generation;
    type IntoIter = HistoryIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Width-8 generation whose bits spell `n`
    fn row(n: u8) -> Generation {
        format!("{:08b}", n).parse().unwrap()
    }

    fn numbers(history: &History) -> Vec<u8> {
        history
            .iter()
            .map(|g| u8::from_str_radix(&g.to_string(), 2).unwrap())
            .collect()
    }

    #[test]
    fn test_history_push_and_get() {
        let mut history = History::new(5);
        assert!(history.is_empty());

        for i in 0..3 {
            assert!(history.push(row(i)).is_none());
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.get(0), Some(&row(0)));
        assert_eq!(history.get(2), Some(&row(2)));
        assert_eq!(history.get(3), None);
        assert_eq!(history.newest(), Some(&row(2)));
    }

    #[test]
    fn test_history_ring_buffer() {
        let mut history = History::new(3);

        let evicted: Vec<Option<Generation>> = (0..5).map(|i| history.push(row(i))).collect();

        assert_eq!(evicted[..3], [None, None, None]);
        assert_eq!(evicted[3], Some(row(0)));
        assert_eq!(evicted[4], Some(row(1)));
        assert_eq!(history.len(), 3);
        assert_eq!(numbers(&history), vec![2, 3, 4]);
    }

    #[test]
    fn test_history_zero_capacity() {
        let mut history = History::new(0);
        assert!(history.push(row(1)).is_none());
        assert!(history.is_empty());
        assert!(history.is_full());
    }

    #[test]
    fn test_history_clear() {
        let mut history = History::new(2);
        for i in 0..3 {
            history.push(row(i));
        }
        history.clear();
        assert!(history.is_empty());
        history.push(row(9));
        assert_eq!(numbers(&history), vec![9]);
    }

    #[test]
    fn test_history_shrink_keeps_newest() {
        let mut history = History::new(4);
        for i in 0..6 {
            history.push(row(i));
        }
        history.set_capacity(2);
        assert_eq!(numbers(&history), vec![4, 5]);
        assert_eq!(history.push(row(6)), Some(row(4)));
        assert_eq!(numbers(&history), vec![5, 6]);
    }

    #[test]
    fn test_history_grow_after_wrap() {
        let mut history = History::new(3);
        for i in 0..4 {
            history.push(row(i));
        }
        history.set_capacity(5);
        assert_eq!(numbers(&history), vec![1, 2, 3]);
        assert!(history.push(row(4)).is_none());
        assert!(history.push(row(5)).is_none());
        assert_eq!(history.push(row(6)), Some(row(1)));
        assert_eq!(numbers(&history), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_history_set_same_capacity_is_noop() {
        let mut history = History::new(3);
        for i in 0..4 {
            history.push(row(i));
        }
        history.set_capacity(3);
        assert_eq!(numbers(&history), vec![1, 2, 3]);
    }

    #[test]
    fn test_history_stays_consistent_across_resizes() {
        let mut history = History::new(3);
        let mut pushed = 0u8;
        for capacity in [3, 1, 4, 0, 2, 5, 2] {
            history.set_capacity(capacity);
            for _ in 0..7 {
                history.push(row(pushed));
                pushed += 1;
                assert!(history.len() <= capacity);
                if capacity > 0 {
                    assert_eq!(history.newest(), Some(&row(pushed - 1)));
                    assert_eq!(history.iter().count(), history.len());
                } else {
                    assert!(history.is_empty());
                }
            }
        }
    }
}
