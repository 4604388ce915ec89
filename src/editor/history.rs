//! Bounded undo/redo stacks of whole-state snapshots

use std::collections::VecDeque;

/// Default number of undo steps kept.
pub const DEFAULT_CAPACITY: usize = 50;

/// Snapshot history with a fixed capacity; the oldest entries are dropped.
#[derive(Debug, Clone)]
pub struct History<T> {
    past: VecDeque<T>,
    future: VecDeque<T>,
    capacity: usize,
}

impl<T: Clone> History<T> {
    /// Create an empty history. A capacity of 0 is raised to 1.
    pub fn new(capacity: usize) -> Self {
        Self {
            past: VecDeque::new(),
            future: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.past.len()
    }

    pub fn redo_len(&self) -> usize {
        self.future.len()
    }

    /// Record the state before an edit. Clears the redo stack.
    pub fn record(&mut self, snapshot: T) {
        self.past.push_back(snapshot);
        while self.past.len() > self.capacity {
            self.past.pop_front();
        }
        self.future.clear();
    }

    /// Step back: returns the previous snapshot and keeps `current` for redo.
    pub fn undo(&mut self, current: &T) -> Option<T> {
        let previous = self.past.pop_back()?;
        self.future.push_front(current.clone());
        self.future.truncate(self.capacity);
        Some(previous)
    }

    /// Step forward: returns the next snapshot and keeps `current` for undo.
    pub fn redo(&mut self, current: &T) -> Option<T> {
        let next = self.future.pop_front()?;
        self.past.push_back(current.clone());
        while self.past.len() > self.capacity {
            self.past.pop_front();
        }
        Some(next)
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

impl<T: Clone> Default for History<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_redo() {
        let mut history = History::new(10);
        history.record(1);
        history.record(2);

        assert_eq!(history.undo(&3), Some(2));
        assert_eq!(history.undo(&2), Some(1));
        assert_eq!(history.undo(&1), None);

        assert_eq!(history.redo(&1), Some(2));
        assert_eq!(history.redo(&2), Some(3));
        assert_eq!(history.redo(&3), None);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut history = History::new(3);
        for i in 0..10 {
            history.record(i);
        }
        assert_eq!(history.undo_len(), 3);

        let mut current = 10;
        let mut seen = Vec::new();
        while let Some(prev) = history.undo(&current) {
            seen.push(prev);
            current = prev;
        }
        assert_eq!(seen, vec![9, 8, 7]);
        assert!(!history.can_undo());
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::new(5);
        history.record(1);
        history.undo(&2);
        assert!(history.can_redo());
        history.record(5);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let history: History<u8> = History::new(0);
        assert_eq!(history.capacity(), 1);
    }
}
