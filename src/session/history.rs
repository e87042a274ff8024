//! Bounded undo history.
//!
//! A sliding window over the most recent `GameState` snapshots. Pushing past
//! capacity silently drops the oldest snapshot. Snapshots are cheap: piles
//! are persistent vectors, so a snapshot shares structure with the state it
//! was taken from.

use std::collections::VecDeque;

use crate::core::GameState;

/// Fixed-capacity snapshot stack.
#[derive(Clone, Debug)]
pub struct History {
    snapshots: VecDeque<GameState>,
    capacity: usize,
}

impl History {
    /// Create an empty history holding at most `capacity` snapshots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a snapshot, trimming the oldest past capacity.
    pub fn push(&mut self, snapshot: GameState) {
        if self.capacity == 0 {
            return;
        }
        self.snapshots.push_back(snapshot);
        while self.snapshots.len() > self.capacity {
            self.snapshots.pop_front();
        }
    }

    /// Take the most recent snapshot.
    pub fn pop(&mut self) -> Option<GameState> {
        self.snapshots.pop_back()
    }

    /// Drop every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_move(n: u32) -> GameState {
        GameState {
            move_count: n,
            ..GameState::empty()
        }
    }

    #[test]
    fn test_push_pop_lifo() {
        let mut history = History::new(5);
        history.push(at_move(1));
        history.push(at_move(2));

        assert_eq!(history.len(), 2);
        assert_eq!(history.pop().map(|s| s.move_count), Some(2));
        assert_eq!(history.pop().map(|s| s.move_count), Some(1));
        assert!(history.pop().is_none());
        assert!(history.is_empty());
    }

    #[test]
    fn test_oldest_dropped_past_capacity() {
        let mut history = History::new(3);
        for n in 0..10 {
            history.push(at_move(n));
        }

        assert_eq!(history.len(), 3);
        let popped: Vec<u32> = std::iter::from_fn(|| history.pop()).map(|s| s.move_count).collect();
        assert_eq!(popped, vec![9, 8, 7]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut history = History::new(0);
        history.push(at_move(1));
        assert!(history.is_empty());
        assert_eq!(history.capacity(), 0);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new(4);
        history.push(at_move(1));
        history.push(at_move(2));
        history.clear();
        assert!(history.is_empty());
    }
}
