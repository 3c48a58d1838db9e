use std::collections::{VecDeque, vec_deque};

use crate::config::DEFAULT_LOG_CAPACITY;

/// Fixed-capacity log that keeps only the most recent entries.
///
/// Inserting into a full buffer drops the oldest entries first, so the
/// buffer never holds more than `capacity` items and the retained items stay
/// in insertion order. There is no other way to remove entries.
#[derive(Debug, Clone)]
pub struct LogBuffer<T = String> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> LogBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn insert(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }

        if self.entries.len() >= self.capacity {
            let excess = self.entries.len() + 1 - self.capacity;
            self.entries.drain(..excess);
        }
        self.entries.push_back(item);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&T> {
        self.entries.back()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.entries.iter()
    }
}

impl<T: Clone> LogBuffer<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }
}

impl<T> Default for LogBuffer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}

impl<'a, T> IntoIterator for &'a LogBuffer<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
