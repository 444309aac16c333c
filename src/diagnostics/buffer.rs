// SPDX-License-Identifier: MPL-2.0
//! Memory-bounded ring buffer for diagnostics events.
//!
//! The oldest entry is evicted once capacity is reached, so a long session
//! never grows the event log past its configured size.

use std::collections::VecDeque;

pub use crate::domain::ui::BufferCapacity;

/// A generic circular buffer with fixed capacity.
///
/// Elements are stored in chronological order (oldest first).
///
/// # Example
///
/// ```
/// use curtain_picker::diagnostics::{BufferCapacity, CircularBuffer};
///
/// let mut buffer: CircularBuffer<&str> = CircularBuffer::new(BufferCapacity::default());
/// buffer.push("began");
/// buffer.push("ended");
/// assert_eq!(buffer.len(), 2);
/// assert_eq!(buffer.latest(), Some(&"ended"));
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Creates a buffer with an unvalidated capacity (at least one slot).
    ///
    /// Meant for tests that need tiny buffers.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an element, evicting the oldest when full.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Most recently pushed element.
    #[must_use]
    pub fn latest(&self) -> Option<&T> {
        self.data.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_chronological_order() {
        let mut buffer = CircularBuffer::with_raw_capacity(4);
        for value in [10, 20, 30] {
            buffer.push(value);
        }
        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![10, 20, 30]);
        assert_eq!(buffer.latest(), Some(&30));
    }

    #[test]
    fn overflow_evicts_oldest() {
        let mut buffer = CircularBuffer::with_raw_capacity(3);
        for value in 1..=5 {
            buffer.push(value);
        }
        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![3, 4, 5]);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn zero_raw_capacity_keeps_one_slot() {
        let mut buffer = CircularBuffer::with_raw_capacity(0);
        assert_eq!(buffer.capacity(), 1);
        buffer.push('a');
        buffer.push('b');
        assert_eq!(buffer.latest(), Some(&'b'));
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn validated_capacity_is_respected() {
        let buffer: CircularBuffer<u8> = CircularBuffer::new(BufferCapacity::new(250));
        assert_eq!(buffer.capacity(), 250);
        assert!(buffer.is_empty());
    }

    #[test]
    fn clear_empties_buffer() {
        let mut buffer = CircularBuffer::with_raw_capacity(2);
        buffer.push(1);
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.latest(), None);
    }
}
