/*!
 * Ordered Queue
 * Comparator-ordered, position-addressable container used as the ready queue
 */

mod ordering;

pub use ordering::{Comparator, Identity};

use crate::core::errors::QueueError;
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

/// Comparator-ordered queue with positional access
///
/// Entries are kept sorted by the comparator at all times. An offered item is
/// placed in front of the first entry it does not compare `Greater` to, so
/// among equal keys the most recently offered item ends up nearest the front.
pub struct OrderedQueue<T, C> {
    entries: VecDeque<T>,
    comparator: C,
}

impl<T, C> OrderedQueue<T, C>
where
    C: Comparator<T>,
{
    /// Create an empty queue ordered by `comparator`
    pub fn new(comparator: C) -> Self {
        Self {
            entries: VecDeque::new(),
            comparator,
        }
    }

    /// Insert `item` in comparator order, returning its zero-based index
    ///
    /// O(n) scan from the front.
    pub fn offer(&mut self, item: T) -> Result<usize, QueueError> {
        self.entries
            .try_reserve(1)
            .map_err(|_| QueueError::CapacityExhausted {
                len: self.entries.len(),
            })?;

        let index = self
            .entries
            .iter()
            .position(|existing| self.comparator.compare(&item, existing) != Ordering::Greater)
            .unwrap_or(self.entries.len());

        self.entries.insert(index, item);
        Ok(index)
    }

    /// Front entry without removing it
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.entries.front()
    }

    /// Remove and return the front entry
    #[inline]
    pub fn poll(&mut self) -> Option<T> {
        self.entries.pop_front()
    }

    /// Entry at `index`, `None` when out of range
    #[inline]
    pub fn at(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    /// Remove every entry matching `predicate`, returning how many were removed
    pub fn remove_if<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|entry| !predicate(entry));
        before - self.entries.len()
    }

    /// Remove the entry at `index`, shifting later entries forward
    #[inline]
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        self.entries.remove(index)
    }

    /// Number of live entries
    #[inline]
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries front to back
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    /// Release every entry and the backing storage
    ///
    /// The queue is afterwards indistinguishable from a freshly created one.
    pub fn destroy(&mut self) {
        self.entries = VecDeque::new();
    }
}

impl<T, C> OrderedQueue<T, C>
where
    T: Identity,
    C: Comparator<T>,
{
    /// Remove every entry that is the very same object as `value`
    ///
    /// Identity is used, never the comparator: entries with an equal ordering
    /// key but a different identity stay in place.
    pub fn remove(&mut self, value: &T) -> usize {
        self.remove_if(|entry| entry.is_same(value))
    }
}

impl<T: fmt::Debug, C> fmt::Debug for OrderedQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}
