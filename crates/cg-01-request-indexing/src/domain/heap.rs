//! Array-backed binary max-heap with an injected comparator.
//!
//! The comparator defines the whole order: the element that compares
//! `Greater` than every other is the one `try_pop` returns first. The
//! heap itself knows nothing about priorities or timestamps; see
//! [`super::value_objects::urgency_order`] for the order the store
//! injects.

use std::cmp::Ordering;
use std::fmt;

/// Max-heap over `T` under a caller-supplied total order.
pub struct MaxPriorityHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    items: Vec<T>,
    cmp: F,
}

impl<T, F> MaxPriorityHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty heap ordered by `cmp`.
    pub fn new(cmp: F) -> Self {
        Self {
            items: Vec::new(),
            cmp,
        }
    }

    /// Returns the number of stored elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Adds an element and restores the heap property by sifting it up
    /// while it outranks its parent.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the maximum element, or `None` when empty.
    ///
    /// The last element replaces the root and sifts down toward
    /// whichever child outranks it.
    pub fn try_pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let top = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        top
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if (self.cmp)(&self.items[i], &self.items[parent]) != Ordering::Greater {
                break;
            }
            self.items.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.items.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut max = i;
            if left < n && (self.cmp)(&self.items[left], &self.items[max]) == Ordering::Greater {
                max = left;
            }
            if right < n && (self.cmp)(&self.items[right], &self.items[max]) == Ordering::Greater {
                max = right;
            }
            if max == i {
                break;
            }
            self.items.swap(i, max);
            i = max;
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for MaxPriorityHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaxPriorityHeap")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}
