//! Binary min-heap with insertion-order tie-breaking.

use std::cmp::Ordering;
use std::fmt;

use serde_json::Value;

use crate::order::{Comparator, DefaultComparator, OrderError};

/// A stored value paired with its insertion sequence number.
struct Entry<T> {
    value: T,
    seq: u64,
}

/// Orders two entries: comparator result first, insertion order on
/// exact ties. Distinct entries never compare equal.
fn order<T>(
    cmp: &dyn Comparator<T>,
    a: &Entry<T>,
    b: &Entry<T>,
) -> Result<Ordering, OrderError> {
    Ok(cmp.compare(&a.value, &b.value)?.then(a.seq.cmp(&b.seq)))
}

/// Moves the entry at `idx` toward the root while it orders strictly
/// before its parent.
fn sift_up<T>(
    entries: &mut [Entry<T>],
    cmp: &dyn Comparator<T>,
    mut idx: usize,
) -> Result<(), OrderError> {
    while idx > 0 {
        let parent = (idx - 1) / 2;
        if order(cmp, &entries[idx], &entries[parent])? == Ordering::Less {
            entries.swap(idx, parent);
            idx = parent;
        } else {
            break;
        }
    }
    Ok(())
}

/// Moves the entry at `idx` toward the leaves, descending into the
/// smaller-ordered child while that child orders strictly before it.
fn sift_down<T>(
    entries: &mut [Entry<T>],
    cmp: &dyn Comparator<T>,
    mut idx: usize,
) -> Result<(), OrderError> {
    loop {
        let left = 2 * idx + 1;
        let right = left + 1;
        if left >= entries.len() {
            return Ok(());
        }
        let mut child = left;
        if right < entries.len() && order(cmp, &entries[right], &entries[left])? == Ordering::Less {
            child = right;
        }
        if order(cmp, &entries[child], &entries[idx])? == Ordering::Less {
            entries.swap(idx, child);
            idx = child;
        } else {
            return Ok(());
        }
    }
}

/// Restores the heap property over arbitrary contents: sift-down from
/// the last internal node to the root, in reverse level order.
fn heapify<T>(entries: &mut [Entry<T>], cmp: &dyn Comparator<T>) -> Result<(), OrderError> {
    if entries.len() <= 1 {
        return Ok(());
    }
    let last_parent = (entries.len() - 2) / 2;
    for idx in (0..=last_parent).rev() {
        sift_down(entries, cmp, idx)?;
    }
    Ok(())
}

/// Repeatedly extracts the minimum until the entries are exhausted.
fn drain_sorted<T>(
    mut entries: Vec<Entry<T>>,
    cmp: &dyn Comparator<T>,
) -> Result<Vec<T>, OrderError> {
    let mut sorted = Vec::with_capacity(entries.len());
    while !entries.is_empty() {
        let root = entries.swap_remove(0);
        if !entries.is_empty() {
            sift_down(&mut entries, cmp, 0)?;
        }
        sorted.push(root.value);
    }
    Ok(sorted)
}

/// A min-heap priority queue with deterministic FIFO tie-breaking.
///
/// Elements are ranked by the active comparator; elements the
/// comparator cannot distinguish drain in insertion order. The
/// comparator can be replaced on a live queue with
/// [`set_comparator`](Self::set_comparator).
///
/// Comparisons are fallible at the seam (the built-in ordering for
/// dynamic values rejects unsupported categories), so every operation
/// that may invoke the comparator returns a `Result`. Plain closures
/// never fail; with them the `Result` is always `Ok`.
///
/// # Examples
///
/// ```
/// use stableheap::queue::PriorityQueue;
///
/// let mut queue = PriorityQueue::with_comparator(|a: &u32, b: &u32| a.cmp(b));
/// queue.enqueue(3)?;
/// queue.enqueue(1)?;
/// queue.enqueue(2)?;
///
/// assert_eq!(queue.dequeue()?, Some(1));
/// assert_eq!(queue.peek(), Some(&2));
/// assert_eq!(queue.len(), 2);
/// # Ok::<(), stableheap::order::OrderError>(())
/// ```
pub struct PriorityQueue<T> {
    entries: Vec<Entry<T>>,
    comparator: Box<dyn Comparator<T>>,
    next_seq: u64,
}

impl<T> PriorityQueue<T> {
    /// Creates an empty queue ordered by `comparator`.
    pub fn with_comparator<C>(comparator: C) -> Self
    where
        C: Comparator<T> + 'static,
    {
        Self {
            entries: Vec::new(),
            comparator: Box::new(comparator),
            next_seq: 0,
        }
    }

    /// Creates a queue seeded from `initial`, enqueued in iteration
    /// order so the elements receive increasing insertion numbers.
    pub fn from_iter_with<I, C>(initial: I, comparator: C) -> Result<Self, OrderError>
    where
        I: IntoIterator<Item = T>,
        C: Comparator<T> + 'static,
    {
        let mut queue = Self::with_comparator(comparator);
        for value in initial {
            queue.enqueue(value)?;
        }
        Ok(queue)
    }

    /// Returns the number of stored elements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the minimal element without removing it, or `None` when
    /// the queue is empty.
    pub fn peek(&self) -> Option<&T> {
        self.entries.first().map(|entry| &entry.value)
    }

    /// Iterates over the elements in internal heap order (not sorted).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|entry| &entry.value)
    }

    /// Inserts `value`, assigning it the next insertion number.
    ///
    /// The value itself is never rejected; the only failure mode is a
    /// comparator error while restoring the heap property, in which
    /// case the value stays stored but may sit out of heap order.
    pub fn enqueue(&mut self, value: T) -> Result<(), OrderError> {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { value, seq });
        let last = self.entries.len() - 1;
        sift_up(&mut self.entries, self.comparator.as_ref(), last)
    }

    /// Removes and returns the minimal element, or `Ok(None)` when the
    /// queue is empty.
    pub fn dequeue(&mut self) -> Result<Option<T>, OrderError> {
        if self.entries.is_empty() {
            return Ok(None);
        }
        let root = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            sift_down(&mut self.entries, self.comparator.as_ref(), 0)?;
        }
        Ok(Some(root.value))
    }

    /// Removes every element and resets the insertion counter, starting
    /// a fresh tie-breaking domain.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_seq = 0;
    }

    /// Replaces the ordering wholesale and restores the heap property
    /// under it.
    ///
    /// A comparator change invalidates the previous structure globally,
    /// so this runs the linear-time bottom-up heapify pass rather than
    /// any local repair. The new comparator stays installed even when
    /// the pass fails.
    pub fn set_comparator<C>(&mut self, comparator: C) -> Result<(), OrderError>
    where
        C: Comparator<T> + 'static,
    {
        self.comparator = Box::new(comparator);
        heapify(&mut self.entries, self.comparator.as_ref())
    }

    /// Copies the elements in internal heap order.
    ///
    /// The returned vector is independent of the queue; mutating it
    /// cannot disturb the heap.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.entries.iter().map(|entry| entry.value.clone()).collect()
    }

    /// Copies the elements in ascending order without mutating the
    /// queue.
    ///
    /// The copy keeps each element's original insertion number, so ties
    /// resolve exactly as draining the queue itself would.
    pub fn to_sorted_vec(&self) -> Result<Vec<T>, OrderError>
    where
        T: Clone,
    {
        let mut scratch: Vec<Entry<T>> = self
            .entries
            .iter()
            .map(|entry| Entry {
                value: entry.value.clone(),
                seq: entry.seq,
            })
            .collect();
        heapify(&mut scratch, self.comparator.as_ref())?;
        drain_sorted(scratch, self.comparator.as_ref())
    }

    /// Consumes the queue, returning the elements in ascending order.
    pub fn into_sorted_vec(self) -> Result<Vec<T>, OrderError> {
        let Self {
            mut entries,
            comparator,
            ..
        } = self;
        heapify(&mut entries, comparator.as_ref())?;
        drain_sorted(entries, comparator.as_ref())
    }
}

impl PriorityQueue<Value> {
    /// Creates an empty queue over dynamic values with the built-in
    /// ordering: numbers by magnitude, text by collation, anything
    /// else an error at first comparison.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use stableheap::queue::PriorityQueue;
    ///
    /// let mut queue = PriorityQueue::new();
    /// queue.enqueue(json!(10))?;
    /// queue.enqueue(json!(2))?;
    ///
    /// assert_eq!(queue.dequeue()?, Some(json!(2)));
    /// # Ok::<(), stableheap::order::OrderError>(())
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(DefaultComparator::new())
    }

    /// Creates a queue over dynamic values seeded from `initial`, with
    /// the built-in ordering.
    pub fn from_values<I>(initial: I) -> Result<Self, OrderError>
    where
        I: IntoIterator<Item = Value>,
    {
        Self::from_iter_with(initial, DefaultComparator::new())
    }
}

impl Default for PriorityQueue<Value> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
