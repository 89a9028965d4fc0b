//! Stable binary min-heap priority queue.
//!
//! [`PriorityQueue`] keeps its elements in a growable vector read as a
//! complete binary tree and pairs every element with a strictly
//! increasing insertion number. Elements are ranked by the active
//! [`Comparator`](crate::order::Comparator) first and by insertion
//! number on exact ties, which makes the heap order total and strict:
//! equal-priority elements drain first-in-first-out, and dequeue order
//! is fully determined by the enqueue sequence.
//!
//! # Design
//!
//! The comparator is stored boxed and can be replaced on a live queue;
//! replacement re-establishes the heap property with a linear-time
//! bottom-up pass, since the old structure carries no guarantee under
//! the new ordering.
//!
//! # References
//!
//! Binary heaps: Cormen et al. (2009), "Introduction to Algorithms",
//! ch. 6.

mod heap;

pub use heap::PriorityQueue;
