//! Core trait for orderings.

use std::cmp::Ordering;

use thiserror::Error;

use super::default::ValueKind;

/// A total preorder over the element type `T`.
///
/// Returns [`Ordering::Less`] when `a` should be dequeued before `b`,
/// [`Ordering::Greater`] for the reverse, and [`Ordering::Equal`] when
/// the comparator cannot distinguish them. Equal elements drain in
/// insertion order, so comparators never need their own tie-breaking.
///
/// Any `Fn(&T, &T) -> Ordering` closure or function is a comparator.
/// Implement the trait directly only when comparison itself can fail,
/// as [`DefaultComparator`](super::DefaultComparator) does for
/// unsupported value categories.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use stableheap::order::{Comparator, OrderError};
///
/// struct ByLength;
///
/// impl Comparator<String> for ByLength {
///     fn compare(&self, a: &String, b: &String) -> Result<Ordering, OrderError> {
///         Ok(a.len().cmp(&b.len()))
///     }
/// }
/// ```
pub trait Comparator<T> {
    /// Orders `a` relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Result<Ordering, OrderError>;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Result<Ordering, OrderError> {
        Ok(self(a, b))
    }
}

/// Two values could not be ordered.
///
/// Raised only by a comparator invocation, never eagerly: enqueueing an
/// unsupported value succeeds by itself, and the error surfaces from
/// whichever queue operation first compares the offending pair. After a
/// failed comparison the queue's storage is still structurally
/// consistent, but its heap order may be degraded until the elements
/// are cleared or a working comparator is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{left} and {right} values have no built-in ordering; construct the queue with an explicit comparator")]
pub struct OrderError {
    /// Category of the left-hand value.
    pub left: ValueKind,
    /// Category of the right-hand value.
    pub right: ValueKind,
}
