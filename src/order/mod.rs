//! Replaceable ordering framework.
//!
//! Defines how queue elements are ranked:
//!
//! - **[`Comparator`]**: the single-method capability a queue consults
//!   for every comparison. Any `Fn(&T, &T) -> Ordering` closure is a
//!   comparator; implementing the trait directly is only needed when
//!   comparison itself can fail.
//! - **[`DefaultComparator`]**: the ordering installed when a queue is
//!   built without one. Handles numbers and text; any other pairing is
//!   an [`OrderError`] at comparison time.
//!
//! # Design
//!
//! Comparators define a total preorder: exact ties are allowed and are
//! resolved by the queue itself using insertion order. A comparator
//! therefore never needs to encode its own tie-breaking.

mod default;
mod types;

pub use default::{DefaultComparator, ValueKind};
pub use types::{Comparator, OrderError};
