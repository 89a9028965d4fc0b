//! Stable priority queue with a replaceable ordering.
//!
//! Provides a single data structure, [`queue::PriorityQueue`]: a binary
//! min-heap with deterministic tie-breaking.
//!
//! - **Stability**: every insertion receives a strictly increasing
//!   sequence number. Values the comparator cannot distinguish drain in
//!   insertion order, so dequeue order is deterministic and
//!   reproducible for a fixed sequence of enqueues.
//! - **Replaceable ordering**: the comparator is chosen at construction
//!   and can be swapped on a live queue, which re-heapifies the stored
//!   elements in linear time.
//! - **Built-in dynamic ordering**: queues over [`serde_json::Value`]
//!   built without an explicit comparator order numbers by magnitude
//!   and text by ICU collation, and fail lazily at the first comparison
//!   of any other value category.
//! - **Non-destructive snapshots**: heap-order and sorted copies that
//!   leave the queue untouched.
//!
//! # Thread safety
//!
//! The queue owns no synchronization primitives. All operations run
//! synchronously on the calling thread; unsynchronized concurrent
//! mutation is not supported. Callers that share a queue across
//! threads should wrap it in a `Mutex` or `RwLock` of their own.

pub mod order;
pub mod queue;
