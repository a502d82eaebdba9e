//! Common trait and error type for the priority queues in this crate
//!
//! [`PriorityQueue`] is the operation surface shared by every branching factor
//! of [`DaryHeap`](crate::dary::DaryHeap). Tests and benchmarks are written
//! against the trait so the same checks run for the ternary heap and for the
//! binary/quaternary variants used as comparison points.
//!
//! Values are plain `f64`s ordered by their natural order. Only the two
//! operations that need a minimum can fail; they return
//! [`HeapError::EmptyQueue`] instead of a default value.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `find_min` or `delete_min` was called on a heap with no elements
    EmptyQueue,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyQueue => write!(f, "priority queue is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Min-priority queue over `f64` values
///
/// # Example
///
/// ```rust
/// use ternary_heap::{HeapError, PriorityQueue, TernaryHeap};
///
/// let mut heap = TernaryHeap::new();
/// assert_eq!(heap.find_min(), Err(HeapError::EmptyQueue));
///
/// heap.insert(3.0);
/// heap.insert(1.0);
/// heap.insert(2.0);
///
/// assert_eq!(heap.find_min(), Ok(1.0));
/// assert_eq!(heap.delete_min(), Ok(1.0));
/// assert_eq!(heap.len(), 2);
/// ```
pub trait PriorityQueue {
    /// Creates a new empty queue with the default initial capacity
    fn new() -> Self;

    /// Returns true if the queue holds no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns the minimum value without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyQueue`] if the queue is empty.
    ///
    /// # Time Complexity
    /// O(1)
    fn find_min(&self) -> Result<f64, HeapError>;

    /// Inserts a value
    ///
    /// # Time Complexity
    /// O(log n) amortized; a growth step copies the whole buffer.
    fn insert(&mut self, value: f64);

    /// Removes and returns the minimum value
    ///
    /// Repeated calls yield values in non-decreasing order.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyQueue`] if the queue is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    fn delete_min(&mut self) -> Result<f64, HeapError>;

    /// Replaces the contents of the queue with `values`
    ///
    /// # Time Complexity
    /// O(n) for n input values
    fn build_queue<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = f64>;

    /// Discards every element and releases the buffer back to its initial capacity
    fn make_empty(&mut self);
}
