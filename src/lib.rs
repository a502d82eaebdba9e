//! Ternary Heap Priority Queue for Rust
//!
//! This crate provides an array-backed min-heap of `f64` values with
//! branching factor 3, plus the general d-ary form it is built from.
//!
//! # Features
//!
//! - **Ternary Heap**: O(log n) insert and delete-min; O(1) find-min
//! - **Linear-time build**: `build_queue` loads arbitrary input with Floyd's method in O(n)
//! - **Explicit emptiness errors**: `find_min`/`delete_min` return [`HeapError::EmptyQueue`]
//!   instead of a default value
//! - **Doubling buffer**: capacity starts small, doubles on overflow and resets with `make_empty`
//! - **Any branching factor**: [`DaryHeap<D>`] shares the same code for binary, quaternary, ... heaps
//!
//! # Example
//!
//! ```rust
//! use ternary_heap::{PriorityQueue, TernaryHeap};
//!
//! let mut heap = TernaryHeap::new();
//! for value in [5.0, 1.0, 9.0, 3.0, 7.0, 2.0] {
//!     heap.insert(value);
//! }
//!
//! let mut sorted = Vec::new();
//! while let Ok(min) = heap.delete_min() {
//!     sorted.push(min);
//! }
//! assert_eq!(sorted, vec![1.0, 2.0, 3.0, 5.0, 7.0, 9.0]);
//! assert!(heap.is_empty());
//! ```

pub mod dary;
pub mod index;
pub mod traits;

// Re-export the main types for convenience
pub use dary::{DaryHeap, DrainSorted, TernaryHeap, DEFAULT_CAPACITY};
pub use traits::{HeapError, PriorityQueue};
