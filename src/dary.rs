//! Array-backed d-ary min-heap
//!
//! Elements live in a single contiguous buffer laid out level by level (see
//! [`crate::index`]). The branching factor is a const generic; the crate's
//! primary type is the ternary instantiation [`TernaryHeap`].
//!
//! Compared to a binary heap, a ternary heap is shallower (log₃ n levels
//! instead of log₂ n), so `insert` does fewer swaps while `delete_min`
//! compares up to three children per level.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity                |
//! |---------------|---------------------------|
//! | `insert`      | O(log n) amortized        |
//! | `find_min`    | O(1)                      |
//! | `delete_min`  | O(log n)                  |
//! | `build_queue` | O(n)                      |
//! | `make_empty`  | O(1)                      |
//!
//! # Capacity
//!
//! The buffer starts at a small nonzero capacity ([`DEFAULT_CAPACITY`] unless
//! [`DaryHeap::with_capacity`] is used), doubles whenever an insertion would
//! overflow it, and never shrinks. [`PriorityQueue::make_empty`] reallocates
//! it at the initial capacity.
//!
//! # Example
//!
//! ```rust
//! use ternary_heap::{PriorityQueue, TernaryHeap};
//!
//! let mut heap = TernaryHeap::new();
//! heap.build_queue([4.0, 4.0, 0.0, 2.0]);
//!
//! assert_eq!(heap.delete_min(), Ok(0.0));
//! assert_eq!(heap.delete_min(), Ok(2.0));
//! assert_eq!(heap.delete_min(), Ok(4.0));
//! assert_eq!(heap.delete_min(), Ok(4.0));
//! assert!(heap.is_empty());
//! ```

use std::fmt;
use std::iter::FusedIterator;

use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use crate::index;
use crate::traits::{HeapError, PriorityQueue};

/// Initial buffer capacity used by [`PriorityQueue::new`]
pub const DEFAULT_CAPACITY: usize = 10;

/// A d-ary min-heap of `f64` values
///
/// Values are ordered with [`OrderedFloat`]: reals compare naturally,
/// `-0.0 == 0.0`, and NaN sorts after every other value.
#[derive(Debug, Clone)]
pub struct DaryHeap<const D: usize> {
    /// Live elements; `data.len()` is the heap size
    data: Vec<OrderedFloat<f64>>,
    /// Logical capacity of the buffer, doubled on overflow
    capacity: usize,
    /// Capacity restored by `make_empty`
    initial_capacity: usize,
}

/// Min-heap with branching factor 3
pub type TernaryHeap = DaryHeap<3>;

impl<const D: usize> DaryHeap<D> {
    const VALID_BRANCHING: () = assert!(D >= 2, "branching factor must be at least 2");

    /// Creates an empty heap whose buffer starts at `capacity` slots
    ///
    /// A requested capacity of zero is raised to one so growth by doubling
    /// always makes progress. The same capacity is restored by `make_empty`.
    pub fn with_capacity(capacity: usize) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_BRANCHING;

        let capacity = capacity.max(1);
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            initial_capacity: capacity,
        }
    }

    /// Number of slots currently allocated for elements
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Checks that every live element is no smaller than its parent
    pub fn verify_heap_property(&self) -> bool {
        (1..self.data.len()).all(|i| match index::parent::<D>(i) {
            Some(parent) => self.data[parent] <= self.data[i],
            None => true,
        })
    }

    /// Removes elements in non-decreasing order as the iterator is advanced
    ///
    /// Elements not consumed before the iterator is dropped stay in the heap.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, D> {
        DrainSorted { heap: self }
    }

    /// Consumes the heap, returning its elements in non-decreasing order
    pub fn into_sorted_vec(mut self) -> Vec<f64> {
        self.drain_sorted().collect()
    }

    /// Doubles the capacity until at least `needed` elements fit
    fn reserve_for(&mut self, needed: usize) {
        if needed <= self.capacity {
            return;
        }

        let old_capacity = self.capacity;
        let mut new_capacity = old_capacity;
        while new_capacity < needed {
            new_capacity = new_capacity.saturating_mul(2);
        }

        self.data.reserve_exact(new_capacity - self.data.len());
        self.capacity = new_capacity;
        trace!(old_capacity, new_capacity, "grew heap buffer");
    }

    /// Smallest live child of `pos`; ties go to the leftmost child
    fn min_child(&self, pos: usize) -> Option<usize> {
        index::children::<D>(pos, self.data.len()).min_by_key(|&child| self.data[child])
    }

    /// Move element at pos up while it is smaller than its parent
    fn sift_up(&mut self, mut pos: usize) {
        while let Some(parent) = index::parent::<D>(pos) {
            if self.data[pos] < self.data[parent] {
                self.data.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at pos down while some child is smaller than it
    fn sift_down(&mut self, mut pos: usize) {
        while let Some(child) = self.min_child(pos) {
            if self.data[child] < self.data[pos] {
                self.data.swap(pos, child);
                pos = child;
            } else {
                break;
            }
        }
    }

    /// Floyd's construction over the whole buffer; returns the number of nodes sifted
    fn heapify(&mut self) -> usize {
        let Some(last) = index::last_internal::<D>(self.data.len()) else {
            return 0;
        };

        for i in (0..=last).rev() {
            self.sift_down(i);
        }
        last + 1
    }
}

impl<const D: usize> PriorityQueue for DaryHeap<D> {
    fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn find_min(&self) -> Result<f64, HeapError> {
        self.data
            .first()
            .map(|min| min.into_inner())
            .ok_or(HeapError::EmptyQueue)
    }

    fn insert(&mut self, value: f64) {
        self.reserve_for(self.data.len() + 1);
        self.data.push(OrderedFloat(value));
        self.sift_up(self.data.len() - 1);
    }

    fn delete_min(&mut self) -> Result<f64, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyQueue);
        }

        // Last element takes the root slot
        let min = self.data.swap_remove(0);

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(min.into_inner())
    }

    fn build_queue<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter();
        self.data.clear();
        self.reserve_for(values.size_hint().0);

        // Place everything unordered; the invariant is restored in one pass below
        for value in values {
            self.reserve_for(self.data.len() + 1);
            self.data.push(OrderedFloat(value));
        }

        let sifted = self.heapify();
        debug!(
            len = self.data.len(),
            sifted,
            capacity = self.capacity,
            "built heap"
        );
        debug_assert!(self.verify_heap_property());
    }

    fn make_empty(&mut self) {
        self.data = Vec::with_capacity(self.initial_capacity);
        self.capacity = self.initial_capacity;
        debug!(capacity = self.capacity, "reset heap");
    }
}

impl<const D: usize> Default for DaryHeap<D> {
    fn default() -> Self {
        <Self as PriorityQueue>::new()
    }
}

impl<const D: usize> FromIterator<f64> for DaryHeap<D> {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut heap = Self::default();
        heap.build_queue(iter);
        heap
    }
}

impl<const D: usize> Extend<f64> for DaryHeap<D> {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Live elements in buffer order, separated by single spaces
impl<const D: usize> fmt::Display for DaryHeap<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.data.iter();
        if let Some(first) = values.next() {
            write!(f, "{}", first)?;
            for value in values {
                write!(f, " {}", value)?;
            }
        }
        Ok(())
    }
}

/// Iterator returned by [`DaryHeap::drain_sorted`]
#[derive(Debug)]
pub struct DrainSorted<'a, const D: usize> {
    heap: &'a mut DaryHeap<D>,
}

impl<const D: usize> Iterator for DrainSorted<'_, D> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.heap.delete_min().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<const D: usize> ExactSizeIterator for DrainSorted<'_, D> {}

impl<const D: usize> FusedIterator for DrainSorted<'_, D> {}
