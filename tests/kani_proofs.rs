//! Kani verification proofs for the ternary heap
//!
//! Kani is AWS's model checker for Rust. It can verify properties of Rust code
//! by checking all possible executions up to certain bounds.
//!
//! To run these proofs:
//!   cargo kani --tests

#[cfg(kani)]
use ternary_heap::{HeapError, PriorityQueue, TernaryHeap};

/// Any finite, non-NaN f64
#[cfg(kani)]
fn any_value() -> f64 {
    let value: f64 = kani::any();
    kani::assume(value.is_finite());
    value
}

/// Proof that insert always increments the length
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(12)]
fn verify_insert_increments_len() {
    let mut heap = TernaryHeap::new();
    heap.insert(any_value());
    let initial_len = heap.len();

    heap.insert(any_value());

    assert!(heap.len() == initial_len + 1);
    assert!(heap.verify_heap_property());
}

/// Proof that find_min and delete_min fail on an empty heap
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(12)]
fn verify_empty_heap_errors() {
    let mut heap = TernaryHeap::new();
    assert!(heap.find_min() == Err(HeapError::EmptyQueue));
    assert!(heap.delete_min() == Err(HeapError::EmptyQueue));
    assert!(heap.is_empty());
}

/// Proof that delete_min returns the smallest of four arbitrary values
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(12)]
fn verify_delete_min_returns_minimum() {
    let mut heap = TernaryHeap::new();
    let a = any_value();
    let b = any_value();
    let c = any_value();
    let d = any_value();

    heap.insert(a);
    heap.insert(b);
    heap.insert(c);
    heap.insert(d);

    let min = heap.delete_min().unwrap();
    assert!(min <= a && min <= b && min <= c && min <= d);
    assert!(heap.len() == 3);
    assert!(heap.verify_heap_property());
}

/// Proof that build_queue produces a valid heap for any five values
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(12)]
fn verify_build_queue_invariant() {
    let mut heap = TernaryHeap::new();
    let values = [any_value(), any_value(), any_value(), any_value(), any_value()];

    heap.build_queue(values);

    assert!(heap.len() == 5);
    assert!(heap.verify_heap_property());

    let first = heap.delete_min().unwrap();
    let second = heap.delete_min().unwrap();
    assert!(first <= second);
}

/// Proof that make_empty clears any state
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(12)]
fn verify_make_empty() {
    let mut heap = TernaryHeap::new();
    heap.insert(any_value());
    heap.insert(any_value());

    heap.make_empty();
    assert!(heap.is_empty());
    assert!(heap.len() == 0);
    assert!(heap.find_min() == Err(HeapError::EmptyQueue));
}
