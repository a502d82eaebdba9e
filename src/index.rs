//! Index arithmetic for array-backed d-ary trees.
//!
//! The tree is stored level by level in a flat buffer starting at index 0.
//! For a node at index `i` with branching factor `d`:
//!
//! - parent: `(i - 1) / d` (the root has no parent)
//! - children: `d*i + 1 ..= d*i + d`
//!
//! Children are only meaningful when they fall below the live length of the
//! buffer, so [`children`] always clamps against `len`.

use std::ops::Range;

/// Index of the parent of `index`, or `None` for the root.
///
/// # Example
///
/// ```rust
/// use ternary_heap::index::parent;
///
/// assert_eq!(parent::<3>(0), None);
/// assert_eq!(parent::<3>(1), Some(0));
/// assert_eq!(parent::<3>(3), Some(0));
/// assert_eq!(parent::<3>(4), Some(1));
/// ```
#[inline]
pub const fn parent<const D: usize>(index: usize) -> Option<usize> {
    if index == 0 {
        None
    } else {
        Some((index - 1) / D)
    }
}

/// Index of the first child of `index`. May be past the end of the buffer.
#[inline]
pub const fn first_child<const D: usize>(index: usize) -> usize {
    D * index + 1
}

/// Live children of `index` in a buffer holding `len` elements.
///
/// The range is empty when `index` is a leaf.
///
/// # Example
///
/// ```rust
/// use ternary_heap::index::children;
///
/// assert_eq!(children::<3>(0, 10), 1..4);
/// assert_eq!(children::<3>(2, 9), 7..9);
/// assert!(children::<3>(3, 9).is_empty());
/// ```
#[inline]
pub fn children<const D: usize>(index: usize, len: usize) -> Range<usize> {
    let first = first_child::<D>(index).min(len);
    let end = first_child::<D>(index).saturating_add(D).min(len);
    first..end
}

/// Index of the last node that has at least one child, or `None` if no node does.
///
/// Floyd's construction sifts every node from here back to the root.
#[inline]
pub const fn last_internal<const D: usize>(len: usize) -> Option<usize> {
    if len < 2 {
        None
    } else {
        Some((len - 2) / D)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_child_round_trip() {
        for i in 0..200 {
            for c in children::<3>(i, usize::MAX) {
                assert_eq!(parent::<3>(c), Some(i));
            }
        }
    }

    #[test]
    fn test_children_clamped_to_len() {
        assert_eq!(children::<3>(0, 0), 0..0);
        assert_eq!(children::<3>(0, 1), 1..1);
        assert_eq!(children::<3>(0, 2), 1..2);
        assert_eq!(children::<3>(0, 4), 1..4);
        assert_eq!(children::<3>(0, 100), 1..4);
        assert_eq!(children::<3>(1, 6), 4..6);
    }

    #[test]
    fn test_binary_and_quaternary() {
        assert_eq!(children::<2>(1, 100), 3..5);
        assert_eq!(parent::<2>(4), Some(1));
        assert_eq!(children::<4>(1, 100), 5..9);
        assert_eq!(parent::<4>(8), Some(1));
    }

    #[test]
    fn test_last_internal() {
        assert_eq!(last_internal::<3>(0), None);
        assert_eq!(last_internal::<3>(1), None);
        assert_eq!(last_internal::<3>(2), Some(0));
        assert_eq!(last_internal::<3>(4), Some(0));
        assert_eq!(last_internal::<3>(5), Some(1));
        assert_eq!(last_internal::<3>(13), Some(3));

        // Every node after last_internal is a leaf, and last_internal itself is not.
        for len in 2..100 {
            let last = last_internal::<3>(len).unwrap();
            assert!(!children::<3>(last, len).is_empty());
            assert!(children::<3>(last + 1, len).is_empty());
        }
    }
}
