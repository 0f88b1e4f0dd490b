//! Traits to accept generic slices.

use alloc::vec::Vec;
use core::ops;

// REVERSE VIEW

/// Reverse, immutable view of a sequence.
pub(crate) struct ReverseView<'a, T: 'a> {
    inner: &'a [T],
}

impl<'a, T> ops::Index<usize> for ReverseView<'a, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.inner[self.inner.len() - index - 1]
    }
}

// SLICE

/// Trait for generic slices.
pub(crate) trait Slice<T> {
    /// Get slice of immutable elements.
    fn as_slice(&self) -> &[T];

    /// Create a reverse view of the vector for indexing.
    #[inline]
    fn rview(&self) -> ReverseView<T> {
        ReverseView {
            inner: self.as_slice(),
        }
    }

    /// Get a reference to the element `index` positions from the end.
    #[inline]
    fn rindex(&self, index: usize) -> &T {
        let slc = self.as_slice();
        &slc[slc.len() - index - 1]
    }
}

impl<T> Slice<T> for [T] {
    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> Slice<T> for Vec<T> {
    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}
