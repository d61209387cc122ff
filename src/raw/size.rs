use core::num::NonZero;

use super::handle::Handle;

/// Cardinality of the subtree rooted at a node, including the node itself.
///
/// Reuses [`Handle`]'s niche so `Size` is word-sized as well. Every live
/// node has `size >= 1`; `ZERO` only ever describes an absent subtree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Size(Handle);

impl Size {
    pub(crate) const MAX: usize = Handle::MAX;
    pub(crate) const ZERO: Self = Self::from_usize(0);
    pub(crate) const ONE: Self = Self::from_usize(1);

    #[inline]
    pub(crate) const fn from_usize(size: usize) -> Self {
        assert!(size <= Self::MAX, "`Size::from_usize()` - `size` > `Size::MAX`!");
        Self(Handle::from_index(size))
    }

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0.to_index()
    }

    /// One more node in this subtree. Used on the ancestor walk after an
    /// insertion attaches a new leaf.
    #[inline]
    pub(crate) const fn increment(self) -> Self {
        Self::from_usize(self.to_usize() + 1)
    }

    /// One fewer node in this subtree. Used on the ancestor walk after a
    /// deletion unlinks a node.
    #[inline]
    pub(crate) const fn decrement(self) -> Self {
        Self::from_usize(self.to_usize() - 1)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    // Verify our assumptions about `Size` and the niche optimization.
    assert_eq_size!(Size, Option<Size>);
    assert_eq_size!(Size, Handle);

    #[test]
    #[should_panic(expected = "`Size::from_usize()` - `size` > `Size::MAX`!")]
    fn invalid_size() {
        let _ = Size::from_usize(Size::MAX + 1);
    }

    #[test]
    #[should_panic]
    fn decrement_below_zero() {
        let _ = Size::ZERO.decrement();
    }

    proptest! {
        #[test]
        fn size_round_trip(index in 0..=Size::MAX) {
            let size = Size::from_usize(index);
            assert_eq!(size.to_usize(), index);
        }

        #[test]
        fn increment_decrement_inverse(index in 0..Size::MAX) {
            let size = Size::from_usize(index);
            assert_eq!(size.increment().decrement(), size);
            assert_eq!(size.increment().to_usize(), index + 1);
        }
    }
}
