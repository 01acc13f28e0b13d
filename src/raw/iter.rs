use core::borrow::Borrow;
use core::ops::Bound;

use smallvec::SmallVec;

use super::node::Node;

// A balanced tree of n nodes is at most 2 * log2(n + 1) levels deep, so 32 slots cover
// 65535 nodes before a stack spills to the heap.
#[cfg(test)]
pub(crate) const STACK_INLINE: usize = 4;
#[cfg(not(test))]
pub(crate) const STACK_INLINE: usize = 32;

type Stack<'a, K, V> = SmallVec<[&'a Node<K, V>; STACK_INLINE]>;

/// Returns true if `key` lies at or after the range start `bound`.
fn after_start<Q: ?Sized + Ord>(key: &Q, bound: Bound<&Q>) -> bool {
    match bound {
        Bound::Unbounded => true,
        Bound::Included(start) => key >= start,
        Bound::Excluded(start) => key > start,
    }
}

/// Returns true if `key` lies at or before the range end `bound`.
fn before_end<Q: ?Sized + Ord>(key: &Q, bound: Bound<&Q>) -> bool {
    match bound {
        Bound::Unbounded => true,
        Bound::Included(end) => key <= end,
        Bound::Excluded(end) => key < end,
    }
}

/// A lazy, double-ended in-order walk over borrowed nodes.
///
/// `front` holds the path to the next node in ascending order, `back` the path to the next
/// node in descending order. `remaining` is supplied by the caller from subtree sizes, which
/// is what stops the two ends from crossing.
pub(crate) struct RawIter<'a, K, V> {
    front: Stack<'a, K, V>,
    back: Stack<'a, K, V>,
    remaining: usize,
}

impl<'a, K, V> RawIter<'a, K, V> {
    /// Creates an iterator that yields nothing.
    pub(crate) fn empty() -> Self {
        Self {
            front: SmallVec::new(),
            back: SmallVec::new(),
            remaining: 0,
        }
    }

    /// Creates an iterator over every node of the tree rooted at `root`, which holds `len` nodes.
    pub(crate) fn new(root: Option<&'a Node<K, V>>, len: usize) -> Self {
        let mut iter = Self {
            front: SmallVec::new(),
            back: SmallVec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter.push_right_spine(root);
        iter
    }

    /// Creates an iterator over the nodes whose keys lie within `start` and `end`.
    ///
    /// `remaining` must be the number of such nodes.
    pub(crate) fn range<Q>(root: Option<&'a Node<K, V>>, start: Bound<&Q>, end: Bound<&Q>, remaining: usize) -> Self
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        if remaining == 0 {
            return Self::empty();
        }

        let mut front = SmallVec::new();
        let mut current = root;
        while let Some(node) = current {
            if after_start(node.key.borrow(), start) {
                front.push(node);
                current = node.left.as_deref();
            } else {
                current = node.right.as_deref();
            }
        }

        let mut back = SmallVec::new();
        let mut current = root;
        while let Some(node) = current {
            if before_end(node.key.borrow(), end) {
                back.push(node);
                current = node.right.as_deref();
            } else {
                current = node.left.as_deref();
            }
        }

        Self { front, back, remaining }
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<K, V>>) {
        while let Some(node) = link {
            self.front.push(node);
            link = node.left.as_deref();
        }
    }

    fn push_right_spine(&mut self, mut link: Option<&'a Node<K, V>>) {
        while let Some(node) = link {
            self.back.push(node);
            link = node.right.as_deref();
        }
    }

    pub(crate) fn next(&mut self) -> Option<&'a Node<K, V>> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(node)
    }

    pub(crate) fn next_back(&mut self) -> Option<&'a Node<K, V>> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back.pop()?;
        self.push_right_spine(node.left.as_deref());
        self.remaining -= 1;
        Some(node)
    }

    pub(crate) const fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> Clone for RawIter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

type MutStack<'a, K, V> = SmallVec<[(&'a K, &'a mut V, Option<&'a mut Node<K, V>>); STACK_INLINE]>;

/// A lazy, forward in-order walk handing out mutable references to values.
///
/// Each stack frame keeps a node's key, its value and its right subtree as disjoint borrows,
/// so no two frames can reach the same node.
pub(crate) struct RawIterMut<'a, K, V> {
    stack: MutStack<'a, K, V>,
    remaining: usize,
}

impl<'a, K, V> RawIterMut<'a, K, V> {
    pub(crate) fn new(root: Option<&'a mut Node<K, V>>, len: usize) -> Self {
        let mut iter = Self {
            stack: SmallVec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a mut Node<K, V>>) {
        while let Some(node) = link {
            let Node {
                key,
                value,
                left,
                right,
                ..
            } = node;
            self.stack.push((&*key, value, right.as_deref_mut()));
            link = left.as_deref_mut();
        }
    }

    pub(crate) fn next(&mut self) -> Option<(&'a K, &'a mut V)> {
        let (key, value, right) = self.stack.pop()?;
        self.push_left_spine(right);
        self.remaining -= 1;
        Some((key, value))
    }

    pub(crate) const fn len(&self) -> usize {
        self.remaining
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::raw::RawOSRBTreeMap;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    fn tree_of(keys: &[i32]) -> RawOSRBTreeMap<i32, i32> {
        let mut tree = RawOSRBTreeMap::new();
        for &key in keys {
            tree.insert(key, key * 2);
        }
        tree
    }

    fn range_iter<'a>(
        tree: &'a RawOSRBTreeMap<i32, i32>,
        start: Bound<&i32>,
        end: Bound<&i32>,
    ) -> RawIter<'a, i32, i32> {
        let remaining = tree.count_through(end).saturating_sub(tree.count_before(start));
        RawIter::range(tree.root(), start, end, remaining)
    }

    #[test]
    fn empty_iterators_yield_nothing() {
        let tree = tree_of(&[]);
        let mut iter = RawIter::new(tree.root(), tree.len());
        assert!(iter.next().is_none());
        assert!(iter.next_back().is_none());
        assert!(RawIter::<i32, i32>::empty().next().is_none());
    }

    #[test]
    fn forward_and_backward_meet_without_overlap() {
        let tree = tree_of(&[5, 1, 9, 3, 7, 2, 8]);
        let mut iter = RawIter::new(tree.root(), tree.len());
        let mut seen = Vec::new();
        loop {
            match (iter.next(), iter.next_back()) {
                (Some(a), Some(b)) => {
                    seen.push(a.key);
                    seen.push(b.key);
                }
                (Some(a), None) | (None, Some(a)) => seen.push(a.key),
                (None, None) => break,
            }
        }
        seen.sort_unstable();
        assert_eq!(seen, [1, 2, 3, 5, 7, 8, 9]);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn deep_trees_spill_the_inline_stack() {
        let keys: Vec<i32> = (0..500).collect();
        let tree = tree_of(&keys);
        let forward: Vec<i32> = {
            let mut iter = RawIter::new(tree.root(), tree.len());
            core::iter::from_fn(|| iter.next().map(|node| node.key)).collect()
        };
        assert_eq!(forward, keys);
    }

    #[test]
    fn iter_mut_visits_in_order() {
        let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
        let len = tree.len();
        let mut keys = Vec::new();
        {
            let mut iter = RawIterMut::new(tree.root_mut(), len);
            while let Some((key, value)) = iter.next() {
                keys.push(*key);
                *value += 1;
            }
        }
        assert_eq!(keys, [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(tree.search(&4).map(|node| node.value), Some(9));
    }

    proptest! {
        #[test]
        fn range_matches_filter(
            keys in prop::collection::vec(0i32..200, 0..100),
            lo in -10i32..210,
            hi in -10i32..210,
            lo_inclusive in any::<bool>(),
            hi_inclusive in any::<bool>(),
        ) {
            let tree = tree_of(&keys);
            let start = if lo_inclusive { Bound::Included(&lo) } else { Bound::Excluded(&lo) };
            let end = if hi_inclusive { Bound::Included(&hi) } else { Bound::Excluded(&hi) };

            let mut expected: Vec<i32> = keys.iter().copied().filter(|&k| after_start(&k, start) && before_end(&k, end)).collect();
            expected.sort_unstable();
            expected.dedup();

            let mut iter = range_iter(&tree, start, end);
            prop_assert_eq!(iter.len(), expected.len());
            let forward: Vec<i32> = core::iter::from_fn(|| iter.next().map(|node| node.key)).collect();
            prop_assert_eq!(&forward, &expected);

            let mut iter = range_iter(&tree, start, end);
            let mut backward: Vec<i32> = core::iter::from_fn(|| iter.next_back().map(|node| node.key)).collect();
            backward.reverse();
            prop_assert_eq!(&backward, &expected);
        }
    }
}
