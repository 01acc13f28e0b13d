use alloc::boxed::Box;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::mem;
use core::ops::Bound;

use log::trace;

use super::color::Color;
use super::node::{self, Link, Node};

/// The core left-leaning red-black tree backing `OSRBTreeMap`.
pub(crate) struct RawOSRBTreeMap<K, V> {
    /// The root node, if the tree is non-empty.
    root: Link<K, V>,
}

impl<K, V> RawOSRBTreeMap<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self { root: None }
    }

    #[cfg(test)]
    pub(crate) fn from_root(root: Link<K, V>) -> Self {
        Self { root }
    }

    /// Returns the number of key-value pairs in the tree.
    pub(crate) fn len(&self) -> usize {
        node::size(&self.root)
    }

    /// Returns true if the tree contains no elements.
    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of links on the longest root-to-leaf path, or `None` if empty.
    pub(crate) fn height(&self) -> Option<usize> {
        node::height(&self.root)
    }

    /// Clears all elements from the tree.
    pub(crate) fn clear(&mut self) {
        self.root = None;
    }

    /// Returns a reference to the root node, if any.
    pub(crate) fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }

    /// Returns a mutable reference to the root node, if any.
    pub(crate) fn root_mut(&mut self) -> Option<&mut Node<K, V>> {
        self.root.as_deref_mut()
    }

    /// Drains all key-value pairs in ascending key order.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        fn drain<K, V>(link: Link<K, V>, out: &mut Vec<(K, V)>) {
            if let Some(node) = link {
                let Node {
                    key,
                    value,
                    left,
                    right,
                    ..
                } = *node;
                drain(left, out);
                out.push((key, value));
                drain(right, out);
            }
        }

        let mut result = Vec::with_capacity(self.len());
        drain(self.root.take(), &mut result);
        result
    }

    /// Returns the node holding the smallest key.
    pub(crate) fn first(&self) -> Option<&Node<K, V>> {
        let mut current = self.root.as_deref()?;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        Some(current)
    }

    /// Returns the node holding the largest key.
    pub(crate) fn last(&self) -> Option<&Node<K, V>> {
        let mut current = self.root.as_deref()?;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        Some(current)
    }

    /// Returns the node at position `rank` in sorted order.
    pub(crate) fn get_by_rank(&self, mut rank: usize) -> Option<&Node<K, V>> {
        if rank >= self.len() {
            return None;
        }

        let mut current = self.root.as_deref();
        while let Some(node) = current {
            let left_size = node::size(&node.left);
            match rank.cmp(&left_size) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => {
                    rank -= left_size + 1;
                    current = node.right.as_deref();
                }
            }
        }
        None
    }

    /// Returns the key and a mutable reference to the value at position `rank`.
    pub(crate) fn get_by_rank_mut(&mut self, mut rank: usize) -> Option<(&K, &mut V)> {
        if rank >= self.len() {
            return None;
        }

        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            let left_size = node::size(&node.left);
            match rank.cmp(&left_size) {
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Equal => return Some((&node.key, &mut node.value)),
                Ordering::Greater => {
                    rank -= left_size + 1;
                    current = node.right.as_deref_mut();
                }
            }
        }
        None
    }
}

impl<K: Ord, V> RawOSRBTreeMap<K, V> {
    /// Searches for a key and returns its node if found.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Some(node),
            }
        }
        None
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Greater => current = node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            }
        }
        None
    }

    /// Returns true if the tree contains the specified key.
    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).is_some()
    }

    /// Inserts a key-value pair into the tree.
    /// Returns the old value if the key was already present.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (mut root, old_value) = Self::insert_node(self.root.take(), key, value);
        root.color = Color::Black;
        self.root = Some(root);
        old_value
    }

    fn insert_node(link: Link<K, V>, key: K, value: V) -> (Box<Node<K, V>>, Option<V>) {
        let Some(mut h) = link else {
            return (Node::new(key, value), None);
        };

        let old_value = match key.cmp(&h.key) {
            Ordering::Less => {
                let (left, old_value) = Self::insert_node(h.left.take(), key, value);
                h.left = Some(left);
                old_value
            }
            Ordering::Greater => {
                let (right, old_value) = Self::insert_node(h.right.take(), key, value);
                h.right = Some(right);
                old_value
            }
            // Existing key: overwrite in place, nothing to rebalance.
            Ordering::Equal => {
                let old_value = mem::replace(&mut h.value, value);
                return (h, Some(old_value));
            }
        };

        (h.fix_up(), old_value)
    }

    /// Removes the entry with the smallest key.
    pub(crate) fn pop_first(&mut self) -> Option<(K, V)> {
        let mut root = self.root.take()?;
        Self::borrow_red_at_root(&mut root);
        let (root, entry) = Self::delete_min(root);
        self.set_root(root);
        Some(entry)
    }

    /// Removes the entry with the largest key.
    pub(crate) fn pop_last(&mut self) -> Option<(K, V)> {
        let mut root = self.root.take()?;
        Self::borrow_red_at_root(&mut root);
        let (root, entry) = Self::delete_max(root);
        self.set_root(root);
        Some(entry)
    }

    /// Removes a key from the tree, returning the stored key and value if present.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        // The top-down pass assumes the key is present.
        if !self.contains_key(key) {
            return None;
        }

        let mut root = self.root.take()?;
        Self::borrow_red_at_root(&mut root);
        let (root, entry) = Self::delete_node(root, key);
        self.set_root(root);
        Some(entry)
    }

    /// If both children of the root are black, the root lends its blackness to the descent.
    fn borrow_red_at_root(root: &mut Node<K, V>) {
        if !root.left_is_red() && !root.right_is_red() {
            trace!("deletion: coloring root red before descent");
            root.color = Color::Red;
        }
    }

    fn set_root(&mut self, root: Link<K, V>) {
        self.root = root;
        if let Some(root) = self.root.as_mut() {
            root.color = Color::Black;
        }
    }

    fn delete_min(mut h: Box<Node<K, V>>) -> (Link<K, V>, (K, V)) {
        if h.left.is_none() {
            debug_assert!(h.right.is_none(), "`delete_min()` - leftmost node has a right child!");
            return (None, h.into_entry());
        }

        if !h.left_is_red() && !h.left_left_is_red() {
            h = h.move_red_left();
        }

        let left = h.left.take().expect("`delete_min()` - left child vanished!");
        let (left, entry) = Self::delete_min(left);
        h.left = left;
        (Some(h.balance()), entry)
    }

    fn delete_max(mut h: Box<Node<K, V>>) -> (Link<K, V>, (K, V)) {
        if h.left_is_red() {
            h = h.rotate_right();
        }

        if h.right.is_none() {
            debug_assert!(h.left.is_none(), "`delete_max()` - rightmost node has a left child!");
            return (None, h.into_entry());
        }

        if !h.right_is_red() && !h.right_left_is_red() {
            h = h.move_red_right();
        }

        let right = h.right.take().expect("`delete_max()` - right child vanished!");
        let (right, entry) = Self::delete_max(right);
        h.right = right;
        (Some(h.balance()), entry)
    }

    // Precondition: `key` is present in the subtree rooted at `h`.
    fn delete_node<Q>(mut h: Box<Node<K, V>>, key: &Q) -> (Link<K, V>, (K, V))
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let entry;

        if key.cmp(h.key.borrow()).is_lt() {
            if !h.left_is_red() && !h.left_left_is_red() {
                h = h.move_red_left();
            }
            let left = h.left.take().expect("`delete_node()` - key missing from left subtree!");
            let (left, removed) = Self::delete_node(left, key);
            h.left = left;
            entry = removed;
        } else {
            if h.left_is_red() {
                h = h.rotate_right();
            }

            if key.cmp(h.key.borrow()).is_eq() && h.right.is_none() {
                return (None, h.into_entry());
            }

            if !h.right_is_red() && !h.right_left_is_red() {
                h = h.move_red_right();
            }

            let right = h.right.take().expect("`delete_node()` - key missing from right subtree!");
            if key.cmp(h.key.borrow()).is_eq() {
                // Relabel this node with its successor and unlink the successor instead.
                let (right, (successor_key, successor_value)) = Self::delete_min(right);
                h.right = right;
                let old_key = mem::replace(&mut h.key, successor_key);
                let old_value = mem::replace(&mut h.value, successor_value);
                entry = (old_key, old_value);
            } else {
                let (right, removed) = Self::delete_node(right, key);
                h.right = right;
                entry = removed;
            }
        }

        (Some(h.balance()), entry)
    }

    /// Returns the number of keys strictly less than `key`.
    pub(crate) fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut rank = 0;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => {
                    rank += node::size(&node.left) + 1;
                    current = node.right.as_deref();
                }
                Ordering::Equal => return rank + node::size(&node.left),
            }
        }
        rank
    }

    /// Returns the zero-based rank of `key`, or `None` if the key is not present.
    pub(crate) fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut rank = 0;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => {
                    rank += node::size(&node.left) + 1;
                    current = node.right.as_deref();
                }
                Ordering::Equal => return Some(rank + node::size(&node.left)),
            }
        }
        None
    }

    /// Returns the node with the largest key less than or equal to `key`.
    pub(crate) fn floor<Q>(&self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut candidate = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Equal => return Some(node),
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => {
                    candidate = Some(node);
                    current = node.right.as_deref();
                }
            }
        }
        candidate
    }

    /// Returns the node with the smallest key greater than or equal to `key`.
    pub(crate) fn ceiling<Q>(&self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut candidate = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Equal => return Some(node),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Less => {
                    candidate = Some(node);
                    current = node.left.as_deref();
                }
            }
        }
        candidate
    }

    /// Returns the number of keys `k` with `lo <= k <= hi`.
    pub(crate) fn range_count<Q>(&self, lo: &Q, hi: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        if hi < lo {
            return 0;
        }

        // Either bound may fall outside the stored keys.
        let (Some(low), Some(high)) = (self.ceiling(lo), self.floor(hi)) else {
            return 0;
        };

        (self.rank::<K>(&high.key) + 1).saturating_sub(self.rank::<K>(&low.key))
    }

    /// Returns the number of keys that fall below `bound` when it is used as a range start.
    pub(crate) fn count_before<Q>(&self, bound: Bound<&Q>) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match bound {
            Bound::Unbounded => 0,
            Bound::Included(key) => self.rank(key),
            Bound::Excluded(key) => self.rank(key) + usize::from(self.contains_key(key)),
        }
    }

    /// Returns the number of keys that fall at or below `bound` when it is used as a range end.
    pub(crate) fn count_through<Q>(&self, bound: Bound<&Q>) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match bound {
            Bound::Unbounded => self.len(),
            Bound::Included(key) => self.rank(key) + usize::from(self.contains_key(key)),
            Bound::Excluded(key) => self.rank(key),
        }
    }
}

impl<K: Clone, V: Clone> Clone for RawOSRBTreeMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;
    use proptest::prelude::*;

    // Test operations enum for property testing
    #[derive(Clone, Debug)]
    enum Op {
        Insert(i32),
        Remove(i32),
        PopFirst,
        PopLast,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            6 => (0i32..1000).prop_map(Op::Insert),
            3 => (0i32..1000).prop_map(Op::Remove),
            1 => Just(Op::PopFirst),
            1 => Just(Op::PopLast),
        ]
    }

    fn assert_valid(tree: &RawOSRBTreeMap<i32, i32>) {
        if let Err(violation) = tree.check() {
            panic!("tree invariant violated: {violation}");
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn tree_invariants_maintained_after_operations(ops in prop::collection::vec(op_strategy(), 0..500)) {
            let mut tree: RawOSRBTreeMap<i32, i32> = RawOSRBTreeMap::new();
            let mut expected: BTreeMap<i32, i32> = BTreeMap::new();

            for op in ops {
                match op {
                    Op::Insert(key) => {
                        prop_assert_eq!(tree.insert(key, key * 2), expected.insert(key, key * 2));
                    }
                    Op::Remove(key) => {
                        prop_assert_eq!(tree.remove_entry(&key), expected.remove_entry(&key));
                    }
                    Op::PopFirst => {
                        prop_assert_eq!(tree.pop_first(), expected.pop_first());
                    }
                    Op::PopLast => {
                        prop_assert_eq!(tree.pop_last(), expected.pop_last());
                    }
                }
                assert_valid(&tree);
                prop_assert_eq!(tree.len(), expected.len());
            }
        }

        #[test]
        fn get_by_rank_correctness(keys in prop::collection::vec(0i32..500, 1..200)) {
            let mut tree: RawOSRBTreeMap<i32, i32> = RawOSRBTreeMap::new();
            let mut expected: Vec<i32> = Vec::new();

            for key in keys {
                if tree.insert(key, key * 2).is_none() {
                    expected.push(key);
                }
            }
            expected.sort_unstable();
            assert_valid(&tree);

            for (rank, &expected_key) in expected.iter().enumerate() {
                let node = tree.get_by_rank(rank);
                prop_assert!(node.is_some(), "get_by_rank({}) returned None", rank);
                let node = node.unwrap();
                prop_assert_eq!(node.key, expected_key, "get_by_rank({}) returned wrong key", rank);
                prop_assert_eq!(node.value, expected_key * 2, "get_by_rank({}) returned wrong value", rank);
            }

            prop_assert!(tree.get_by_rank(expected.len()).is_none());
        }

        #[test]
        fn rank_counts_smaller_keys(keys in prop::collection::vec(0i32..500, 0..200), probe in -10i32..510) {
            let mut tree: RawOSRBTreeMap<i32, i32> = RawOSRBTreeMap::new();
            for &key in &keys {
                tree.insert(key, key);
            }

            let mut distinct = keys.clone();
            distinct.sort_unstable();
            distinct.dedup();

            let expected = distinct.iter().filter(|&&k| k < probe).count();
            prop_assert_eq!(tree.rank(&probe), expected);
            prop_assert_eq!(tree.rank_of(&probe), distinct.binary_search(&probe).ok());
        }

        #[test]
        fn floor_and_ceiling_match_btreemap(keys in prop::collection::vec(0i32..500, 0..200), probe in -10i32..510) {
            let mut tree: RawOSRBTreeMap<i32, i32> = RawOSRBTreeMap::new();
            let mut expected: BTreeMap<i32, i32> = BTreeMap::new();
            for key in keys {
                tree.insert(key, key);
                expected.insert(key, key);
            }

            let floor = expected.range(..=probe).next_back().map(|(k, _)| *k);
            let ceiling = expected.range(probe..).next().map(|(k, _)| *k);
            prop_assert_eq!(tree.floor(&probe).map(|node| node.key), floor);
            prop_assert_eq!(tree.ceiling(&probe).map(|node| node.key), ceiling);
        }

        #[test]
        fn range_count_matches_brute_force(
            keys in prop::collection::vec(0i32..500, 0..200),
            lo in -50i32..550,
            hi in -50i32..550,
        ) {
            let mut tree: RawOSRBTreeMap<i32, i32> = RawOSRBTreeMap::new();
            let mut expected: BTreeMap<i32, i32> = BTreeMap::new();
            for key in keys {
                tree.insert(key, key);
                expected.insert(key, key);
            }

            let brute = expected.keys().filter(|&&k| lo <= k && k <= hi).count();
            prop_assert_eq!(tree.range_count(&lo, &hi), brute);
        }
    }

    #[test]
    fn empty_tree_operations() {
        let mut tree: RawOSRBTreeMap<i32, i32> = RawOSRBTreeMap::new();
        assert_valid(&tree);

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), None);
        assert!(tree.first().is_none());
        assert!(tree.last().is_none());
        assert!(tree.get_by_rank(0).is_none());
        assert_eq!(tree.rank(&0), 0);
        assert!(tree.floor(&0).is_none());
        assert!(tree.ceiling(&0).is_none());
        assert_eq!(tree.range_count(&0, &100), 0);
        assert!(tree.pop_first().is_none());
        assert!(tree.pop_last().is_none());
        assert!(tree.remove_entry(&0).is_none());
    }

    #[test]
    fn single_element_operations() {
        let mut tree: RawOSRBTreeMap<i32, i32> = RawOSRBTreeMap::new();
        tree.insert(42, 84);
        assert_valid(&tree);

        assert_eq!(tree.height(), Some(0));
        assert_eq!(tree.root().map(|root| root.color), Some(Color::Black));
        assert_eq!(tree.get_by_rank(0).map(|node| node.key), Some(42));
        assert!(tree.get_by_rank(1).is_none());
        assert_eq!(tree.rank(&42), 0);
        assert_eq!(tree.rank(&100), 1);

        assert_eq!(tree.remove_entry(&42), Some((42, 84)));
        assert!(tree.is_empty());
        assert_valid(&tree);
    }

    #[test]
    fn range_count_with_borrowed_bounds() {
        let mut tree: RawOSRBTreeMap<String, usize> = RawOSRBTreeMap::new();
        for (i, word) in ["apple", "banana", "cherry", "date", "fig"].into_iter().enumerate() {
            tree.insert(word.to_string(), i);
        }

        assert_eq!(tree.range_count("b", "d"), 2);
        assert_eq!(tree.range_count("banana", "date"), 3);
        assert_eq!(tree.range_count("a", "z"), 5);
        assert_eq!(tree.range_count("g", "z"), 0);
        assert_eq!(tree.range_count("date", "banana"), 0);
    }

    #[test]
    fn insert_overwrites_value_without_growing() {
        let mut tree: RawOSRBTreeMap<i32, &str> = RawOSRBTreeMap::new();
        assert_eq!(tree.insert(1, "a"), None);
        assert_eq!(tree.insert(1, "b"), Some("a"));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.search(&1).map(|node| node.value), Some("b"));
    }

    #[test]
    fn ascending_insertions_stay_logarithmic() {
        let mut tree: RawOSRBTreeMap<i32, i32> = RawOSRBTreeMap::new();
        for i in 0..1024 {
            tree.insert(i, i);
        }
        assert_valid(&tree);
        // A red-black tree of n nodes has height at most 2 * log2(n + 1).
        assert!(tree.height().is_some_and(|height| height <= 20), "height {:?} too large", tree.height());
    }

    #[test]
    fn remove_internal_node_relabels_with_successor() {
        let mut tree: RawOSRBTreeMap<i32, i32> = RawOSRBTreeMap::new();
        for i in 0..15 {
            tree.insert(i, i * 2);
        }
        let root_key = tree.root().map(|root| root.key).unwrap();

        assert_eq!(tree.remove_entry(&root_key), Some((root_key, root_key * 2)));
        assert_valid(&tree);
        assert!(!tree.contains_key(&root_key));
        assert_eq!(tree.len(), 14);
        for i in (0..15).filter(|&i| i != root_key) {
            assert_eq!(tree.search(&i).map(|node| node.value), Some(i * 2));
        }
    }

    #[test]
    fn ranks_stable_after_rebalancing() {
        let mut tree: RawOSRBTreeMap<i32, i32> = RawOSRBTreeMap::new();

        for i in 0..100 {
            tree.insert(i, i * 2);
            assert_valid(&tree);
        }

        for i in (0..100).step_by(3) {
            tree.remove_entry(&i);
            assert_valid(&tree);
        }

        let remaining: Vec<i32> = (0..100).filter(|i| i % 3 != 0).collect();
        for (expected_rank, &key) in remaining.iter().enumerate() {
            assert_eq!(tree.rank_of(&key), Some(expected_rank), "rank of {key}");
        }
    }

    #[test]
    fn get_by_rank_mut_modifies_value() {
        let mut tree: RawOSRBTreeMap<i32, i32> = RawOSRBTreeMap::new();
        for i in 0..10 {
            tree.insert(i, i * 2);
        }

        {
            let (key, value) = tree.get_by_rank_mut(5).expect("should have rank 5");
            assert_eq!(*key, 5);
            assert_eq!(*value, 10);
            *value = 999;
        }

        assert_valid(&tree);
        assert_eq!(tree.get_by_rank(5).map(|node| node.value), Some(999));
        assert_eq!(tree.get_by_rank(4).map(|node| node.value), Some(8));
    }

    #[test]
    fn drain_to_vec_is_sorted_and_empties() {
        let mut tree: RawOSRBTreeMap<i32, i32> = RawOSRBTreeMap::new();
        for i in [5, 3, 9, 1, 7] {
            tree.insert(i, -i);
        }
        assert_eq!(tree.drain_to_vec(), [(1, -1), (3, -3), (5, -5), (7, -7), (9, -9)]);
        assert!(tree.is_empty());
    }

    #[test]
    fn count_bounds() {
        let mut tree: RawOSRBTreeMap<i32, i32> = RawOSRBTreeMap::new();
        for i in [10, 20, 30] {
            tree.insert(i, i);
        }
        assert_eq!(tree.count_before(Bound::Included(&20)), 1);
        assert_eq!(tree.count_before(Bound::Excluded(&20)), 2);
        assert_eq!(tree.count_before(Bound::Excluded(&25)), 2);
        assert_eq!(tree.count_through(Bound::Included(&20)), 2);
        assert_eq!(tree.count_through(Bound::Excluded(&20)), 1);
        assert_eq!(tree.count_through(Bound::<&i32>::Unbounded), 3);
    }
}
