use core::borrow::Borrow;
use core::iter::{Rev, Take};
use core::ops::{Bound, Index, IndexMut};

use log::debug;

use super::{Iter, Keys, OSRBTreeMap};
use crate::Rank;
use crate::error::TreeError;
use crate::raw::RawIter;

impl<K, V> OSRBTreeMap<K, V> {
    /// Returns the key at position `rank` in sorted order.
    ///
    /// This is an order-statistic extension and is not part of the standard
    /// `BTreeMap` API.
    ///
    /// The rank is zero-based. Returns `None` if `rank` is out of bounds.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeMap;
    ///
    /// let map = OSRBTreeMap::from([(10, "a"), (5, "b"), (15, "c")]);
    /// assert_eq!(map.select(0), Some(&5));
    /// assert_eq!(map.select(2), Some(&15));
    /// assert_eq!(map.select(3), None);
    /// ```
    #[must_use]
    pub fn select(&self, rank: usize) -> Option<&K> {
        self.raw.get_by_rank(rank).map(|node| &node.key)
    }

    /// Returns the key-value pair at position `rank` in sorted order.
    ///
    /// This is an order-statistic extension and is not part of the standard
    /// `BTreeMap` API.
    ///
    /// The rank is zero-based. Returns `None` if `rank` is out of bounds.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeMap;
    ///
    /// let mut map = OSRBTreeMap::new();
    /// map.insert("a", 10);
    /// map.insert("c", 30);
    /// map.insert("b", 20);
    ///
    /// let (key, value) = map.get_by_rank(1).unwrap();
    /// assert_eq!((key, value), (&"b", &20));
    /// assert!(map.get_by_rank(3).is_none());
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        self.raw.get_by_rank(rank).map(|node| (&node.key, &node.value))
    }

    /// Returns the key and a mutable reference to the value at position `rank`
    /// in sorted order.
    ///
    /// The key is returned as a shared reference because mutating it would
    /// break the map's ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeMap;
    ///
    /// let mut map = OSRBTreeMap::new();
    /// map.insert(10, "a");
    /// map.insert(5, "b");
    ///
    /// if let Some((key, value)) = map.get_by_rank_mut(0) {
    ///     assert_eq!(*key, 5);
    ///     *value = "updated";
    /// }
    ///
    /// assert_eq!(map.get(&5), Some(&"updated"));
    /// ```
    #[must_use]
    pub fn get_by_rank_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        self.raw.get_by_rank_mut(rank)
    }
}

impl<K: Ord, V> OSRBTreeMap<K, V> {
    /// Returns the number of keys in the map strictly less than `key`.
    ///
    /// `key` does not need to be present. For a present key this is its zero-based
    /// position in sorted order, so `map.select(map.rank(k)) == Some(k)`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeMap;
    ///
    /// let map = OSRBTreeMap::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(map.rank(&20), 1);
    /// assert_eq!(map.rank(&25), 2);
    /// assert_eq!(map.rank(&5), 0);
    /// assert_eq!(map.rank(&99), 3);
    /// ```
    #[must_use]
    pub fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank(key)
    }

    /// Returns the zero-based rank of `key` in sorted order, or `None` if the
    /// key is not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeMap;
    ///
    /// let mut map = OSRBTreeMap::new();
    /// map.insert(10, "a");
    /// map.insert(20, "b");
    ///
    /// assert_eq!(map.rank_of(&10), Some(0));
    /// assert_eq!(map.rank_of(&15), None);
    /// ```
    #[must_use]
    pub fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank_of(key)
    }

    /// Returns the largest key less than or equal to `key`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeMap;
    ///
    /// let map = OSRBTreeMap::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(map.floor(&25), Some(&20));
    /// assert_eq!(map.floor(&20), Some(&20));
    /// assert_eq!(map.floor(&5), None);
    /// ```
    #[must_use]
    pub fn floor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.floor(key).map(|node| &node.key)
    }

    /// Returns the smallest key greater than or equal to `key`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeMap;
    ///
    /// let map = OSRBTreeMap::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(map.ceiling(&25), Some(&30));
    /// assert_eq!(map.ceiling(&35), None);
    /// ```
    #[must_use]
    pub fn ceiling<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.ceiling(key).map(|node| &node.key)
    }

    /// Returns the number of keys `k` with `lo <= k <= hi`.
    ///
    /// Neither bound needs to be present. Returns 0 when `hi < lo` or when no key
    /// falls inside the interval.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeMap;
    ///
    /// let map = OSRBTreeMap::from([(3, ()), (5, ()), (7, ()), (10, ()), (15, ())]);
    /// assert_eq!(map.range_count(&5, &10), 3);
    /// assert_eq!(map.range_count(&4, &11), 3);
    /// assert_eq!(map.range_count(&11, &14), 0);
    /// assert_eq!(map.range_count(&10, &5), 0);
    /// ```
    #[must_use]
    pub fn range_count<Q>(&self, lo: &Q, hi: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.range_count(lo, hi)
    }

    /// Gets an iterator over the keys `k` with `lo <= k <= hi`, in sorted order.
    ///
    /// Unlike [`range`](Self::range), an inverted interval is not an error: it simply
    /// yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeMap;
    ///
    /// let map = OSRBTreeMap::from([(3, ()), (5, ()), (7, ()), (10, ()), (15, ())]);
    /// let keys: Vec<_> = map.keys_between(&4, &10).copied().collect();
    /// assert_eq!(keys, [5, 7, 10]);
    /// assert_eq!(map.keys_between(&10, &4).count(), 0);
    /// ```
    pub fn keys_between<Q>(&self, lo: &Q, hi: &Q) -> Keys<'_, K, V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let remaining = self.raw.range_count(lo, hi);
        let inner = RawIter::range(self.raw.root(), Bound::Included(lo), Bound::Included(hi), remaining);
        Keys {
            inner: Iter { inner },
        }
    }

    /// Gets a lazy iterator over the `k` smallest keys, in ascending order.
    ///
    /// `k == self.len()` is allowed and yields every key.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidArgument`] if `k > self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::{OSRBTreeMap, TreeError};
    ///
    /// let map = OSRBTreeMap::from([(10, ()), (5, ()), (15, ()), (3, ()), (7, ())]);
    /// let smallest: Vec<_> = map.k_smallest(2)?.copied().collect();
    /// assert_eq!(smallest, [3, 5]);
    /// assert_eq!(map.k_smallest(6).err(), Some(TreeError::InvalidArgument { k: 6, len: 5 }));
    /// # Ok::<(), TreeError>(())
    /// ```
    pub fn k_smallest(&self, k: usize) -> Result<Take<Keys<'_, K, V>>, TreeError> {
        self.check_count(k)?;
        Ok(self.keys().take(k))
    }

    /// Gets a lazy iterator over the `k` largest keys, in descending order.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidArgument`] if `k > self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::{OSRBTreeMap, TreeError};
    ///
    /// let map = OSRBTreeMap::from([(10, ()), (5, ()), (15, ()), (3, ()), (7, ())]);
    /// let largest: Vec<_> = map.k_largest(2)?.copied().collect();
    /// assert_eq!(largest, [15, 10]);
    /// assert_eq!(map.k_largest(0)?.count(), 0);
    /// # Ok::<(), TreeError>(())
    /// ```
    pub fn k_largest(&self, k: usize) -> Result<Take<Rev<Keys<'_, K, V>>>, TreeError> {
        self.check_count(k)?;
        Ok(self.keys().rev().take(k))
    }

    pub(crate) fn check_count(&self, k: usize) -> Result<(), TreeError> {
        let len = self.len();
        if k > len {
            debug!("requested {k} keys from a map of {len}");
            return Err(TreeError::InvalidArgument { k, len });
        }
        Ok(())
    }
}

/// Indexes into the map by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use llrb_tree::{OSRBTreeMap, Rank};
///
/// let mut map = OSRBTreeMap::new();
/// map.insert("a", 1);
/// map.insert("b", 2);
///
/// assert_eq!(map[Rank(0)], 1);
/// ```
impl<K, V> Index<Rank> for OSRBTreeMap<K, V> {
    type Output = V;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).map(|(_, v)| v).expect("index out of bounds")
    }
}

/// Mutably indexes into the map by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use llrb_tree::{OSRBTreeMap, Rank};
///
/// let mut map = OSRBTreeMap::from([("a", 1), ("b", 2)]);
/// map[Rank(1)] = 5;
///
/// assert_eq!(map.get(&"b"), Some(&5));
/// ```
impl<K, V> IndexMut<Rank> for OSRBTreeMap<K, V> {
    fn index_mut(&mut self, rank: Rank) -> &mut Self::Output {
        self.get_by_rank_mut(rank.0).map(|(_, v)| v).expect("index out of bounds")
    }
}
