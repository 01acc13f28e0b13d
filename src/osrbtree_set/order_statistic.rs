use core::borrow::Borrow;
use core::iter::{Rev, Take};
use core::ops::Index;

use super::{Iter, OSRBTreeSet};
use crate::Rank;
use crate::error::TreeError;

impl<T> OSRBTreeSet<T> {
    /// Returns the value at position `rank` in sorted order.
    ///
    /// This is an order-statistic extension and is not part of the standard
    /// `BTreeSet` API.
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
    /// use llrb_tree::OSRBTreeSet;
    ///
    /// let set = OSRBTreeSet::from([10, 20, 30]);
    /// assert_eq!(set.select(1), Some(&20));
    /// assert!(set.select(3).is_none());
    /// ```
    #[must_use]
    pub fn select(&self, rank: usize) -> Option<&T> {
        self.map.select(rank)
    }
}

impl<T: Ord> OSRBTreeSet<T> {
    /// Returns the number of elements strictly less than `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeSet;
    ///
    /// let set = OSRBTreeSet::from([10, 20, 30]);
    /// assert_eq!(set.rank(&20), 1);
    /// assert_eq!(set.rank(&21), 2);
    /// ```
    #[must_use]
    pub fn rank<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.rank(value)
    }

    /// Returns the zero-based rank of `value` in sorted order, or `None` if
    /// the value is not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeSet;
    ///
    /// let set = OSRBTreeSet::from([10, 20]);
    /// assert_eq!(set.rank_of(&20), Some(1));
    /// assert_eq!(set.rank_of(&15), None);
    /// ```
    #[must_use]
    pub fn rank_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.rank_of(value)
    }

    /// Returns the largest element less than or equal to `value`.
    #[must_use]
    pub fn floor<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.floor(value)
    }

    /// Returns the smallest element greater than or equal to `value`.
    #[must_use]
    pub fn ceiling<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.ceiling(value)
    }

    /// Returns the number of elements `e` with `lo <= e <= hi`, or 0 if `hi < lo`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeSet;
    ///
    /// let set = OSRBTreeSet::from([1, 3, 5, 7, 9]);
    /// assert_eq!(set.range_count(&2, &7), 3);
    /// assert_eq!(set.range_count(&7, &2), 0);
    /// ```
    #[must_use]
    pub fn range_count<Q>(&self, lo: &Q, hi: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.range_count(lo, hi)
    }

    /// Gets a lazy iterator over the `k` smallest elements, in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidArgument`] if `k > self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::{OSRBTreeSet, TreeError};
    ///
    /// let set = OSRBTreeSet::from([4, 1, 3, 2]);
    /// assert!(set.k_smallest(3)?.eq([1, 2, 3].iter()));
    /// assert!(set.k_smallest(5).is_err());
    /// # Ok::<(), TreeError>(())
    /// ```
    pub fn k_smallest(&self, k: usize) -> Result<Take<Iter<'_, T>>, TreeError> {
        self.map.check_count(k)?;
        Ok(self.iter().take(k))
    }

    /// Gets a lazy iterator over the `k` largest elements, in descending order.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidArgument`] if `k > self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::{OSRBTreeSet, TreeError};
    ///
    /// let set = OSRBTreeSet::from([4, 1, 3, 2]);
    /// assert!(set.k_largest(2)?.eq([4, 3].iter()));
    /// # Ok::<(), TreeError>(())
    /// ```
    pub fn k_largest(&self, k: usize) -> Result<Take<Rev<Iter<'_, T>>>, TreeError> {
        self.map.check_count(k)?;
        Ok(self.iter().rev().take(k))
    }
}

/// Indexes into the set by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use llrb_tree::{OSRBTreeSet, Rank};
///
/// let set = OSRBTreeSet::from([30, 10, 20]);
/// assert_eq!(set[Rank(0)], 10);
/// ```
impl<T> Index<Rank> for OSRBTreeSet<T> {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.select(rank.0).expect("index out of bounds")
    }
}
