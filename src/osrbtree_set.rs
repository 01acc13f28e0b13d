use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::RangeBounds;

use crate::OSRBTreeMap;
use crate::error::{InvariantViolation, TreeError};
use crate::osrbtree_map::{IntoKeys, Keys, Range as MapRange};

mod order_statistic;

/// An ordered set based on an order-statistic left-leaning red-black tree.
///
/// See [`OSRBTreeMap`]'s documentation for a detailed discussion of the underlying tree.
///
/// It is a logic error for an item to be modified in such a way that the item's ordering relative
/// to any other item, as determined by the [`Ord`] trait, changes while it is in the set. This is
/// normally only possible through [`Cell`], [`RefCell`], global state, I/O, or unsafe code.
/// The behavior resulting from such a logic error is not specified, but will be encapsulated to the
/// `OSRBTreeSet` that observed the logic error and not result in undefined behavior.
///
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
///
/// # Examples
///
/// ```
/// use llrb_tree::OSRBTreeSet;
///
/// let mut books = OSRBTreeSet::new();
///
/// books.insert("A Dance With Dragons");
/// books.insert("To Kill a Mockingbird");
/// books.insert("The Odyssey");
/// books.insert("The Great Gatsby");
///
/// if !books.contains("The Winds of Winter") {
///     println!("We have {} books, but The Winds of Winter ain't one.",
///              books.len());
/// }
///
/// books.remove("The Odyssey");
///
/// // the median title
/// assert_eq!(books.select(books.len() / 2), Some(&"The Great Gatsby"));
///
/// for book in &books {
///     println!("{book}");
/// }
/// ```
///
/// An `OSRBTreeSet` with a known list of items can be initialized from an array:
///
/// ```
/// use llrb_tree::OSRBTreeSet;
///
/// let set = OSRBTreeSet::from([1, 2, 3]);
/// ```
pub struct OSRBTreeSet<T> {
    map: OSRBTreeMap<T, ()>,
}

/// An iterator over the items of an `OSRBTreeSet`.
///
/// This `struct` is created by the [`iter`] method on [`OSRBTreeSet`].
/// See its documentation for more.
///
/// # Examples
///
/// ```
/// use llrb_tree::OSRBTreeSet;
///
/// let set = OSRBTreeSet::from([3, 1, 2]);
/// let mut iter = set.iter();
/// assert_eq!(iter.len(), 3);
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next_back(), Some(&3));
/// ```
///
/// [`iter`]: OSRBTreeSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: Keys<'a, T, ()>,
}

/// An owning iterator over the items of an `OSRBTreeSet` in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`OSRBTreeSet`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// [`into_iter`]: OSRBTreeSet#method.into_iter
pub struct IntoIter<T> {
    iter: IntoKeys<T, ()>,
}

/// An iterator over a sub-range of items in an `OSRBTreeSet`.
///
/// This `struct` is created by the [`range`] method on [`OSRBTreeSet`].
/// See its documentation for more.
///
/// [`range`]: OSRBTreeSet::range
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Range<'a, T: 'a> {
    iter: MapRange<'a, T, ()>,
}

impl<T> OSRBTreeSet<T> {
    /// Makes a new, empty `OSRBTreeSet`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeSet;
    ///
    /// let mut set: OSRBTreeSet<i32> = OSRBTreeSet::new();
    /// ```
    #[must_use]
    pub const fn new() -> OSRBTreeSet<T> {
        OSRBTreeSet {
            map: OSRBTreeMap::new(),
        }
    }

    /// Clears the set, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeSet;
    ///
    /// let mut v = OSRBTreeSet::new();
    /// v.insert(1);
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns a reference to the first element in the set, if any.
    /// This element is always the minimum of all elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeSet;
    ///
    /// let mut set = OSRBTreeSet::new();
    /// assert_eq!(set.first(), None);
    /// set.insert(1);
    /// assert_eq!(set.first(), Some(&1));
    /// set.insert(2);
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.map.min_key()
    }

    /// Returns a reference to the last element in the set, if any.
    /// This element is always the maximum of all elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeSet;
    ///
    /// let mut set = OSRBTreeSet::new();
    /// assert_eq!(set.last(), None);
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.last(), Some(&2));
    /// ```
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.map.max_key()
    }

    /// Gets an iterator that visits the elements in the `OSRBTreeSet` in ascending
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeSet;
    ///
    /// let set = OSRBTreeSet::from([3, 1, 2]);
    /// let mut set_iter = set.iter();
    /// assert_eq!(set_iter.next(), Some(&1));
    /// assert_eq!(set_iter.next(), Some(&2));
    /// assert_eq!(set_iter.next(), Some(&3));
    /// assert_eq!(set_iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { iter: self.map.keys() }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeSet;
    ///
    /// let mut v = OSRBTreeSet::new();
    /// assert_eq!(v.len(), 0);
    /// v.insert(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the number of links on the longest root-to-leaf path, or `None` if the set is
    /// empty.
    ///
    /// See [`OSRBTreeMap::height`].
    #[must_use]
    pub fn height(&self) -> Option<usize> {
        self.map.height()
    }
}

impl<T: Ord> OSRBTreeSet<T> {
    /// Constructs a double-ended iterator over a sub-range of elements in the set.
    /// The simplest way is to use the range syntax `min..max`, thus `range(min..max)` will
    /// yield elements from min (inclusive) to max (exclusive).
    ///
    /// # Panics
    ///
    /// Panics if range `start > end`.
    /// Panics if range `start == end` and both bounds are `Excluded`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::ops::Bound::Included;
    /// use llrb_tree::OSRBTreeSet;
    ///
    /// let mut set = OSRBTreeSet::new();
    /// set.insert(3);
    /// set.insert(5);
    /// set.insert(8);
    /// for &elem in set.range((Included(&4), Included(&8))) {
    ///     println!("{elem}");
    /// }
    /// assert_eq!(Some(&5), set.range(4..).next());
    /// ```
    pub fn range<K, R>(&self, range: R) -> Range<'_, T>
    where
        K: ?Sized + Ord,
        T: Borrow<K>,
        R: RangeBounds<K>,
    {
        Range {
            iter: self.map.range(range),
        }
    }

    /// Returns `true` if the set contains an element equal to the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeSet;
    ///
    /// let set = OSRBTreeSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.contains_key(value)
    }

    /// Returns a reference to the element in the set, if any, that is equal to
    /// the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeSet;
    ///
    /// let set = OSRBTreeSet::from([1, 2, 3]);
    /// assert_eq!(set.get(&2), Some(&2));
    /// assert_eq!(set.get(&4), None);
    /// ```
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.get_key_value(value).map(|(k, ())| k)
    }

    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. That is:
    ///
    /// - If the set did not previously contain an equal value, `true` is
    ///   returned.
    /// - If the set already contained an equal value, `false` is returned, and
    ///   the set is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeSet;
    ///
    /// let mut set = OSRBTreeSet::new();
    ///
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        self.map.insert(value, ()).is_none()
    }

    /// If the set contains an element equal to the value, removes it from the
    /// set and drops it. Returns whether such an element was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeSet;
    ///
    /// let mut set = OSRBTreeSet::new();
    ///
    /// set.insert(2);
    /// assert_eq!(set.remove(&2), true);
    /// assert_eq!(set.remove(&2), false);
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.remove(value).is_some()
    }

    /// Removes and returns the element in the set, if any, that is equal to
    /// the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeSet;
    ///
    /// let mut set = OSRBTreeSet::from([1, 2, 3]);
    /// assert_eq!(set.take(&2), Some(2));
    /// assert_eq!(set.take(&2), None);
    /// ```
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.remove_entry(value).map(|(k, ())| k)
    }

    /// Removes the first element from the set and returns it, if any.
    /// The first element is always the minimum element in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeSet;
    ///
    /// let mut set = OSRBTreeSet::new();
    ///
    /// set.insert(1);
    /// while let Some(n) = set.pop_first() {
    ///     assert_eq!(n, 1);
    /// }
    /// assert!(set.is_empty());
    /// ```
    pub fn pop_first(&mut self) -> Option<T> {
        self.map.pop_first().map(|(k, ())| k)
    }

    /// Removes the last element from the set and returns it, if any.
    /// The last element is always the maximum element in the set.
    pub fn pop_last(&mut self) -> Option<T> {
        self.map.pop_last().map(|(k, ())| k)
    }

    /// Removes and returns the minimum element.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Underflow`] if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::{OSRBTreeSet, TreeError};
    ///
    /// let mut set = OSRBTreeSet::from([7]);
    /// assert_eq!(set.delete_min(), Ok(7));
    /// assert_eq!(set.delete_min(), Err(TreeError::Underflow));
    /// ```
    pub fn delete_min(&mut self) -> Result<T, TreeError> {
        self.map.delete_min().map(|(k, ())| k)
    }

    /// Removes and returns the maximum element.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Underflow`] if the set is empty.
    pub fn delete_max(&mut self) -> Result<T, TreeError> {
        self.map.delete_max().map(|(k, ())| k)
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all elements `e` for which `f(&e)` returns `false`.
    /// The elements are visited in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeSet;
    ///
    /// let mut set = OSRBTreeSet::from([1, 2, 3, 4, 5, 6]);
    /// // Keep only the even numbers.
    /// set.retain(|&k| k % 2 == 0);
    /// assert!(set.iter().eq([2, 4, 6].iter()));
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.map.retain(|k, _| f(k));
    }

    /// Moves all elements from `other` into `self`, leaving `other` empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeSet;
    ///
    /// let mut a = OSRBTreeSet::from([1, 2, 3]);
    /// let mut b = OSRBTreeSet::from([3, 4, 5]);
    ///
    /// a.append(&mut b);
    ///
    /// assert_eq!(a.len(), 5);
    /// assert_eq!(b.len(), 0);
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        self.map.append(&mut other.map);
    }

    /// Verifies every structural invariant of the underlying tree.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found. See [`OSRBTreeMap::check`].
    pub fn check(&self) -> Result<(), InvariantViolation> {
        self.map.check()
    }
}

impl<T: Hash> Hash for OSRBTreeSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.map.hash(state);
    }
}

impl<T: PartialEq> PartialEq for OSRBTreeSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<T: Eq> Eq for OSRBTreeSet<T> {}

impl<T: PartialOrd> PartialOrd for OSRBTreeSet<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for OSRBTreeSet<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Clone> Clone for OSRBTreeSet<T> {
    fn clone(&self) -> Self {
        OSRBTreeSet { map: self.map.clone() }
    }
}

impl<T: fmt::Debug> fmt::Debug for OSRBTreeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for OSRBTreeSet<T> {
    fn default() -> Self {
        OSRBTreeSet::new()
    }
}

impl<T: Ord> FromIterator<T> for OSRBTreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = OSRBTreeSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for OSRBTreeSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.insert(elem);
        }
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for OSRBTreeSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &elem in iter {
            self.insert(elem);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for OSRBTreeSet<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T> IntoIterator for OSRBTreeSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the `OSRBTreeSet`'s contents in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::OSRBTreeSet;
    ///
    /// let set = OSRBTreeSet::from([1, 2, 3, 4]);
    ///
    /// let v: Vec<_> = set.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            iter: self.map.into_keys(),
        }
    }
}

impl<'a, T> IntoIterator for &'a OSRBTreeSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { iter: self.iter.clone() }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter).finish()
    }
}

impl<T> Default for Iter<'_, T> {
    /// Creates an empty `osrbtree_set::Iter`.
    ///
    /// ```
    /// # use llrb_tree::osrbtree_set;
    /// let iter: osrbtree_set::Iter<'_, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        Iter { iter: Keys::default() }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("len", &self.iter.len()).finish()
    }
}

impl<'a, T> Iterator for Range<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.iter.next().map(|(k, ())| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Range<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back().map(|(k, ())| k)
    }
}

impl<T> ExactSizeIterator for Range<'_, T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T> FusedIterator for Range<'_, T> {}

impl<T> Clone for Range<'_, T> {
    fn clone(&self) -> Self {
        Range { iter: self.iter.clone() }
    }
}

impl<T> Default for Range<'_, T> {
    fn default() -> Self {
        Range {
            iter: MapRange::default(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Range<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
