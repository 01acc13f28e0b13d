use alloc::boxed::Box;

use super::color::Color;

/// An owned, possibly empty subtree.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

// LLRB: `color` is the color of the link from the parent to this node.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    // The number of key/value pairs in the subtree rooted at this node.
    pub(crate) size: usize,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

/// Returns true if the link is red; empty links are black.
#[inline]
pub(crate) fn is_red<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().is_some_and(|node| node.color.is_red())
}

/// Returns the number of nodes in the subtree; 0 for an empty link.
#[inline]
pub(crate) fn size<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.size)
}

impl<K, V> Node<K, V> {
    /// Creates a new red leaf.
    pub(crate) fn new(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            color: Color::Red,
            size: 1,
            left: None,
            right: None,
        })
    }

    /// Consumes the node, returning its key and value.
    pub(crate) fn into_entry(self: Box<Self>) -> (K, V) {
        let Node { key, value, .. } = *self;
        (key, value)
    }

    #[inline]
    pub(crate) fn is_red(&self) -> bool {
        self.color.is_red()
    }

    #[inline]
    pub(crate) fn left_is_red(&self) -> bool {
        is_red(&self.left)
    }

    #[inline]
    pub(crate) fn right_is_red(&self) -> bool {
        is_red(&self.right)
    }

    /// Returns true if the left child exists and its own left link is red.
    #[inline]
    pub(crate) fn left_left_is_red(&self) -> bool {
        self.left.as_ref().is_some_and(|left| left.left_is_red())
    }

    /// Returns true if the right child exists and its own left link is red.
    #[inline]
    pub(crate) fn right_left_is_red(&self) -> bool {
        self.right.as_ref().is_some_and(|right| right.left_is_red())
    }

    /// Recalculates the size from the children.
    #[inline]
    pub(crate) fn update_size(&mut self) {
        self.size = size(&self.left) + size(&self.right) + 1;
    }

    //          self                    x
    //          /  \                   / \
    //         a    x      ==>      self  c
    //             / \              /  \
    //            b   c            a    b
    //
    /// Makes a right-leaning link lean to the left.
    pub(crate) fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut x = self.right.take().expect("`Node::rotate_left()` - no right child!");
        self.right = x.left.take();
        x.color = self.color;
        self.color = Color::Red;
        x.size = self.size;
        self.update_size();
        x.left = Some(self);
        x
    }

    //          self                x
    //          /  \               / \
    //         x    c     ==>     a  self
    //        / \                    /  \
    //       a   b                  b    c
    //
    /// Makes a left-leaning link lean to the right.
    pub(crate) fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut x = self.left.take().expect("`Node::rotate_right()` - no left child!");
        self.left = x.right.take();
        x.color = self.color;
        self.color = Color::Red;
        x.size = self.size;
        self.update_size();
        x.right = Some(self);
        x
    }

    /// Flips the colors of this node and both of its children.
    pub(crate) fn flip_colors(&mut self) {
        self.color = !self.color;
        let left = self.left.as_mut().expect("`Node::flip_colors()` - no left child!");
        left.color = !left.color;
        let right = self.right.as_mut().expect("`Node::flip_colors()` - no right child!");
        right.color = !right.color;
    }

    /// Assuming this node is red and both `left` and `left.left` are black, makes `left` or
    /// one of its children red.
    pub(crate) fn move_red_left(mut self: Box<Self>) -> Box<Self> {
        self.flip_colors();
        if let Some(right) = self.right.take_if(|right| right.left_is_red()) {
            self.right = Some(right.rotate_right());
            self = self.rotate_left();
            self.flip_colors();
        }
        self
    }

    /// Assuming this node is red and both `right` and `right.left` are black, makes `right`
    /// or one of its children red.
    pub(crate) fn move_red_right(mut self: Box<Self>) -> Box<Self> {
        self.flip_colors();
        if self.left_left_is_red() {
            self = self.rotate_right();
            self.flip_colors();
        }
        self
    }

    /// Repairs the node on the way back up an insertion.
    pub(crate) fn fix_up(mut self: Box<Self>) -> Box<Self> {
        if self.right_is_red() && !self.left_is_red() {
            self = self.rotate_left();
        }
        if self.left_is_red() && self.left_left_is_red() {
            self = self.rotate_right();
        }
        if self.left_is_red() && self.right_is_red() {
            self.flip_colors();
        }
        self.update_size();
        self
    }

    /// Repairs the node on the way back up a deletion.
    ///
    /// Unlike [`Node::fix_up`], any right-leaning red link is rotated, since the descent may
    /// leave a red right child beside a red left child whose own left child is red.
    pub(crate) fn balance(mut self: Box<Self>) -> Box<Self> {
        if self.right_is_red() {
            self = self.rotate_left();
        }
        if self.left_is_red() && self.left_left_is_red() {
            self = self.rotate_right();
        }
        if self.left_is_red() && self.right_is_red() {
            self.flip_colors();
        }
        self.update_size();
        self
    }
}

/// Returns the number of links on the longest downward path; `None` for an empty link.
pub(crate) fn height<K, V>(link: &Link<K, V>) -> Option<usize> {
    let node = link.as_ref()?;
    Some(height(&node.left).max(height(&node.right)).map_or(0, |below| below + 1))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
pub(crate) mod tests {
    use super::*;
    use alloc::vec::Vec;
    use static_assertions::assert_eq_size;

    // An empty link costs no more than a pointer.
    assert_eq_size!(Link<u64, u64>, Box<Node<u64, u64>>);

    /// Builds a node with explicit color and children, computing its size.
    pub(crate) fn node(
        key: i32,
        color: Color,
        left: Link<i32, i32>,
        right: Link<i32, i32>,
    ) -> Box<Node<i32, i32>> {
        let mut node = Node::new(key, key * 10);
        node.color = color;
        node.left = left;
        node.right = right;
        node.update_size();
        node
    }

    pub(crate) fn leaf(key: i32, color: Color) -> Link<i32, i32> {
        Some(node(key, color, None, None))
    }

    fn in_order(link: &Link<i32, i32>, out: &mut Vec<i32>) {
        if let Some(node) = link {
            in_order(&node.left, out);
            out.push(node.key);
            in_order(&node.right, out);
        }
    }

    fn keys(node: &Box<Node<i32, i32>>) -> Vec<i32> {
        let mut out = Vec::new();
        in_order(&Some(node.clone()), &mut out);
        out
    }

    #[test]
    fn new_node_is_red_leaf() {
        let node = Node::new(1, "one");
        assert!(node.is_red());
        assert_eq!(node.size, 1);
        assert!(node.left.is_none());
        assert!(node.right.is_none());
        assert_eq!(node.into_entry(), (1, "one"));
    }

    #[test]
    fn rotate_left_relinks_and_recolors() {
        // 2 (black) with a red right child 4 that has children 3 and 5.
        let right = node(4, Color::Red, leaf(3, Color::Black), leaf(5, Color::Black));
        let h = node(2, Color::Black, leaf(1, Color::Black), Some(right));
        let before = keys(&h);

        let x = h.rotate_left();
        assert_eq!(x.key, 4);
        assert_eq!(x.color, Color::Black);
        assert_eq!(x.size, 5);

        let demoted = x.left.as_ref().unwrap();
        assert_eq!(demoted.key, 2);
        assert_eq!(demoted.color, Color::Red);
        assert_eq!(demoted.size, 3);
        assert_eq!(demoted.right.as_ref().unwrap().key, 3);

        assert_eq!(keys(&x), before);
    }

    #[test]
    fn rotate_right_relinks_and_recolors() {
        let left = node(2, Color::Red, leaf(1, Color::Black), leaf(3, Color::Black));
        let h = node(4, Color::Black, Some(left), leaf(5, Color::Black));
        let before = keys(&h);

        let x = h.rotate_right();
        assert_eq!(x.key, 2);
        assert_eq!(x.color, Color::Black);
        assert_eq!(x.size, 5);

        let demoted = x.right.as_ref().unwrap();
        assert_eq!(demoted.key, 4);
        assert_eq!(demoted.color, Color::Red);
        assert_eq!(demoted.size, 3);
        assert_eq!(demoted.left.as_ref().unwrap().key, 3);

        assert_eq!(keys(&x), before);
    }

    #[test]
    fn rotations_are_inverse() {
        let right = node(4, Color::Red, leaf(3, Color::Black), leaf(5, Color::Black));
        let h = node(2, Color::Black, leaf(1, Color::Black), Some(right));

        let back = h.rotate_left().rotate_right();
        assert_eq!(back.key, 2);
        assert_eq!(back.color, Color::Black);
        assert_eq!(back.right.as_ref().unwrap().key, 4);
        assert_eq!(back.right.as_ref().unwrap().color, Color::Red);
        assert_eq!(back.size, 5);
    }

    #[test]
    #[should_panic(expected = "`Node::rotate_left()` - no right child!")]
    fn rotate_left_without_right_child() {
        let _ = Node::new(1, 1).rotate_left();
    }

    #[test]
    #[should_panic(expected = "`Node::rotate_right()` - no left child!")]
    fn rotate_right_without_left_child() {
        let _ = Node::new(1, 1).rotate_right();
    }

    #[test]
    fn flip_colors_toggles_all_three() {
        let mut h = node(2, Color::Black, leaf(1, Color::Red), leaf(3, Color::Red));
        h.flip_colors();
        assert_eq!(h.color, Color::Red);
        assert!(!h.left_is_red());
        assert!(!h.right_is_red());
        h.flip_colors();
        assert_eq!(h.color, Color::Black);
        assert!(h.left_is_red());
        assert!(h.right_is_red());
    }

    #[test]
    fn fix_up_rotates_lone_right_red() {
        let h = node(1, Color::Black, None, leaf(2, Color::Red));
        let h = h.fix_up();
        assert_eq!(h.key, 2);
        assert_eq!(h.color, Color::Black);
        assert!(h.left_is_red());
        assert!(h.right.is_none());
        assert_eq!(h.size, 2);
    }

    #[test]
    fn fix_up_splits_left_left_reds() {
        let left = node(2, Color::Red, leaf(1, Color::Red), None);
        let h = node(3, Color::Black, Some(left), None);
        let h = h.fix_up();
        // rotate right, then flip: a red parent over two black children.
        assert_eq!(h.key, 2);
        assert_eq!(h.color, Color::Red);
        assert!(!h.left_is_red());
        assert!(!h.right_is_red());
        assert_eq!(h.size, 3);
    }

    #[test]
    fn balance_rotates_right_red_beside_left_red() {
        // The descent can leave this shape behind: both children red, left-left red.
        let left = node(2, Color::Red, leaf(1, Color::Red), None);
        let h = node(3, Color::Black, Some(left), leaf(4, Color::Red));
        let before = keys(&h);
        let h = h.balance();
        assert_eq!(keys(&h), before);
        assert!(!h.right_is_red());
        assert_eq!(h.size, 4);
    }

    #[test]
    fn move_red_left_borrows_from_sibling() {
        // Red parent, black children, sibling has a red left child.
        let right = node(5, Color::Black, leaf(4, Color::Red), None);
        let h = node(2, Color::Red, leaf(1, Color::Black), Some(right));
        let before = keys(&h);

        let h = h.move_red_left();
        assert_eq!(h.key, 4);
        assert_eq!(h.size, 4);
        assert_eq!(keys(&h), before);
        // After the maneuver the path to the left is red-supported.
        let left = h.left.as_ref().unwrap();
        assert!(left.left_is_red() || left.is_red());
    }

    #[test]
    fn move_red_right_borrows_from_sibling() {
        let left = node(2, Color::Black, leaf(1, Color::Red), None);
        let h = node(3, Color::Red, Some(left), leaf(4, Color::Black));
        let before = keys(&h);

        let h = h.move_red_right();
        assert_eq!(h.key, 2);
        assert_eq!(keys(&h), before);
        let right = h.right.as_ref().unwrap();
        assert!(right.is_red() || right.left_is_red() || right.right_is_red());
    }

    #[test]
    fn height_counts_links() {
        assert_eq!(height::<i32, i32>(&None), None);
        assert_eq!(height(&leaf(1, Color::Black)), Some(0));
        let h = node(2, Color::Black, Some(node(1, Color::Red, leaf(0, Color::Black), None)), None);
        assert_eq!(height(&Some(h)), Some(2));
        let h = node(2, Color::Black, leaf(1, Color::Black), leaf(3, Color::Black));
        assert_eq!(height(&Some(h)), Some(1));
    }
}
