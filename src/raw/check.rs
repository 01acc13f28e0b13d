use log::debug;

use super::node::{self, Node};
use super::raw_osrbtree_map::RawOSRBTreeMap;
use crate::error::InvariantViolation;

impl<K: Ord, V> RawOSRBTreeMap<K, V> {
    /// Verifies every structural invariant of the tree, independently of the code that
    /// maintains them.
    ///
    /// This walks the whole tree several times and is meant for tests and diagnostics.
    pub(crate) fn check(&self) -> Result<(), InvariantViolation> {
        let result = self.check_structure();
        if let Err(violation) = result {
            debug!("invariant check failed on a tree of {} nodes: {violation}", self.len());
        }
        result
    }

    fn check_structure(&self) -> Result<(), InvariantViolation> {
        let root = self.root();

        if root.is_some_and(Node::is_red) {
            return Err(InvariantViolation::RedRoot);
        }
        if !is_bst(root, None, None) {
            return Err(InvariantViolation::SymmetricOrder);
        }
        if !is_size_consistent(root) {
            return Err(InvariantViolation::SizeInconsistent);
        }
        if !self.is_rank_consistent() {
            return Err(InvariantViolation::RankInconsistent);
        }
        is_23(root, true)?;
        if !is_balanced(root) {
            return Err(InvariantViolation::Unbalanced);
        }
        Ok(())
    }

    // rank(select(i)) == i for every position, and select(rank(k)) == k for every key.
    fn is_rank_consistent(&self) -> bool {
        let by_position = (0..self.len()).all(|i| self.get_by_rank(i).is_some_and(|node| self.rank(&node.key) == i));

        let mut by_key = true;
        for_each_node(self.root(), &mut |node| {
            by_key &= self.get_by_rank(self.rank(&node.key)).is_some_and(|found| found.key == node.key);
        });

        by_position && by_key
    }
}

fn for_each_node<'a, K, V>(link: Option<&'a Node<K, V>>, f: &mut impl FnMut(&'a Node<K, V>)) {
    if let Some(node) = link {
        for_each_node(node.left.as_deref(), f);
        f(node);
        for_each_node(node.right.as_deref(), f);
    }
}

// Every key strictly between `min` and `max`. Strict order also rules out shared nodes.
fn is_bst<K: Ord, V>(link: Option<&Node<K, V>>, min: Option<&K>, max: Option<&K>) -> bool {
    let Some(node) = link else {
        return true;
    };
    if min.is_some_and(|min| node.key <= *min) || max.is_some_and(|max| node.key >= *max) {
        return false;
    }
    is_bst(node.left.as_deref(), min, Some(&node.key)) && is_bst(node.right.as_deref(), Some(&node.key), max)
}

fn is_size_consistent<K, V>(link: Option<&Node<K, V>>) -> bool {
    let Some(node) = link else {
        return true;
    };
    node.size == node::size(&node.left) + node::size(&node.right) + 1
        && is_size_consistent(node.left.as_deref())
        && is_size_consistent(node.right.as_deref())
}

// No red right links, and at most one red link in a row on any path.
fn is_23<K, V>(link: Option<&Node<K, V>>, is_root: bool) -> Result<(), InvariantViolation> {
    let Some(node) = link else {
        return Ok(());
    };
    if node.right_is_red() {
        return Err(InvariantViolation::RightLeaningRed);
    }
    if !is_root && node.is_red() && node.left_is_red() {
        return Err(InvariantViolation::ConsecutiveRed);
    }
    is_23(node.left.as_deref(), false)?;
    is_23(node.right.as_deref(), false)
}

fn is_balanced<K, V>(root: Option<&Node<K, V>>) -> bool {
    // Black links on the path from the root to the minimum.
    let mut black = 0;
    let mut current = root;
    while let Some(node) = current {
        if !node.is_red() {
            black += 1;
        }
        current = node.left.as_deref();
    }
    has_black_height(root, black)
}

fn has_black_height<K, V>(link: Option<&Node<K, V>>, black: usize) -> bool {
    let Some(node) = link else {
        return black == 0;
    };
    let black = if node.is_red() {
        black
    } else {
        match black.checked_sub(1) {
            Some(black) => black,
            None => return false,
        }
    };
    has_black_height(node.left.as_deref(), black) && has_black_height(node.right.as_deref(), black)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::raw::color::Color;
    use crate::raw::node::tests::{leaf, node};

    fn tree(root: alloc::boxed::Box<Node<i32, i32>>) -> RawOSRBTreeMap<i32, i32> {
        RawOSRBTreeMap::from_root(Some(root))
    }

    #[test]
    fn empty_tree_is_valid() {
        let tree: RawOSRBTreeMap<i32, i32> = RawOSRBTreeMap::new();
        assert_eq!(tree.check(), Ok(()));
    }

    #[test]
    fn valid_three_node_tree() {
        let root = node(2, Color::Black, leaf(1, Color::Black), leaf(3, Color::Black));
        assert_eq!(tree(root).check(), Ok(()));

        let root = node(2, Color::Black, leaf(1, Color::Red), None);
        assert_eq!(tree(root).check(), Ok(()));
    }

    #[test]
    fn detects_red_root() {
        let root = node(2, Color::Red, leaf(1, Color::Black), leaf(3, Color::Black));
        assert_eq!(tree(root).check(), Err(InvariantViolation::RedRoot));
    }

    #[test]
    fn detects_symmetric_order() {
        let root = node(2, Color::Black, leaf(3, Color::Black), leaf(1, Color::Black));
        assert_eq!(tree(root).check(), Err(InvariantViolation::SymmetricOrder));

        // Duplicate keys also break strict order.
        let root = node(2, Color::Black, leaf(2, Color::Black), leaf(3, Color::Black));
        assert_eq!(tree(root).check(), Err(InvariantViolation::SymmetricOrder));
    }

    #[test]
    fn detects_size_inconsistency() {
        let mut root = node(2, Color::Black, leaf(1, Color::Black), leaf(3, Color::Black));
        root.size = 4;
        assert_eq!(tree(root).check(), Err(InvariantViolation::SizeInconsistent));
    }

    #[test]
    fn detects_right_leaning_red() {
        // Black heights agree, so only the lean is wrong.
        let right = node(4, Color::Red, leaf(3, Color::Black), leaf(5, Color::Black));
        let root = node(2, Color::Black, leaf(1, Color::Black), Some(right));
        assert_eq!(tree(root).check(), Err(InvariantViolation::RightLeaningRed));
    }

    #[test]
    fn detects_consecutive_red() {
        let left = node(2, Color::Red, leaf(1, Color::Red), None);
        let root = node(3, Color::Black, Some(left), None);
        assert_eq!(tree(root).check(), Err(InvariantViolation::ConsecutiveRed));
    }

    #[test]
    fn detects_unbalanced_black_height() {
        let root = node(2, Color::Black, leaf(1, Color::Black), None);
        assert_eq!(tree(root).check(), Err(InvariantViolation::Unbalanced));
    }
}
