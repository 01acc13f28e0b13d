use core::fmt::{self, Display};

/// Errors reported by fallible tree operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TreeError {
    /// `delete_min` or `delete_max` was called on an empty tree.
    Underflow,
    /// A count argument was outside `0..=len`.
    InvalidArgument {
        /// The requested count.
        k: usize,
        /// The number of elements in the tree at the time of the call.
        len: usize,
    },
}

impl core::error::Error for TreeError {}

impl Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Underflow => write!(f, "tree underflow: cannot delete from an empty tree"),
            Self::InvalidArgument { k, len } => {
                write!(f, "invalid argument: k = {k} is outside 0..={len}")
            }
        }
    }
}

/// A structural invariant found broken by [`OSRBTreeMap::check`](crate::OSRBTreeMap::check).
///
/// Seeing one of these means the balancing code has a bug; no sequence of public
/// operations should ever produce it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum InvariantViolation {
    /// Some key is not strictly between the keys of its ancestors.
    SymmetricOrder,
    /// A node's size differs from `size(left) + size(right) + 1`.
    SizeInconsistent,
    /// `rank` and `select` disagree for some position or key.
    RankInconsistent,
    /// A red link leans right.
    RightLeaningRed,
    /// Two red links in a row.
    ConsecutiveRed,
    /// Two root-to-null paths carry different numbers of black links.
    Unbalanced,
    /// The root is colored red.
    RedRoot,
}

impl core::error::Error for InvariantViolation {}

impl Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::SymmetricOrder => "not in symmetric order",
            Self::SizeInconsistent => "subtree sizes are not consistent",
            Self::RankInconsistent => "ranks are not consistent",
            Self::RightLeaningRed => "red link leans right",
            Self::ConsecutiveRed => "two red links in a row",
            Self::Unbalanced => "black height is not uniform",
            Self::RedRoot => "root is red",
        };
        f.write_str(message)
    }
}
