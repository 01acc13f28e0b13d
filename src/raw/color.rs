use core::ops::Not;

/// The color of the link from a node's parent to the node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Color {
    Red,
    Black,
}

impl Color {
    #[inline]
    pub(crate) const fn is_red(self) -> bool {
        matches!(self, Color::Red)
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use static_assertions::assert_eq_size;

    // A two-valued enum leaves a niche for `Option`.
    assert_eq_size!(Color, Option<Color>);
    assert_eq_size!(Color, u8);

    #[test]
    fn not_flips() {
        assert_eq!(!Color::Red, Color::Black);
        assert_eq!(!Color::Black, Color::Red);
        assert_eq!(!!Color::Red, Color::Red);
    }

    #[test]
    fn is_red() {
        assert!(Color::Red.is_red());
        assert!(!Color::Black.is_red());
    }
}
