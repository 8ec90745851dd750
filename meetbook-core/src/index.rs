//! Positions in a displayed list.

use std::fmt;

/// An index into a displayed list. Users count from one, the lists count
/// from zero; this type holds both views of the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(usize);

impl Index {
    pub fn from_zero_based(index: usize) -> Self {
        Index(index)
    }

    /// Returns `None` for zero.
    pub fn from_one_based(index: usize) -> Option<Self> {
        index.checked_sub(1).map(Index)
    }

    pub fn zero_based(&self) -> usize {
        self.0
    }

    pub fn one_based(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_based_conversion() {
        assert_eq!(Index::from_one_based(0), None);
        let third = Index::from_one_based(3).unwrap();
        assert_eq!(third.zero_based(), 2);
        assert_eq!(third, Index::from_zero_based(2));
        assert_eq!(third.to_string(), "3");
    }
}
