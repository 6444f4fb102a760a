//! One-based / zero-based list index

/// Position of an entry in a displayed list.
///
/// Users see one-based positions; collections are zero-based. The value is
/// stored zero-based and converted on the way in and out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(usize);

impl Index {
    /// Create from a zero-based offset
    pub fn from_zero_based(zero_based: usize) -> Self {
        Self(zero_based)
    }

    /// Create from a one-based position. Returns `None` for 0.
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(Self)
    }

    pub fn zero_based(&self) -> usize {
        self.0
    }

    pub fn one_based(&self) -> usize {
        self.0 + 1
    }
}

impl core::fmt::Display for Index {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        let index = Index::from_one_based(3).unwrap();
        assert_eq!(index.zero_based(), 2);
        assert_eq!(index.one_based(), 3);
        assert_eq!(index, Index::from_zero_based(2));
    }

    #[test]
    fn test_one_based_zero_is_rejected() {
        assert!(Index::from_one_based(0).is_none());
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(Index::from_zero_based(0).to_string(), "1");
    }
}
