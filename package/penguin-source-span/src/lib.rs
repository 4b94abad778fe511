#![deny(clippy::all)]
#![warn(clippy::pedantic, clippy::nursery)]

use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;

/// 1-based line number of the raw source a logical line came from.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd, Hash)]
pub struct LineNumber(NonZeroUsize);

impl LineNumber {
    /// Converts a 0-based index (as produced by `enumerate`) into a line number.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        match NonZeroUsize::new(index.saturating_add(1)) {
            Some(n) => Self(n),
            // saturating_add(1) on usize::MAX stays at usize::MAX, which is non-zero
            None => Self(NonZeroUsize::MAX),
        }
    }

    #[must_use]
    pub const fn try_new(line: usize) -> Option<Self> {
        match NonZeroUsize::new(line) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// 0-based index into the raw line list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0.get() - 1
    }
}

impl Display for LineNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Pointed<T> {
    pub data: T,
    pub line: LineNumber,
}

impl<T> Pointed<T> {
    pub const fn new(data: T, line: LineNumber) -> Self {
        Self { data, line }
    }
}

#[cfg(test)]
mod tests {
    use crate::LineNumber;

    #[test]
    fn line_number_order() {
        assert!(LineNumber::try_new(1).unwrap() < LineNumber::try_new(2).unwrap());
        assert!(LineNumber::try_new(usize::MAX - 1).unwrap() < LineNumber::try_new(usize::MAX).unwrap());
    }

    #[test]
    fn from_index_is_one_based() {
        assert_eq!(LineNumber::from_index(0).get(), 1);
        assert_eq!(LineNumber::from_index(41).get(), 42);
        assert_eq!(LineNumber::from_index(41).index(), 41);
        assert_eq!(LineNumber::from_index(usize::MAX).get(), usize::MAX);
    }

    #[test]
    fn zero_is_rejected() {
        assert!(LineNumber::try_new(0).is_none());
    }

    #[test]
    fn display_is_plain_number() {
        assert_eq!(LineNumber::from_index(2).to_string(), "3");
    }
}
