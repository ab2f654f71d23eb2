// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overflow policy types.

use core::num::NonZeroUsize;

/// Policy deciding whether overflow or wrapping is preferred when content
/// exceeds the available width.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverflowStrategy {
    /// Collapse-first: keep a single row and fold trailing items into an
    /// overflow handle.
    ///
    /// Falls back to [`OverflowStrategy::Wrap`] only when not even the first
    /// item and the handle fit side by side.
    #[default]
    Menu,
    /// Wrap-first: fill rows greedily; only the last permitted row (see
    /// [`MaxLines`]) collapses its remainder into an overflow handle.
    Wrap,
}

/// Upper bound on the number of rows produced by wrapping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MaxLines {
    /// No limit. Wrapping never synthesizes an overflow handle.
    #[default]
    Unlimited,
    /// At most this many rows; the last one collapses whatever is left.
    Limited(NonZeroUsize),
}

impl MaxLines {
    /// A single row.
    pub const ONE: Self = Self::Limited(NonZeroUsize::MIN);

    /// Builds a limit from a raw row count.
    ///
    /// A count of zero cannot produce a usable layout and is treated as one row.
    #[must_use]
    pub fn from_count(count: usize) -> Self {
        match NonZeroUsize::new(count) {
            Some(n) => Self::Limited(n),
            None => {
                tracing::debug!("max_lines of 0 treated as a single row");
                Self::ONE
            }
        }
    }

    /// Builds a limit from an optional count, where `None` means unlimited.
    #[must_use]
    pub fn from_option(count: Option<usize>) -> Self {
        count.map_or(Self::Unlimited, Self::from_count)
    }

    /// Returns the row limit, or `None` if unlimited.
    #[must_use]
    pub const fn get(self) -> Option<usize> {
        match self {
            Self::Unlimited => None,
            Self::Limited(n) => Some(n.get()),
        }
    }

    /// Returns `true` if a row at zero-based position `row` is the last one
    /// this limit permits.
    #[must_use]
    pub const fn is_last_row(self, row: usize) -> bool {
        match self {
            Self::Unlimited => false,
            Self::Limited(n) => row + 1 >= n.get(),
        }
    }
}

impl From<Option<usize>> for MaxLines {
    fn from(count: Option<usize>) -> Self {
        Self::from_option(count)
    }
}

#[cfg(test)]
mod tests {
    use super::MaxLines;

    #[test]
    fn zero_count_clamps_to_one_row() {
        assert_eq!(MaxLines::from_count(0), MaxLines::ONE);
        assert_eq!(MaxLines::from_option(Some(0)).get(), Some(1));
    }

    #[test]
    fn none_is_unlimited() {
        assert_eq!(MaxLines::from(None), MaxLines::Unlimited);
        assert!(!MaxLines::Unlimited.is_last_row(1000));
    }

    #[test]
    fn last_row_detection() {
        let lines = MaxLines::from_count(3);
        assert!(!lines.is_last_row(0));
        assert!(!lines.is_last_row(1));
        assert!(lines.is_last_row(2));
        assert!(MaxLines::ONE.is_last_row(0));
    }
}
