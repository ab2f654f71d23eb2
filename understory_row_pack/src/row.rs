// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The packed row produced by a packing pass.

use core::ops::Range;

use smallvec::SmallVec;

use crate::Scalar;

/// One visible slot of a [`PackedRow`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The original item at this index.
    Item(usize),
    /// The synthesized overflow handle standing in for the row's overflow items.
    Overflow,
}

/// Inline storage for slot widths; most rows hold a handful of segments.
pub(crate) type SlotWidths<S> = SmallVec<[S; 8]>;

/// One line of visible items, possibly ending in an overflow handle.
///
/// A row always covers a contiguous run of the original item indices:
/// [`visible`](Self::visible) items first, then the [`overflow`](Self::overflow)
/// items that the handle represents. Rows returned by a single pass cover
/// `0..len` without gaps or repeats.
#[derive(Clone, Debug, PartialEq)]
pub struct PackedRow<S: Scalar> {
    visible: Range<usize>,
    overflow: Range<usize>,
    widths: SlotWidths<S>,
    extent: S,
}

impl<S: Scalar> PackedRow<S> {
    pub(crate) fn new(
        visible: Range<usize>,
        overflow: Range<usize>,
        widths: SlotWidths<S>,
        gap: S,
    ) -> Self {
        debug_assert_eq!(
            visible.end, overflow.start,
            "overflow items must directly follow the visible items"
        );
        let slots = visible.len() + usize::from(!overflow.is_empty());
        debug_assert_eq!(widths.len(), slots, "one width per visible slot");
        let mut extent = S::zero();
        for (i, w) in widths.iter().copied().enumerate() {
            if i > 0 {
                extent = extent + gap;
            }
            extent = extent + w;
        }
        Self {
            visible,
            overflow,
            widths,
            extent,
        }
    }

    /// Indices of the items shown directly in this row.
    #[must_use]
    pub fn visible(&self) -> Range<usize> {
        self.visible.clone()
    }

    /// Indices of the items folded into this row's overflow handle.
    #[must_use]
    pub fn overflow(&self) -> Range<usize> {
        self.overflow.clone()
    }

    /// Indices of every item this row accounts for, visible or folded.
    #[must_use]
    pub fn items(&self) -> Range<usize> {
        self.visible.start..self.overflow.end
    }

    /// Returns `true` if this row ends with an overflow handle.
    #[must_use]
    pub fn has_overflow(&self) -> bool {
        !self.overflow.is_empty()
    }

    /// Number of visible slots, counting the overflow handle.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.widths.len()
    }

    /// Widths of the visible slots in display order; the handle is last.
    #[must_use]
    pub fn widths(&self) -> &[S] {
        &self.widths
    }

    /// Total width of the row including gaps between slots.
    ///
    /// This may exceed the available width when an item had to be
    /// force-placed.
    #[must_use]
    pub fn extent(&self) -> S {
        self.extent
    }

    /// Iterates the visible slots in display order.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.visible
            .clone()
            .map(Slot::Item)
            .chain(self.has_overflow().then_some(Slot::Overflow))
    }

    /// Iterates the visible slots together with their widths.
    pub fn slots_with_widths(&self) -> impl Iterator<Item = (Slot, S)> + '_ {
        self.slots().zip(self.widths.iter().copied())
    }

    /// Resolves the directly visible items against the caller's item list.
    ///
    /// # Panics
    ///
    /// Panics if `items` is shorter than the list this row was packed from.
    #[must_use]
    pub fn visible_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.visible.clone()]
    }

    /// Resolves the overflow items against the caller's item list.
    ///
    /// # Panics
    ///
    /// Panics if `items` is shorter than the list this row was packed from.
    #[must_use]
    pub fn overflow_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.overflow.clone()]
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use smallvec::smallvec;

    use super::{PackedRow, Slot};

    #[test]
    fn slots_end_with_overflow_handle() {
        let row = PackedRow::new(2..4, 4..7, smallvec![10.0_f32, 20.0, 5.0], 2.0);
        let slots: Vec<_> = row.slots().collect();
        assert_eq!(slots, [Slot::Item(2), Slot::Item(3), Slot::Overflow]);
        assert_eq!(row.items(), 2..7);
        assert!(row.has_overflow());
        assert_eq!(row.extent(), 39.0);
    }

    #[test]
    fn row_without_overflow_has_no_handle() {
        let row = PackedRow::new(0..2, 2..2, smallvec![10.0_f64, 10.0], 0.0);
        assert!(!row.has_overflow());
        assert_eq!(row.slot_count(), 2);
        assert_eq!(row.slots().last(), Some(Slot::Item(1)));
    }

    #[test]
    fn resolves_items_by_range() {
        let items = ["a", "b", "c", "d"];
        let row = PackedRow::new(0..1, 1..4, smallvec![1.0_f32, 1.0], 0.0);
        assert_eq!(row.visible_items(&items), ["a"]);
        assert_eq!(row.overflow_items(&items), ["b", "c", "d"]);
    }
}
