// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy left-to-right row packing with overflow collapsing.

use alloc::vec::Vec;

use crate::row::SlotWidths;
use crate::{MaxLines, OverflowStrategy, PackOptions, PackedRow, Scalar};

/// Packs `widths` into rows no wider than `available`, following `options`.
///
/// Every index in `0..widths.len()` lands in exactly one returned row, either
/// as a visible item or in that row's overflow range. Items are never
/// reordered, dropped, or shrunk: an item wider than `available` is placed
/// anyway and the row overflows its container.
///
/// - [`OverflowStrategy::Menu`] keeps everything on one row when it fits.
///   Otherwise it accepts items while there is still room for the overflow
///   handle and folds the rest into it. If not even the first item fits next
///   to the handle, the pass falls back to [`OverflowStrategy::Wrap`].
/// - [`OverflowStrategy::Wrap`] fills rows greedily. The last row permitted by
///   [`PackOptions::max_lines`] collapses whatever does not fit into a handle.
///
/// All comparisons are inclusive: an item that exactly fills the remaining
/// space is accepted.
///
/// ```rust
/// use understory_row_pack::{OverflowStrategy, PackOptions, Slot, pack};
///
/// let options = PackOptions::new(OverflowStrategy::Menu)
///     .with_gap(10.0)
///     .with_overflow_width(40.0);
/// let rows = pack(&[50.0, 50.0, 50.0, 50.0], 150.0, &options);
///
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].visible(), 0..1);
/// assert_eq!(rows[0].overflow(), 1..4);
/// assert_eq!(rows[0].slots().last(), Some(Slot::Overflow));
/// ```
#[must_use]
pub fn pack<S: Scalar>(widths: &[S], available: S, options: &PackOptions<S>) -> Vec<PackedRow<S>> {
    RowPacker::new(*options).pack(widths, available)
}

/// A reusable packer bound to one set of [`PackOptions`].
///
/// The packer holds no state between calls; [`RowPacker::pack`] is a pure
/// function of its arguments and the options, so it can be invoked on every
/// resize without any invalidation.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RowPacker<S: Scalar> {
    options: PackOptions<S>,
}

impl<S: Scalar> RowPacker<S> {
    /// Creates a packer for `options`. Negative widths in `options` are clamped to zero.
    #[must_use]
    pub fn new(options: PackOptions<S>) -> Self {
        Self {
            options: options.sanitized(),
        }
    }

    /// Returns the options this packer applies.
    #[must_use]
    pub const fn options(&self) -> &PackOptions<S> {
        &self.options
    }

    /// Packs `widths` into rows no wider than `available`.
    ///
    /// See [`pack`] for the full contract.
    #[must_use]
    pub fn pack(&self, widths: &[S], available: S) -> Vec<PackedRow<S>> {
        if widths.is_empty() {
            return Vec::new();
        }
        debug_assert!(
            available.partial_cmp(&available).is_some(),
            "available width must not be NaN"
        );
        let pass = Pass {
            widths,
            available: available.non_negative(),
            gap: self.options.gap,
            overflow_width: self.options.overflow_width,
        };
        match self.options.strategy {
            OverflowStrategy::Menu => pass.menu(self.options.max_lines),
            OverflowStrategy::Wrap => pass.wrap(0, self.options.max_lines),
        }
    }
}

/// Inputs of a single packing pass.
struct Pass<'a, S: Scalar> {
    widths: &'a [S],
    available: S,
    gap: S,
    overflow_width: S,
}

impl<S: Scalar> Pass<'_, S> {
    fn len(&self) -> usize {
        self.widths.len()
    }

    fn width(&self, index: usize) -> S {
        let w = self.widths[index];
        debug_assert!(w.is_finite(), "item widths must be finite; got {w:?}");
        w.non_negative()
    }

    /// Width of the handle plus the gap separating it from the last item.
    fn handle_reserve(&self) -> S {
        self.gap + self.overflow_width
    }

    /// Returns `true` if `start..len` fits on one row without a handle.
    fn fits_all(&self, start: usize) -> bool {
        let mut running = self.width(start);
        for i in start + 1..self.len() {
            running = running + self.gap + self.width(i);
            if running > self.available {
                return false;
            }
        }
        running <= self.available
    }

    fn menu(&self, max_lines: MaxLines) -> Vec<PackedRow<S>> {
        if self.fits_all(0) {
            return alloc::vec![self.plain_row(0, self.len())];
        }
        if self.width(0) + self.handle_reserve() > self.available {
            tracing::debug!(
                items = self.len(),
                "first item and overflow handle do not fit; wrapping instead"
            );
            return self.wrap(0, max_lines);
        }
        alloc::vec![self.collapse_row(0)]
    }

    fn wrap(&self, mut start: usize, max_lines: MaxLines) -> Vec<PackedRow<S>> {
        let len = self.len();
        let mut rows = Vec::new();
        while start < len {
            if max_lines.is_last_row(rows.len()) {
                rows.push(self.collapse_row(start));
                break;
            }
            let mut end = start + 1;
            let mut running = self.width(start);
            if running > self.available {
                tracing::trace!(index = start, "item wider than the row; placing it alone");
            }
            while end < len {
                let next = running + self.gap + self.width(end);
                if next > self.available {
                    break;
                }
                running = next;
                end += 1;
            }
            rows.push(self.plain_row(start, end));
            start = end;
        }
        rows
    }

    /// Builds the final row from `start`, folding whatever does not fit
    /// next to the handle into it.
    ///
    /// The first item is always placed, even if it and the handle together
    /// exceed the available width.
    fn collapse_row(&self, start: usize) -> PackedRow<S> {
        let len = self.len();
        if self.fits_all(start) {
            return self.plain_row(start, len);
        }
        let reserve = self.handle_reserve();
        let mut end = start + 1;
        let mut running = self.width(start);
        while end < len {
            let mut needed = running + self.gap + self.width(end);
            if end + 1 < len {
                needed = needed + reserve;
            }
            if needed > self.available {
                break;
            }
            running = running + self.gap + self.width(end);
            end += 1;
        }
        if end == len {
            return self.plain_row(start, len);
        }
        let mut widths: SlotWidths<S> = (start..end).map(|i| self.width(i)).collect();
        widths.push(self.overflow_width);
        PackedRow::new(start..end, end..len, widths, self.gap)
    }

    fn plain_row(&self, start: usize, end: usize) -> PackedRow<S> {
        let widths = (start..end).map(|i| self.width(i)).collect();
        PackedRow::new(start..end, end..end, widths, self.gap)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{RowPacker, pack};
    use crate::{MaxLines, OverflowStrategy, PackOptions, PackedRow, Slot};

    fn menu(gap: f64, overflow_width: f64) -> PackOptions<f64> {
        PackOptions::new(OverflowStrategy::Menu)
            .with_gap(gap)
            .with_overflow_width(overflow_width)
    }

    fn wrap(gap: f64, overflow_width: f64, max_lines: Option<usize>) -> PackOptions<f64> {
        PackOptions::new(OverflowStrategy::Wrap)
            .with_gap(gap)
            .with_overflow_width(overflow_width)
            .with_max_lines(max_lines)
    }

    fn spans(rows: &[PackedRow<f64>]) -> Vec<(core::ops::Range<usize>, core::ops::Range<usize>)> {
        rows.iter().map(|r| (r.visible(), r.overflow())).collect()
    }

    #[test]
    fn everything_fits_on_one_row() {
        let rows = pack(&[50.0, 50.0, 50.0], 200.0, &menu(10.0, 40.0));
        assert_eq!(spans(&rows), [(0..3, 3..3)]);
        assert_eq!(rows[0].extent(), 170.0);
    }

    #[test]
    fn menu_reserves_room_for_the_handle() {
        let rows = pack(&[50.0, 50.0, 50.0, 50.0], 150.0, &menu(10.0, 40.0));
        assert_eq!(spans(&rows), [(0..1, 1..4)]);
        assert_eq!(rows[0].widths(), [50.0, 40.0]);
        assert_eq!(rows[0].extent(), 100.0);
    }

    #[test]
    fn oversized_single_item_is_placed() {
        let rows = pack(&[300.0], 100.0, &menu(10.0, 40.0));
        assert_eq!(spans(&rows), [(0..1, 1..1)]);
        assert_eq!(rows[0].extent(), 300.0);
    }

    #[test]
    fn wrap_collapses_the_last_permitted_row() {
        let rows = pack(
            &[50.0, 50.0, 50.0, 50.0, 50.0],
            120.0,
            &wrap(10.0, 40.0, Some(2)),
        );
        assert_eq!(spans(&rows), [(0..2, 2..2), (2..3, 3..5)]);
        let slots: Vec<_> = rows[1].slots().collect();
        assert_eq!(slots, [Slot::Item(2), Slot::Overflow]);
    }

    #[test]
    fn empty_input_yields_no_rows() {
        assert!(pack::<f64>(&[], 100.0, &menu(10.0, 40.0)).is_empty());
        assert!(pack::<f64>(&[], 100.0, &wrap(10.0, 40.0, Some(1))).is_empty());
    }

    #[test]
    fn exact_fit_is_accepted() {
        // 50 + 10 + 40 == 100 with the handle reserved.
        let rows = pack(&[50.0, 50.0, 50.0], 100.0, &menu(10.0, 40.0));
        assert_eq!(spans(&rows), [(0..1, 1..3)]);
        // 40 + 10 + 50 == 100 without a handle.
        let rows = pack(&[40.0, 50.0], 100.0, &menu(10.0, 40.0));
        assert_eq!(spans(&rows), [(0..2, 2..2)]);
    }

    #[test]
    fn handle_space_is_reserved_only_while_items_remain() {
        let rows = pack(&[30.0, 30.0, 30.0, 30.0], 100.0, &menu(5.0, 20.0));
        // 30+5+30+5+20 = 90 fits, 30+5+30+5+30+5+20 = 125 does not.
        assert_eq!(spans(&rows), [(0..2, 2..4)]);

        // 35 would not fit beside the handle, but nothing follows it.
        let rows = pack(&[30.0, 30.0, 35.0], 100.0, &menu(0.0, 20.0));
        assert_eq!(spans(&rows), [(0..3, 3..3)]);
    }

    #[test]
    fn menu_falls_back_to_wrap_when_handle_cannot_fit() {
        // 80 + 10 + 40 > 100, so collapsing would leave nothing useful.
        let rows = pack(&[80.0, 80.0, 80.0], 100.0, &menu(10.0, 40.0));
        assert_eq!(spans(&rows), [(0..1, 1..1), (1..2, 2..2), (2..3, 3..3)]);
    }

    #[test]
    fn menu_fallback_honors_max_lines() {
        let options = menu(10.0, 40.0).with_max_lines(Some(2));
        let rows = pack(&[80.0, 80.0, 80.0], 100.0, &options);
        assert_eq!(spans(&rows), [(0..1, 1..1), (1..2, 2..3)]);
    }

    #[test]
    fn menu_never_wraps_after_an_overflow_row() {
        let options = menu(10.0, 40.0).with_max_lines(None);
        let rows = pack(&[50.0; 10], 150.0, &options);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].overflow(), 1..10);
    }

    #[test]
    fn unlimited_wrap_never_overflows() {
        let rows = pack(&[60.0, 70.0, 20.0, 90.0, 5.0], 100.0, &wrap(5.0, 40.0, None));
        assert_eq!(spans(&rows), [(0..1, 1..1), (1..3, 3..3), (3..5, 5..5)]);
        assert!(rows.iter().all(|r| !r.has_overflow()));
    }

    #[test]
    fn zero_available_width_forces_one_item_per_row() {
        let rows = pack(&[10.0, 20.0, 30.0], 0.0, &wrap(2.0, 8.0, None));
        assert_eq!(spans(&rows), [(0..1, 1..1), (1..2, 2..2), (2..3, 3..3)]);

        let rows = pack(&[10.0, 20.0, 30.0], -5.0, &menu(2.0, 8.0));
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn zero_max_lines_behaves_like_one() {
        let zero = pack(&[50.0; 5], 120.0, &wrap(10.0, 40.0, Some(0)));
        let one = pack(&[50.0; 5], 120.0, &wrap(10.0, 40.0, Some(1)));
        assert_eq!(zero, one);
        assert_eq!(spans(&zero), [(0..1, 1..5)]);
    }

    #[test]
    fn last_row_force_places_first_item_beside_handle() {
        let rows = pack(&[50.0, 200.0, 50.0], 100.0, &wrap(10.0, 40.0, Some(2)));
        assert_eq!(spans(&rows), [(0..1, 1..1), (1..2, 2..3)]);
        assert!(rows[1].extent() > 100.0);
    }

    #[test]
    fn last_row_without_leftovers_has_no_handle() {
        let rows = pack(&[50.0, 50.0, 50.0], 120.0, &wrap(10.0, 40.0, Some(2)));
        assert_eq!(spans(&rows), [(0..2, 2..2), (2..3, 3..3)]);
    }

    #[test]
    fn negative_widths_are_treated_as_zero() {
        let rows = pack(&[-10.0, 50.0], 50.0, &menu(0.0, 10.0));
        assert_eq!(spans(&rows), [(0..2, 2..2)]);
        assert_eq!(rows[0].widths(), [0.0, 50.0]);
    }

    #[test]
    fn packer_is_reusable_and_pure() {
        let packer = RowPacker::new(wrap(10.0, 40.0, Some(2)));
        let widths = [50.0, 20.0, 70.0, 30.0, 50.0];
        let first = packer.pack(&widths, 120.0);
        let narrower = packer.pack(&widths, 60.0);
        let again = packer.pack(&widths, 120.0);
        assert_eq!(first, again);
        assert_ne!(first, narrower);
        assert_eq!(packer.options().max_lines, MaxLines::from_count(2));
    }

    #[test]
    fn f32_widths_pack_identically() {
        let options = PackOptions::<f32>::new(OverflowStrategy::Menu)
            .with_gap(10.0)
            .with_overflow_width(40.0);
        let rows = pack(&[50.0_f32, 50.0, 50.0, 50.0], 150.0, &options);
        assert_eq!(rows[0].visible(), 0..1);
        assert_eq!(rows[0].overflow(), 1..4);
    }
}
