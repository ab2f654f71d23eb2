// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning packed rows into rectangles.
//!
//! Packing only decides *which* slots share a row. Hosts that want concrete
//! geometry can run [`place_rows`] to get a [`kurbo::Rect`] per slot, laid out
//! left to right within each row and stacking rows top to bottom.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::{PackedRow, Scalar, Slot};

/// Horizontal alignment of a row within the available width.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RowAlign {
    /// Flush with the leading edge.
    #[default]
    Start,
    /// Centered.
    Center,
    /// Flush with the trailing edge.
    End,
}

/// Geometry parameters for [`place_rows`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Placement {
    /// Top-left corner of the first row.
    pub origin: Point,
    /// Width the rows were packed into; used for alignment.
    pub available_width: f64,
    /// Height of every row.
    pub row_height: f64,
    /// Space between adjacent slots in a row. Should match the packing gap.
    pub gap: f64,
    /// Space between consecutive rows.
    pub run_gap: f64,
    /// Alignment of each row.
    pub align: RowAlign,
}

/// A slot with its placed bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacedSlot {
    /// Which slot this is.
    pub slot: Slot,
    /// Bounds of the slot.
    pub rect: Rect,
}

/// A row with its placed bounds and slots.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedRow {
    /// Bounds covering every slot of the row.
    pub bounds: Rect,
    /// Slots in display order; the overflow handle, if any, is last.
    pub slots: Vec<PlacedSlot>,
}

impl PlacedRow {
    /// Returns the bounds of the overflow handle, if this row has one.
    #[must_use]
    pub fn overflow_rect(&self) -> Option<Rect> {
        self.slots
            .last()
            .filter(|s| s.slot == Slot::Overflow)
            .map(|s| s.rect)
    }
}

/// Computes slot rectangles for `rows`.
///
/// Rows wider than [`Placement::available_width`] are always placed at the
/// leading edge, whatever the alignment, so their overflowing part extends
/// past the trailing edge only.
///
/// ```rust
/// use understory_row_pack::{OverflowStrategy, PackOptions, Placement, pack, place_rows};
///
/// let options = PackOptions::new(OverflowStrategy::Wrap).with_gap(10.0);
/// let rows = pack(&[50.0, 50.0, 50.0], 120.0, &options);
/// let placed = place_rows(&rows, &Placement {
///     available_width: 120.0,
///     row_height: 32.0,
///     gap: 10.0,
///     run_gap: 4.0,
///     ..Placement::default()
/// });
///
/// assert_eq!(placed.len(), 2);
/// assert_eq!(placed[1].slots[0].rect.y0, 36.0);
/// ```
#[must_use]
pub fn place_rows<S: Scalar>(rows: &[PackedRow<S>], placement: &Placement) -> Vec<PlacedRow> {
    let mut placed = Vec::with_capacity(rows.len());
    let mut y = placement.origin.y;
    for row in rows {
        let extent = row.extent().to_f64();
        let slack = (placement.available_width - extent).max(0.0);
        let lead = match placement.align {
            RowAlign::Start => 0.0,
            RowAlign::Center => slack / 2.0,
            RowAlign::End => slack,
        };
        let mut x = placement.origin.x + lead;
        let mut slots = Vec::with_capacity(row.slot_count());
        for (slot, width) in row.slots_with_widths() {
            let rect = Rect::from_origin_size(
                Point::new(x, y),
                Size::new(width.to_f64(), placement.row_height),
            );
            slots.push(PlacedSlot { slot, rect });
            x += width.to_f64() + placement.gap;
        }
        let bounds = Rect::from_origin_size(
            Point::new(placement.origin.x + lead, y),
            Size::new(extent, placement.row_height),
        );
        placed.push(PlacedRow { bounds, slots });
        y += placement.row_height + placement.run_gap;
    }
    placed
}
