// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_row_pack --heading-base-level=0

//! Understory Row Pack: greedy row packing with overflow collapsing.
//!
//! This crate decides, for an ordered list of variable-width items and an
//! available width, which items share which row and which trailing items
//! collapse into an overflow ("More") handle. It is the layout core shared by
//! toolbars, button groups, and segmented controls; it knows nothing about
//! what the items are or how they are drawn.
//!
//! The core concepts are:
//!
//! - [`Scalar`]: a small abstraction over `f32`/`f64` used for widths.
//! - [`OverflowStrategy`]: whether to prefer one row with an overflow handle
//!   ([`OverflowStrategy::Menu`]) or wrapping onto more rows
//!   ([`OverflowStrategy::Wrap`]).
//! - [`MaxLines`]: how many rows wrapping may produce before the last row
//!   collapses its remainder.
//! - [`PackOptions`]: strategy, row limit, gap, and overflow handle width for
//!   one pass. [`PackOverrides`] and [`resolve`] merge options from several
//!   configuration layers.
//! - [`pack`] / [`RowPacker`]: the packing pass itself, producing
//!   [`PackedRow`]s.
//! - [`place_rows`]: optional geometry for packed rows as [`kurbo::Rect`]s.
//!
//! Packing is a pure function of its inputs. Hosts call it again whenever the
//! available width or the item set changes (for example on every resize
//! event) and use the latest result.
//!
//! Items are never reordered, dropped, or shrunk. An item wider than the
//! available width is placed anyway; the row then overflows its container.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_row_pack::{MaxLines, OverflowStrategy, PackOptions, Slot, pack};
//!
//! // Five 50px items, 10px apart, in a 120px wide container, at most two rows.
//! let options = PackOptions::new(OverflowStrategy::Wrap)
//!     .with_gap(10.0)
//!     .with_overflow_width(40.0)
//!     .with_max_lines(MaxLines::from_count(2));
//! let rows = pack(&[50.0, 50.0, 50.0, 50.0, 50.0], 120.0, &options);
//!
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[0].visible(), 0..2);
//! // The last permitted row keeps item 2 and folds items 3 and 4 into the handle.
//! assert_eq!(rows[1].visible(), 2..3);
//! assert_eq!(rows[1].overflow(), 3..5);
//! assert_eq!(rows[1].slots().collect::<Vec<_>>(), [Slot::Item(2), Slot::Overflow]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

// Property tests rely on `std` macros such as `format!`.
#[cfg(test)]
#[macro_use]
extern crate std;

mod config;
mod pack;
mod placement;
mod row;
mod scalar;
mod strategy;

#[cfg(test)]
mod properties;

pub use config::{PackOptions, PackOverrides, resolve};
pub use pack::{RowPacker, pack};
pub use placement::{PlacedRow, PlacedSlot, Placement, RowAlign, place_rows};
pub use row::{PackedRow, Slot};
pub use scalar::Scalar;
pub use strategy::{MaxLines, OverflowStrategy};
