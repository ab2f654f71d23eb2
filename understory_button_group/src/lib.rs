// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_button_group --heading-base-level=0

//! Understory Button Group: connected and standard button groups with
//! overflow menus.
//!
//! This crate builds on [`understory_row_pack`] to lay out a row of segments
//! (toolbar buttons, segmented-control options, split buttons) and to decide
//! what happens when one of them is pressed. It does not draw anything.
//!
//! - [`Item`] describes a segment: a value, an optional label and icon, an
//!   optional [`MenuEntry`] menu, and split/enabled flags. Anything shown in an
//!   overflow menu declares its label and icon through [`SegmentContent`].
//! - [`WidthEstimator`] measures segments. [`MetricsEstimator`] estimates from
//!   fixed metrics; [`CachedEstimator`] memoizes any estimator.
//! - [`Variant`] picks packing defaults: [`Variant::Connected`] collapses into
//!   an overflow handle, [`Variant::Standard`] wraps. [`GroupOptions`] layers
//!   explicit, per-instance, and global overrides on top.
//! - [`synthesize`] and [`to_menu_entries`] build the overflow handle and its
//!   menu from the collapsed items.
//! - [`Group`] ties these together: [`Group::layout`] returns a
//!   [`GroupLayout`] and [`Group::activate`] reports [`GroupEvent`]s.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_button_group::{
//!     Group, GroupEvent, GroupOptions, Item, MetricsEstimator, Target, Variant,
//! };
//!
//! let items = vec![
//!     Item::new("day").with_label("Day"),
//!     Item::new("week").with_label("Week"),
//!     Item::new("month").with_label("Month"),
//!     Item::new("year").with_label("Year"),
//! ];
//! let group = Group::new(items, Variant::Connected).selecting(Some("week"));
//!
//! let mut estimator = MetricsEstimator {
//!     padding: 12.0,
//!     char_advance: 8.0,
//!     icon_extent: 16.0,
//!     icon_spacing: 6.0,
//!     chevron_extent: 20.0,
//! };
//! let layout = group.layout(160.0_f32, &mut estimator, &GroupOptions::none());
//!
//! // "Day" and "Week" fit next to the handle; the rest collapse into it.
//! let row = &layout.rows()[0];
//! assert_eq!(row.visible(), 0..2);
//! let handle = layout.handle(0).unwrap();
//! assert_eq!(handle.entries.len(), 2);
//!
//! // Choosing a collapsed item reports the same event as pressing it.
//! let mut events = Vec::new();
//! group.activate(Target::Overflow(&handle.entries[0]), |e| events.push(e));
//! assert_eq!(events, [GroupEvent::SelectionChanged("month")]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards `std` to `understory_row_pack`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod group;
mod item;
mod measure;
mod menu;
mod overflow;
mod variant;

pub use group::{Group, GroupEvent, GroupLayout, GroupMode, Target};
pub use item::{IconId, Item, ItemFlags, SegmentContent, SegmentMetrics};
pub use measure::{CachedEstimator, MetricsEstimator, WidthEstimator};
pub use menu::{Checked, EntryFlags, FlatEntry, MenuEntry, flatten_menu};
pub use overflow::{OverflowEntry, OverflowHandle, fallback_label, synthesize, to_menu_entries};
pub use variant::{ButtonSize, GroupOptions, Variant};

pub use understory_row_pack;
