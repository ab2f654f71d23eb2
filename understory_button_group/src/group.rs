// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The group controller: layout and activation dispatch.
//!
//! A [`Group`] owns its items, a [`Variant`], and a [`GroupMode`]. Layout
//! measures the items, packs them into rows, and synthesizes one overflow
//! handle per row that needs it. Activation turns a [`Target`] (what the user
//! pressed) into an ordered sequence of [`GroupEvent`]s delivered to a handler
//! closure.
//!
//! Selection state is owned by the host. The group reports what was pressed
//! and the host calls [`Group::set_current`] with whatever it decides the new
//! value is.

use alloc::vec::Vec;
use core::iter;
use core::ops::Range;

use understory_row_pack::{PackedRow, PlacedRow, Placement, Scalar, pack, place_rows};

use crate::{
    Checked, GroupOptions, Item, MenuEntry, OverflowEntry, OverflowHandle, SegmentMetrics,
    Variant, WidthEstimator, flatten_menu, synthesize,
};

/// Whether pressing a segment selects it or fires an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroupMode<V> {
    /// Single-select: at most one segment, the one whose value equals
    /// `current`, is shown as selected.
    Selection {
        /// The currently selected value, if any.
        current: Option<V>,
    },
    /// Every press fires an action; nothing is shown as selected.
    Action,
}

impl<V> Default for GroupMode<V> {
    fn default() -> Self {
        Self::Action
    }
}

impl<V: PartialEq> GroupMode<V> {
    /// Returns `true` if `value` is the selected value.
    pub fn is_selected(&self, value: &V) -> bool {
        match self {
            Self::Selection { current } => current.as_ref() == Some(value),
            Self::Action => false,
        }
    }
}

/// An event produced by [`Group::activate`].
#[derive(Clone, Debug, PartialEq)]
pub enum GroupEvent<V> {
    /// The primary region of a split button was pressed. Always precedes the
    /// mode event for the same press.
    PrimaryPressed(V),
    /// A segment was pressed in selection mode.
    SelectionChanged(V),
    /// A segment was pressed in action mode.
    Action(V),
    /// The menu of the item with this value should open.
    MenuOpened(V),
    /// An entry of the menu owned by `owner` was chosen. Always precedes the
    /// matching [`GroupEvent::EntryAction`].
    MenuItemSelected {
        /// Value of the item owning the menu.
        owner: V,
        /// The chosen entry, without its submenu.
        entry: MenuEntry<V>,
    },
    /// The value attached to a chosen menu entry.
    EntryAction(V),
}

/// What the user pressed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Target<'a, V> {
    /// The segment at this item index, or the primary region of a split button.
    Segment(usize),
    /// The chevron of the split button at this item index.
    Chevron(usize),
    /// An entry of an item's menu.
    MenuEntry {
        /// Item index.
        item: usize,
        /// Index into [`flatten_menu`] of the item's menu.
        entry: usize,
    },
    /// An entry of an overflow handle's menu.
    Overflow(&'a OverflowEntry<V>),
}

/// A group of segments sharing one layout and one dispatch policy.
#[derive(Clone, Debug)]
pub struct Group<V> {
    items: Vec<Item<V>>,
    variant: Variant,
    mode: GroupMode<V>,
    overflow_template: Option<Item<V>>,
}

impl<V: Clone + PartialEq> Group<V> {
    /// Creates a group in action mode.
    pub fn new(items: Vec<Item<V>>, variant: Variant) -> Self {
        Self {
            items,
            variant,
            mode: GroupMode::Action,
            overflow_template: None,
        }
    }

    /// Switches to selection mode with the given current value.
    #[must_use]
    pub fn selecting(mut self, current: Option<V>) -> Self {
        self.mode = GroupMode::Selection { current };
        self
    }

    /// Sets the template whose label and icon the overflow handle shows.
    #[must_use]
    pub fn with_overflow_template(mut self, template: Item<V>) -> Self {
        self.overflow_template = Some(template);
        self
    }

    /// The items in display order.
    pub fn items(&self) -> &[Item<V>] {
        &self.items
    }

    /// The variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The dispatch mode.
    pub fn mode(&self) -> &GroupMode<V> {
        &self.mode
    }

    /// Updates the selected value. Has no effect in action mode.
    pub fn set_current(&mut self, value: Option<V>) {
        match &mut self.mode {
            GroupMode::Selection { current } => *current = value,
            GroupMode::Action => {
                tracing::trace!("set_current ignored in action mode");
            }
        }
    }

    /// Returns `true` if the item at `index` is shown as selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.items
            .get(index)
            .is_some_and(|item| self.mode.is_selected(item.value()))
    }

    /// Measures every item and the overflow handle with `estimator`, then lays
    /// the group out in `available` width.
    pub fn layout<E: WidthEstimator>(
        &self,
        available: E::Scalar,
        estimator: &mut E,
        options: &GroupOptions<E::Scalar>,
    ) -> GroupLayout<V, E::Scalar> {
        let widths: Vec<_> = self
            .items
            .iter()
            .map(|item| estimator.measure(&item.metrics()))
            .collect();
        let handle = match &self.overflow_template {
            Some(template) => SegmentMetrics::of(template),
            None => SegmentMetrics {
                label: None,
                has_icon: true,
                has_menu: false,
                split: false,
            },
        };
        let overflow_width = estimator.measure(&handle);
        self.layout_with_widths(&widths, available, overflow_width, options)
    }

    /// Lays the group out from precomputed widths, one per item.
    ///
    /// In release builds missing widths count as zero and surplus widths are
    /// ignored.
    pub fn layout_with_widths<S: Scalar>(
        &self,
        widths: &[S],
        available: S,
        overflow_width: S,
        options: &GroupOptions<S>,
    ) -> GroupLayout<V, S> {
        debug_assert_eq!(
            widths.len(),
            self.items.len(),
            "one width per item is required"
        );
        let padded: Vec<S>;
        let widths = if widths.len() == self.items.len() {
            widths
        } else {
            tracing::debug!(
                items = self.items.len(),
                widths = widths.len(),
                "width count does not match item count"
            );
            padded = widths
                .iter()
                .copied()
                .chain(iter::repeat(S::zero()))
                .take(self.items.len())
                .collect();
            &padded
        };

        let fallback = self.variant.defaults().with_overflow_width(overflow_width);
        let resolved = options.resolve(fallback);
        let rows = pack(widths, available, &resolved);
        let handles = rows
            .iter()
            .map(|row| row.has_overflow().then(|| self.overflow_handle(row.overflow())))
            .collect();
        GroupLayout { rows, handles }
    }

    fn overflow_handle(&self, range: Range<usize>) -> OverflowHandle<V> {
        let start = range.start;
        let mut handle = synthesize(
            &self.items[range],
            start,
            self.overflow_template.as_ref(),
        );
        if let GroupMode::Selection { .. } = self.mode {
            for entry in handle.entries.iter_mut().filter(|e| e.is_item()) {
                let selected = self.is_selected(entry.owner);
                entry.entry.checked = Some(if selected { Checked::On } else { Checked::Off });
            }
        }
        handle
    }

    /// Dispatches a press on `target`, reporting events to `handler` in order.
    ///
    /// Returns `false` if nothing was emitted: the target is disabled or does
    /// not exist.
    pub fn activate(&self, target: Target<'_, V>, mut handler: impl FnMut(GroupEvent<V>)) -> bool {
        match target {
            Target::Segment(index) => {
                let Some(item) = self.enabled_item(index) else {
                    return false;
                };
                self.press_segment(item, &mut handler);
                true
            }
            Target::Chevron(index) => {
                let Some(item) = self.enabled_item(index) else {
                    return false;
                };
                if !item.has_menu() {
                    return false;
                }
                handler(GroupEvent::MenuOpened(item.value().clone()));
                true
            }
            Target::MenuEntry { item, entry } => {
                let Some(owner) = self.enabled_item(item) else {
                    return false;
                };
                let flat = flatten_menu(owner.menu());
                match flat.get(entry) {
                    Some(flat) if flat.enabled => {
                        choose_entry(owner, flat.entry.shallow_clone(), &mut handler);
                        true
                    }
                    _ => false,
                }
            }
            Target::Overflow(entry) => {
                if !entry.entry.is_enabled() {
                    return false;
                }
                let Some(owner) = self.enabled_item(entry.owner) else {
                    return false;
                };
                if entry.is_item() {
                    self.press_segment(owner, &mut handler);
                } else {
                    choose_entry(owner, entry.entry.shallow_clone(), &mut handler);
                }
                true
            }
        }
    }

    fn enabled_item(&self, index: usize) -> Option<&Item<V>> {
        let item = self.items.get(index);
        if item.is_none() {
            tracing::debug!(index, len = self.items.len(), "activation target out of range");
        }
        item.filter(|item| item.is_enabled())
    }

    /// Events of pressing `item`'s segment, wherever it is shown.
    fn press_segment(&self, item: &Item<V>, handler: &mut impl FnMut(GroupEvent<V>)) {
        if item.has_menu() && !item.is_split() {
            handler(GroupEvent::MenuOpened(item.value().clone()));
            return;
        }
        let value = item.value().clone();
        if item.is_split() {
            handler(GroupEvent::PrimaryPressed(value.clone()));
        }
        handler(match self.mode {
            GroupMode::Selection { .. } => GroupEvent::SelectionChanged(value),
            GroupMode::Action => GroupEvent::Action(value),
        });
    }
}

fn choose_entry<V: Clone>(
    owner: &Item<V>,
    entry: MenuEntry<V>,
    handler: &mut impl FnMut(GroupEvent<V>),
) {
    let value = entry.value.clone();
    handler(GroupEvent::MenuItemSelected {
        owner: owner.value().clone(),
        entry,
    });
    if let Some(value) = value {
        handler(GroupEvent::EntryAction(value));
    }
}

/// Result of [`Group::layout`]: packed rows and the overflow handle of each.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupLayout<V, S: Scalar> {
    rows: Vec<PackedRow<S>>,
    handles: Vec<Option<OverflowHandle<V>>>,
}

impl<V, S: Scalar> GroupLayout<V, S> {
    /// The packed rows, top to bottom.
    pub fn rows(&self) -> &[PackedRow<S>] {
        &self.rows
    }

    /// The overflow handle ending row `row`, if that row has one.
    pub fn handle(&self, row: usize) -> Option<&OverflowHandle<V>> {
        self.handles.get(row).and_then(Option::as_ref)
    }

    /// Iterates rows together with their overflow handles.
    pub fn iter(&self) -> impl Iterator<Item = (&PackedRow<S>, Option<&OverflowHandle<V>>)> + '_ {
        self.rows
            .iter()
            .zip(self.handles.iter().map(Option::as_ref))
    }

    /// Returns `true` if the group has no items.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Geometry for every row; see [`place_rows`].
    pub fn place(&self, placement: &Placement) -> Vec<PlacedRow> {
        place_rows(&self.rows, placement)
    }
}
