// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Items arranged by a group.

use alloc::string::String;
use alloc::vec::Vec;

use crate::MenuEntry;

/// Symbol-like identifier for an icon.
///
/// The host owns the meaning of each id (an index into an icon atlas, an
/// interned name, and so on). The group only carries ids around and checks
/// for their presence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IconId(pub u32);

impl IconId {
    /// Icon shown on a synthesized overflow handle when no template is given.
    pub const MORE: Self = Self(u32::MAX);
}

bitflags::bitflags! {
    /// Per-item flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Item responds to activation.
        const ENABLED = 0b0000_0001;
        /// Item has two tap targets: a primary region and a chevron opening its menu.
        const SPLIT   = 0b0000_0010;
    }
}

impl Default for ItemFlags {
    fn default() -> Self {
        Self::ENABLED
    }
}

/// Display capability used when an item has to be shown somewhere other than
/// its own segment, such as an overflow menu.
///
/// Content is declared up front when the item is built, so nothing needs to
/// inspect rendered widgets to find a label or an icon.
pub trait SegmentContent {
    /// Text shown for this content, if any.
    fn display_label(&self) -> Option<&str>;

    /// Icon shown for this content, if any.
    fn display_icon(&self) -> Option<IconId>;
}

/// What a [`WidthEstimator`](crate::WidthEstimator) needs to know about a segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SegmentMetrics<'a> {
    /// Label text, if any.
    pub label: Option<&'a str>,
    /// Whether an icon is shown.
    pub has_icon: bool,
    /// Whether the segment carries a menu.
    pub has_menu: bool,
    /// Whether the segment is a split button.
    pub split: bool,
}

impl<'a> SegmentMetrics<'a> {
    /// Metrics for arbitrary content without a menu.
    pub fn of(content: &'a dyn SegmentContent) -> Self {
        Self {
            label: content.display_label(),
            has_icon: content.display_icon().is_some(),
            has_menu: false,
            split: false,
        }
    }
}

/// A single control arranged by a group.
///
/// Items are immutable once built; the builder methods consume `self`.
#[derive(Clone, Debug, PartialEq)]
pub struct Item<V> {
    value: V,
    label: Option<String>,
    icon: Option<IconId>,
    menu: Vec<MenuEntry<V>>,
    flags: ItemFlags,
}

impl<V> Item<V> {
    /// Creates an enabled item with no label, icon, or menu.
    pub fn new(value: V) -> Self {
        Self {
            value,
            label: None,
            icon: None,
            menu: Vec::new(),
            flags: ItemFlags::default(),
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the icon.
    #[must_use]
    pub fn with_icon(mut self, icon: IconId) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Attaches a menu.
    #[must_use]
    pub fn with_menu(mut self, menu: Vec<MenuEntry<V>>) -> Self {
        self.menu = menu;
        self
    }

    /// Makes this a split button: a primary region plus a chevron opening the menu.
    #[must_use]
    pub fn split(mut self) -> Self {
        self.flags.insert(ItemFlags::SPLIT);
        self
    }

    /// Sets whether the item responds to activation.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.flags.set(ItemFlags::ENABLED, enabled);
        self
    }

    /// The value identifying this item.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// The label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The icon, if any.
    pub fn icon(&self) -> Option<IconId> {
        self.icon
    }

    /// The attached menu; empty if none.
    pub fn menu(&self) -> &[MenuEntry<V>] {
        &self.menu
    }

    /// Returns `true` if a menu is attached.
    pub fn has_menu(&self) -> bool {
        !self.menu.is_empty()
    }

    /// The item's flags.
    pub fn flags(&self) -> ItemFlags {
        self.flags
    }

    /// Returns `true` if the item responds to activation.
    pub fn is_enabled(&self) -> bool {
        self.flags.contains(ItemFlags::ENABLED)
    }

    /// Returns `true` for split buttons.
    pub fn is_split(&self) -> bool {
        self.flags.contains(ItemFlags::SPLIT)
    }

    /// Measurement input for this item.
    pub fn metrics(&self) -> SegmentMetrics<'_> {
        SegmentMetrics {
            label: self.label(),
            has_icon: self.icon.is_some(),
            has_menu: self.has_menu(),
            split: self.is_split(),
        }
    }
}

impl<V> SegmentContent for Item<V> {
    fn display_label(&self) -> Option<&str> {
        self.label()
    }

    fn display_icon(&self) -> Option<IconId> {
        self.icon
    }
}
