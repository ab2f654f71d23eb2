// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu entries and submenu flattening.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{IconId, SegmentContent};

bitflags::bitflags! {
    /// Per-entry flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EntryFlags: u8 {
        /// Entry can be chosen.
        const ENABLED     = 0b0000_0001;
        /// Entry performs a destructive action and is styled accordingly.
        const DESTRUCTIVE = 0b0000_0010;
    }
}

impl Default for EntryFlags {
    fn default() -> Self {
        Self::ENABLED
    }
}

/// Tri-state check mark on a menu entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Checked {
    /// Not checked.
    Off,
    /// Checked.
    On,
    /// Partially checked.
    Mixed,
}

/// One entry of a menu, possibly carrying a nested submenu.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuEntry<V> {
    /// Text shown for the entry.
    pub label: String,
    /// Optional icon.
    pub icon: Option<IconId>,
    /// Value reported when the entry is chosen.
    pub value: Option<V>,
    /// Enabled and destructive flags.
    pub flags: EntryFlags,
    /// Optional check mark.
    pub checked: Option<Checked>,
    /// Nested entries.
    pub submenu: Vec<Self>,
}

impl<V> MenuEntry<V> {
    /// Creates an enabled entry with only a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            value: None,
            flags: EntryFlags::default(),
            checked: None,
            submenu: Vec::new(),
        }
    }

    /// Sets the icon.
    #[must_use]
    pub fn with_icon(mut self, icon: IconId) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Sets the value reported when the entry is chosen.
    #[must_use]
    pub fn with_value(mut self, value: V) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the check mark.
    #[must_use]
    pub fn with_checked(mut self, checked: Checked) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Attaches a nested submenu.
    #[must_use]
    pub fn with_submenu(mut self, submenu: Vec<Self>) -> Self {
        self.submenu = submenu;
        self
    }

    /// Marks the entry as destructive.
    #[must_use]
    pub fn destructive(mut self) -> Self {
        self.flags.insert(EntryFlags::DESTRUCTIVE);
        self
    }

    /// Sets whether the entry can be chosen.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.flags.set(EntryFlags::ENABLED, enabled);
        self
    }

    /// Returns `true` if the entry can be chosen.
    pub fn is_enabled(&self) -> bool {
        self.flags.contains(EntryFlags::ENABLED)
    }

    /// Returns `true` if the entry is destructive.
    pub fn is_destructive(&self) -> bool {
        self.flags.contains(EntryFlags::DESTRUCTIVE)
    }
}

impl<V: Clone> MenuEntry<V> {
    /// Clones this entry without its submenu.
    #[must_use]
    pub fn shallow_clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            icon: self.icon,
            value: self.value.clone(),
            flags: self.flags,
            checked: self.checked,
            submenu: Vec::new(),
        }
    }
}

impl<V> SegmentContent for MenuEntry<V> {
    fn display_label(&self) -> Option<&str> {
        Some(&self.label)
    }

    fn display_icon(&self) -> Option<IconId> {
        self.icon
    }
}

/// An entry of a flattened menu.
#[derive(Clone, Debug, PartialEq)]
pub struct FlatEntry<'a, V> {
    /// The entry itself. Its `submenu` is still attached; its children follow it.
    pub entry: &'a MenuEntry<V>,
    /// Nesting depth in the original menu, `0` for top-level entries.
    pub depth: usize,
    /// Whether the entry and all of its ancestors are enabled.
    pub enabled: bool,
}

/// Flattens nested submenus into a single list.
///
/// Entries are visited depth-first: every entry is immediately followed by the
/// entries of its submenu. A disabled entry disables its whole subtree.
///
/// ```rust
/// use understory_button_group::{MenuEntry, flatten_menu};
///
/// let menu: Vec<MenuEntry<u32>> = vec![
///     MenuEntry::new("Align").with_submenu(vec![
///         MenuEntry::new("Left").with_value(1),
///         MenuEntry::new("Right").with_value(2),
///     ]),
///     MenuEntry::new("Clear").with_value(3).destructive(),
/// ];
/// let flat = flatten_menu(&menu);
/// let labels: Vec<_> = flat.iter().map(|f| (f.entry.label.as_str(), f.depth)).collect();
/// assert_eq!(labels, [("Align", 0), ("Left", 1), ("Right", 1), ("Clear", 0)]);
/// ```
pub fn flatten_menu<V>(entries: &[MenuEntry<V>]) -> Vec<FlatEntry<'_, V>> {
    let mut out = Vec::new();
    flatten_into(entries, 0, true, &mut out);
    out
}

fn flatten_into<'a, V>(
    entries: &'a [MenuEntry<V>],
    depth: usize,
    parent_enabled: bool,
    out: &mut Vec<FlatEntry<'a, V>>,
) {
    for entry in entries {
        let enabled = parent_enabled && entry.is_enabled();
        out.push(FlatEntry {
            entry,
            depth,
            enabled,
        });
        flatten_into(&entry.submenu, depth + 1, enabled, out);
    }
}
