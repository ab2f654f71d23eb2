// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overflow handle and overflow menu synthesis.
//!
//! When a row cannot show all of its items, the trailing ones are replaced by
//! a single handle that opens a menu. [`synthesize`] builds that handle and
//! [`to_menu_entries`] builds its menu from the collapsed items.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::{EntryFlags, IconId, Item, MenuEntry, SegmentContent, flatten_menu};

/// One entry of an overflow menu.
#[derive(Clone, Debug, PartialEq)]
pub struct OverflowEntry<V> {
    /// Index of the collapsed item this entry belongs to, in the group's item list.
    pub owner: usize,
    /// `0` for the entry standing in for the item itself, greater for entries
    /// flattened from the item's own menu.
    pub depth: usize,
    /// The entry to display. Its submenu is always empty.
    pub entry: MenuEntry<V>,
}

impl<V> OverflowEntry<V> {
    /// Returns `true` if this entry stands in for a collapsed item.
    pub fn is_item(&self) -> bool {
        self.depth == 0
    }
}

/// The synthesized overflow handle of a row.
#[derive(Clone, Debug, PartialEq)]
pub struct OverflowHandle<V> {
    /// Label shown on the handle, if any.
    pub label: Option<String>,
    /// Icon shown on the handle, if any.
    pub icon: Option<IconId>,
    /// Whether the handle can be opened.
    pub enabled: bool,
    /// The flattened overflow menu.
    pub entries: Vec<OverflowEntry<V>>,
}

impl<V> SegmentContent for OverflowHandle<V> {
    fn display_label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn display_icon(&self) -> Option<IconId> {
        self.icon
    }
}

/// Label used for a collapsed item that has no label of its own.
///
/// `index` is the item's position in the group; the label counts from one.
#[must_use]
pub fn fallback_label(index: usize) -> String {
    format!("Item {}", index + 1)
}

/// Converts collapsed items into overflow menu entries.
///
/// `first_index` is the group index of `overflow_items[0]`. Each item yields
/// an entry with the item's label (or [`fallback_label`]), icon, value, and
/// enabled state, followed by the item's own menu, flattened.
pub fn to_menu_entries<V: Clone>(
    overflow_items: &[Item<V>],
    first_index: usize,
) -> Vec<OverflowEntry<V>> {
    let mut out = Vec::with_capacity(overflow_items.len());
    for (offset, item) in overflow_items.iter().enumerate() {
        let owner = first_index + offset;
        let label = item
            .display_label()
            .map_or_else(|| fallback_label(owner), ToString::to_string);
        let mut entry = MenuEntry::new(label).with_value(item.value().clone());
        entry.icon = item.display_icon();
        entry.flags = if item.is_enabled() {
            EntryFlags::ENABLED
        } else {
            EntryFlags::empty()
        };
        out.push(OverflowEntry {
            owner,
            depth: 0,
            entry,
        });
        for flat in flatten_menu(item.menu()) {
            let mut entry = flat.entry.shallow_clone();
            entry
                .flags
                .set(EntryFlags::ENABLED, flat.enabled && item.is_enabled());
            out.push(OverflowEntry {
                owner,
                depth: flat.depth + 1,
                entry,
            });
        }
    }
    out
}

/// Builds the overflow handle standing in for `overflow_items`.
///
/// A `template` only controls how the handle looks: its label and icon are
/// used, its enabled state is honored, and its own menu is ignored. Without a
/// template the handle shows [`IconId::MORE`] and no label.
pub fn synthesize<V: Clone>(
    overflow_items: &[Item<V>],
    first_index: usize,
    template: Option<&Item<V>>,
) -> OverflowHandle<V> {
    let entries = to_menu_entries(overflow_items, first_index);
    let any_enabled = entries.iter().any(|e| e.is_item() && e.entry.is_enabled());
    match template {
        Some(template) => OverflowHandle {
            label: template.display_label().map(ToString::to_string),
            icon: template.display_icon(),
            enabled: template.is_enabled() && any_enabled,
            entries,
        },
        None => OverflowHandle {
            label: None,
            icon: Some(IconId::MORE),
            enabled: any_enabled,
            entries,
        },
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{fallback_label, synthesize, to_menu_entries};
    use crate::{IconId, Item, MenuEntry};

    fn items() -> Vec<Item<&'static str>> {
        vec![
            Item::new("cut").with_label("Cut").with_icon(IconId(1)),
            Item::new("copy").with_icon(IconId(2)),
            Item::new("paste").enabled(false),
            Item::new("more").with_label("Format").split().with_menu(vec![
                MenuEntry::new("Bold").with_value("bold").with_submenu(vec![
                    MenuEntry::new("Extra bold").with_value("extra"),
                ]),
                MenuEntry::new("Italic").with_value("italic").enabled(false),
            ]),
        ]
    }

    #[test]
    fn entries_carry_label_icon_value_and_state() {
        let items = items();
        let entries = to_menu_entries(&items[..3], 4);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].entry.label, "Cut");
        assert_eq!(entries[0].entry.icon, Some(IconId(1)));
        assert_eq!(entries[0].entry.value, Some("cut"));
        assert_eq!(entries[0].owner, 4);

        // No label: fall back to a positional name, keep the icon.
        assert_eq!(entries[1].entry.label, "Item 6");
        assert_eq!(entries[1].entry.icon, Some(IconId(2)));

        assert!(!entries[2].entry.is_enabled());
        assert!(entries.iter().all(|e| e.is_item()));
    }

    #[test]
    fn item_menus_are_flattened_after_their_item() {
        let items = items();
        let entries = to_menu_entries(&items[3..], 3);
        let seen: Vec<_> = entries
            .iter()
            .map(|e| (e.entry.label.as_str(), e.depth, e.owner))
            .collect();
        assert_eq!(
            seen,
            [
                ("Format", 0, 3),
                ("Bold", 1, 3),
                ("Extra bold", 2, 3),
                ("Italic", 1, 3),
            ]
        );
        assert!(entries.iter().all(|e| e.entry.submenu.is_empty()));
        assert!(!entries[3].entry.is_enabled());
    }

    #[test]
    fn default_handle_uses_more_icon() {
        let items = items();
        let handle = synthesize(&items[1..], 1, None);
        assert_eq!(handle.icon, Some(IconId::MORE));
        assert_eq!(handle.label, None);
        assert!(handle.enabled);
        assert_eq!(handle.entries.len(), 6);
    }

    #[test]
    fn template_controls_appearance_only() {
        let items = items();
        let template = Item::new("ignored")
            .with_label("More tools")
            .with_icon(IconId(9))
            .with_menu(vec![MenuEntry::new("Should not appear")]);
        let handle = synthesize(&items[..2], 0, Some(&template));

        assert_eq!(handle.label.as_deref(), Some("More tools"));
        assert_eq!(handle.icon, Some(IconId(9)));
        assert_eq!(handle.entries.len(), 2);
        assert!(handle.entries.iter().all(|e| e.entry.label != "Should not appear"));
    }

    #[test]
    fn handle_is_disabled_when_nothing_can_be_chosen() {
        let items = items();
        let handle = synthesize(&items[2..3], 2, None);
        assert!(!handle.enabled);
    }

    #[test]
    fn fallback_label_counts_from_one() {
        assert_eq!(fallback_label(0), "Item 1");
    }
}
