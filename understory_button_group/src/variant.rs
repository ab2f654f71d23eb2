// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual variants and their packing defaults.

use understory_row_pack::{MaxLines, OverflowStrategy, PackOptions, PackOverrides, Scalar};

/// Size token of a standard group.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    /// Extra small.
    ExtraSmall,
    /// Small.
    Small,
    /// Medium.
    #[default]
    Medium,
    /// Large.
    Large,
    /// Extra large.
    ExtraLarge,
}

impl ButtonSize {
    /// Gap between separate buttons of this size.
    pub fn gap<S: Scalar>(self) -> S {
        S::from_usize(match self {
            Self::ExtraSmall => 18,
            Self::Small => 12,
            Self::Medium | Self::Large | Self::ExtraLarge => 8,
        })
    }
}

/// How the segments of a group are drawn, which decides the packing defaults.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Segments joined into one control, separated by a thin gap.
    /// Prefers collapsing into an overflow handle.
    Connected,
    /// Separate buttons. Prefers wrapping.
    Standard(ButtonSize),
}

impl Default for Variant {
    fn default() -> Self {
        Self::Standard(ButtonSize::default())
    }
}

impl Variant {
    /// Gap between connected segments.
    pub const CONNECTED_GAP: usize = 2;

    /// Built-in options, used for every field no configuration layer sets.
    ///
    /// The overflow handle width is left at zero; [`Group::layout`](crate::Group::layout)
    /// fills in the measured width.
    pub fn defaults<S: Scalar>(self) -> PackOptions<S> {
        match self {
            Self::Connected => PackOptions::new(OverflowStrategy::Menu)
                .with_gap(S::from_usize(Self::CONNECTED_GAP)),
            Self::Standard(size) => PackOptions::new(OverflowStrategy::Wrap)
                .with_gap(size.gap())
                .with_max_lines(MaxLines::Unlimited),
        }
    }
}

/// Configuration layers consulted by [`Group::layout`](crate::Group::layout),
/// from most to least specific.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GroupOptions<S: Scalar> {
    /// Values set on this group.
    pub explicit: PackOverrides<S>,
    /// Defaults for this kind of group, for example from a component style.
    pub instance: PackOverrides<S>,
    /// Application-wide defaults, for example from a theme.
    pub global: PackOverrides<S>,
}

impl<S: Scalar> GroupOptions<S> {
    /// Layers that override nothing.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            explicit: PackOverrides::none(),
            instance: PackOverrides::none(),
            global: PackOverrides::none(),
        }
    }

    /// Only an explicit layer.
    #[must_use]
    pub const fn explicit(explicit: PackOverrides<S>) -> Self {
        Self {
            explicit,
            instance: PackOverrides::none(),
            global: PackOverrides::none(),
        }
    }

    /// Resolves every layer over `fallback`.
    #[must_use]
    pub fn resolve(&self, fallback: PackOptions<S>) -> PackOptions<S> {
        PackOverrides::resolve(self.explicit, self.instance, self.global, fallback)
    }
}

#[cfg(test)]
mod tests {
    use understory_row_pack::{MaxLines, OverflowStrategy, PackOverrides};

    use super::{ButtonSize, GroupOptions, Variant};

    #[test]
    fn connected_prefers_the_menu() {
        let opts = Variant::Connected.defaults::<f64>();
        assert_eq!(opts.strategy, OverflowStrategy::Menu);
        assert_eq!(opts.gap, 2.0);
    }

    #[test]
    fn standard_gap_follows_size() {
        let gaps: [f32; 5] = [
            ButtonSize::ExtraSmall.gap(),
            ButtonSize::Small.gap(),
            ButtonSize::Medium.gap(),
            ButtonSize::Large.gap(),
            ButtonSize::ExtraLarge.gap(),
        ];
        assert_eq!(gaps, [18.0, 12.0, 8.0, 8.0, 8.0]);

        let opts = Variant::Standard(ButtonSize::Small).defaults::<f32>();
        assert_eq!(opts.strategy, OverflowStrategy::Wrap);
        assert_eq!(opts.max_lines, MaxLines::Unlimited);
    }

    #[test]
    fn layers_override_variant_defaults() {
        let layers = GroupOptions {
            instance: PackOverrides {
                strategy: Some(OverflowStrategy::Menu),
                ..PackOverrides::none()
            },
            global: PackOverrides {
                gap: Some(4.0),
                strategy: Some(OverflowStrategy::Wrap),
                ..PackOverrides::none()
            },
            ..GroupOptions::none()
        };
        let opts = layers.resolve(Variant::Standard(ButtonSize::Medium).defaults::<f64>());
        assert_eq!(opts.strategy, OverflowStrategy::Menu);
        assert_eq!(opts.gap, 4.0);
    }
}
