// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packing options and layered option resolution.
//!
//! Hosts usually carry options at several levels: values set on a specific
//! group, defaults set on a group instance or component type, and defaults
//! from an application-wide theme. Rather than looking any of these up
//! ambiently, callers hand each layer to [`resolve`] (for single values) or
//! [`PackOverrides::resolve`] (for a whole [`PackOptions`]).

use crate::{MaxLines, OverflowStrategy, Scalar};

/// Fully resolved options for one packing pass.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PackOptions<S: Scalar> {
    /// Whether overflow collapsing or wrapping is preferred.
    pub strategy: OverflowStrategy,
    /// Row limit applied when wrapping.
    pub max_lines: MaxLines,
    /// Measured width of the overflow handle for this pass.
    pub overflow_width: S,
    /// Space inserted between adjacent visible slots in a row.
    pub gap: S,
}

impl<S: Scalar> PackOptions<S> {
    /// Options for the given strategy with no gap, no row limit, and a
    /// zero-width overflow handle.
    #[must_use]
    pub fn new(strategy: OverflowStrategy) -> Self {
        Self {
            strategy,
            max_lines: MaxLines::Unlimited,
            overflow_width: S::zero(),
            gap: S::zero(),
        }
    }

    /// Sets the row limit.
    #[must_use]
    pub fn with_max_lines(mut self, max_lines: impl Into<MaxLines>) -> Self {
        self.max_lines = max_lines.into();
        self
    }

    /// Sets the overflow handle width.
    #[must_use]
    pub fn with_overflow_width(mut self, overflow_width: S) -> Self {
        self.overflow_width = overflow_width;
        self
    }

    /// Sets the gap between slots.
    #[must_use]
    pub fn with_gap(mut self, gap: S) -> Self {
        self.gap = gap;
        self
    }

    /// Returns a copy with every width clamped to be non-negative.
    #[must_use]
    pub(crate) fn sanitized(self) -> Self {
        debug_assert!(
            self.gap.is_finite() && self.overflow_width.is_finite(),
            "PackOptions widths must be finite; got gap={:?}, overflow_width={:?}",
            self.gap,
            self.overflow_width
        );
        Self {
            gap: self.gap.non_negative(),
            overflow_width: self.overflow_width.non_negative(),
            ..self
        }
    }
}

/// Picks the first value present, from the most to the least specific layer.
///
/// ```rust
/// use understory_row_pack::resolve;
///
/// assert_eq!(resolve(None, Some(4.0), Some(8.0), 0.0), 4.0);
/// assert_eq!(resolve(None, None, None, 2.0), 2.0);
/// ```
#[must_use]
pub fn resolve<T>(explicit: Option<T>, instance: Option<T>, global: Option<T>, fallback: T) -> T {
    explicit.or(instance).or(global).unwrap_or(fallback)
}

/// A partial set of [`PackOptions`], one layer of configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PackOverrides<S: Scalar> {
    /// Strategy override.
    pub strategy: Option<OverflowStrategy>,
    /// Row limit override.
    pub max_lines: Option<MaxLines>,
    /// Overflow handle width override.
    pub overflow_width: Option<S>,
    /// Gap override.
    pub gap: Option<S>,
}

impl<S: Scalar> PackOverrides<S> {
    /// A layer that overrides nothing.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            strategy: None,
            max_lines: None,
            overflow_width: None,
            gap: None,
        }
    }

    /// Fills every unset field from `lower`.
    #[must_use]
    pub fn or(self, lower: Self) -> Self {
        Self {
            strategy: self.strategy.or(lower.strategy),
            max_lines: self.max_lines.or(lower.max_lines),
            overflow_width: self.overflow_width.or(lower.overflow_width),
            gap: self.gap.or(lower.gap),
        }
    }

    /// Resolves `explicit`, then `instance`, then `global`, then `fallback`,
    /// field by field.
    #[must_use]
    pub fn resolve(
        explicit: Self,
        instance: Self,
        global: Self,
        fallback: PackOptions<S>,
    ) -> PackOptions<S> {
        PackOptions {
            strategy: resolve(
                explicit.strategy,
                instance.strategy,
                global.strategy,
                fallback.strategy,
            ),
            max_lines: resolve(
                explicit.max_lines,
                instance.max_lines,
                global.max_lines,
                fallback.max_lines,
            ),
            overflow_width: resolve(
                explicit.overflow_width,
                instance.overflow_width,
                global.overflow_width,
                fallback.overflow_width,
            ),
            gap: resolve(explicit.gap, instance.gap, global.gap, fallback.gap),
        }
    }
}
