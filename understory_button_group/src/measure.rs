// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment width measurement.
//!
//! Real text measurement belongs to the host's text stack; this module only
//! defines the contract ([`WidthEstimator`]) plus two helpers: a deterministic
//! [`MetricsEstimator`] and a memoizing [`CachedEstimator`] wrapper.

use alloc::string::String;
use core::hash::{Hash, Hasher};

use hashbrown::{Equivalent, HashMap};
use understory_row_pack::Scalar;

use crate::SegmentMetrics;

/// Measures the rendered width of a segment.
///
/// Implementations must be deterministic for fixed fonts and styles: the same
/// metrics must yield the same width within one layout pass.
pub trait WidthEstimator {
    /// Scalar type of the returned widths.
    type Scalar: Scalar;

    /// Width of a segment described by `segment`.
    fn measure(&mut self, segment: &SegmentMetrics<'_>) -> Self::Scalar;
}

impl<E: WidthEstimator + ?Sized> WidthEstimator for &mut E {
    type Scalar = E::Scalar;

    fn measure(&mut self, segment: &SegmentMetrics<'_>) -> Self::Scalar {
        (**self).measure(segment)
    }
}

/// Estimates widths from fixed per-glyph and per-part metrics.
///
/// `padding + label + icon + chevron + padding`, where the label is
/// `char_advance` per character and `icon_spacing` separates an icon from a
/// label. Segments with a menu, split or not, get a trailing chevron.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MetricsEstimator<S: Scalar> {
    /// Horizontal padding on each side.
    pub padding: S,
    /// Advance of one label character.
    pub char_advance: S,
    /// Width of an icon.
    pub icon_extent: S,
    /// Space between an icon and a label.
    pub icon_spacing: S,
    /// Width of a menu chevron, including its separator for split buttons.
    pub chevron_extent: S,
}

impl<S: Scalar> WidthEstimator for MetricsEstimator<S> {
    type Scalar = S;

    fn measure(&mut self, segment: &SegmentMetrics<'_>) -> S {
        let two = S::from_usize(2);
        let mut width = self.padding * two;
        let chars = segment.label.map_or(0, |l| l.chars().count());
        width = width + self.char_advance * S::from_usize(chars);
        if segment.has_icon {
            width = width + self.icon_extent;
            if chars > 0 {
                width = width + self.icon_spacing;
            }
        }
        if segment.has_menu || segment.split {
            width = width + self.chevron_extent;
        }
        width
    }
}

/// Owned form of [`SegmentMetrics`]; hashes exactly like the borrowed form so
/// lookups need no allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
struct CacheKey {
    label: Option<String>,
    has_icon: bool,
    has_menu: bool,
    split: bool,
}

impl CacheKey {
    fn new(segment: &SegmentMetrics<'_>) -> Self {
        Self {
            label: segment.label.map(String::from),
            has_icon: segment.has_icon,
            has_menu: segment.has_menu,
            split: segment.split,
        }
    }

    fn metrics(&self) -> SegmentMetrics<'_> {
        SegmentMetrics {
            label: self.label.as_deref(),
            has_icon: self.has_icon,
            has_menu: self.has_menu,
            split: self.split,
        }
    }
}

impl Hash for CacheKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.metrics().hash(state);
    }
}

impl Equivalent<CacheKey> for SegmentMetrics<'_> {
    fn equivalent(&self, key: &CacheKey) -> bool {
        *self == key.metrics()
    }
}

/// Memoizes another estimator's results by segment content.
///
/// Hosts keep one of these across layout passes so that a resize does not
/// re-measure unchanged labels. Call [`CachedEstimator::clear`] when fonts or
/// styles change.
#[derive(Debug)]
pub struct CachedEstimator<E: WidthEstimator> {
    inner: E,
    cache: HashMap<CacheKey, E::Scalar>,
    misses: usize,
}

impl<E: WidthEstimator> CachedEstimator<E> {
    /// Wraps `inner` with an empty cache.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            cache: HashMap::new(),
            misses: 0,
        }
    }

    /// Drops every cached width.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Number of cached widths.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Number of measurements delegated to the wrapped estimator so far.
    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Returns the wrapped estimator.
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Returns the wrapped estimator mutably, dropping the cache.
    pub fn inner_mut(&mut self) -> &mut E {
        self.cache.clear();
        &mut self.inner
    }
}

impl<E: WidthEstimator> WidthEstimator for CachedEstimator<E> {
    type Scalar = E::Scalar;

    fn measure(&mut self, segment: &SegmentMetrics<'_>) -> Self::Scalar {
        if let Some(width) = self.cache.get(segment) {
            return *width;
        }
        let width = self.inner.measure(segment);
        self.misses += 1;
        self.cache.insert(CacheKey::new(segment), width);
        width
    }
}
