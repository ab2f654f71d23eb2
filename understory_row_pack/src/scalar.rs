// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction for widths, gaps, and available space.

use core::fmt::Debug;
use core::ops::{Add, Mul, Sub};

/// Numeric type used for item widths and the available width.
///
/// Implemented for `f32` and `f64`. All values are expected to be finite;
/// negative inputs are clamped to zero by the packer.
pub trait Scalar:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Default
    + 'static
{
    /// Additive identity.
    fn zero() -> Self;

    /// Converts a count into this scalar.
    fn from_usize(value: usize) -> Self;

    /// Widens this scalar to `f64`, the coordinate type used by `kurbo`.
    fn to_f64(self) -> f64;

    /// Returns `true` if the value is neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Returns `true` if the sign bit is set (including `-0.0`).
    fn is_sign_negative(self) -> bool;

    /// Returns the larger of `self` and `other`.
    #[must_use]
    fn max(self, other: Self) -> Self {
        if other > self { other } else { self }
    }

    /// Clamps negative values to zero.
    #[must_use]
    fn non_negative(self) -> Self {
        if self.is_sign_negative() {
            Self::zero()
        } else {
            self
        }
    }
}

impl Scalar for f32 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    #[allow(
        clippy::cast_precision_loss,
        reason = "Item counts stay far below the f32 mantissa limit"
    )]
    fn from_usize(value: usize) -> Self {
        value as Self
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    #[inline]
    fn is_sign_negative(self) -> bool {
        Self::is_sign_negative(self)
    }
}

impl Scalar for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    #[allow(
        clippy::cast_precision_loss,
        reason = "Item counts stay far below the f64 mantissa limit"
    )]
    fn from_usize(value: usize) -> Self {
        value as Self
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    #[inline]
    fn is_sign_negative(self) -> bool {
        Self::is_sign_negative(self)
    }
}
