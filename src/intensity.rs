// MIT/Apache2 License

use crate::util::{clamp, unclamp};
use ordered_float::NotNan;
use std::ops;

/// A range that goes from zero to one, used for color channels and, most importantly here, alpha. This type
/// is essentially a wrapper around an `f32`, but with two invariants:
///
/// * The inner value will always be between `0.0` and `1.0`.
/// * The inner value will never be `NaN`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Intensity {
    inner: NotNan<f32>,
}

impl Intensity {
    /// Create a new `Intensity`. If the inner value does not meet the invariants mentioned above, this function
    /// returns `None`.
    #[inline]
    pub fn new(inner: f32) -> Option<Self> {
        if inner.is_nan() || inner < 0.0 || inner > 1.0 {
            None
        } else {
            NotNan::new(inner).ok().map(|inner| Self { inner })
        }
    }

    /// Create a new `Intensity`, pulling out-of-range values back into [0, 1]. `NaN` becomes zero.
    #[inline]
    pub fn new_clamped(inner: f32) -> Self {
        let inner = if inner.is_nan() {
            0.0
        } else {
            inner.max(0.0).min(1.0)
        };

        Self {
            inner: NotNan::new(inner).unwrap_or_default(),
        }
    }

    /// Fully off.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Fully on.
    #[inline]
    pub fn one() -> Self {
        Self::new_clamped(1.0)
    }

    /// Create an `Intensity` from an 8-bit channel value.
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        Self::new_clamped(unclamp(value))
    }

    /// Get the inner value of the `Intensity`.
    #[inline]
    pub fn into_inner(self) -> f32 {
        self.inner.into_inner()
    }

    /// Clamp this value to a `u8`.
    #[inline]
    pub fn clamp_to_u8(self) -> u8 {
        clamp(self.into_inner())
    }

    /// Is this intensity exactly zero?
    #[inline]
    pub fn is_zero(self) -> bool {
        self.into_inner() == 0.0
    }
}

impl ops::Mul for Intensity {
    type Output = Intensity;

    #[inline]
    fn mul(self, rhs: Intensity) -> Intensity {
        Intensity::new_clamped(self.into_inner() * rhs.into_inner())
    }
}
