// MIT/Apache2 License

//! Mapping between the primary image's normalized coordinate space and the mask's.
//!
//! A shader samples the primary image in normalized units, where `(0, 0)` is the top-left corner and `(1, 1)`
//! is the bottom-right corner regardless of how many pixels it has. To read the mask at the right spot it
//! needs to know where the mask begins (`offset`) and how large it is (`scale`), both in those same units.

use crate::{Axis, Error, Placement};
use approx::AbsDiffEq;
use lyon_geom::{Point, Size, Vector};
use std::convert::TryFrom;

/// The offset and scale of the mask, measured in primary-normalized units.
///
/// A value of `1.0` is the full width (for `x`) or height (for `y`) of the primary image.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NormalizedTransform {
    /// Where the mask's top-left corner lands.
    pub offset: Vector<f64>,
    /// How large the mask is relative to the primary image.
    pub scale: Vector<f64>,
}

/// Compute the normalized transform for a mask of `mask_width` x `mask_height` pixels placed at
/// `(offset_x, offset_y)` on a primary image of `primary_width` x `primary_height` pixels.
///
/// Fails with [`Error::DivisionByZero`] if either side of the primary image is zero.
pub fn compute_transform(
    primary_width: u32,
    primary_height: u32,
    mask_width: u32,
    mask_height: u32,
    offset_x: i32,
    offset_y: i32,
) -> crate::Result<NormalizedTransform> {
    if primary_width == 0 {
        return Err(Error::DivisionByZero(Axis::Horizontal));
    }
    if primary_height == 0 {
        return Err(Error::DivisionByZero(Axis::Vertical));
    }

    let pw = f64::from(primary_width);
    let ph = f64::from(primary_height);

    Ok(NormalizedTransform {
        offset: Vector::new(f64::from(offset_x) / pw, f64::from(offset_y) / ph),
        scale: Vector::new(f64::from(mask_width) / pw, f64::from(mask_height) / ph),
    })
}

impl NormalizedTransform {
    /// Shorthand for [`compute_transform`] with sizes and placement bundled up.
    #[inline]
    pub fn new(primary: Size<u32>, mask: Size<u32>, placement: Placement) -> crate::Result<Self> {
        compute_transform(
            primary.width,
            primary.height,
            mask.width,
            mask.height,
            placement.x,
            placement.y,
        )
    }

    /// Map a primary-normalized coordinate into mask-normalized space.
    ///
    /// The result lies in `[0, 1)` on both axes when `(u, v)` falls on the mask. Returns `None` when the mask
    /// is empty along either axis, since nothing maps onto it.
    #[inline]
    pub fn map_to_mask(&self, u: f64, v: f64) -> Option<Point<f64>> {
        if self.scale.x == 0.0 || self.scale.y == 0.0 {
            return None;
        }

        Some(Point::new(
            (u - self.offset.x) / self.scale.x,
            (v - self.offset.y) / self.scale.y,
        ))
    }

    /// Find the mask pixel that the primary pixel `(px, py)` reads from.
    ///
    /// The primary pixel is sampled at its center. For a mask placed at `(x, y)` this yields mask pixel
    /// `(px - x, py - y)`, or `None` if that lies outside of the mask.
    pub fn mask_pixel_for(
        &self,
        px: u32,
        py: u32,
        primary: Size<u32>,
        mask: Size<u32>,
    ) -> Option<(u32, u32)> {
        if primary.width == 0 || primary.height == 0 {
            return None;
        }

        let u = (f64::from(px) + 0.5) / f64::from(primary.width);
        let v = (f64::from(py) + 0.5) / f64::from(primary.height);
        let m = self.map_to_mask(u, v)?;

        let mx = (m.x * f64::from(mask.width)).floor();
        let my = (m.y * f64::from(mask.height)).floor();
        if mx < 0.0 || my < 0.0 {
            return None;
        }

        let mx = u32::try_from(mx as u64).ok().filter(|&mx| mx < mask.width)?;
        let my = u32::try_from(my as u64).ok().filter(|&my| my < mask.height)?;
        Some((mx, my))
    }
}

impl AbsDiffEq for NormalizedTransform {
    type Epsilon = f64;

    #[inline]
    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.offset.x.abs_diff_eq(&other.offset.x, epsilon)
            && self.offset.y.abs_diff_eq(&other.offset.y, epsilon)
            && self.scale.x.abs_diff_eq(&other.scale.x, epsilon)
            && self.scale.y.abs_diff_eq(&other.scale.y, epsilon)
    }
}
