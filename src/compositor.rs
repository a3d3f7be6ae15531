// MIT/Apache2 License

use crate::{NormalizedTransform, Placement, Rectangle};
use lyon_geom::Size;

/// The rectangle, in primary pixel coordinates, that the masked content is painted into.
///
/// This is a 1:1 placement of the mask's box. It does not depend on the size of the primary image.
#[inline]
pub fn compute_draw_rectangle(
    offset_x: i32,
    offset_y: i32,
    mask_width: u32,
    mask_height: u32,
) -> Rectangle {
    Rectangle::new(offset_x, offset_y, mask_width, mask_height)
}

/// Everything derived from one application of a mask onto a primary image.
///
/// The mask's size is captured once, on construction, and both the shader transform and the draw rectangle
/// are read from that single capture. This keeps the masked pixels and the place they are painted from ever
/// drifting apart.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MaskApplication {
    primary: Size<u32>,
    mask: Size<u32>,
    placement: Placement,
    transform: NormalizedTransform,
}

impl MaskApplication {
    /// Derive the transform and rectangle for a mask of size `mask` placed at `placement` on a primary image
    /// of size `primary`.
    pub fn new(primary: Size<u32>, mask: Size<u32>, placement: Placement) -> crate::Result<Self> {
        let transform = NormalizedTransform::new(primary, mask, placement)?;

        log::debug!(
            "Mask of {}x{} at ({}, {}) on {}x{}: offset = {:?}, scale = {:?}",
            mask.width,
            mask.height,
            placement.x,
            placement.y,
            primary.width,
            primary.height,
            transform.offset,
            transform.scale,
        );

        Ok(Self {
            primary,
            mask,
            placement,
            transform,
        })
    }

    /// The normalized transform to hand to the shader.
    #[inline]
    pub fn transform(&self) -> &NormalizedTransform {
        &self.transform
    }

    /// The rectangle to paint the shaded result into.
    #[inline]
    pub fn draw_rectangle(&self) -> Rectangle {
        compute_draw_rectangle(
            self.placement.x,
            self.placement.y,
            self.mask.width,
            self.mask.height,
        )
    }

    #[inline]
    pub fn primary_size(&self) -> Size<u32> {
        self.primary
    }

    #[inline]
    pub fn mask_size(&self) -> Size<u32> {
        self.mask
    }

    #[inline]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// The mask pixel read by primary pixel `(px, py)`, if any.
    #[inline]
    pub fn mask_pixel_for(&self, px: u32, py: u32) -> Option<(u32, u32)> {
        self.transform
            .mask_pixel_for(px, py, self.primary, self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Axis, Error};
    use approx::assert_abs_diff_eq;
    use lyon_geom::Vector;

    fn app(pw: u32, ph: u32, mw: u32, mh: u32, x: i32, y: i32) -> crate::Result<MaskApplication> {
        MaskApplication::new(Size::new(pw, ph), Size::new(mw, mh), Placement::new(x, y))
    }

    #[test]
    fn rectangle_ignores_primary_size() {
        let r = compute_draw_rectangle(12, -7, 30, 40);
        assert_eq!(r, Rectangle::new(12, -7, 30, 40));
        for &(pw, ph) in &[(1, 1), (30, 40), (5000, 3)] {
            assert_eq!(app(pw, ph, 30, 40, 12, -7).unwrap().draw_rectangle(), r);
        }
    }

    #[test]
    fn scenario_top_left() {
        let a = app(800, 600, 200, 100, 0, 0).unwrap();
        assert_abs_diff_eq!(a.transform().offset.x, 0.0);
        assert_abs_diff_eq!(a.transform().offset.y, 0.0);
        assert_abs_diff_eq!(a.transform().scale.x, 0.25);
        assert_abs_diff_eq!(a.transform().scale.y, 0.1667, epsilon = 1e-4);
        assert_eq!(a.draw_rectangle(), Rectangle::new(0, 0, 200, 100));
    }

    #[test]
    fn scenario_offset() {
        let a = app(800, 600, 200, 100, 300, 250).unwrap();
        assert_abs_diff_eq!(a.transform().offset.x, 0.375);
        assert_abs_diff_eq!(a.transform().offset.y, 0.4167, epsilon = 1e-4);
        assert_abs_diff_eq!(a.transform().scale.x, 0.25);
        assert_abs_diff_eq!(a.transform().scale.y, 0.1667, epsilon = 1e-4);
        assert_eq!(a.draw_rectangle(), Rectangle::new(300, 250, 200, 100));
    }

    #[test]
    fn scenario_full_cover() {
        let a = app(500, 500, 500, 500, 0, 0).unwrap();
        assert_eq!(a.transform().offset, Vector::new(0.0, 0.0));
        assert_eq!(a.transform().scale, Vector::new(1.0, 1.0));
        assert_eq!(
            a.draw_rectangle(),
            Rectangle::from_size(a.primary_size())
        );
    }

    #[test]
    fn scenario_negative_offset() {
        let a = app(400, 400, 100, 100, -50, -50).unwrap();
        assert_eq!(a.draw_rectangle(), Rectangle::new(-50, -50, 100, 100));
        assert!(a.transform().offset.x < 0.0);
        assert!(a.transform().offset.y < 0.0);
        let visible = a
            .draw_rectangle()
            .intersection(Rectangle::from_size(a.primary_size()))
            .unwrap();
        assert_eq!(visible, Rectangle::new(0, 0, 50, 50));
        assert_eq!(a.mask_pixel_for(0, 0), Some((50, 50)));
    }

    #[test]
    fn empty_mask_gives_empty_rectangle() {
        let r = app(800, 600, 0, 100, 5, 5).unwrap().draw_rectangle();
        assert!(r.is_empty());
        assert_eq!(r.area(), 0);
        let r = app(800, 600, 100, 0, 5, 5).unwrap().draw_rectangle();
        assert!(r.is_empty());
    }

    #[test]
    fn zero_primary_produces_nothing() {
        assert_eq!(
            app(0, 600, 200, 100, 0, 0),
            Err(Error::DivisionByZero(Axis::Horizontal))
        );
    }

    #[test]
    fn applications_are_idempotent() {
        let a = app(640, 480, 33, 17, -3, 900).unwrap();
        let b = app(640, 480, 33, 17, -3, 900).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.draw_rectangle(), b.draw_rectangle());
        assert_eq!(
            a.transform().offset.y.to_bits(),
            b.transform().offset.y.to_bits()
        );
        assert_eq!(a.mask_size(), Size::new(33, 17));
        assert_eq!(a.placement(), Placement::new(-3, 900));
    }
}
