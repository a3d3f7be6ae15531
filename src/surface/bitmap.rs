// MIT/Apache2 License

//! An in-memory surface. Drawing goes straight into a `Bitmap`.

use super::{Surface, SurfaceFeatures};
use crate::{Bitmap, CompositeOperation, Error, NotSupportedOp, Rectangle};

/// A surface backed by a client-side `Bitmap`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapSurface {
    target: Bitmap,
}

impl BitmapSurface {
    /// Create a new, fully transparent RGBA surface.
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_bitmap(Bitmap::transparent(width, height))
    }

    /// Draw onto an existing bitmap.
    #[inline]
    pub fn from_bitmap(target: Bitmap) -> Self {
        Self { target }
    }

    /// The pixels drawn so far.
    #[inline]
    pub fn bitmap(&self) -> &Bitmap {
        &self.target
    }

    /// Destroy this surface and get the bitmap that was drawn on.
    #[inline]
    pub fn into_bitmap(self) -> Bitmap {
        self.target
    }

    #[inline]
    fn bounds(&self) -> Rectangle {
        Rectangle::from_size(self.target.size())
    }
}

impl Surface for BitmapSurface {
    #[inline]
    fn features(&self) -> SurfaceFeatures {
        SurfaceFeatures {
            transparency: self.target.format().is_transparent(),
        }
    }

    #[inline]
    fn width(&self) -> u32 {
        self.target.width()
    }

    #[inline]
    fn height(&self) -> u32 {
        self.target.height()
    }

    fn composite_image(
        &mut self,
        op: CompositeOperation,
        image: &Bitmap,
        src_x: i32,
        src_y: i32,
        dst_x: i32,
        dst_y: i32,
        width: u32,
        height: u32,
    ) -> crate::Result {
        if op == CompositeOperation::Over && !self.features().transparency {
            return Err(Error::NotSupported(NotSupportedOp::Transparency));
        }

        let area = Rectangle::new(dst_x, dst_y, width, height);
        let clipped = match area.intersection(self.bounds()) {
            Some(clipped) => clipped,
            None => {
                log::trace!("Composite area {:?} lies outside of the surface", area);
                return Ok(());
            }
        };

        // source pixel = destination pixel - (dst - src)
        let dx = i64::from(dst_x) - i64::from(src_x);
        let dy = i64::from(dst_y) - i64::from(src_y);

        for y in i64::from(clipped.y)..clipped.bottom() {
            for x in i64::from(clipped.x)..clipped.right() {
                let src = match image.pixel(x - dx, y - dy) {
                    Some(src) => src,
                    None => continue,
                };

                let out = match op {
                    CompositeOperation::Src => src,
                    CompositeOperation::Over => match self.target.pixel(x, y) {
                        Some(dst) => src.over(dst),
                        None => continue,
                    },
                };

                self.target.put_pixel(x, y, out);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, ImageFormat};

    fn blue() -> Color {
        Color::from_u8(0, 0, 255, 255)
    }

    fn red() -> Color {
        Color::from_u8(255, 0, 0, 255)
    }

    #[test]
    fn rgba_surfaces_blend() {
        let surface = BitmapSurface::new(2, 2);
        assert!(surface.features().transparency);
        assert_eq!((surface.width(), surface.height()), (2, 2));
    }

    #[test]
    fn opaque_surfaces_refuse_source_over() {
        let rgb = Bitmap::new(vec![0; 12], 2, 2, ImageFormat::Rgb).unwrap();
        let mut surface = BitmapSurface::from_bitmap(rgb);
        let src = Bitmap::filled(1, 1, red());

        assert_eq!(
            surface.composite_image(CompositeOperation::Over, &src, 0, 0, 0, 0, 1, 1),
            Err(Error::NotSupported(NotSupportedOp::Transparency))
        );

        // copy_image falls back to Src
        surface.copy_image(&src, 0, 0, 1, 1, 1, 1).unwrap();
        assert_eq!(surface.bitmap().pixel(1, 1), Some(red()));
        assert_eq!(surface.bitmap().pixel(0, 0), Some(Color::from_u8(0, 0, 0, 255)));
    }

    #[test]
    fn copies_are_clipped_to_the_surface() {
        let mut surface = BitmapSurface::from_bitmap(Bitmap::filled(4, 4, blue()));
        let src = Bitmap::filled(4, 4, red());
        surface.copy_image(&src, 0, 0, -2, 3, 4, 4).unwrap();

        let bmp = surface.bitmap();
        for y in 0..4 {
            for x in 0..4 {
                let want = if x < 2 && y == 3 { red() } else { blue() };
                assert_eq!(bmp.pixel(x, y), Some(want), "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn copies_are_clipped_to_the_source() {
        let mut surface = BitmapSurface::from_bitmap(Bitmap::filled(4, 4, blue()));
        let src = Bitmap::filled(2, 2, red());
        surface.copy_image(&src, 1, 1, 0, 0, 4, 4).unwrap();

        let bmp = surface.bitmap();
        assert_eq!(bmp.pixel(0, 0), Some(red()));
        assert_eq!(bmp.pixel(1, 0), Some(blue()));
        assert_eq!(bmp.pixel(0, 1), Some(blue()));
    }

    #[test]
    fn transparent_pixels_leave_the_destination_alone() {
        let mut surface = BitmapSurface::from_bitmap(Bitmap::filled(3, 3, blue()));
        let src = Bitmap::transparent(3, 3);
        surface.copy_image(&src, 0, 0, 0, 0, 3, 3).unwrap();
        assert_eq!(surface.into_bitmap(), Bitmap::filled(3, 3, blue()));
    }

    #[test]
    fn src_replaces_even_with_transparency() {
        let mut surface = BitmapSurface::from_bitmap(Bitmap::filled(2, 1, blue()));
        let src = Bitmap::transparent(1, 1);
        surface
            .composite_image(CompositeOperation::Src, &src, 0, 0, 1, 0, 1, 1)
            .unwrap();
        assert_eq!(surface.bitmap().pixel(0, 0), Some(blue()));
        assert_eq!(surface.bitmap().pixel(1, 0), Some(Color::transparent()));
    }
}
