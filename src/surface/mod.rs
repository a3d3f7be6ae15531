// MIT/Apache2 License

use crate::{Bitmap, CompositeOperation};

/// Provides the `BitmapSurface` type.
mod bitmap;
/// Provides the `SurfaceFeatures` type.
mod features;
/// Implements `Surface` on `&mut Surface`.
mod mut_impl;

pub use bitmap::BitmapSurface;
pub use features::SurfaceFeatures;

/// The destination that masked content is painted onto.
///
/// `Surface`s are usually windows, images, or other buffers containing pixels that can be modified through
/// system drawing APIs. The `Surface` trait provides the small slice of such an API that compositing a mask
/// needs:
///
/// * Returning a list of "features" that the `Surface` implements by returning a [`SurfaceFeatures`] object
///   from the `features()` method.
/// * Reporting its own size, so callers know where clipping happens.
/// * Compositing an area of a [`Bitmap`] onto itself at a specified point.
///
/// Surfaces are expected to clip: any part of a composited area that falls outside of the surface is
/// silently discarded, and no error is raised for it.
pub trait Surface {
    /// Get an enumeration of the features that this `Surface` is capable of.
    fn features(&self) -> SurfaceFeatures;

    /// The width of this surface, in pixels.
    fn width(&self) -> u32;
    /// The height of this surface, in pixels.
    fn height(&self) -> u32;

    /// Flush all drawing operations, if necessary.
    fn flush(&mut self) -> crate::Result {
        Ok(())
    }

    /// Composite an area of an image onto this surface.
    ///
    /// An area of `(width, height)` is taken from the image, beginning at `(src_x, src_y)`, and combined with
    /// the surface starting at `(dst_x, dst_y)` according to `op`. Pixels outside of either the image or the
    /// surface are skipped.
    ///
    /// Surfaces without the `transparency` feature return `NotSupported` for `CompositeOperation::Over`.
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
    ) -> crate::Result;

    /// Copy an image onto this surface.
    ///
    /// If the `transparency` feature is enabled, alpha blending is used during copying. Otherwise, the
    /// destination is overwritten.
    #[inline]
    fn copy_image(
        &mut self,
        image: &Bitmap,
        src_x: i32,
        src_y: i32,
        dst_x: i32,
        dst_y: i32,
        width: u32,
        height: u32,
    ) -> crate::Result {
        let op = if self.features().transparency {
            CompositeOperation::Over
        } else {
            CompositeOperation::Src
        };

        self.composite_image(op, image, src_x, src_y, dst_x, dst_y, width, height)
    }
}
