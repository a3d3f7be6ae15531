// MIT/Apache2 License

use super::{Surface, SurfaceFeatures};
use crate::{Bitmap, CompositeOperation};

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn features(&self) -> SurfaceFeatures {
        (**self).features()
    }
    #[inline]
    fn width(&self) -> u32 {
        (**self).width()
    }
    #[inline]
    fn height(&self) -> u32 {
        (**self).height()
    }
    #[inline]
    fn flush(&mut self) -> crate::Result {
        (**self).flush()
    }
    #[inline]
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
        (**self).composite_image(op, image, src_x, src_y, dst_x, dst_y, width, height)
    }
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
        (**self).copy_image(image, src_x, src_y, dst_x, dst_y, width, height)
    }
}
