// MIT/Apache2 License

use crate::{Bitmap, NormalizedTransform};
use lyon_geom::Vector;

/// The inputs of the per-pixel masking shader.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderParameters {
    /// Where the mask begins, in primary-normalized units.
    pub input_coords_offset: Vector<f64>,
    /// How large the mask is, in primary-normalized units.
    pub input_coords_scale: Vector<f64>,
    /// The mask bitmap, bound as the shader's brush.
    pub mask: Bitmap,
}

impl ShaderParameters {
    #[inline]
    pub fn new(transform: NormalizedTransform, mask: Bitmap) -> Self {
        Self {
            input_coords_offset: transform.offset,
            input_coords_scale: transform.scale,
            mask,
        }
    }

    /// The offset and scale as a transform again.
    #[inline]
    pub fn transform(&self) -> NormalizedTransform {
        NormalizedTransform {
            offset: self.input_coords_offset,
            scale: self.input_coords_scale,
        }
    }
}

/// The shader execution engine.
///
/// Given the primary image and a set of parameters, a `Shader` evaluates its per-pixel function and returns
/// an image of the same size as the input.
pub trait Shader {
    fn shade(&mut self, input: &Bitmap, params: &ShaderParameters) -> crate::Result<Bitmap>;
}

impl<S: Shader + ?Sized> Shader for &mut S {
    #[inline]
    fn shade(&mut self, input: &Bitmap, params: &ShaderParameters) -> crate::Result<Bitmap> {
        (**self).shade(input, params)
    }
}

impl<S: Shader + ?Sized> Shader for Box<S> {
    #[inline]
    fn shade(&mut self, input: &Bitmap, params: &ShaderParameters) -> crate::Result<Bitmap> {
        (**self).shade(input, params)
    }
}

/// A CPU implementation of the clipping mask shader.
///
/// Every output pixel keeps the color of the input, with its alpha multiplied by the alpha of the mask pixel
/// it maps onto. Pixels that fall outside of the mask become fully transparent. The output is always RGBA.
#[derive(Debug, Copy, Clone, Default)]
pub struct ClippingMaskShader;

impl Shader for ClippingMaskShader {
    fn shade(&mut self, input: &Bitmap, params: &ShaderParameters) -> crate::Result<Bitmap> {
        let transform = params.transform();
        let primary = input.size();
        let mask = params.mask.size();
        let mut output = Bitmap::transparent(primary.width, primary.height);

        for py in 0..primary.height {
            for px in 0..primary.width {
                let (x, y) = (i64::from(px), i64::from(py));
                let color = match input.pixel(x, y) {
                    Some(color) => color,
                    None => continue,
                };

                let coverage = transform
                    .mask_pixel_for(px, py, primary, mask)
                    .and_then(|(mx, my)| params.mask.alpha(i64::from(mx), i64::from(my)));

                if let Some(coverage) = coverage {
                    output.put_pixel(x, y, color.with_alpha(color.alpha_intensity() * coverage));
                }
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compute_transform, Color, ImageFormat};

    #[test]
    fn parameters_carry_the_transform() {
        let t = compute_transform(800, 600, 200, 100, 300, 250).unwrap();
        let params = ShaderParameters::new(t, Bitmap::transparent(200, 100));
        assert_eq!(params.input_coords_offset, t.offset);
        assert_eq!(params.input_coords_scale, t.scale);
        assert_eq!(params.transform(), t);
    }

    #[test]
    fn alpha_is_multiplied_inside_the_mask() {
        let red = Color::from_u8(255, 0, 0, 255);
        let input = Bitmap::filled(6, 4, red);
        // 2x2 mask: opaque, clear / clear, opaque
        let mask = Bitmap::new(
            vec![0, 0, 0, 255, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 255],
            2,
            2,
            ImageFormat::Rgba,
        )
        .unwrap();
        let t = compute_transform(6, 4, 2, 2, 3, 1).unwrap();
        let out = ClippingMaskShader
            .shade(&input, &ShaderParameters::new(t, mask))
            .unwrap();

        assert_eq!(out.size(), input.size());
        assert_eq!(out.pixel(3, 1), Some(red));
        assert_eq!(out.alpha(4, 1), Some(crate::Intensity::zero()));
        assert_eq!(out.alpha(3, 2), Some(crate::Intensity::zero()));
        assert_eq!(out.pixel(4, 2), Some(red));

        // outside of the mask box
        for &(x, y) in &[(0, 0), (2, 1), (5, 0), (3, 3), (5, 3)] {
            assert_eq!(out.alpha(x, y), Some(crate::Intensity::zero()), "({}, {})", x, y);
        }
    }

    #[test]
    fn opaque_mask_formats_reveal_everything_they_cover() {
        let green = Color::from_u8(0, 255, 0, 255);
        let input = Bitmap::filled(3, 3, green);
        let mask = Bitmap::new(vec![0; 9], 3, 3, ImageFormat::Grayscale).unwrap();
        let t = compute_transform(3, 3, 3, 3, 0, 0).unwrap();
        let out = ClippingMaskShader
            .shade(&input, &ShaderParameters::new(t, mask))
            .unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn empty_mask_hides_everything() {
        let input = Bitmap::filled(4, 4, Color::from_u8(1, 2, 3, 255));
        let t = compute_transform(4, 4, 0, 0, 1, 1).unwrap();
        let out = ClippingMaskShader
            .shade(&input, &ShaderParameters::new(t, Bitmap::transparent(0, 0)))
            .unwrap();
        assert_eq!(out, Bitmap::transparent(4, 4));
    }
}
