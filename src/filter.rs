// MIT/Apache2 License

//! Shader-backed filters, and the clipping mask filter in particular.

use crate::{
    Bitmap, CompositeOperation, Error, MaskApplication, MaskSource, NotSupportedOp, Placement,
    Rectangle, Shader, ShaderParameters, Surface,
};
use lyon_geom::Size;
use std::fmt;

/// Where and how the output of a shader is painted onto the destination.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DrawInstruction {
    /// The area of the destination to paint, in primary pixel coordinates.
    pub rectangle: Rectangle,
    /// How the shaded pixels are combined with what is already there.
    pub operation: CompositeOperation,
}

/// The shader parameters and draw instruction for one application of a filter.
///
/// Both halves are produced by a single call to [`EffectFilter::prepare`], so they are always derived from
/// the same inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedEffect {
    pub parameters: ShaderParameters,
    pub draw: DrawInstruction,
}

/// A filter that is carried out by a per-pixel shader followed by a draw.
///
/// The surrounding pipeline holds filters as `&dyn EffectFilter` and does not need to know which one it has.
/// Its `Display` implementation gives the filter's human-readable name.
pub trait EffectFilter: fmt::Display {
    /// Compute everything needed to apply this filter to a source image of the given size.
    fn prepare(&self, source: Size<u32>) -> crate::Result<PreparedEffect>;
}

impl<F: EffectFilter + ?Sized> EffectFilter for &F {
    #[inline]
    fn prepare(&self, source: Size<u32>) -> crate::Result<PreparedEffect> {
        (**self).prepare(source)
    }
}

impl<F: EffectFilter + ?Sized> EffectFilter for Box<F> {
    #[inline]
    fn prepare(&self, source: Size<u32>) -> crate::Result<PreparedEffect> {
        (**self).prepare(source)
    }
}

/// Apply a filter to `source` and paint the result onto `surface`.
///
/// The shaded image is painted 1:1 into the draw rectangle; the area of the shaded image under the rectangle
/// lands on the same area of the surface. Everything outside of the rectangle is left untouched, and a
/// rectangle with no area paints nothing.
pub fn apply_effect<F, Sh, S>(
    filter: &F,
    source: &Bitmap,
    shader: &mut Sh,
    surface: &mut S,
) -> crate::Result
where
    F: EffectFilter + ?Sized,
    Sh: Shader + ?Sized,
    S: Surface + ?Sized,
{
    let PreparedEffect { parameters, draw } = filter.prepare(source.size())?;
    let DrawInstruction {
        rectangle: rect,
        operation,
    } = draw;

    if rect.is_empty() {
        log::debug!("{}: draw rectangle {:?} is empty, nothing to paint", filter, rect);
        return Ok(());
    }

    if operation == CompositeOperation::Over && !surface.features().transparency {
        return Err(Error::NotSupported(NotSupportedOp::Transparency));
    }

    let shaded = shader.shade(source, &parameters)?;

    log::trace!("{}: painting {:?} with {:?}", filter, rect, operation);
    surface.composite_image(
        operation,
        &shaded,
        rect.x,
        rect.y,
        rect.x,
        rect.y,
        rect.width,
        rect.height,
    )?;
    surface.flush()
}

/// Option name for the x-position of the mask, as accepted by [`ClippingMaskFilter::set_option`].
pub const MASK_POSITION_X: &str = "MaskPositionX";
/// Option name for the y-position of the mask, as accepted by [`ClippingMaskFilter::set_option`].
pub const MASK_POSITION_Y: &str = "MaskPositionY";

/// Clips (reveals) the content of a layer based on the non-transparent content of a mask image.
///
/// The mask's top-left corner is placed at `(mask_position_x, mask_position_y)` in the layer's pixel
/// coordinates. Only the part of the layer under the mask's box survives; within that box, each pixel's
/// alpha is multiplied by the alpha of the mask pixel over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClippingMaskFilter<M = Bitmap> {
    mask: Option<M>,
    mask_position_x: i32,
    mask_position_y: i32,
}

impl<M> Default for ClippingMaskFilter<M> {
    #[inline]
    fn default() -> Self {
        Self {
            mask: None,
            mask_position_x: 0,
            mask_position_y: 0,
        }
    }
}

impl<M> ClippingMaskFilter<M> {
    /// A filter with no mask, positioned at the origin.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mask image.
    #[inline]
    pub fn with_mask(mut self, mask: M) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Set the position of the mask's top-left corner.
    #[inline]
    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.mask_position_x = x;
        self.mask_position_y = y;
        self
    }

    #[inline]
    pub fn mask(&self) -> Option<&M> {
        self.mask.as_ref()
    }

    #[inline]
    pub fn set_mask(&mut self, mask: Option<M>) {
        self.mask = mask;
    }

    /// The x-position of the left side of the mask image.
    #[inline]
    pub fn mask_position_x(&self) -> i32 {
        self.mask_position_x
    }

    #[inline]
    pub fn set_mask_position_x(&mut self, x: i32) {
        self.mask_position_x = x;
    }

    /// The y-position of the top side of the mask image.
    #[inline]
    pub fn mask_position_y(&self) -> i32 {
        self.mask_position_y
    }

    #[inline]
    pub fn set_mask_position_y(&mut self, y: i32) {
        self.mask_position_y = y;
    }

    #[inline]
    pub fn placement(&self) -> Placement {
        Placement::new(self.mask_position_x, self.mask_position_y)
    }

    /// Set an option by name.
    ///
    /// Recognized names are `MaskPositionX` and `MaskPositionY`, both taking an integer.
    pub fn set_option(&mut self, name: &str, value: &str) -> crate::Result {
        let slot = match name {
            MASK_POSITION_X => &mut self.mask_position_x,
            MASK_POSITION_Y => &mut self.mask_position_y,
            _ => return Err(Error::UnknownOption(name.to_string())),
        };

        *slot = value.trim().parse().map_err(|_| Error::InvalidOption {
            name: name.to_string(),
            value: value.to_string(),
        })?;
        Ok(())
    }

    /// Set several options at once. Stops at the first failure.
    pub fn set_options<'a, I>(&mut self, options: I) -> crate::Result
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        options
            .into_iter()
            .try_for_each(|(name, value)| self.set_option(name, value))
    }
}

impl<M: MaskSource> ClippingMaskFilter<M> {
    /// Resolve the mask and work out the application for a source image of the given size.
    pub fn application(&self, source: Size<u32>) -> crate::Result<(Bitmap, MaskApplication)> {
        let mask = self.mask.as_ref().ok_or(Error::MissingMask)?.bitmap()?;
        let application = MaskApplication::new(source, mask.size(), self.placement())?;
        Ok((mask, application))
    }
}

impl<M> fmt::Display for ClippingMaskFilter<M> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Clipping Mask")
    }
}

impl<M: MaskSource> EffectFilter for ClippingMaskFilter<M> {
    fn prepare(&self, source: Size<u32>) -> crate::Result<PreparedEffect> {
        let (mask, application) = self.application(source)?;

        Ok(PreparedEffect {
            parameters: ShaderParameters::new(*application.transform(), mask),
            draw: DrawInstruction {
                rectangle: application.draw_rectangle(),
                operation: CompositeOperation::Over,
            },
        })
    }
}
