// MIT/Apache2 License

use crate::{Color, Error, Intensity};
use lyon_geom::Size;
use std::{convert::TryFrom, rc::Rc};

/// The format that a `Bitmap` can have.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImageFormat {
    /// Grayscale format. Each element of the byte slice is a pixel representing how bright it is.
    Grayscale,
    /// Every three elements of the byte slice is an array of channels consisting of red, green and blue.
    Rgb,
    /// Every four elements of the byte slice is an array of channels consisting of red, green, blue and alpha.
    Rgba,
}

impl ImageFormat {
    /// Does this `ImageFormat` carry an alpha channel?
    #[inline]
    pub fn is_transparent(self) -> bool {
        matches!(self, ImageFormat::Rgba)
    }

    /// Get the quantum (i.e. bytes per pixel) for this image.
    #[inline]
    pub fn quantum(self) -> usize {
        match self {
            ImageFormat::Grayscale => 1,
            ImageFormat::Rgb => 3,
            ImageFormat::Rgba => 4,
        }
    }
}

/// A client-side image: a buffer of pixels along with its dimensions.
///
/// This is the in-memory bitmap that both sides of a clipping mask operation work with. The primary image is
/// handed to the shader as a `Bitmap`, and the mask is resolved into one through a [`MaskSource`]. Pixels are
/// stored row by row, top to bottom, laid out according to the [`ImageFormat`]. Formats without an alpha
/// channel read back as fully opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bitmap {
    width: u32,
    height: u32,
    format: ImageFormat,
    bytes: Vec<u8>,
}

impl Bitmap {
    /// Wrap an existing pixel buffer.
    ///
    /// Fails with [`Error::BufferSize`] if `bytes` does not hold exactly `width * height` pixels.
    #[inline]
    pub fn new(bytes: Vec<u8>, width: u32, height: u32, format: ImageFormat) -> crate::Result<Self> {
        let expected = buffer_len(width, height, format);
        if bytes.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: bytes.len(),
            });
        }

        Ok(Self {
            width,
            height,
            format,
            bytes,
        })
    }

    /// A fully transparent RGBA bitmap.
    #[inline]
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            format: ImageFormat::Rgba,
            bytes: vec![0; buffer_len(width, height, ImageFormat::Rgba)],
        }
    }

    /// An RGBA bitmap where every pixel is `color`.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let (r, g, b, a) = color.clamp_u8();
        let bytes = [r, g, b, a]
            .iter()
            .copied()
            .cycle()
            .take(buffer_len(width, height, ImageFormat::Rgba))
            .collect();

        Self {
            width,
            height,
            format: ImageFormat::Rgba,
            bytes,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The dimensions of this bitmap.
    #[inline]
    pub fn size(&self) -> Size<u32> {
        Size::new(self.width, self.height)
    }

    #[inline]
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// The raw pixel buffer.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some((y as usize * self.width as usize + x as usize) * self.format.quantum())
    }

    /// Read the pixel at `(x, y)`, or `None` if it lies outside of the bitmap.
    pub fn pixel(&self, x: i64, y: i64) -> Option<Color> {
        let i = self.index(x, y)?;
        let px = &self.bytes[i..i + self.format.quantum()];

        Some(match self.format {
            ImageFormat::Grayscale => Color::from_u8(px[0], px[0], px[0], u8::MAX),
            ImageFormat::Rgb => Color::from_u8(px[0], px[1], px[2], u8::MAX),
            ImageFormat::Rgba => Color::from_u8(px[0], px[1], px[2], px[3]),
        })
    }

    /// Read the alpha of the pixel at `(x, y)`, or `None` if it lies outside of the bitmap.
    #[inline]
    pub fn alpha(&self, x: i64, y: i64) -> Option<Intensity> {
        self.pixel(x, y).map(Color::alpha_intensity)
    }

    /// Write the pixel at `(x, y)`. Writes outside of the bitmap are ignored.
    ///
    /// Formats without an alpha channel drop the alpha; grayscale stores the mean of the color channels.
    pub fn put_pixel(&mut self, x: i64, y: i64, color: Color) {
        let i = match self.index(x, y) {
            Some(i) => i,
            None => return,
        };
        let (r, g, b, a) = color.clamp_u8();

        match self.format {
            ImageFormat::Grayscale => {
                let mean = (u16::from(r) + u16::from(g) + u16::from(b)) / 3;
                self.bytes[i] = mean as u8;
            }
            ImageFormat::Rgb => self.bytes[i..i + 3].copy_from_slice(&[r, g, b]),
            ImageFormat::Rgba => self.bytes[i..i + 4].copy_from_slice(&[r, g, b, a]),
        }
    }
}

#[inline]
fn buffer_len(width: u32, height: u32, format: ImageFormat) -> usize {
    (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(format.quantum())
}

/// Something that can produce the decoded mask image.
///
/// Loading, decoding and caching are up to the implementor; the filter only asks for the bitmap once per
/// application and reuses its dimensions for everything that follows.
pub trait MaskSource {
    /// Resolve the mask into a bitmap.
    fn bitmap(&self) -> crate::Result<Bitmap>;
}

impl MaskSource for Bitmap {
    #[inline]
    fn bitmap(&self) -> crate::Result<Bitmap> {
        Ok(self.clone())
    }
}

impl<M: MaskSource + ?Sized> MaskSource for &M {
    #[inline]
    fn bitmap(&self) -> crate::Result<Bitmap> {
        (**self).bitmap()
    }
}

impl<M: MaskSource + ?Sized> MaskSource for Box<M> {
    #[inline]
    fn bitmap(&self) -> crate::Result<Bitmap> {
        (**self).bitmap()
    }
}

impl<M: MaskSource + ?Sized> MaskSource for Rc<M> {
    #[inline]
    fn bitmap(&self) -> crate::Result<Bitmap> {
        (**self).bitmap()
    }
}
