// MIT/Apache2 License

use crate::intensity::Intensity;

/// A four-element color with straight (non-premultiplied) alpha.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color {
    r: Intensity,
    g: Intensity,
    b: Intensity,
    a: Intensity,
}

impl Color {
    /// Creates a new color, clamping every element into range.
    #[inline]
    pub fn new_clamped(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: Intensity::new_clamped(r),
            g: Intensity::new_clamped(g),
            b: Intensity::new_clamped(b),
            a: Intensity::new_clamped(a),
        }
    }

    /// Creates a color from 8-bit channels.
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: Intensity::from_u8(r),
            g: Intensity::from_u8(g),
            b: Intensity::from_u8(b),
            a: Intensity::from_u8(a),
        }
    }

    /// A color with every channel at zero.
    #[inline]
    pub fn transparent() -> Self {
        Self::default()
    }

    /// Gets the red element.
    #[inline]
    pub fn red(self) -> f32 {
        self.r.into_inner()
    }

    /// Gets the green element.
    #[inline]
    pub fn green(self) -> f32 {
        self.g.into_inner()
    }

    /// Gets the blue element.
    #[inline]
    pub fn blue(self) -> f32 {
        self.b.into_inner()
    }

    /// Gets the alpha element.
    #[inline]
    pub fn alpha(self) -> f32 {
        self.a.into_inner()
    }

    /// Gets the alpha element as an `Intensity`.
    #[inline]
    pub fn alpha_intensity(self) -> Intensity {
        self.a
    }

    /// The same color with a different alpha.
    #[inline]
    pub fn with_alpha(self, a: Intensity) -> Self {
        Self { a, ..self }
    }

    /// Clamp to u8's.
    #[inline]
    pub fn clamp_u8(self) -> (u8, u8, u8, u8) {
        (
            self.r.clamp_to_u8(),
            self.g.clamp_to_u8(),
            self.b.clamp_to_u8(),
            self.a.clamp_to_u8(),
        )
    }

    /// Composite this color over `dst` using the source-over rule.
    pub fn over(self, dst: Color) -> Color {
        let sa = self.alpha();
        let da = dst.alpha() * (1.0 - sa);
        let out_a = sa + da;

        if out_a <= 0.0 {
            return Color::transparent();
        }

        let blend = |s: f32, d: f32| (s * sa + d * da) / out_a;
        Color::new_clamped(
            blend(self.red(), dst.red()),
            blend(self.green(), dst.green()),
            blend(self.blue(), dst.blue()),
            out_a,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_source_replaces_destination() {
        let red = Color::from_u8(255, 0, 0, 255);
        let blue = Color::from_u8(0, 0, 255, 255);
        assert_eq!(red.over(blue), red);
    }

    #[test]
    fn transparent_source_leaves_destination() {
        let clear = Color::from_u8(255, 0, 0, 0);
        let blue = Color::from_u8(0, 0, 255, 255);
        assert_eq!(clear.over(blue), blue);
        assert_eq!(clear.over(Color::transparent()), Color::transparent());
    }

    #[test]
    fn half_alpha_over_opaque() {
        let src = Color::from_u8(255, 255, 255, 128);
        let dst = Color::from_u8(0, 0, 0, 255);
        let (r, g, b, a) = src.over(dst).clamp_u8();
        assert_eq!(a, 255);
        assert_eq!((r, g, b), (128, 128, 128));
    }
}
