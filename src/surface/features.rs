// MIT/Apache2 License

/// Features that are enabled on the [`Surface`].
///
/// [`Surface`]: super::Surface
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SurfaceFeatures {
    /// Transparency is accounted for when compositing, so source-over blending is available.
    pub transparency: bool,
}
