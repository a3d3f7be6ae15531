// MIT/Apache2 License

/// Operations that can be used to composite an image onto a surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CompositeOperation {
    /// Replace the destination with the source.
    Src,
    /// Draw the source on top of the destination, letting the destination show through where the source
    /// is transparent.
    Over,
}
