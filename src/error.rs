// MIT/Apache2 License

use std::fmt;

/// Sum error type for clipping mask operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A static string message.
    StaticMsg(&'static str),
    /// Attempted to run an unsupported operation.
    NotSupported(NotSupportedOp),
    /// The primary image has a zero-length side, so coordinates cannot be normalized against it.
    DivisionByZero(Axis),
    /// The filter was applied without a mask image.
    MissingMask,
    /// An option name that the filter does not recognize.
    UnknownOption(String),
    /// An option value that could not be parsed.
    InvalidOption { name: String, value: String },
    /// A pixel buffer whose length does not match its dimensions and format.
    BufferSize { expected: usize, actual: usize },
}

/// An operation that is not supported.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NotSupportedOp {
    /// Source-over compositing onto a surface without an alpha channel.
    Transparency,
}

/// One of the two axes of an image.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The name of the image dimension running along this axis.
    #[inline]
    pub fn dimension(self) -> &'static str {
        match self {
            Axis::Horizontal => "width",
            Axis::Vertical => "height",
        }
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaticMsg(s) => f.write_str(s),
            Self::NotSupported(nsop) => {
                write!(f, "Surface does not support feature \"{:?}\"", nsop)
            }
            Self::DivisionByZero(axis) => write!(
                f,
                "Primary image {} is zero; mask coordinates cannot be normalized",
                axis.dimension()
            ),
            Self::MissingMask => f.write_str("A mask image is required for the clipping mask filter"),
            Self::UnknownOption(name) => write!(f, "Unknown option \"{}\"", name),
            Self::InvalidOption { name, value } => {
                write!(f, "Invalid value \"{}\" for option \"{}\"", value, name)
            }
            Self::BufferSize { expected, actual } => write!(
                f,
                "Pixel buffer holds {} bytes, but its dimensions require {}",
                actual, expected
            ),
        }
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;
